use bellman_sssp::{GraphBuilder, bellman_ford, report};

fn main() -> Result<(), bellman_sssp::Error> {
    // A ring with a few negative shortcuts, plus one vertex nobody reaches
    let mut builder = GraphBuilder::new();
    for i in 0..12 {
        builder.add_edge(i, (i + 1) % 12, (i % 4 + 1) as f64)?;
    }
    builder.add_edge(0, 6, 4.0)?;
    builder.add_edge(6, 3, -2.0)?;
    builder.add_edge(9, 11, -1.5)?;
    builder.add_vertex(99);
    let graph = builder.build();

    let distances = bellman_ford(&graph, &0)?;
    print!("{}", report::render(&distances));

    if let Some(path) = distances.path_to(&11) {
        println!("Path to 11: {:?}", path);
    }

    // Closing the ring with a heavy negative edge creates a negative cycle
    let mut builder = GraphBuilder::new();
    for (u, v, w) in graph.edge_triples() {
        builder.add_edge(*u, *v, w)?;
    }
    builder.add_edge(11, 0, -40.0)?;
    match bellman_ford(&builder.build(), &0) {
        Ok(_) => println!("No negative cycle"),
        Err(e) => println!("{}", e),
    }

    Ok(())
}
