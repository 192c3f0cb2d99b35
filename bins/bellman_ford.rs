use bellman_sssp::parser::load_edge_list;
use bellman_sssp::report::{self, DEFAULT_RESULTS_FILE};
use bellman_sssp::{BellmanFord, DistanceTable, Error, Graph, SolverConfig};
use log::info;
use std::env;
use std::path::Path;
use std::time::Instant;

fn print_help(program_name: &str) {
    println!("Bellman-Ford shortest paths");
    println!("Computes distances from one vertex to every other, allowing negative weights");
    println!();
    println!("USAGE:");
    println!("    {} [OPTIONS] <edge file> <source>", program_name);
    println!("    {} --help", program_name);
    println!();
    println!("ARGUMENTS:");
    println!("    <edge file>       One edge per line: `u v weight`");
    println!("    <source>          Vertex to measure distances from");
    println!();
    println!("OPTIONS:");
    println!("    --output FILE     Where to save the results (default {})", DEFAULT_RESULTS_FILE);
    println!("    --no-save         Do not write a results file");
    println!("    --json            Print results as JSON");
    println!("    --parallel        Relax edges on all cores (needs the `parallel` feature)");
    println!("    --early-exit      Stop relaxing once a pass changes nothing");
    println!();
    println!("EXAMPLES:");
    println!("    {} graph.txt 1", program_name);
    println!("    {} --json --no-save graph.txt 1", program_name);
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}

#[cfg(feature = "parallel")]
fn solve(
    graph: &Graph<i64>,
    source: i64,
    config: SolverConfig,
    parallel: bool,
) -> Result<DistanceTable<i64>, Error> {
    if parallel {
        return bellman_sssp::ParallelBellmanFord::new(graph, config)?.solve(&source);
    }
    BellmanFord::with_config(graph, config).solve(&source)
}

#[cfg(not(feature = "parallel"))]
fn solve(
    graph: &Graph<i64>,
    source: i64,
    config: SolverConfig,
    parallel: bool,
) -> Result<DistanceTable<i64>, Error> {
    if parallel {
        eprintln!("Warning: built without the `parallel` feature, running sequentially");
    }
    BellmanFord::with_config(graph, config).solve(&source)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() >= 2 && (args[1] == "--help" || args[1] == "-h") {
        print_help(&args[0]);
        std::process::exit(0);
    }

    let mut output = DEFAULT_RESULTS_FILE.to_string();
    let mut save = true;
    let mut json_output = false;
    let mut parallel = false;
    let mut config = SolverConfig::default();
    let mut positional: Vec<&str> = Vec::new();

    let mut iter = args[1..].iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--output" => match iter.next() {
                Some(path) => output = path.clone(),
                None => fail("--output needs a file name"),
            },
            "--no-save" => save = false,
            "--json" => json_output = true,
            "--parallel" => parallel = true,
            "--early-exit" => config.early_exit = true,
            flag if flag.starts_with("--") => fail(&format!("unknown option {}", flag)),
            _ => positional.push(arg),
        }
    }

    let (edge_path, source) = match positional.as_slice() {
        [path, source] => (Path::new(*path), *source),
        _ => {
            eprintln!("Usage: {} [OPTIONS] <edge file> <source>", args[0]);
            eprintln!("Try '{} --help' for more information.", args[0]);
            std::process::exit(1);
        }
    };

    let source: i64 = match source.parse() {
        Ok(v) => v,
        Err(_) => fail(&format!("source vertex `{}` is not an integer", source)),
    };

    let graph = match load_edge_list(edge_path) {
        Ok(graph) => graph,
        Err(e) => fail(&format!("{}: {}", edge_path.display(), e)),
    };
    info!(
        "Loaded {}: {} vertices, {} edges",
        edge_path.display(),
        graph.vertex_count(),
        graph.edge_count()
    );

    let start = Instant::now();
    let table = match solve(&graph, source, config, parallel) {
        Ok(table) => table,
        Err(e) => fail(&e.to_string()),
    };
    info!("Solved in {:.2?}", start.elapsed());

    if json_output {
        println!("{}", serde_json::to_string_pretty(&table)?);
    } else {
        print!("{}", report::render(&table));
    }

    if save {
        report::write_report(Path::new(&output), &table)?;
        info!("Results written to {}", output);
    }

    Ok(())
}
