use std::fmt::Display;
use std::path::Path;

use crate::distance::DistanceTable;
use crate::error::Result;
use crate::graph::Vertex;

/// Default file the command-line tool writes its results to.
pub const DEFAULT_RESULTS_FILE: &str = "results.txt";

/// Renders a header naming the source, then one `Vertex v: d` line per
/// vertex in graph order. Unreachable vertices show as `inf`.
pub fn render<V: Vertex + Display>(table: &DistanceTable<V>) -> String {
    let mut out = format!("Shortest distances from vertex {}:\n", table.source());
    for (vertex, distance) in table.iter() {
        out.push_str(&format!("Vertex {}: {}\n", vertex, format_distance(distance)));
    }
    out
}

pub fn write_report<V: Vertex + Display>(path: &Path, table: &DistanceTable<V>) -> Result<()> {
    std::fs::write(path, render(table))?;
    Ok(())
}

fn format_distance(distance: f64) -> String {
    // `+ 0.0` folds -0 into 0
    format!("{}", distance + 0.0)
}
