//! Reader for plain-text edge lists.
//!
//! One edge per line as `u v weight`, whitespace separated. Vertices are
//! integers and weights may be any finite number. A line holding a single
//! integer declares a vertex with no edges. Blank lines and lines starting
//! with `#` are ignored.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

#[cfg(feature = "flate2")]
use flate2::read::GzDecoder;

use crate::error::{Error, Result};
use crate::graph::{Graph, GraphBuilder};

pub fn parse_edge_list(input: &str) -> Result<Graph<i64>> {
    let mut builder = GraphBuilder::new();
    for (i, line) in input.lines().enumerate() {
        parse_line(&mut builder, i + 1, line)?;
    }
    Ok(builder.build())
}

pub fn read_edge_list<R: BufRead>(reader: R) -> Result<Graph<i64>> {
    let mut builder = GraphBuilder::new();
    for (i, line) in reader.lines().enumerate() {
        parse_line(&mut builder, i + 1, &line?)?;
    }
    Ok(builder.build())
}

/// Loads an edge list from `path`. With the `flate2` feature, files ending in
/// `.gz` are decompressed on the fly.
pub fn load_edge_list(path: &Path) -> Result<Graph<i64>> {
    read_edge_list(open(path)?)
}

#[cfg(feature = "flate2")]
fn open(path: &Path) -> Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

#[cfg(not(feature = "flate2"))]
fn open(path: &Path) -> Result<Box<dyn BufRead>> {
    Ok(Box::new(BufReader::new(File::open(path)?)))
}

fn parse_line(builder: &mut GraphBuilder<i64>, line_no: usize, line: &str) -> Result<()> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(());
    }

    let parts: Vec<&str> = line.split_whitespace().collect();
    match parts.as_slice() {
        [vertex] => {
            builder.add_vertex(parse_vertex(line_no, vertex)?);
        }
        [from, to, weight] => {
            let from = parse_vertex(line_no, from)?;
            let to = parse_vertex(line_no, to)?;
            let weight = parse_weight(line_no, weight)?;
            builder.add_edge(from, to, weight)?;
        }
        _ => {
            return Err(Error::Parse {
                line: line_no,
                message: format!("expected `u v weight`, found {} fields", parts.len()),
            });
        }
    }
    Ok(())
}

fn parse_vertex(line_no: usize, token: &str) -> Result<i64> {
    token.parse::<i64>().map_err(|_| Error::Parse {
        line: line_no,
        message: format!("invalid vertex `{token}`"),
    })
}

fn parse_weight(line_no: usize, token: &str) -> Result<f64> {
    let weight = token.parse::<f64>().map_err(|_| Error::Parse {
        line: line_no,
        message: format!("invalid weight `{token}`"),
    })?;
    if !weight.is_finite() {
        return Err(Error::Parse {
            line: line_no,
            message: format!("weight must be finite, got `{token}`"),
        });
    }
    Ok(weight)
}
