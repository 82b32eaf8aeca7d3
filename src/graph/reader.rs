//! Graph text format reader
//!
//! Parses whitespace-separated numeric input: a vertex count, an edge
//! count, then one `source destination weight` triple per edge. Blank
//! lines and lines starting with `#` are skipped; tokens may otherwise be
//! split across lines freely.
//!
//! ```text
//! # 4 vertices, 5 roads
//! 4 5
//! 0 1 4
//! 0 2 1
//! 2 1 1
//! 1 3 1
//! 2 3 5
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use log::debug;

use crate::core::error::{GraphError, GraphResult};
use crate::graph::WeightedGraph;

/// Reads a graph from any byte source in the text format.
pub fn from_reader<R: Read>(mut input: R) -> GraphResult<WeightedGraph> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    from_str(&text)
}

/// Reads a graph from a file.
pub fn from_path<P: AsRef<Path>>(path: P) -> GraphResult<WeightedGraph> {
    let file = File::open(path.as_ref())?;
    from_reader(BufReader::new(file))
}

/// Parses the text format from an in-memory string.
pub fn from_str(text: &str) -> GraphResult<WeightedGraph> {
    let mut tokens = text
        .lines()
        .filter(|line| {
            let trimmed = line.trim_start();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .flat_map(str::split_whitespace);

    let num_vertices: usize = next_token(&mut tokens, "vertex count")?;
    let mut graph = WeightedGraph::new(num_vertices)?;

    let num_edges: usize = next_token(&mut tokens, "edge count")?;
    for _ in 0..num_edges {
        let source: usize = next_token(&mut tokens, "edge source")?;
        let destination: usize = next_token(&mut tokens, "edge destination")?;
        let weight: i64 = next_token(&mut tokens, "edge weight")?;
        graph.add_edge(source, destination, weight)?;
    }

    if let Some(extra) = tokens.next() {
        return Err(GraphError::Parse(format!(
            "trailing input after {} edges: {:?}",
            num_edges, extra
        )));
    }

    debug!(
        "parsed graph: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn next_token<'a, I, T>(tokens: &mut I, what: &str) -> GraphResult<T>
where
    I: Iterator<Item = &'a str>,
    T: FromStr,
{
    let token = tokens.next().ok_or_else(|| {
        GraphError::Parse(format!("unexpected end of input, expected {}", what))
    })?;
    token
        .parse()
        .map_err(|_| GraphError::Parse(format!("expected {}, found {:?}", what, token)))
}
