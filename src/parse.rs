//! Reading graphs from a plain edge-list text format.
//!
//! Each non-blank line is one of:
//!
//! - `A -- B`: an undirected edge
//! - `A -> B`: a directed edge
//! - `A`: a vertex with no edges
//!
//! Lines starting with `#` are comments.  Vertex identifiers are
//! whitespace-free tokens.

use std::io::{self, Read};
use std::str::FromStr;

use crate::{Directedness, Graph, tracing_support::debug};

/// Errors that can occur while reading an edge list.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// An edge operator with no vertex on one side.
    #[error("line {line}: edge is missing an endpoint")]
    MissingEndpoint { line: usize },
    /// A token where a vertex or edge operator was not expected.
    #[error("line {line}: unexpected token {token:?}")]
    UnexpectedToken { line: usize, token: String },
    /// IO error while reading input.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

fn parse_op(token: &str) -> Option<Directedness> {
    match token {
        "--" => Some(Directedness::Undirected),
        "->" => Some(Directedness::Directed),
        _ => None,
    }
}

fn is_vertex(token: &str) -> bool {
    parse_op(token).is_none()
}

/// Parses an edge list, adding edges in the order they appear.
pub fn parse_edge_list(input: &str) -> Result<Graph, ParseError> {
    let mut graph = Graph::new();
    let mut lines = 0;
    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        lines += 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [vertex] if is_vertex(vertex) => {
                graph.initialize_vertex(vertex);
            }
            [src, op, dest] if is_vertex(src) && is_vertex(dest) => {
                let directedness = parse_op(op).ok_or_else(|| ParseError::UnexpectedToken {
                    line: line_no,
                    token: op.to_string(),
                })?;
                graph.add_edge(src, dest, directedness);
            }
            [_] | [_, _] | [_, _, _] if tokens.iter().any(|t| parse_op(t).is_some()) => {
                return Err(ParseError::MissingEndpoint { line: line_no });
            }
            _ => {
                return Err(ParseError::UnexpectedToken {
                    line: line_no,
                    token: tokens.get(1).unwrap_or(&line).to_string(),
                });
            }
        }
    }
    debug!(
        lines,
        vertices = graph.num_vertices(),
        entries = graph.num_edges(),
        "parsed edge list"
    );
    Ok(graph)
}

/// Reads all of `reader` and parses it with [`parse_edge_list`].
pub fn read_edge_list(mut reader: impl Read) -> Result<Graph, ParseError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_edge_list(&input)
}

impl FromStr for Graph {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_edge_list(s)
    }
}
