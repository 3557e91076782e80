//! Graphviz DOT output.

use std::collections::HashMap;
use std::io;

use crate::{Directedness, Graph, tracing_support::debug};

/// Errors that can occur during DOT file generation.
#[derive(Debug, thiserror::Error)]
pub enum DotError {
    /// Invalid identifier for DOT format.
    #[error("Invalid DOT identifier: {0}")]
    InvalidId(String),
    /// IO error during rendering.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Checks that `name` is a bare DOT identifier: ASCII letters, digits and
/// underscores, not starting with a digit.
fn check_graph_name(name: &str) -> Result<(), DotError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(DotError::InvalidId(name.to_string()))
    }
}

/// Quotes a vertex identifier, escaping `"` and `\`.
fn quote(id: &str) -> String {
    let mut quoted = String::with_capacity(id.len() + 2);
    quoted.push('"');
    for c in id.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Writes `graph` in DOT format, with vertices in sorted order and each
/// vertex's edges in neighbor-list order.
///
/// In directed mode every neighbor entry becomes one `->` edge.  In
/// undirected mode each entry is paired with one matching entry in the
/// opposite direction and the pair is drawn as a single `--` edge; unpaired
/// entries are still drawn.  Vertices with no drawn edges are written as
/// bare node statements.
pub fn write_dot(
    graph: &Graph,
    name: &str,
    directedness: Directedness,
    output: &mut impl io::Write,
) -> Result<(), DotError> {
    check_graph_name(name)?;

    let keyword = if directedness.is_directed() {
        "digraph"
    } else {
        "graph"
    };
    let op = directedness.edge_op();
    writeln!(output, "{keyword} {name} {{")?;

    let mut drawn = 0;
    // Reverse entries still owed to an undirected edge that was already drawn.
    let mut owed: HashMap<(&str, &str), usize> = HashMap::new();
    for vertex in graph.sorted_vertices() {
        let neighbors = graph.neighbors(vertex);
        if neighbors.is_empty() && graph.in_degree(vertex) == 0 {
            writeln!(output, "    {};", quote(vertex))?;
            continue;
        }
        for neighbor in neighbors {
            let neighbor = neighbor.as_str();
            if !directedness.is_directed() {
                if let Some(count) = owed.get_mut(&(vertex, neighbor))
                    && *count > 0
                {
                    *count -= 1;
                    continue;
                }
                *owed.entry((neighbor, vertex)).or_default() += 1;
            }
            writeln!(output, "    {} {op} {};", quote(vertex), quote(neighbor))?;
            drawn += 1;
        }
    }

    writeln!(output, "}}")?;
    debug!(name, drawn, "wrote DOT graph");
    Ok(())
}

/// Renders `graph` as a DOT string.  See [`write_dot`].
pub fn to_dot_string(
    graph: &Graph,
    name: &str,
    directedness: Directedness,
) -> Result<String, DotError> {
    let mut output = Vec::new();
    write_dot(graph, name, directedness, &mut output)?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}
