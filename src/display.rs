//! Text views of a graph for console output.

use std::fmt::{self, Display, Formatter};

use crate::{Directedness, Graph};

const EMPTY_GRAPH: &str = "(empty graph)";

/// Formats a graph as one `vertex -> neighbors` line per vertex, sorted by
/// vertex identifier.  Created by [`Graph::display`].
pub struct AdjacencyDisplay<'a> {
    graph: &'a Graph,
}

impl<'a> AdjacencyDisplay<'a> {
    pub(crate) fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }
}

impl Display for AdjacencyDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.graph.is_empty() {
            return writeln!(f, "{EMPTY_GRAPH}");
        }
        for vertex in self.graph.sorted_vertices() {
            let neighbors = self.graph.neighbors(vertex);
            if neighbors.is_empty() {
                writeln!(f, "{vertex} -> (no neighbors)")?;
            } else {
                writeln!(f, "{vertex} -> {}", neighbors.join(", "))?;
            }
        }
        Ok(())
    }
}

/// Formats the degree of every vertex, one per line, sorted by vertex
/// identifier.  Created by [`Graph::display_degrees`].
pub struct DegreeDisplay<'a> {
    graph: &'a Graph,
    directedness: Directedness,
}

impl<'a> DegreeDisplay<'a> {
    pub(crate) fn new(graph: &'a Graph, directedness: Directedness) -> Self {
        Self {
            graph,
            directedness,
        }
    }
}

impl Display for DegreeDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.graph.is_empty() {
            return writeln!(f, "{EMPTY_GRAPH}");
        }
        for vertex in self.graph.sorted_vertices() {
            writeln!(f, "{vertex}: {}", self.graph.degree(vertex, self.directedness))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::Directedness::{Directed, Undirected};
    use crate::Graph;

    #[test]
    fn test_display_adjacency() {
        let mut graph = Graph::from_edges([("B", "C"), ("A", "B")], Undirected);
        graph.initialize_vertex("D");
        assert_eq!(
            graph.display().to_string(),
            "A -> B\nB -> C, A\nC -> B\nD -> (no neighbors)\n"
        );
    }

    #[test]
    fn test_display_empty() {
        let graph = Graph::new();
        assert_eq!(graph.display().to_string(), "(empty graph)\n");
        assert_eq!(
            graph.display_degrees(Directed).to_string(),
            "(empty graph)\n"
        );
    }

    #[test]
    fn test_display_degrees() {
        let graph = Graph::from_edges([("X", "Y"), ("Y", "Z"), ("Z", "X")], Directed);
        assert_eq!(
            graph.display_degrees(Directed).to_string(),
            "X: in 1, out 1\nY: in 1, out 1\nZ: in 1, out 1\n"
        );
        assert_eq!(
            graph.display_degrees(Undirected).to_string(),
            "X: degree 1\nY: degree 1\nZ: degree 1\n"
        );
    }
}
