use std::collections::HashSet;
use std::hash::Hash;

use quickcheck::{Arbitrary, Gen};

use crate::{Directedness, Graph};

/// Vertex names used by generated graphs.  Kept small so that random edges
/// collide often enough to produce parallel edges, self-loops and cycles.
pub const VERTEX_NAMES: &[&str] = &["A", "B", "C", "D", "E", "F", "G", "H"];

/// A name that generated graphs never contain.
pub const ABSENT_VERTEX: &str = "missing";

/// A vertex name drawn from [`VERTEX_NAMES`].  It may or may not be present
/// in any particular generated graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArbVertex(pub String);

impl Arbitrary for ArbVertex {
    fn arbitrary(g: &mut Gen) -> Self {
        ArbVertex(g.choose(VERTEX_NAMES).copied().unwrap_or("A").to_string())
    }
}

impl Arbitrary for Directedness {
    fn arbitrary(g: &mut Gen) -> Self {
        Directedness::from_directed(bool::arbitrary(g))
    }
}

#[derive(Debug, Clone)]
pub struct ArbGraph {
    pub graph: Graph,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let num_edges = usize::arbitrary(g) % 30; // Limit size for testing
        let num_isolated = usize::arbitrary(g) % 3;
        let num_removals = usize::arbitrary(g) % 4;

        let mut graph = Graph::new();
        for _ in 0..num_edges {
            let src = ArbVertex::arbitrary(g);
            let dest = ArbVertex::arbitrary(g);
            graph.add_edge(&src.0, &dest.0, Directedness::arbitrary(g));
        }
        for _ in 0..num_isolated {
            graph.initialize_vertex(&ArbVertex::arbitrary(g).0);
        }
        // Leave some undirected edges half-removed.
        for _ in 0..num_removals {
            let src = ArbVertex::arbitrary(g);
            let dest = ArbVertex::arbitrary(g);
            graph.remove_edge(&src.0, &dest.0, Directedness::Directed);
        }

        ArbGraph { graph }
    }
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Checks that every neighbor entry names a vertex of the graph.
pub fn check_graph_consistency(graph: &Graph) {
    for vertex in graph.vertices() {
        for neighbor in graph.neighbors(vertex) {
            assert!(
                graph.contains_vertex(neighbor),
                "{vertex} lists missing neighbor {neighbor}"
            );
        }
    }
}
