mod degree;

use std::collections::{HashMap, HashSet};

pub use degree::Degree;

use crate::{
    directedness::Directedness,
    display::{AdjacencyDisplay, DegreeDisplay},
    search::{BfsIterator, BfsIteratorWithPaths, DfsIterator},
    tracing_support::{debug, info_span, trace},
};

/// An adjacency-list graph over string-labeled vertices.
///
/// Each vertex maps to an ordered list of neighbor identifiers.  The order
/// of a neighbor list is the order edges were added in and determines the
/// visitation order of every traversal.  Lists may hold duplicates and
/// self-loops; nothing is deduplicated.
///
/// An undirected edge is two independent directed entries.  They are not
/// kept in sync afterwards, so a directed removal can leave one half behind.
///
/// Every query treats a vertex that was never added as present-but-empty:
/// degree 0, no neighbors, no edges.  Queries never insert keys.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: HashMap<String, Vec<String>>,
}

impl Graph {
    /// Creates a new, empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph by calling [`Self::add_edge`] for each pair in order.
    pub fn from_edges<I, S>(edges: I, directedness: Directedness) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: AsRef<str>,
    {
        let mut graph = Self::new();
        for (src, dest) in edges {
            graph.add_edge(src.as_ref(), dest.as_ref(), directedness);
        }
        graph
    }

    // Vertices

    /// Ensures `vertex` is present, with an empty neighbor list if it is new.
    /// Returns true if the vertex was newly created.
    pub fn initialize_vertex(&mut self, vertex: &str) -> bool {
        if self.adjacency.contains_key(vertex) {
            return false;
        }
        trace!(vertex, "initialize vertex");
        self.adjacency.insert(vertex.to_string(), Vec::new());
        true
    }

    /// Removes `vertex` and strips every occurrence of it from every other
    /// neighbor list.  Returns true if the vertex was present.  Safe to call
    /// for an absent vertex, in which case the graph is unchanged.
    pub fn remove_vertex(&mut self, vertex: &str) -> bool {
        let existed = self.adjacency.remove(vertex).is_some();
        let mut stripped = 0;
        for neighbors in self.adjacency.values_mut() {
            let before = neighbors.len();
            neighbors.retain(|n| n != vertex);
            stripped += before - neighbors.len();
        }
        trace!(vertex, existed, stripped, "remove vertex");
        existed
    }

    pub fn contains_vertex(&self, vertex: &str) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Gets the graph's own copy of a vertex identifier, so traversals can
    /// hold it for the lifetime of the graph borrow.
    pub(crate) fn stored_vertex(&self, vertex: &str) -> Option<&str> {
        self.adjacency
            .get_key_value(vertex)
            .map(|(key, _)| key.as_str())
    }

    /// Gets an iterator over all vertices, in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.adjacency.keys().map(String::as_str)
    }

    /// Gets all vertices sorted by identifier.
    pub fn sorted_vertices(&self) -> Vec<&str> {
        let mut vertices: Vec<_> = self.vertices().collect();
        vertices.sort_unstable();
        vertices
    }

    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of neighbor-list entries.  An undirected edge counts twice.
    pub fn num_edges(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Removes all vertices and edges.
    pub fn clear(&mut self) {
        self.adjacency.clear();
    }

    // Edges

    /// Adds an edge from `src` to `dest`, creating either vertex as needed.
    /// An undirected edge also appends `src` to the neighbor list of `dest`.
    /// Self-loops and parallel edges are accepted as-is.
    pub fn add_edge(&mut self, src: &str, dest: &str, directedness: Directedness) {
        trace!(src, dest, ?directedness, "add edge");
        self.initialize_vertex(src);
        self.initialize_vertex(dest);
        self.neighbors_mut(src).push(dest.to_string());
        if !directedness.is_directed() {
            self.neighbors_mut(dest).push(src.to_string());
        }
    }

    /// Removes the first occurrence of `dest` from the neighbor list of
    /// `src`, and for an undirected edge the first occurrence of `src` from
    /// the neighbor list of `dest`.  Each half is removed independently;
    /// a missing vertex or a missing entry is ignored.
    pub fn remove_edge(&mut self, src: &str, dest: &str, directedness: Directedness) {
        let forward = self.remove_first_entry(src, dest);
        let backward = !directedness.is_directed() && self.remove_first_entry(dest, src);
        trace!(src, dest, ?directedness, forward, backward, "remove edge");
    }

    fn remove_first_entry(&mut self, from: &str, entry: &str) -> bool {
        let Some(neighbors) = self.adjacency.get_mut(from) else {
            return false;
        };
        match neighbors.iter().position(|n| n == entry) {
            Some(index) => {
                neighbors.remove(index);
                true
            }
            None => false,
        }
    }

    /// Checks whether `dest` appears in the neighbor list of `src`.
    pub fn has_edge(&self, src: &str, dest: &str) -> bool {
        self.neighbors(src).iter().any(|n| n == dest)
    }

    /// Gets the neighbor list of `vertex`, or an empty slice if the vertex
    /// is absent.
    pub fn neighbors(&self, vertex: &str) -> &[String] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    // Only called after initialize_vertex, so the entry always exists.
    fn neighbors_mut(&mut self, vertex: &str) -> &mut Vec<String> {
        self.adjacency.entry(vertex.to_string()).or_default()
    }

    // Degrees

    /// Gets the degree of `vertex`.
    ///
    /// Undirected mode reports the length of the vertex's own neighbor list;
    /// entries pointing at the vertex from elsewhere are not counted.
    /// Directed mode also counts occurrences of the vertex across every
    /// neighbor list, its own included.
    pub fn degree(&self, vertex: &str, directedness: Directedness) -> Degree {
        match directedness {
            Directedness::Undirected => Degree::Total(self.out_degree(vertex)),
            Directedness::Directed => Degree::InOut {
                in_degree: self.in_degree(vertex),
                out_degree: self.out_degree(vertex),
            },
        }
    }

    pub fn out_degree(&self, vertex: &str) -> usize {
        self.neighbors(vertex).len()
    }

    /// Counts entries equal to `vertex` across all neighbor lists.  An absent
    /// vertex has in-degree 0.
    pub fn in_degree(&self, vertex: &str) -> usize {
        if !self.contains_vertex(vertex) {
            return 0;
        }
        self.adjacency
            .values()
            .map(|neighbors| neighbors.iter().filter(|n| *n == vertex).count())
            .sum()
    }

    // Traversals

    /// Checks whether `dest` can be reached from `src` by following edges.
    /// Returns false if either vertex is absent, even when `src == dest`.
    pub fn has_route(&self, src: &str, dest: &str) -> bool {
        if !self.contains_vertex(src) || !self.contains_vertex(dest) {
            return false;
        }
        let _span = info_span!("has_route", src, dest).entered();
        let mut visited = 0usize;
        let found = DfsIterator::new(self, src).any(|vertex| {
            visited += 1;
            vertex == dest
        });
        debug!(visited, found, "depth-first search finished");
        found
    }

    /// Gets the set of vertices reachable from `start`, including `start`
    /// itself.  Empty if `start` is absent.
    pub fn reachable_from(&self, start: &str) -> HashSet<&str> {
        DfsIterator::new(self, start).collect()
    }

    /// Gets the vertices reachable from `start` in breadth-first order.
    /// Vertices at the same distance appear in neighbor-list order.  Empty
    /// if `start` is absent.
    pub fn bfs(&self, start: &str) -> Vec<String> {
        let _span = info_span!("bfs", start).entered();
        let order: Vec<String> = BfsIterator::new(self, start)
            .map(str::to_string)
            .collect();
        debug!(visited = order.len(), "breadth-first traversal finished");
        order
    }

    /// Finds a path from `start` to `dest` with the fewest edges, returned
    /// as the sequence of vertices along it.  The path has
    /// `len() - 1` edges.  Empty if either vertex is absent or `dest` is
    /// unreachable.
    pub fn shortest_path(&self, start: &str, dest: &str) -> Vec<String> {
        if !self.contains_vertex(start) || !self.contains_vertex(dest) {
            return Vec::new();
        }
        let _span = info_span!("shortest_path", start, dest).entered();
        let path: Vec<String> = BfsIteratorWithPaths::new(self, start)
            .find(|path| path.last() == Some(&dest))
            .map(|path| path.into_iter().map(str::to_string).collect())
            .unwrap_or_default();
        debug!(edges = path.len().saturating_sub(1), found = !path.is_empty(), "shortest path search finished");
        path
    }

    /// Partitions the vertices into groups connected by edges in either
    /// direction.  Groups come back in unspecified order.
    #[cfg(feature = "pathfinding")]
    pub fn connected_components(&self) -> Vec<HashSet<&str>> {
        let vertices: Vec<&str> = self.vertices().collect();
        pathfinding::prelude::connected_components(&vertices, |vertex| {
            self.neighbors(vertex).iter().map(String::as_str)
        })
    }

    // Display

    /// Creates a view that formats the adjacency list, one sorted vertex
    /// per line.
    pub fn display(&self) -> AdjacencyDisplay<'_> {
        AdjacencyDisplay::new(self)
    }

    /// Creates a view that formats the degree of each vertex, one sorted
    /// vertex per line.
    pub fn display_degrees(&self, directedness: Directedness) -> DegreeDisplay<'_> {
        DegreeDisplay::new(self, directedness)
    }
}

impl<S: AsRef<str>> Extend<(S, S)> for Graph {
    /// Adds each pair as an undirected edge.
    fn extend<I: IntoIterator<Item = (S, S)>>(&mut self, iter: I) {
        for (src, dest) in iter {
            self.add_edge(src.as_ref(), dest.as_ref(), Directedness::Undirected);
        }
    }
}
