use std::collections::{HashSet, VecDeque};

use derivative::Derivative;

use crate::Graph;

const DEFAULT_HASH_SET_CAPACITY: usize = 64;

fn neighbors<'g>(graph: &'g Graph, vertex: &str) -> impl Iterator<Item = &'g str> + use<'g> {
    graph.neighbors(vertex).iter().map(String::as_str)
}

/// Breadth-first traversal in level order.
///
/// A vertex is queued the first time it is seen as a neighbor and never
/// again, so within a level vertices come out in neighbor-list order.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct BfsIterator<'g> {
    #[derivative(Debug = "ignore")]
    graph: &'g Graph,
    enqueued: HashSet<&'g str>,
    queue: VecDeque<&'g str>,
}

impl<'g> BfsIterator<'g> {
    /// Starts a traversal at `start`.  Yields nothing if `start` is absent.
    pub fn new(graph: &'g Graph, start: &str) -> Self {
        let mut enqueued = HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY);
        let mut queue = VecDeque::new();
        if let Some(start) = graph.stored_vertex(start) {
            enqueued.insert(start);
            queue.push_back(start);
        }
        Self {
            graph,
            enqueued,
            queue,
        }
    }
}

impl<'g> Iterator for BfsIterator<'g> {
    type Item = &'g str;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.queue.pop_front()?;
        for neighbor in neighbors(self.graph, vertex) {
            if self.enqueued.insert(neighbor) {
                self.queue.push_back(neighbor);
            }
        }
        Some(vertex)
    }
}

/// Breadth-first traversal that yields, for each vertex, the path taken
/// from the start to reach it.  The first path yielded for a vertex has the
/// fewest edges of any path to it.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct BfsIteratorWithPaths<'g> {
    #[derivative(Debug = "ignore")]
    graph: &'g Graph,
    discovered: HashSet<&'g str>,
    queue: VecDeque<Vec<&'g str>>,
}

impl<'g> BfsIteratorWithPaths<'g> {
    pub fn new(graph: &'g Graph, start: &str) -> Self {
        let mut discovered = HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY);
        let mut queue = VecDeque::new();
        if let Some(start) = graph.stored_vertex(start) {
            discovered.insert(start);
            queue.push_back(vec![start]);
        }
        Self {
            graph,
            discovered,
            queue,
        }
    }
}

impl<'g> Iterator for BfsIteratorWithPaths<'g> {
    type Item = Vec<&'g str>;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.queue.pop_front()?;
        let vertex = *path.last()?;
        for neighbor in neighbors(self.graph, vertex) {
            if self.discovered.insert(neighbor) {
                let mut new_path = path.clone();
                new_path.push(neighbor);
                self.queue.push_back(new_path);
            }
        }
        Some(path)
    }
}

/// Depth-first traversal with an explicit stack.
///
/// Every neighbor is pushed, visited or not, and duplicates are dropped when
/// popped.  Neighbors are pushed in list order, so the last-listed neighbor
/// is explored first.
#[derive(Derivative)]
#[derivative(Debug)]
pub struct DfsIterator<'g> {
    #[derivative(Debug = "ignore")]
    graph: &'g Graph,
    visited: HashSet<&'g str>,
    stack: Vec<&'g str>,
}

impl<'g> DfsIterator<'g> {
    pub fn new(graph: &'g Graph, start: &str) -> Self {
        Self {
            graph,
            visited: HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY),
            stack: graph.stored_vertex(start).into_iter().collect(),
        }
    }
}

impl<'g> Iterator for DfsIterator<'g> {
    type Item = &'g str;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(vertex) = self.stack.pop() {
            if self.visited.insert(vertex) {
                self.stack.extend(neighbors(self.graph, vertex));
                return Some(vertex);
            }
        }
        None
    }
}
