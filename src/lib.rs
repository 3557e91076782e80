//! An adjacency-list graph over string-labeled vertices, with depth-first
//! reachability, breadth-first traversal and fewest-edges path search.

pub mod directedness;
pub mod display;
pub mod dot;
pub mod graph;
pub mod parse;
pub mod search;
pub mod tracing_support;

#[cfg(test)]
mod graph_test_support;

pub use directedness::Directedness;
pub use graph::{Degree, Graph};
pub use parse::ParseError;
