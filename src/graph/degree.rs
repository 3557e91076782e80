use std::fmt;

/// Result of [`Graph::degree`](super::Graph::degree).
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Degree {
    /// Length of the vertex's own neighbor list.
    Total(usize),
    /// Entries pointing at the vertex, and entries in its own list.
    InOut { in_degree: usize, out_degree: usize },
}

impl Degree {
    /// Returns `(in_degree, out_degree)`.  A `Total` degree has no in-degree
    /// and reports it as 0.
    pub fn in_out(self) -> (usize, usize) {
        match self {
            Degree::Total(out_degree) => (0, out_degree),
            Degree::InOut {
                in_degree,
                out_degree,
            } => (in_degree, out_degree),
        }
    }

    /// Returns the out-degree, which both variants carry.
    pub fn out_degree(self) -> usize {
        self.in_out().1
    }
}

impl fmt::Display for Degree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Degree::Total(degree) => write!(f, "degree {degree}"),
            Degree::InOut {
                in_degree,
                out_degree,
            } => write!(f, "in {in_degree}, out {out_degree}"),
        }
    }
}
