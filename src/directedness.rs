/// Whether an edge operation applies to one direction or to both.
///
/// An undirected edge is stored as two independent directed entries, so
/// this only controls how many entries an operation touches; the graph
/// itself has no directedness of its own.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Directedness {
    /// Touch both `src -> dest` and `dest -> src`.
    #[default]
    Undirected,
    /// Touch only `src -> dest`.
    Directed,
}

impl Directedness {
    pub fn is_directed(self) -> bool {
        matches!(self, Directedness::Directed)
    }

    /// Maps the `directed` flag used by callers that think in booleans.
    pub fn from_directed(directed: bool) -> Self {
        if directed {
            Directedness::Directed
        } else {
            Directedness::Undirected
        }
    }

    /// Edge operator used in edge-list and DOT text.
    pub fn edge_op(self) -> &'static str {
        match self {
            Directedness::Directed => "->",
            Directedness::Undirected => "--",
        }
    }
}
