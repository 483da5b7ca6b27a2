use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Numeric identifier for a maze decision point.
pub type NodeId = u64;

/// Node every search starts from.
pub const START_NODE: NodeId = 1;

/// Destination of an edge within the maze graph.
///
/// Dead ends have no variant: they are never stored as edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    /// Leads to another decision node.
    Node(NodeId),
    /// Reaching this target solves the maze.
    Exit,
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Node(id) => write!(f, "{id}"),
            Target::Exit => f.write_str("e"),
        }
    }
}

/// Labeled outgoing choice from a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub direction: String,
    pub target: Target,
}

/// Directed graph of maze decision points.
///
/// Nodes are kept in a sparse map so any id is addressable without growing
/// storage. Edges keep the order they were added in, which decides which
/// solution the solver reports first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MazeGraph {
    adjacency: BTreeMap<NodeId, Vec<Edge>>,
}

impl MazeGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an edge to `source`, creating the node on first use.
    ///
    /// Existing edges are never removed or reordered, and repeated direction
    /// labels are kept side by side.
    pub fn add_edge(&mut self, source: NodeId, direction: impl Into<String>, target: Target) {
        self.adjacency.entry(source).or_default().push(Edge {
            direction: direction.into(),
            target,
        });
    }

    /// Return the outgoing edges for `node` in insertion order.
    ///
    /// Unknown ids yield an empty slice, which the solver treats the same as
    /// a dead end.
    pub fn children_of(&self, node: NodeId) -> &[Edge] {
        self.adjacency
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `node` has at least one recorded edge.
    pub fn contains(&self, node: NodeId) -> bool {
        self.adjacency.contains_key(&node)
    }

    /// Number of nodes with at least one edge.
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of stored edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Iterate nodes in ascending id order together with their edges.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &[Edge])> + '_ {
        self.adjacency
            .iter()
            .map(|(&id, edges)| (id, edges.as_slice()))
    }
}
