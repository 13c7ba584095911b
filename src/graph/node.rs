use std::collections::BTreeMap;
use std::fmt;

/// Presentation attributes, sorted by key so output is deterministic.
pub type Attrs = BTreeMap<String, String>;

/// One instance of a named blob at a point in the operator sequence.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlobVersion {
    pub name: String,
    pub version: u32,
}

impl BlobVersion {
    pub fn new(name: &str, version: u32) -> Self {
        Self {
            name: name.to_string(),
            version,
        }
    }
}

/// Internal identity of a graph node.
///
/// Rendered as `op:<index>` or `blob:<name>#<version>`; the prefixes keep the
/// two kinds apart and the version suffix is always present, so two distinct
/// ids never render the same.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeId {
    Op(usize),
    Blob(BlobVersion),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Op(index) => write!(f, "op:{}", index),
            NodeId::Blob(blob) => write!(f, "blob:{}#{}", blob.name, blob.version),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphNode {
    pub id: NodeId,
    /// Raw display text; escaping happens at render time.
    pub label: String,
    pub attrs: Attrs,
}

impl GraphNode {
    pub fn blob(blob: BlobVersion, style: &Attrs) -> Self {
        Self {
            label: blob.name.clone(),
            id: NodeId::Blob(blob),
            attrs: style.clone(),
        }
    }
}

/// Directed edge: blob -> operator (input) or operator -> blob (output).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphEdge {
    pub from: NodeId,
    pub to: NodeId,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    pub title: Option<String>,
    pub rankdir: String,
    /// In creation order.
    pub nodes: Vec<GraphNode>,
    /// In creation order.
    pub edges: Vec<GraphEdge>,
}

impl Graph {
    pub fn node(&self, id: &NodeId) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| &n.id == id)
    }

    pub fn op_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter().filter(|n| matches!(n.id, NodeId::Op(_)))
    }

    pub fn blob_nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes
            .iter()
            .filter(|n| matches!(n.id, NodeId::Blob(_)))
    }

    pub fn edges_into<'a>(&'a self, id: &'a NodeId) -> impl Iterator<Item = &'a NodeId> + 'a {
        self.edges
            .iter()
            .filter(move |e| &e.to == id)
            .map(|e| &e.from)
    }

    pub fn edges_out_of<'a>(&'a self, id: &'a NodeId) -> impl Iterator<Item = &'a NodeId> + 'a {
        self.edges
            .iter()
            .filter(move |e| &e.from == id)
            .map(|e| &e.to)
    }
}
