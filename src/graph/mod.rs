//! Graph layer: operator/blob nodes, labelling, and the single-pass builder.
//!
//! Blobs are versioned: every time a name is produced again it gets a fresh
//! node, so the emitted graph is a DAG over value versions.

pub mod build;
pub mod label;
pub mod node;

pub use build::{GraphOptions, build_graph};
pub use label::{NodeProducer, OpNodeProducer, docstring_url, escape_label};
pub use node::{Attrs, BlobVersion, Graph, GraphEdge, GraphNode, NodeId};
