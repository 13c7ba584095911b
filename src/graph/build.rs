//! Single left-to-right pass over the operator list.
//!
//! State lives only for one call:
//! - `current`: blob name -> its latest version node
//! - `counts`:  blob name -> version counter (starts at 0)
//!
//! An input never seen before gets a version-0 node (a graph input). An output
//! whose name is already registered bumps the counter and mints a new node.
//! Repeated inputs within one operator all resolve to the same version.

use crate::graph::label::{BLOB_STYLE, NodeProducer, OpNodeProducer, style};
use crate::graph::node::{BlobVersion, Graph, GraphEdge, GraphNode, NodeId};
use crate::onnx::OperatorRecord;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct GraphOptions {
    pub title: Option<String>,
    /// Passed through to the renderer's `rankdir`.
    pub rankdir: String,
    /// Used only when no producer is given to [`build_graph`].
    pub embed_docstring: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            title: None,
            rankdir: "LR".to_string(),
            embed_docstring: false,
        }
    }
}

/// Build the graph for `ops`.
///
/// Without a `producer`, operator nodes come from an [`OpNodeProducer`] with
/// no timings and `options.embed_docstring`.
pub fn build_graph(
    ops: &[OperatorRecord],
    options: &GraphOptions,
    producer: Option<&dyn NodeProducer>,
) -> Graph {
    let default_producer;
    let producer = match producer {
        Some(p) => p,
        None => {
            let embed = options.embed_docstring;
            default_producer = OpNodeProducer::new().embed_docstring(embed);
            &default_producer as &dyn NodeProducer
        }
    };
    let blob_style = style(&BLOB_STYLE);

    let mut graph = Graph {
        title: options.title.clone().filter(|t| !t.is_empty()),
        rankdir: options.rankdir.clone(),
        nodes: Vec::new(),
        edges: Vec::new(),
    };
    let mut current: HashMap<&str, NodeId> = HashMap::new();
    let mut counts: HashMap<&str, u32> = HashMap::new();

    for (op_index, op) in ops.iter().enumerate() {
        let mut op_node = producer.produce(op, op_index);
        // The builder owns identities; producers only decide presentation.
        op_node.id = NodeId::Op(op_index);
        let op_id = op_node.id.clone();

        // Inputs first so a fresh graph-input node precedes its consumer.
        let mut sources = Vec::with_capacity(op.input.len());
        for input in &op.input {
            let id = current
                .entry(input.as_str())
                .or_insert_with(|| {
                    let node = GraphNode::blob(BlobVersion::new(input, 0), &blob_style);
                    let id = node.id.clone();
                    graph.nodes.push(node);
                    id
                })
                .clone();
            sources.push(id);
        }

        graph.nodes.push(op_node);
        for from in sources {
            graph.edges.push(GraphEdge {
                from,
                to: op_id.clone(),
            });
        }

        for output in &op.output {
            let counter = counts.entry(output.as_str()).or_insert(0);
            if current.contains_key(output.as_str()) {
                *counter += 1;
            }
            let node = GraphNode::blob(BlobVersion::new(output, *counter), &blob_style);
            let id = node.id.clone();
            graph.nodes.push(node);
            current.insert(output.as_str(), id.clone());
            graph.edges.push(GraphEdge {
                from: op_id.clone(),
                to: id,
            });
        }
    }

    tracing::debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "built graph"
    );
    graph
}
