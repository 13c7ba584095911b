//! In-memory operator list, independent of the on-disk format.
//!
//! JSON shape (model.json):
//! {
//!   "name": "main",
//!   "nodes": [
//!     {
//!       "name": "conv1",          // optional; empty means unnamed
//!       "op_type": "Conv",
//!       "input": ["X", "W"],
//!       "output": ["Y"],
//!       "doc_string": "..."       // optional annotation
//!     }
//!   ]
//! }

use crate::onnx::proto::{GraphProto, ModelProto, NodeProto};
use serde::Deserialize;

/// One step of the graph, in model order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OperatorRecord {
    #[serde(default)]
    pub name: String,

    pub op_type: String,

    #[serde(default)]
    pub input: Vec<String>,

    #[serde(default)]
    pub output: Vec<String>,

    #[serde(default)]
    pub doc_string: String,
}

impl OperatorRecord {
    pub fn new(name: &str, op_type: &str, input: &[&str], output: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            op_type: op_type.to_string(),
            input: input.iter().map(|s| s.to_string()).collect(),
            output: output.iter().map(|s| s.to_string()).collect(),
            doc_string: String::new(),
        }
    }

    pub fn with_doc_string(mut self, doc: &str) -> Self {
        self.doc_string = doc.to_string();
        self
    }

    /// Empty names count as missing.
    pub fn display_name(&self) -> Option<&str> {
        if self.name.is_empty() {
            None
        } else {
            Some(&self.name)
        }
    }
}

impl From<NodeProto> for OperatorRecord {
    fn from(node: NodeProto) -> Self {
        Self {
            name: node.name,
            op_type: node.op_type,
            input: node.input,
            output: node.output,
            doc_string: node.doc_string,
        }
    }
}

/// The graph name plus its ordered operator list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ModelDescription {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub nodes: Vec<OperatorRecord>,
}

impl From<GraphProto> for ModelDescription {
    fn from(graph: GraphProto) -> Self {
        Self {
            name: graph.name,
            nodes: graph.node.into_iter().map(OperatorRecord::from).collect(),
        }
    }
}

impl From<ModelProto> for ModelDescription {
    fn from(model: ModelProto) -> Self {
        model.graph.map(ModelDescription::from).unwrap_or_default()
    }
}
