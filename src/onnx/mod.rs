//! Model layer: ONNX protobuf subset, JSON model description, and loading.
//!
//! The drawer only needs the operator list of the main graph, so everything
//! else in the model file is skipped while decoding.

pub mod load;
pub mod proto;
pub mod record;

pub use load::load_model;
pub use record::{ModelDescription, OperatorRecord};
