use crate::Result;
use crate::onnx::proto::ModelProto;
use crate::onnx::record::ModelDescription;
use anyhow::Context;
use prost::Message;
use std::fs;
use std::path::Path;

/// Read a model file into an operator list.
///
/// `.json` files are read as a [`ModelDescription`]; anything else is decoded
/// as a serialized ONNX `ModelProto`.
pub fn load_model(path: &str) -> Result<ModelDescription> {
    let is_json = Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        let text = fs::read_to_string(path).with_context(|| format!("read model file {}", path))?;
        let model: ModelDescription = serde_json::from_str(&text)
            .with_context(|| format!("parse model description {}", path))?;
        tracing::info!(path, ops = model.nodes.len(), "loaded model description");
        return Ok(model);
    }

    let bytes = fs::read(path).with_context(|| format!("read model file {}", path))?;
    let proto = ModelProto::decode(bytes.as_slice())
        .with_context(|| format!("decode ONNX model {}", path))?;

    tracing::debug!(
        ir_version = proto.ir_version,
        producer = %proto.producer_name,
        producer_version = %proto.producer_version,
        domain = %proto.domain,
        model_version = proto.model_version,
        doc = %proto.doc_string,
        "decoded ModelProto"
    );
    if proto.graph.is_none() {
        tracing::warn!(path, "model has no graph; output will be empty");
    }

    let model = ModelDescription::from(proto);
    tracing::info!(path, graph = %model.name, ops = model.nodes.len(), "loaded ONNX model");
    Ok(model)
}
