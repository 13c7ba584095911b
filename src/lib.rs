//! Draw ONNX computation graphs as graphviz dot files.
//!
//! Pipeline: [`onnx::load_model`] -> [`graph::build_graph`] ->
//! [`render::render_dot`].

pub mod graph;
pub mod onnx;
pub mod render;
pub mod timing;

pub type Result<T> = anyhow::Result<T>;
