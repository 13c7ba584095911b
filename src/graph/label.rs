//! Operator node labelling and label escaping.

use crate::graph::node::{Attrs, GraphNode, NodeId};
use crate::onnx::OperatorRecord;
use crate::timing::{TimingTable, Timings};

/// Style applied to operator nodes by default.
pub const OP_STYLE: [(&str, &str); 4] = [
    ("shape", "box"),
    ("color", "#0F9D58"),
    ("style", "filled"),
    ("fontcolor", "#FFFFFF"),
];

/// Style applied to every blob node.
pub const BLOB_STYLE: [(&str, &str); 1] = [("shape", "octagon")];

pub fn style(pairs: &[(&str, &str)]) -> Attrs {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Anything that turns `(operator, position)` into a styled node.
pub trait NodeProducer {
    fn produce(&self, op: &OperatorRecord, op_index: usize) -> GraphNode;
}

impl<F> NodeProducer for F
where
    F: Fn(&OperatorRecord, usize) -> GraphNode,
{
    fn produce(&self, op: &OperatorRecord, op_index: usize) -> GraphNode {
        self(op, op_index)
    }
}

/// Default producer: descriptive multi-line label plus [`OP_STYLE`].
pub struct OpNodeProducer {
    style: Attrs,
    timings: Box<dyn Timings>,
    embed_docstring: bool,
}

impl Default for OpNodeProducer {
    fn default() -> Self {
        Self {
            style: style(&OP_STYLE),
            timings: Box::new(TimingTable::default()),
            embed_docstring: false,
        }
    }
}

impl OpNodeProducer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the node attributes (the label is always set by the producer).
    pub fn with_style(mut self, style: Attrs) -> Self {
        self.style = style;
        self
    }

    pub fn with_timings(mut self, timings: impl Timings + 'static) -> Self {
        self.timings = Box::new(timings);
        self
    }

    /// Attach the operator's doc string as a clickable `URL` attribute.
    pub fn embed_docstring(mut self, embed: bool) -> Self {
        self.embed_docstring = embed;
        self
    }

    pub fn label(&self, op: &OperatorRecord, op_index: usize) -> String {
        let mut label = match op.display_name() {
            Some(name) => format!("{}/{} (op#{})", name, op.op_type, op_index),
            None => {
                tracing::info!(
                    op_type = %op.op_type,
                    op_index,
                    "operator has no name; labelling by type and position"
                );
                let nanos = self.timings.op_duration_ns(op_index).unwrap_or(0);
                format!("{} (op#{}) [{} ns]", op.op_type, op_index, nanos)
            }
        };

        for (i, input) in op.input.iter().enumerate() {
            label.push_str(&format!("\ninput{} {}", i, input));
        }
        for (i, output) in op.output.iter().enumerate() {
            label.push_str(&format!("\noutput{} {}", i, output));
        }
        label
    }
}

impl NodeProducer for OpNodeProducer {
    fn produce(&self, op: &OperatorRecord, op_index: usize) -> GraphNode {
        let mut attrs = self.style.clone();
        if self.embed_docstring {
            attrs.insert("URL".to_string(), docstring_url(&op.doc_string));
        }
        GraphNode {
            id: NodeId::Op(op_index),
            label: self.label(op, op_index),
            attrs,
        }
    }
}

/// Quote `s` as a JSON string literal. Graphviz reads it as a quoted ID.
pub fn escape_label(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

/// Pseudo-URL that pops up `doc` in an alert box when clicked in an SVG.
///
/// Double quotes become single quotes and angle brackets are dropped so the
/// result can sit inside a quoted attribute value.
pub fn docstring_url(doc: &str) -> String {
    let body = escape_label(doc).replace('"', "'").replace(['<', '>'], "");
    format!("javascript:alert({})", body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[test]
    fn named_operator_label() {
        let op = OperatorRecord::new("conv1", "Conv", &["X", "W"], &["Y"]);
        let node = OpNodeProducer::new().produce(&op, 2);
        assert_eq!(node.id, NodeId::Op(2));
        assert_eq!(
            node.label,
            "conv1/Conv (op#2)\ninput0 X\ninput1 W\noutput0 Y"
        );
        assert_eq!(node.attrs, style(&OP_STYLE));
    }

    #[test]
    fn unnamed_operator_uses_timing_lookup() {
        let op = OperatorRecord::new("", "Relu", &["a"], &["b"]);
        let producer = OpNodeProducer::new().with_timings(TimingTable::bundled());
        assert_eq!(
            producer.label(&op, 1),
            "Relu (op#1) [799440 ns]\ninput0 a\noutput0 b"
        );
        assert_eq!(
            producer.label(&op, 500),
            "Relu (op#500) [0 ns]\ninput0 a\noutput0 b"
        );
    }

    #[test]
    fn unnamed_operator_without_timings_reports_zero() {
        let op = OperatorRecord::new("", "Add", &[], &[]);
        assert_eq!(OpNodeProducer::new().label(&op, 0), "Add (op#0) [0 ns]");
    }

    #[test]
    fn custom_style_replaces_default() {
        let op = OperatorRecord::new("n", "Gemm", &[], &[]);
        let producer = OpNodeProducer::new().with_style(style(&[("shape", "ellipse")]));
        let node = producer.produce(&op, 0);
        assert_eq!(node.attrs, style(&[("shape", "ellipse")]));
    }

    #[test]
    fn url_only_when_embedding() {
        let op = OperatorRecord::new("n", "Gemm", &[], &[]).with_doc_string("dense layer");
        assert!(!OpNodeProducer::new().produce(&op, 0).attrs.contains_key("URL"));

        let node = OpNodeProducer::new().embed_docstring(true).produce(&op, 0);
        assert_eq!(node.attrs["URL"], "javascript:alert('dense layer')");
    }

    #[test]
    fn docstring_url_strips_markup() {
        assert_eq!(
            docstring_url(r#"<script>"hi"</script>"#),
            r#"javascript:alert('script\'hi\'/script')"#
        );
    }

    #[test]
    fn escape_label_round_trips() {
        for name in [
            "plain",
            r#"say "hi""#,
            r"C:\weights\conv",
            "größe/输出",
            "tab\there\nnewline",
            "",
        ] {
            let escaped = escape_label(name);
            assert!(escaped.starts_with('"') && escaped.ends_with('"'));
            let back: String = serde_json::from_str(&escaped).unwrap();
            assert_eq!(back, name);
        }
    }

    #[test]
    fn closures_can_produce_nodes() {
        let bare = |op: &OperatorRecord, i: usize| GraphNode {
            id: NodeId::Op(i),
            label: op.op_type.clone(),
            attrs: Attrs::new(),
        };
        let node = bare.produce(&OperatorRecord::new("x", "MatMul", &[], &[]), 7);
        assert_eq!(node.label, "MatMul");
    }

    /// In-memory sink for a test-scoped fmt subscriber.
    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl LogBuffer {
        fn lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap();
            String::from_utf8_lossy(&bytes)
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn only_unnamed_operators_log_a_notice() {
        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();

        let producer = OpNodeProducer::new();
        let unnamed = OperatorRecord::new("", "Conv", &["X", "W"], &["Y"]);
        let named = OperatorRecord::new("conv2", "Conv", &["Y", "W"], &["Z"]);
        tracing::subscriber::with_default(subscriber, || {
            producer.label(&unnamed, 3);
            producer.label(&named, 4);
        });

        let lines = logs.lines();
        assert_eq!(lines.len(), 1, "unexpected log output: {:?}", lines);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains("operator has no name"));
        assert!(lines[0].contains("op_type=Conv"));
        assert!(lines[0].contains("op_index=3"));
    }
}
