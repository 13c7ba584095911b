use crate::graph::{Attrs, Graph, escape_label};

/// Render a graph as graphviz DOT text.
///
/// Every ID and attribute value goes through [`escape_label`], so names with
/// quotes, backslashes or newlines cannot break out of their quoted string.
/// Nodes and edges are written in creation order.
pub fn render_dot(graph: &Graph) -> String {
    let mut out = String::new();

    match &graph.title {
        Some(title) => out.push_str(&format!("digraph {} {{\n", escape_label(title))),
        None => out.push_str("digraph {\n"),
    }
    out.push_str(&format!("rankdir={};\n", escape_label(&graph.rankdir)));

    for node in &graph.nodes {
        let mut attrs = node.attrs.clone();
        attrs.insert("label".to_string(), node.label.clone());
        out.push_str(&format!(
            "{} [{}];\n",
            escape_label(&node.id.to_string()),
            attr_list(&attrs)
        ));
    }

    for edge in &graph.edges {
        out.push_str(&format!(
            "{} -> {};\n",
            escape_label(&edge.from.to_string()),
            escape_label(&edge.to.to_string())
        ));
    }

    out.push_str("}\n");
    out
}

fn attr_list(attrs: &Attrs) -> String {
    attrs
        .iter()
        .map(|(key, value)| format!("{}={}", key, escape_label(value)))
        .collect::<Vec<_>>()
        .join(", ")
}
