use crate::graph::{Edge, GraphNode};

pub fn render_dot(nodes: &[GraphNode], edges: &[Edge]) -> String {
    let mut out = String::from("digraph whorl {\n");
    for node in nodes {
        out.push_str(&format!(
            "  \"{}\" [label=\"{}\"];\n",
            node.id,
            escape_dot_label(&node.label)
        ));
    }
    for edge in edges {
        out.push_str(&format!(
            "  \"{}\" -> \"{}\";\n",
            nodes[edge.from].id, nodes[edge.to].id
        ));
    }
    out.push_str("}\n");
    out
}

fn escape_dot_label(label: &str) -> String {
    label.replace('"', "\\\"").replace('\n', "\\n")
}
