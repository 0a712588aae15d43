use crate::graph::GraphNode;

const WRAP_WIDTH: usize = 15;

pub fn format_labels(nodes: &mut [GraphNode]) {
    for node in nodes {
        node.label = wrap_label(&node.label);
    }
}

pub fn wrap_label(label: &str) -> String {
    let chars: Vec<char> = label.chars().collect();
    chars
        .chunks(WRAP_WIDTH)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<String>>()
        .join("\n")
}
