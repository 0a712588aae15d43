use rayon::prelude::*;

use crate::graph::GraphNode;

pub fn annotate(nodes: &mut [GraphNode]) {
    let incoming = incoming_counts(nodes);
    for (node, incoming) in nodes.iter_mut().zip(incoming) {
        node.connection_count = node.dependency_ids.len() + incoming;
        node.is_leaf = incoming == 0;
    }
}

fn incoming_counts(nodes: &[GraphNode]) -> Vec<usize> {
    nodes
        .par_iter()
        .enumerate()
        .map(|(index, node)| {
            nodes
                .iter()
                .enumerate()
                .filter(|(other_index, _)| *other_index != index)
                .map(|(_, other)| {
                    other
                        .dependency_ids
                        .iter()
                        .filter(|dep| **dep == node.id)
                        .count()
                })
                .sum()
        })
        .collect()
}
