use std::collections::HashMap;

use crate::graph::resolve::normalize_id;
use crate::graph::{Coordinate, GraphNode};
use crate::manifest::RawPackage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateIdentifier {
    pub id: String,
    pub count: usize,
}

#[derive(Debug, Default)]
pub struct BuiltNodes {
    pub nodes: Vec<GraphNode>,
    pub duplicates: Vec<DuplicateIdentifier>,
}

pub fn build(packages: &[RawPackage]) -> BuiltNodes {
    let mut nodes = Vec::with_capacity(packages.len());
    for package in packages {
        nodes.push(GraphNode {
            id: normalize_id(&package.id),
            label: package.title.clone(),
            dependency_ids: package
                .dependencies
                .iter()
                .map(|dep| normalize_id(dep))
                .collect(),
            connection_count: 0,
            is_leaf: true,
            coordinate: Coordinate::default(),
        });
    }

    let mut counts: HashMap<&str, usize> = HashMap::new();
    for node in &nodes {
        *counts.entry(node.id.as_str()).or_insert(0) += 1;
    }
    let mut duplicates: Vec<DuplicateIdentifier> = counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, count)| DuplicateIdentifier {
            id: id.to_string(),
            count,
        })
        .collect();
    duplicates.sort_by(|a, b| a.id.cmp(&b.id));

    BuiltNodes { nodes, duplicates }
}
