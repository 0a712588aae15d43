use serde::Serialize;

use crate::manifest::RawPackage;

pub mod annotate;
pub mod builder;
pub mod label;
pub mod layout;
pub mod resolve;

pub use builder::DuplicateIdentifier;
pub use resolve::{Edge, Resolution, ResolvedEdges, UnresolvedReference};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    pub dependency_ids: Vec<String>,
    pub connection_count: usize,
    pub is_leaf: bool,
    pub coordinate: Coordinate,
}

#[derive(Debug, Default)]
pub struct DependencyGraph {
    pub nodes: Vec<GraphNode>,
    pub duplicates: Vec<DuplicateIdentifier>,
}

impl DependencyGraph {
    pub fn build(packages: &[RawPackage]) -> Self {
        let built = builder::build(packages);
        let mut nodes = built.nodes;
        annotate::annotate(&mut nodes);
        layout::rank_by_connectivity(&mut nodes);
        layout::assign_coordinates(&mut nodes);
        label::format_labels(&mut nodes);
        Self {
            nodes,
            duplicates: built.duplicates,
        }
    }

    pub fn resolve(&self, id: &str) -> Resolution<'_> {
        resolve::resolve(&self.nodes, id)
    }

    pub fn resolve_edges(&self) -> ResolvedEdges {
        resolve::resolve_edges(&self.nodes)
    }
}
