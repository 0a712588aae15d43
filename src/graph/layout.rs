use std::f64::consts::PI;

use crate::graph::{Coordinate, GraphNode};

pub fn rank_by_connectivity(nodes: &mut [GraphNode]) {
    nodes.sort_by(|a, b| b.connection_count.cmp(&a.connection_count));
}

pub fn assign_coordinates(nodes: &mut [GraphNode]) {
    let n = nodes.len();
    if n == 0 {
        return;
    }
    let vertical_spacing = (10 * n) as f64;
    let horizontal_spacing = (10 * n) as f64;
    let theta_max = n as f64 * PI;
    let b = vertical_spacing / (2.0 * PI);
    let s_max = 0.5 * b * theta_max * theta_max;
    for (index, node) in nodes.iter_mut().enumerate() {
        let s = (s_max / horizontal_spacing) * index as f64;
        let theta = (2.0 * s / b).sqrt();
        node.coordinate = Coordinate {
            x: b * theta * theta.cos(),
            y: b * theta * theta.sin(),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, count: usize) -> GraphNode {
        GraphNode {
            id: id.to_string(),
            label: id.to_string(),
            dependency_ids: Vec::new(),
            connection_count: count,
            is_leaf: true,
            coordinate: Coordinate::default(),
        }
    }

    #[test]
    fn ranking_is_descending_and_stable() {
        let mut nodes = vec![
            node("low", 1),
            node("first-tie", 3),
            node("high", 7),
            node("second-tie", 3),
        ];
        rank_by_connectivity(&mut nodes);
        let ids: Vec<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "first-tie", "second-tie", "low"]);
    }

    #[test]
    fn single_node_sits_at_the_origin() {
        let mut nodes = vec![node("only", 0)];
        assign_coordinates(&mut nodes);
        assert_eq!(nodes[0].coordinate, Coordinate { x: 0.0, y: 0.0 });
    }

    #[test]
    fn empty_slice_is_accepted() {
        let mut nodes: Vec<GraphNode> = Vec::new();
        assign_coordinates(&mut nodes);
    }

    #[test]
    fn coordinates_match_the_spiral_parameters() {
        let mut nodes: Vec<GraphNode> = (0..5).map(|i| node(&format!("n{i}"), 0)).collect();
        assign_coordinates(&mut nodes);

        let n = 5.0_f64;
        let spacing = 10.0 * n;
        let b = spacing / (2.0 * PI);
        let s_max = 0.5 * b * (n * PI) * (n * PI);
        for (index, placed) in nodes.iter().enumerate() {
            let s = (s_max / spacing) * index as f64;
            let theta = (2.0 * s / b).sqrt();
            assert_eq!(placed.coordinate.x, b * theta * theta.cos());
            assert_eq!(placed.coordinate.y, b * theta * theta.sin());
        }
    }

    #[test]
    fn radius_grows_with_rank() {
        let mut nodes: Vec<GraphNode> = (0..12).map(|i| node(&format!("n{i}"), 0)).collect();
        assign_coordinates(&mut nodes);
        let radii: Vec<f64> = nodes
            .iter()
            .map(|n| (n.coordinate.x.powi(2) + n.coordinate.y.powi(2)).sqrt())
            .collect();
        for pair in radii.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn placement_depends_only_on_count_and_position() {
        let mut first: Vec<GraphNode> = (0..7).map(|i| node(&format!("a{i}"), i)).collect();
        let mut second: Vec<GraphNode> = (0..7).map(|i| node(&format!("b{i}"), 0)).collect();
        assign_coordinates(&mut first);
        assign_coordinates(&mut second);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.coordinate, b.coordinate);
        }
    }

    #[test]
    fn placement_is_deterministic() {
        let mut first: Vec<GraphNode> = (0..9).map(|i| node(&format!("n{i}"), 0)).collect();
        let mut second = first.clone();
        assign_coordinates(&mut first);
        assign_coordinates(&mut second);
        for (a, b) in first.iter().zip(&second) {
            assert_eq!(a.coordinate, b.coordinate);
        }
    }
}
