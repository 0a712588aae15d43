use crate::graph::GraphNode;

pub fn normalize_id(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[derive(Debug)]
pub enum Resolution<'a> {
    Resolved(&'a GraphNode),
    Unresolved,
    Ambiguous(usize),
}

pub fn resolve<'a>(nodes: &'a [GraphNode], id: &str) -> Resolution<'a> {
    let query = normalize_id(id);
    let mut found = None;
    let mut matches = 0;
    for node in nodes {
        if node.id == query {
            matches += 1;
            found = Some(node);
        }
    }
    match (matches, found) {
        (1, Some(node)) => Resolution::Resolved(node),
        (0, _) => Resolution::Unresolved,
        (n, _) => Resolution::Ambiguous(n),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnresolvedReference {
    pub from: String,
    pub target: String,
    pub matches: usize,
}

#[derive(Debug, Default)]
pub struct ResolvedEdges {
    pub edges: Vec<Edge>,
    pub skipped: Vec<UnresolvedReference>,
}

pub fn resolve_edges(nodes: &[GraphNode]) -> ResolvedEdges {
    let mut resolved = ResolvedEdges::default();
    for (from, node) in nodes.iter().enumerate() {
        for target in &node.dependency_ids {
            let mut found = None;
            let mut matches = 0;
            for (to, candidate) in nodes.iter().enumerate() {
                if candidate.id == *target {
                    matches += 1;
                    found = Some(to);
                }
            }
            match (matches, found) {
                (1, Some(to)) => resolved.edges.push(Edge { from, to }),
                _ => resolved.skipped.push(UnresolvedReference {
                    from: node.id.clone(),
                    target: target.clone(),
                    matches,
                }),
            }
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Coordinate;

    fn node(id: &str, deps: &[&str]) -> GraphNode {
        GraphNode {
            id: id.to_string(),
            label: id.to_string(),
            dependency_ids: deps.iter().map(|d| d.to_string()).collect(),
            connection_count: 0,
            is_leaf: true,
            coordinate: Coordinate::default(),
        }
    }

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize_id("  Git.Install \n"), "git.install");
        assert_eq!(normalize_id("already"), "already");
    }

    #[test]
    fn resolve_is_case_insensitive() {
        let nodes = vec![node("git", &[]), node("vim", &[])];
        match resolve(&nodes, "  GIT ") {
            Resolution::Resolved(found) => assert_eq!(found.id, "git"),
            other => panic!("expected resolved, got {other:?}"),
        }
    }

    #[test]
    fn resolve_reports_unknown_ids() {
        let nodes = vec![node("git", &[])];
        assert!(matches!(resolve(&nodes, "emacs"), Resolution::Unresolved));
    }

    #[test]
    fn resolve_reports_ambiguous_ids() {
        let nodes = vec![node("dup", &[]), node("dup", &[]), node("other", &[])];
        match resolve(&nodes, "dup") {
            Resolution::Ambiguous(count) => assert_eq!(count, 2),
            other => panic!("expected ambiguous, got {other:?}"),
        }
    }

    #[test]
    fn edges_follow_declaration_order() {
        let nodes = vec![node("a", &["b", "c"]), node("b", &["c"]), node("c", &[])];
        let resolved = resolve_edges(&nodes);
        assert_eq!(
            resolved.edges,
            vec![
                Edge { from: 0, to: 1 },
                Edge { from: 0, to: 2 },
                Edge { from: 1, to: 2 },
            ]
        );
        assert!(resolved.skipped.is_empty());
    }

    #[test]
    fn duplicate_declarations_produce_duplicate_edges() {
        let nodes = vec![node("a", &["b", "b"]), node("b", &[])];
        let resolved = resolve_edges(&nodes);
        assert_eq!(
            resolved.edges,
            vec![Edge { from: 0, to: 1 }, Edge { from: 0, to: 1 }]
        );
    }

    #[test]
    fn self_references_resolve_to_self_loops() {
        let nodes = vec![node("a", &["a"])];
        let resolved = resolve_edges(&nodes);
        assert_eq!(resolved.edges, vec![Edge { from: 0, to: 0 }]);
    }

    #[test]
    fn unknown_targets_are_skipped_with_zero_matches() {
        let nodes = vec![node("a", &["ghost"])];
        let resolved = resolve_edges(&nodes);
        assert!(resolved.edges.is_empty());
        assert_eq!(
            resolved.skipped,
            vec![UnresolvedReference {
                from: "a".to_string(),
                target: "ghost".to_string(),
                matches: 0,
            }]
        );
    }

    #[test]
    fn ambiguous_targets_are_skipped_with_match_count() {
        let nodes = vec![node("a", &["dup"]), node("dup", &[]), node("dup", &[])];
        let resolved = resolve_edges(&nodes);
        assert!(resolved.edges.is_empty());
        assert_eq!(resolved.skipped.len(), 1);
        assert_eq!(resolved.skipped[0].matches, 2);
    }
}
