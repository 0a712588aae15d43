use crate::error::{Result, WhorlError};
use crate::graph::{Edge, GraphNode};
use crate::render::svg;

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{ title }}</title>
<style>
body { margin: 0; font-family: ui-sans-serif, system-ui, sans-serif; }
header { padding: 0.5rem 1rem; border-bottom: 1px solid #d1d5db; }
header span { color: #6b7280; margin-right: 1rem; }
svg { width: 100vw; height: calc(100vh - 3rem); }
</style>
</head>
<body>
<header>
<span>{{ title }}</span>
<span>{{ node_count }} packages</span>
<span>{{ edge_count }} dependencies</span>
</header>
{{ svg | safe }}
</body>
</html>
"#;

pub fn render_html(title: &str, nodes: &[GraphNode], edges: &[Edge]) -> Result<String> {
    let svg_markup = svg::render_svg(nodes, edges);
    let context = serde_json::json!({
        "title": title,
        "node_count": nodes.len(),
        "edge_count": edges.len(),
        "svg": svg_markup,
    });
    let context = tera::Context::from_serialize(&context)
        .map_err(|err| WhorlError::Other(anyhow::Error::new(err)))?;
    tera::Tera::one_off(PAGE_TEMPLATE, &context, true)
        .map_err(|err| WhorlError::Other(anyhow::Error::new(err)))
}
