use std::fmt::Write as _;

use crate::graph::{Coordinate, Edge, GraphNode};
use crate::render::palette;

const VIEWBOX_PADDING: f64 = 120.0;
const ARROW_MARGIN: f64 = 70.0;
const LINE_HEIGHT_EM: f64 = 1.2;

struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

pub fn render_svg(nodes: &[GraphNode], edges: &[Edge]) -> String {
    let bounds = node_bounds(nodes).unwrap_or(Bounds {
        min_x: 0.0,
        min_y: 0.0,
        max_x: 100.0,
        max_y: 100.0,
    });
    let vb_min_x = bounds.min_x - VIEWBOX_PADDING;
    let vb_min_y = bounds.min_y - VIEWBOX_PADDING;
    let vb_w = (bounds.max_x - bounds.min_x) + VIEWBOX_PADDING * 2.0;
    let vb_h = (bounds.max_y - bounds.min_y) + VIEWBOX_PADDING * 2.0;

    let max_count = nodes.iter().map(|n| n.connection_count).max().unwrap_or(0);
    let colors = palette::connectivity_palette(max_count);

    let mut out = String::new();
    let _ = writeln!(
        &mut out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        fmt(vb_min_x),
        fmt(vb_min_y),
        fmt(vb_w.max(1.0)),
        fmt(vb_h.max(1.0))
    );
    out.push_str(
        r#"<style>
.edge { stroke: #4b5563; stroke-width: 1; fill: none; }
.node-label { font-family: ui-sans-serif, system-ui, sans-serif; font-size: 12px; text-anchor: middle; dominant-baseline: middle; }
.leaf { font-weight: bold; text-decoration: underline; }
</style>
"#,
    );
    out.push_str(concat!(
        r##"<defs><marker id="arrow" viewBox="0 0 10 10" refX="10" refY="5" "##,
        r##"markerWidth="7" markerHeight="7" orient="auto">"##,
        r##"<path d="M 0 0 L 10 5 L 0 10 z" fill="#4b5563"/></marker></defs>"##,
        "\n",
    ));

    out.push_str(r#"<g class="edges">"#);
    out.push('\n');
    for edge in edges {
        if edge.from == edge.to {
            continue;
        }
        let from = nodes[edge.from].coordinate;
        let to = nodes[edge.to].coordinate;
        if let Some((start, end)) = trimmed_segment(from, to, ARROW_MARGIN) {
            let _ = writeln!(
                &mut out,
                r##"<line class="edge" x1="{}" y1="{}" x2="{}" y2="{}" marker-end="url(#arrow)" />"##,
                fmt(start.x),
                fmt(start.y),
                fmt(end.x),
                fmt(end.y)
            );
        }
    }
    out.push_str("</g>\n");

    out.push_str(r#"<g class="nodes">"#);
    out.push('\n');
    for node in nodes {
        render_node(&mut out, node, &colors);
    }
    out.push_str("</g>\n");

    out.push_str("</svg>\n");
    out
}

fn render_node(out: &mut String, node: &GraphNode, colors: &[String]) {
    let class = if node.is_leaf {
        "node-label leaf"
    } else {
        "node-label"
    };
    let fill = &colors[node.connection_count];
    let x = fmt(node.coordinate.x);
    let lines: Vec<&str> = node.label.split('\n').collect();
    let first_dy = if lines.len() > 1 {
        -0.5 * LINE_HEIGHT_EM * (lines.len() - 1) as f64
    } else {
        0.0
    };
    let _ = write!(
        out,
        r#"<text class="{}" x="{}" y="{}" fill="{}">"#,
        class,
        x,
        fmt(node.coordinate.y),
        fill
    );
    for (index, line) in lines.iter().enumerate() {
        let dy = if index == 0 {
            format!("{first_dy}em")
        } else {
            format!("{LINE_HEIGHT_EM}em")
        };
        let _ = write!(
            out,
            r#"<tspan x="{}" dy="{}">{}</tspan>"#,
            x,
            dy,
            escape_xml(line)
        );
    }
    out.push_str("</text>\n");
}

fn trimmed_segment(from: Coordinate, to: Coordinate, margin: f64) -> Option<(Coordinate, Coordinate)> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let span = dx.abs() + dy.abs();
    if span == 0.0 {
        return None;
    }
    let shift_x = margin / span * dx;
    let shift_y = margin / span * dy;
    Some((
        Coordinate {
            x: from.x + shift_x,
            y: from.y + shift_y,
        },
        Coordinate {
            x: to.x - shift_x,
            y: to.y - shift_y,
        },
    ))
}

fn node_bounds(nodes: &[GraphNode]) -> Option<Bounds> {
    let mut bounds: Option<Bounds> = None;
    for node in nodes {
        let c = node.coordinate;
        match bounds.as_mut() {
            Some(b) => {
                b.min_x = b.min_x.min(c.x);
                b.min_y = b.min_y.min(c.y);
                b.max_x = b.max_x.max(c.x);
                b.max_y = b.max_y.max(c.y);
            }
            None => {
                bounds = Some(Bounds {
                    min_x: c.x,
                    min_y: c.y,
                    max_x: c.x,
                    max_y: c.y,
                })
            }
        }
    }
    bounds
}

fn fmt(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = (value * 100.0).round() / 100.0;
    let text = if rounded == rounded.trunc() {
        format!("{}", rounded as i64)
    } else {
        format!("{rounded}")
    };
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
