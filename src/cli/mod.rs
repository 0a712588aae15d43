use std::fs;
use std::io;
use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};
use serde::Serialize;

use crate::config;
use crate::error::{Result, WhorlError};
use crate::graph::resolve::normalize_id;
use crate::graph::{DependencyGraph, GraphNode, Resolution, ResolvedEdges, UnresolvedReference};
use crate::manifest;
use crate::render::{dot, html, svg};
use crate::util::output;

#[derive(Parser, Debug)]
#[command(name = "whorl")]
#[command(about = "Chocolatey dependency graph visualizer", long_about = None)]
pub struct Cli {
    #[arg(short, long)]
    pub root: Option<PathBuf>,
    #[arg(short, long)]
    pub filter: Option<String>,
    #[arg(short, long)]
    pub quiet: bool,
    #[arg(long)]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Graph(GraphArgs),
    List(ListArgs),
    Deps(DepsArgs),
    Dependents(DependentsArgs),
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct GraphArgs {
    #[arg(long, default_value = "svg")]
    pub format: String,
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct DepsArgs {
    pub package: String,
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct DependentsArgs {
    pub package: String,
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

pub fn run() {
    let cli = Cli::parse();
    if cli.no_color {
        console::set_colors_enabled(false);
    }
    if let Err(err) = dispatch(cli) {
        output::error(&err.to_string());
        std::process::exit(1);
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Graph(args) => handle_graph(args, cli.root, cli.filter, cli.quiet),
        Commands::List(args) => handle_list(args, cli.root, cli.filter, cli.quiet),
        Commands::Deps(args) => handle_deps(args, cli.root, cli.filter, cli.quiet),
        Commands::Dependents(args) => handle_dependents(args, cli.root, cli.filter, cli.quiet),
        Commands::Completions(args) => handle_completions(args),
    }
}

fn handle_graph(
    args: GraphArgs,
    root: Option<PathBuf>,
    filter: Option<String>,
    quiet: bool,
) -> Result<()> {
    let loaded = load_graph(root, filter, quiet)?;
    let resolved = loaded.graph.resolve_edges();
    if !quiet {
        report_skipped(&resolved.skipped);
    }

    let nodes = &loaded.graph.nodes;
    let rendered = match args.format.to_ascii_lowercase().as_str() {
        "svg" => svg::render_svg(nodes, &resolved.edges),
        "html" => html::render_html(&loaded.root.display().to_string(), nodes, &resolved.edges)?,
        "dot" => dot::render_dot(nodes, &resolved.edges),
        "json" => {
            let mut json = serde_json::to_string_pretty(&graph_to_json(nodes, &resolved))
                .map_err(|err| WhorlError::Other(anyhow::Error::new(err)))?;
            json.push('\n');
            json
        }
        other => {
            return Err(WhorlError::Other(anyhow::anyhow!(format!(
                "unknown graph format '{}'",
                other
            ))))
        }
    };

    match args.output {
        Some(path) => {
            fs::write(&path, rendered)?;
            if !quiet {
                output::info(&format!("wrote {}", path.display()));
            }
        }
        None => print!("{}", rendered),
    }
    Ok(())
}

fn handle_list(
    args: ListArgs,
    root: Option<PathBuf>,
    filter: Option<String>,
    quiet: bool,
) -> Result<()> {
    let loaded = load_graph(root, filter, quiet)?;
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&loaded.graph.nodes)
                .map_err(|err| WhorlError::Other(anyhow::Error::new(err)))?
        );
        return Ok(());
    }

    for node in &loaded.graph.nodes {
        let marker = if node.is_leaf { " (leaf)" } else { "" };
        println!("{:>4}  {}{}", node.connection_count, node.id, marker);
    }
    Ok(())
}

fn handle_deps(
    args: DepsArgs,
    root: Option<PathBuf>,
    filter: Option<String>,
    quiet: bool,
) -> Result<()> {
    let loaded = load_graph(root, filter, quiet)?;
    let node = resolve_package_arg(&loaded.graph, &args.package)?;
    let mut deps: Vec<String> = node
        .dependency_ids
        .iter()
        .map(|dep| match loaded.graph.resolve(dep) {
            Resolution::Resolved(target) => target.id.clone(),
            Resolution::Unresolved => format!("{} (missing)", dep),
            Resolution::Ambiguous(_) => format!("{} (ambiguous)", dep),
        })
        .collect();
    deps.sort();
    deps.dedup();

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&deps)
                .map_err(|err| WhorlError::Other(anyhow::Error::new(err)))?
        );
        return Ok(());
    }

    for dep in deps {
        println!("{}", dep);
    }
    Ok(())
}

fn handle_dependents(
    args: DependentsArgs,
    root: Option<PathBuf>,
    filter: Option<String>,
    quiet: bool,
) -> Result<()> {
    let loaded = load_graph(root, filter, quiet)?;
    let node = resolve_package_arg(&loaded.graph, &args.package)?;
    let mut dependents: Vec<String> = loaded
        .graph
        .nodes
        .iter()
        .filter(|candidate| candidate.id != node.id)
        .filter(|candidate| candidate.dependency_ids.iter().any(|dep| *dep == node.id))
        .map(|candidate| candidate.id.clone())
        .collect();
    dependents.sort();
    dependents.dedup();

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&dependents)
                .map_err(|err| WhorlError::Other(anyhow::Error::new(err)))?
        );
        return Ok(());
    }

    println!("dependents of {}:", node.id);
    for dependent in dependents {
        println!("{}", dependent);
    }
    Ok(())
}

fn handle_completions(args: CompletionsArgs) -> Result<()> {
    let mut command = Cli::command();
    clap_complete::generate(args.shell, &mut command, "whorl", &mut io::stdout());
    Ok(())
}

struct LoadedGraph {
    root: PathBuf,
    graph: DependencyGraph,
}

fn load_graph(
    root: Option<PathBuf>,
    filter: Option<String>,
    quiet: bool,
) -> Result<LoadedGraph> {
    let root = config::resolve_install_root(root)?;
    let mut packages = manifest::load_manifests(&root, !quiet)?;
    if let Some(pattern) = filter.as_deref() {
        let re = regex::Regex::new(pattern)
            .map_err(|err| WhorlError::Other(anyhow::Error::new(err)))?;
        packages.retain(|package| re.is_match(&normalize_id(&package.id)));
    }
    let graph = DependencyGraph::build(&packages);
    if !quiet {
        for duplicate in &graph.duplicates {
            output::warn(&format!(
                "duplicate package id '{}' appears {} times",
                duplicate.id, duplicate.count
            ));
        }
    }
    Ok(LoadedGraph { root, graph })
}

fn resolve_package_arg<'a>(graph: &'a DependencyGraph, package: &str) -> Result<&'a GraphNode> {
    match graph.resolve(package) {
        Resolution::Resolved(node) => Ok(node),
        Resolution::Unresolved => Err(WhorlError::Other(anyhow::anyhow!(format!(
            "unknown package {}",
            package
        )))),
        Resolution::Ambiguous(count) => Err(WhorlError::Other(anyhow::anyhow!(format!(
            "package id '{}' matches {} packages",
            package, count
        )))),
    }
}

fn report_skipped(skipped: &[UnresolvedReference]) {
    for reference in skipped {
        if reference.matches == 0 {
            output::warn(&format!(
                "dependency '{}' of '{}' not found; edge skipped",
                reference.target, reference.from
            ));
        } else {
            output::warn(&format!(
                "dependency '{}' of '{}' matches {} packages; edge skipped",
                reference.target, reference.from, reference.matches
            ));
        }
    }
}

#[derive(Serialize)]
struct GraphJson {
    nodes: Vec<GraphNode>,
    edges: Vec<EdgeJson>,
    skipped: Vec<SkippedJson>,
}

#[derive(Serialize)]
struct EdgeJson {
    from: String,
    to: String,
}

#[derive(Serialize)]
struct SkippedJson {
    from: String,
    dependency: String,
    reason: String,
}

fn graph_to_json(nodes: &[GraphNode], resolved: &ResolvedEdges) -> GraphJson {
    GraphJson {
        nodes: nodes.to_vec(),
        edges: resolved
            .edges
            .iter()
            .map(|edge| EdgeJson {
                from: nodes[edge.from].id.clone(),
                to: nodes[edge.to].id.clone(),
            })
            .collect(),
        skipped: resolved
            .skipped
            .iter()
            .map(|reference| SkippedJson {
                from: reference.from.clone(),
                dependency: reference.target.clone(),
                reason: if reference.matches == 0 {
                    "missing"
                } else {
                    "ambiguous"
                }
                .to_string(),
            })
            .collect(),
    }
}
