//! Graphwalk CLI: load an adjacency file and run one query against it
//!
//! Logs go to stderr (filter with `RUST_LOG` or `--log-level`); stdout carries
//! only the query result.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use graphwalk::{Graph, LoaderConfig, VertexId};
use std::path::PathBuf;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "graphwalk",
    version,
    about = "Traverse and analyse graphs stored as adjacency files"
)]
struct Cli {
    /// Graph file (line 1: G or D, line 2: vertex ids, then one (a,b) edge per line)
    file: PathBuf,

    /// JSON loader config overriding the directedness markers
    #[arg(long, global = true, env = "GRAPHWALK_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "text", global = true)]
    format: OutputFormat,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Print every vertex with its neighbours
    Show,
    /// Breadth-first traversal order from a vertex
    Bfs { start: String },
    /// Depth-first traversal order from a vertex
    Dfs { start: String },
    /// Unweighted shortest path between two vertices
    Path { start: String, target: String },
    /// Some path between two vertices found by depth-first search
    DfsPath { start: String, target: String },
    /// Vertices exactly N edges away from a vertex
    NAway { start: String, distance: usize },
    /// Whether the graph is bipartite
    Bipartite,
    /// Connected components
    Components,
    /// Whether the graph contains a directed cycle
    HasCycle,
    /// Topological order of a DAG
    TopoSort,
}

/// What a command produced, before formatting
enum Output<'g> {
    Adjacency(&'g Graph),
    Ids(Vec<VertexId>),
    Path(Option<Vec<VertexId>>),
    Groups(Vec<Vec<VertexId>>),
    Flag(bool),
}

fn main() {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => LoaderConfig::from_json_file(path)
            .with_context(|| format!("reading loader config {}", path.display()))?,
        None => LoaderConfig::default(),
    };
    debug!(?config, "Loader config");

    let graph = graphwalk::load_graph_with(&cli.file, &config)
        .with_context(|| format!("loading graph {}", cli.file.display()))?;

    let output = query(&graph, &cli.command)?;
    print_output(&output, &cli.format)
}

fn query<'g>(graph: &'g Graph, command: &Commands) -> Result<Output<'g>> {
    let output = match command {
        Commands::Show => Output::Adjacency(graph),
        Commands::Bfs { start } => Output::Ids(graph.bfs_traversal(start)?.cloned().collect()),
        Commands::Dfs { start } => Output::Ids(graph.dfs_traversal(start)?.cloned().collect()),
        Commands::Path { start, target } => Output::Path(graph.find_shortest_path(start, target)?),
        Commands::DfsPath { start, target } => {
            Output::Path(graph.find_path_dfs_iter(start, target)?)
        }
        Commands::NAway { start, distance } => {
            Output::Ids(graph.find_vertices_n_away(start, *distance)?)
        }
        Commands::Bipartite => Output::Flag(graph.is_bipartite()),
        Commands::Components => Output::Groups(graph.find_connected_components()),
        Commands::HasCycle => Output::Flag(graph.contains_cycle()),
        Commands::TopoSort => Output::Ids(graph.topological_sort()?),
    };
    Ok(output)
}

fn join(ids: &[VertexId]) -> String {
    ids.iter().map(VertexId::as_str).collect::<Vec<_>>().join(" ")
}

fn print_output(output: &Output<'_>, format: &OutputFormat) -> Result<()> {
    if let Output::Adjacency(graph) = output {
        return show(graph, format);
    }

    match format {
        OutputFormat::Json => {
            let value = match output {
                Output::Ids(ids) => serde_json::to_value(ids)?,
                Output::Path(path) => serde_json::to_value(path)?,
                Output::Groups(groups) => serde_json::to_value(groups)?,
                Output::Flag(flag) => serde_json::to_value(flag)?,
                Output::Adjacency(_) => serde_json::Value::Null,
            };
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => match output {
            Output::Ids(ids) => println!("{}", join(ids)),
            Output::Path(Some(path)) => println!("{}", join(path)),
            Output::Path(None) => println!("(no path)"),
            Output::Groups(groups) => {
                for group in groups {
                    println!("{}", join(group));
                }
            }
            Output::Flag(flag) => println!("{}", flag),
            Output::Adjacency(_) => {}
        },
    }
    Ok(())
}

fn show(graph: &Graph, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let adjacency: serde_json::Map<String, serde_json::Value> = graph
                .get_vertices()
                .map(|v| {
                    let neighbors: Vec<&str> = v.get_neighbors().map(VertexId::as_str).collect();
                    (v.get_id().to_string(), serde_json::json!(neighbors))
                })
                .collect();
            let value = serde_json::json!({
                "directed": graph.is_directed(),
                "vertices": graph.vertex_count(),
                "edges": graph.edge_count(),
                "adjacency": adjacency,
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
        }
        OutputFormat::Text => {
            let mut table = Table::new();
            table.set_content_arrangement(ContentArrangement::Dynamic);
            table.set_header(vec!["vertex", "neighbors"]);
            for vertex in graph.get_vertices() {
                let neighbors: Vec<&str> = vertex.get_neighbors().map(VertexId::as_str).collect();
                table.add_row(vec![vertex.get_id().to_string(), neighbors.join(", ")]);
            }
            println!("{}", table);
            println!(
                "{} vertices, {} edges ({})",
                graph.vertex_count(),
                graph.edge_count(),
                if graph.is_directed() { "directed" } else { "undirected" }
            );
        }
    }
    Ok(())
}
