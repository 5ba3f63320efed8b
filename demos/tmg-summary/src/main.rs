//! `tmg-summary` — load a TMG highway graph and print what is in it.
//!
//! Prints the full graph dump, then the extremal vertices, the longest and
//! shortest edges, and the undirected edge count check.
//!
//! Run with:
//!   cargo run -p tmg-summary -- path/to/region.tmg
//!
//! Set `RUST_LOG` (or pass `-v`, `-vv`) for loader diagnostics on stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use hg_core::{EdgeId, VertexId};
use hg_graph::{
    EdgeCountCheck, GraphConfig, GraphError, GraphSummary, HeaderCheck, HighwayGraph,
    MAX_LENGTH_DECIMALS, VertexExtreme, load_tmg,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// TMG graph file to load.
    path: PathBuf,

    /// Reject files whose header is not `TMG <version> simple`.
    #[arg(long)]
    strict_header: bool,

    /// Decimal places for edge lengths in the graph dump.
    #[arg(
        long,
        default_value_t = 3,
        value_parser = clap::value_parser!(u32).range(0..=MAX_LENGTH_DECIMALS as i64)
    )]
    decimals: u32,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = GraphConfig {
        header: if args.strict_header { HeaderCheck::Strict } else { HeaderCheck::Lenient },
        length_decimals: args.decimals,
    };

    let graph = load_tmg(&args.path, &config)
        .with_context(|| format!("failed to load {}", args.path.display()))?;

    let summary = GraphSummary::new(&graph, &config);
    let check = graph.check_edge_count();

    match args.format {
        OutputFormat::Text => print_text(&graph, &summary, check),
        OutputFormat::Json => print_json(&graph, &summary, check)?,
    }

    Ok(())
}

// ── Text output ───────────────────────────────────────────────────────────────

fn print_text(graph: &HighwayGraph, summary: &GraphSummary, check: EdgeCountCheck) {
    println!("{summary}");

    match graph.vertex_extremes() {
        Ok(extremes) => {
            for kind in VertexExtreme::ALL {
                let v = graph.vertex(extremes.get(kind));
                println!("{kind}: {} {}", v.label, v.pos);
            }
        }
        Err(GraphError::EmptyGraph) => println!("No vertices: no extremal vertices."),
        Err(e) => warn!("vertex extremes: {e}"),
    }
    println!();

    match graph.edge_extremes() {
        Ok(extremes) => {
            let longest = graph.edge(extremes.longest);
            let shortest = graph.edge(extremes.shortest);
            println!("Longest Edge: {} with length {}", longest.label, longest.length_mi);
            println!("Shortest Edge: {} with length {}", shortest.label, shortest.length_mi);
        }
        Err(GraphError::EmptyGraph) => println!("No edges: no longest or shortest edge."),
        Err(e) => warn!("edge extremes: {e}"),
    }

    println!("Count: {}", check.counted);
    println!("Edge Count: {}", check.declared);
    if !check.is_consistent() {
        println!(
            "WARNING: scanned {} undirected edges but the file declares {}",
            check.counted, check.declared
        );
    }
}

// ── JSON output ───────────────────────────────────────────────────────────────

fn print_json(graph: &HighwayGraph, summary: &GraphSummary, check: EdgeCountCheck) -> Result<()> {
    let vertex_json = |id: VertexId| {
        let v = graph.vertex(id);
        serde_json::json!({ "label": v.label, "pos": v.pos })
    };

    let vertex_extremes = graph.vertex_extremes().ok().map(|x| {
        VertexExtreme::ALL
            .iter()
            .map(|&kind| (kind.to_string(), vertex_json(x.get(kind))))
            .collect::<serde_json::Map<_, _>>()
    });

    let edge_extremes = graph.edge_extremes().ok().map(|x| {
        let edge_json = |e: EdgeId| {
            let edge = graph.edge(e);
            serde_json::json!({ "label": edge.label, "length_mi": edge.length_mi })
        };
        serde_json::json!({ "longest": edge_json(x.longest), "shortest": edge_json(x.shortest) })
    });

    let out = serde_json::json!({
        "graph": summary,
        "vertex_extremes": vertex_extremes,
        "edge_extremes": edge_extremes,
        "edge_count": {
            "counted": check.counted,
            "declared": check.declared,
            "consistent": check.is_consistent(),
        },
    });
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
