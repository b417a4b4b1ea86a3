use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use spring_embedder::io::{FormatRegistry, LayoutDocument};
use spring_embedder::{Graph, Layout, LayoutConfig, Snapshot};

/// Force-directed layout for directed graphs.
#[derive(Parser)]
#[command(name = "spring-embedder")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute a layout and write it as SVG or JSON
    Layout(LayoutArgs),
    /// Validate a graph file and report its size
    Check {
        /// Input adjacency list (.json, .yaml, .yml)
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(Args, Debug)]
struct LayoutArgs {
    /// Input adjacency list (.json, .yaml, .yml)
    #[arg(short, long)]
    input: PathBuf,

    /// Output file
    #[arg(short, long)]
    output: PathBuf,

    /// Output format (json, svg); defaults to the output file extension
    #[arg(short, long)]
    format: Option<String>,

    /// Layout parameter file (.json, .yaml, .yml); flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of relaxation steps
    #[arg(short = 'n', long)]
    iterations: Option<usize>,

    /// Optimum distance between adjacent vertices
    #[arg(short, long)]
    distance: Option<f64>,

    /// Seed for the random initial placement
    #[arg(short, long)]
    seed: Option<u64>,

    /// Keep every snapshot instead of only the final one
    #[arg(long)]
    all_snapshots: bool,
}

impl LayoutArgs {
    /// Config file values (or defaults), overridden by any flags given
    fn resolve_config(&self) -> anyhow::Result<LayoutConfig> {
        let mut config = match &self.config {
            Some(path) => LayoutConfig::from_path(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => LayoutConfig::default(),
        };
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if let Some(distance) = self.distance {
            config.optimum_distance = distance;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        config.validate()?;
        Ok(config)
    }
}

fn read_graph(registry: &FormatRegistry, input: &Path) -> anyhow::Result<Graph> {
    let graph = registry
        .reader_for_path(input)?
        .read(input)
        .with_context(|| format!("failed to read graph from {}", input.display()))?;
    Ok(graph)
}

fn run_layout(args: &LayoutArgs) -> anyhow::Result<()> {
    let registry = FormatRegistry::with_defaults();
    let graph = read_graph(&registry, &args.input)?;
    let writer = registry.writer_for(args.format.as_deref(), &args.output)?;
    let config = args.resolve_config()?;

    info!(
        input = %args.input.display(),
        format = writer.format_id(),
        "computing layout"
    );
    let run = Layout::new(&graph, &config)?;
    let snapshots: Vec<Snapshot> = if args.all_snapshots {
        run.collect()
    } else {
        vec![run.final_snapshot()]
    };

    let document = LayoutDocument::new(&graph, snapshots);
    writer
        .write(&document, &args.output)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!(
        "Laid out {} vertices and {} edges in {} steps -> {}",
        graph.vertex_count(),
        graph.edge_count(),
        config.iterations,
        args.output.display()
    );
    Ok(())
}

fn check(input: &Path) -> anyhow::Result<()> {
    let graph = read_graph(&FormatRegistry::with_defaults(), input)?;
    println!(
        "{}: {} vertices, {} edges",
        input.display(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Layout(args) => run_layout(&args)?,
        Commands::Check { input } => check(&input)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_args(argv: &[&str]) -> LayoutArgs {
        let cli = Cli::try_parse_from(argv.iter().copied()).unwrap();
        match cli.command {
            Commands::Layout(args) => args,
            _ => panic!("Expected Layout command"),
        }
    }

    #[test]
    fn cli_requires_a_subcommand() {
        assert!(Cli::try_parse_from(["spring-embedder"]).is_err());
    }

    #[test]
    fn cli_parses_layout_subcommand() {
        let args = layout_args(&[
            "spring-embedder",
            "layout",
            "-i",
            "graph.json",
            "-o",
            "out.svg",
            "-n",
            "50",
            "--distance",
            "80",
            "--seed",
            "3",
        ]);
        assert_eq!(args.input, PathBuf::from("graph.json"));
        assert_eq!(args.output, PathBuf::from("out.svg"));
        assert_eq!(args.iterations, Some(50));
        assert_eq!(args.distance, Some(80.0));
        assert_eq!(args.seed, Some(3));
        assert!(!args.all_snapshots);
        assert!(args.format.is_none());
    }

    #[test]
    fn cli_parses_check_subcommand() {
        let cli = Cli::try_parse_from(["spring-embedder", "check", "--input", "g.yaml"]).unwrap();
        match cli.command {
            Commands::Check { input } => assert_eq!(input, PathBuf::from("g.yaml")),
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn cli_rejects_negative_iterations() {
        assert!(
            Cli::try_parse_from([
                "spring-embedder",
                "layout",
                "-i",
                "g.json",
                "-o",
                "o.svg",
                "-n",
                "-1",
            ])
            .is_err()
        );
    }

    #[test]
    fn flags_override_config_file() {
        let args = layout_args(&[
            "spring-embedder",
            "layout",
            "-i",
            "g.json",
            "-o",
            "o.json",
            "--config",
            "tests/fixtures/layout.yaml",
            "-n",
            "5",
        ]);
        let config = args.resolve_config().unwrap();
        assert_eq!(config.iterations, 5);
        assert_eq!(config.optimum_distance, 60.0);
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn non_positive_distance_flag_is_rejected() {
        let args = layout_args(&[
            "spring-embedder",
            "layout",
            "-i",
            "g.json",
            "-o",
            "o.json",
            "--distance",
            "0",
        ]);
        assert!(args.resolve_config().is_err());
    }
}
