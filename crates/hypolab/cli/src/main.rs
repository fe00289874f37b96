//! Hypolab CLI - validate hand-authored hypotheses and transformations
//!
//! Runs every iteration found under the hypotheses root, or a subset
//! selected by task and iteration number, and prints a summary.

use clap::{Parser, Subcommand};
use hypolab_cli::output::{self, OutputFormat};
use hypolab_cli::{CliResult, HarnessConfig, Orchestrator, SweepFilter, TerminalSink};
use hypolab_library::builtin_registry;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Hypolab CLI application
#[derive(Parser)]
#[command(name = "hypolab")]
#[command(about = "Hypolab - hypothesis and transformation validation for grid tasks", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "HYPOLAB_CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Only run this task
    #[arg(long)]
    task_id: Option<String>,

    /// Only run this iteration number
    #[arg(long)]
    iteration: Option<u32>,

    /// Override the hypotheses root
    #[arg(long)]
    hypotheses_root: Option<PathBuf>,

    /// Override the corpus directories (repeatable)
    #[arg(long = "corpus-dir")]
    corpus_dirs: Vec<PathBuf>,

    /// Do not render transformation comparisons
    #[arg(long)]
    no_render: bool,

    /// Output format (table, json)
    #[arg(short, long, value_enum, default_value = "table")]
    output: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
enum Commands {
    /// Run the sweep (default)
    Run,

    /// List registered hypotheses and transformations
    Candidates,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let mut config = HarnessConfig::load(cli.config.as_deref())?;
    if let Some(root) = cli.hypotheses_root {
        config.hypotheses_root = root;
    }
    if !cli.corpus_dirs.is_empty() {
        config.corpus_dirs = cli.corpus_dirs;
    }
    if cli.no_render || cli.output == OutputFormat::Json {
        config.render = false;
    }

    init_tracing(&config, cli.verbose)?;

    let registry = Arc::new(builtin_registry());
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Candidates => {
            println!("{}", output::format_candidates(&registry, cli.output)?);
        }
        Commands::Run => {
            let filter = SweepFilter {
                task_id: cli.task_id,
                iteration: cli.iteration,
            };
            let mut orchestrator = Orchestrator::new(config, registry, TerminalSink::stdout());
            let report = orchestrator.run(&filter)?;
            println!("{}", output::format_report(&report, cli.output)?);
        }
    }
    Ok(())
}

fn init_tracing(config: &HarnessConfig, verbose: bool) -> CliResult<()> {
    let level = if verbose {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| level.into());

    let log_file = config.logging.open_file()?;

    if config.logging.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .with(log_file.map(|file| {
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(Mutex::new(file))
            }))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .without_time()
                    .with_writer(std::io::stderr),
            )
            .with(log_file.map(|file| {
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
            }))
            .init();
    }
    Ok(())
}
