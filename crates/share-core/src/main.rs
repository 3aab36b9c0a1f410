//! File-Sharing Network Simulator
//!
//! Builds a network from configuration, runs it for a number of iterations
//! and prints each agent's payoff history.

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use share_core::{
    build_network, get_setup_summary, ConfigError, JsonlSink, LogSink, SimConfig, SimError,
    SinkError, TracingSink,
};

/// Command line arguments for the simulation
#[derive(Parser, Debug)]
#[command(name = "share_sim")]
#[command(about = "Simulate producers and consumers in a social file-sharing network")]
struct Args {
    /// Network configuration file (TOML); falls back to network.toml, then built-in defaults
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of iterations to run
    #[arg(long)]
    iterations: Option<u64>,

    /// Documents returned by each top-k query
    #[arg(long)]
    k_results: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Write log entries as JSON Lines to this file instead of the terminal
    #[arg(long)]
    events: Option<PathBuf>,

    /// Write the final network snapshot as JSON to this file
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("simulation failed: {0}")]
    Sim(#[from] SimError),

    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error("could not write snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not serialize snapshot: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), RunError> {
    let mut config = match &args.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::load_or_default(),
    };
    if let Some(iterations) = args.iterations {
        config.simulation.iterations = iterations;
    }
    if let Some(k_results) = args.k_results {
        config.simulation.k_results = k_results;
    }
    if let Some(seed) = args.seed {
        config.simulation.seed = seed;
    }
    config.validate()?;

    println!("File-Sharing Network Simulator");
    println!("==============================");
    println!("Seed: {}", config.simulation.seed);
    println!("Iterations: {}", config.simulation.iterations);
    println!("Top-k results: {}", config.simulation.k_results);
    println!();

    let sink: Box<dyn LogSink> = match &args.events {
        Some(path) => Box::new(JsonlSink::create(path)?),
        None => Box::new(TracingSink),
    };
    let mut net = build_network(&config, sink)?;

    let summary = get_setup_summary(&net);
    println!(
        "Agents: {} ({} producers, {} consumers, {} unregistered)",
        summary.total_agents, summary.producers, summary.consumers, summary.unregistered
    );
    for (taste, count) in &summary.by_taste {
        println!("    {}: {}", taste, count);
    }
    println!();

    for _ in 0..config.simulation.iterations {
        let report = net.run_iteration()?;
        println!(
            "[Iteration {:>3}] acted: {}, skipped: {}, documents: {}, likes: {}, follows: {}",
            report.iteration,
            report.acted,
            report.skipped,
            report.documents_produced,
            report.likes,
            report.follows
        );
    }

    let snapshot = net.snapshot()?;
    println!();
    println!("{:<12} {:<10} {:<9} {:>7}  history", "agent", "taste", "role", "payoff");
    for agent in &snapshot.agents {
        let history: Vec<String> = agent.payoff_history.iter().map(u32::to_string).collect();
        println!(
            "{:<12} {:<10} {:<9} {:>7}  [{}]",
            agent.name,
            agent.taste.as_str(),
            format!("{:?}", agent.role).to_lowercase(),
            agent.payoff,
            history.join(", ")
        );
    }

    if let Some(top) = snapshot.top_agent() {
        println!();
        println!("Top agent: {} ({})", top.name, top.payoff);
    }

    if let Some(path) = &args.snapshot {
        fs::write(path, serde_json::to_string_pretty(&snapshot)?)?;
        println!();
        println!("Wrote {}", path.display());
    }

    println!();
    println!(
        "Simulation complete. Ran {} iterations; {} documents, {} likes.",
        net.iteration(),
        snapshot.documents.len(),
        snapshot.total_likes()
    );
    Ok(())
}
