//! tally-validate - run the analyzers over a recorded encounter.
//!
//! Usage: tally-validate --events <pull.jsonl> --combatant <player.json> [--config <tally.toml>] [--json]
//!
//! Prints one block per statistic, or a JSON array with `--json`.

use std::path::PathBuf;

use clap::Parser;
use tally_core::{build_host, load_combatant, load_config, read_event_log};
use tally_types::RenderOptions;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Run combat log analyzers over one encounter")]
struct Cli {
    /// JSON-lines event log for one encounter
    #[arg(short, long)]
    events: PathBuf,

    /// JSON snapshot of the analyzed player's build
    #[arg(short, long)]
    combatant: PathBuf,

    /// TOML analyzer config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print statistics as JSON
    #[arg(long)]
    json: bool,

    /// Force European number formatting
    #[arg(long)]
    european: bool,
}

/// Initialize logging, writing to TALLY_LOG_PATH if set, otherwise stderr.
fn init_logging() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::WARN.into())
        .from_env_lossy();

    if let Ok(path) = std::env::var("TALLY_LOG_PATH")
        && let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
    {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(file)
            .init();
        return;
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<(), String> {
    let mut config = load_config(cli.config.as_deref()).map_err(|e| e.to_string())?;
    if cli.european {
        config.european_number_format = true;
    }
    let combatant = load_combatant(&cli.combatant).map_err(|e| e.to_string())?;
    let events = read_event_log(&cli.events).map_err(|e| e.to_string())?;

    let mut host = build_host(&combatant, &config);
    if host.module_names().is_empty() {
        tracing::warn!(player = %combatant.name, "No analyzer applies to this combatant");
    }
    let stats = host.run(&events);
    let statistics = host.statistics();

    if cli.json {
        let out = serde_json::to_string_pretty(&statistics).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let opts = RenderOptions {
        european: config.european_number_format,
        fight_ms: stats.duration_ms,
    };
    println!(
        "{} events, {:.1}s, {} analyzer(s)\n",
        stats.events,
        stats.duration_ms as f64 / 1000.0,
        statistics.len()
    );
    for statistic in &statistics {
        println!("{}", statistic.render_text(opts));
    }
    Ok(())
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        tracing::error!(error = %err, "Analysis failed");
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
