//! mash-play: play one MASH game from a JSON request.
//!
//! The request is `{"categories": [...], "magic_number": n}`. If
//! `magic_number` is absent one is drawn, reproducibly when `--seed` is
//! given. The fortune is printed to stdout as JSON; logs go to stderr
//! (`RUST_LOG`, `MASH_LOG_JSON`).

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Read;
use tracing::info;

use mash::{EliminationEngine, EngineConfig, GameRequest, MashRng, ThreadMagicNumbers};

#[derive(Debug, Parser)]
#[command(name = "mash-play")]
#[command(about = "Play one MASH game from a JSON request")]
struct Cli {
    /// Seed for drawing the magic number when the request has none
    #[arg(long)]
    seed: Option<u64>,
    /// Reproduce the historic elimination rules exactly
    #[arg(long)]
    legacy: bool,
    /// Include the per-round elimination trace in the output
    #[arg(long)]
    trace: bool,
    /// Request file, or `-` for stdin
    path: String,
}

impl Cli {
    fn engine_config(&self) -> EngineConfig {
        if self.legacy {
            EngineConfig::legacy()
        } else {
            EngineConfig::default()
        }
    }
}

fn read_request(path: &str) -> Result<serde_json::Value> {
    let mut text = String::new();
    if path == "-" {
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read request from stdin")?;
    } else {
        text = std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path))?;
    }
    serde_json::from_str(&text).with_context(|| format!("{} is not valid JSON", path))
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let body = read_request(&cli.path)?;
    let request = match cli.seed {
        Some(seed) => GameRequest::from_json_or_draw(&body, &mut MashRng::new(seed)),
        None => GameRequest::from_json_or_draw(&body, &mut ThreadMagicNumbers),
    }?;

    let engine = EliminationEngine::new(cli.engine_config());

    info!(
        magic_number = request.magic_number.get(),
        categories = request.categories.len(),
        legacy = cli.legacy,
        "Playing"
    );

    let output = if cli.trace {
        let (fortune, trace) = request.play_traced(&engine);
        serde_json::json!({
            "magic_number": request.magic_number,
            "fortune": fortune,
            "trace": trace,
        })
    } else {
        serde_json::json!({
            "magic_number": request.magic_number,
            "fortune": request.play(&engine),
        })
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Initialise the `tracing` subscriber on stderr.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if std::env::var("MASH_LOG_JSON").is_ok() {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
