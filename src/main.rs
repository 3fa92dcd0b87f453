//! Monte Carlo Probability Estimators — Entry Point
//!
//! Runs both experiments once and prints their results to stdout.
//! Logs go to stderr so stdout carries only the estimates.
//!
//! Wiring sequence:
//! 1. Load config (`MC_CONFIG` must exist; else `config.toml`, defaults if absent)
//! 2. Init tracing (JSON structured logging on stderr)
//! 3. Build the seeded sampler
//! 4. Run the polynomial threshold experiment, print its estimate
//! 5. Run the rank-order experiment, print its three estimates

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

use std::io;

use anyhow::{Context, Result};
use tracing::info;

use monte_carlo_probability::adapters::{Report, SeededSampler};
use monte_carlo_probability::config::loader::{
    resolve_config, CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH,
};
use monte_carlo_probability::usecases::{
    RankOrderEstimator, RankOrderParams, ThresholdEstimator, ThresholdParams,
};

fn main() -> Result<()> {
    // ── 1. Load configuration ───────────────────────────────
    let explicit_path = std::env::var(CONFIG_PATH_ENV).ok();
    let config =
        resolve_config(explicit_path.as_deref()).context("Failed to load configuration")?;
    let config_path = explicit_path.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);

    // ── 2. Initialize structured JSON logging ───────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.run.log_level)),
        )
        .with_writer(io::stderr)
        .json()
        .init();

    info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path,
        format = ?config.output.format,
        "Starting Monte Carlo probability estimators"
    );

    // ── 3. Seeded sampler shared by both experiments ────────
    let mut sampler = SeededSampler::new(config.run.seed);
    info!(seed = sampler.seed(), "Sampler ready");

    let stdout = io::stdout();
    let mut report = Report::new(stdout.lock(), config.output.format);

    // ── 4. Polynomial threshold experiment ──────────────────
    let threshold = ThresholdEstimator::new(ThresholdParams::from(&config.threshold))
        .run(&mut sampler)
        .context("Polynomial threshold experiment failed")?;
    report.write_threshold(&threshold)?;

    // ── 5. Rank-order experiment ────────────────────────────
    let rank_order = RankOrderEstimator::new(RankOrderParams::from(&config.rank_order))
        .run(&mut sampler)
        .context("Rank-order experiment failed")?;
    report.write_rank_order(&rank_order)?;

    info!("All experiments complete");
    Ok(())
}
