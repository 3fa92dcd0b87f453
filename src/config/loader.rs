//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::AppConfig;

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Env var naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "MC_CONFIG";

/// Load and validate configuration from a TOML file.
///
/// # Arguments
/// * `path` - Path to the config file
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
  let path = Path::new(path);

  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config file: {}", path.display()))?;

  parse_file(path, &content)
}

/// Resolve the run configuration.
///
/// An explicit path (from `MC_CONFIG`) must exist and parse. Without one,
/// [`DEFAULT_CONFIG_PATH`] is used if present, and the built-in defaults
/// otherwise.
///
/// # Errors
/// Any failure to read or validate a file, except the default file
/// being absent.
pub fn resolve_config(explicit: Option<&str>) -> Result<AppConfig> {
  resolve_config_at(explicit, DEFAULT_CONFIG_PATH)
}

fn resolve_config_at(explicit: Option<&str>, default_path: &str) -> Result<AppConfig> {
  if let Some(path) = explicit {
    return load_config(path);
  }

  let path = Path::new(default_path);
  match std::fs::read_to_string(path) {
    Ok(content) => parse_file(path, &content),
    Err(e) if e.kind() == io::ErrorKind::NotFound => {
      let config = AppConfig::default();
      validate_config(&config)?;
      Ok(config)
    }
    Err(e) => Err(e)
      .with_context(|| format!("Failed to read config file: {}", path.display())),
  }
}

fn parse_file(path: &Path, content: &str) -> Result<AppConfig> {
  let config = parse_config(content)
    .with_context(|| format!("Invalid config file: {}", path.display()))?;

  info!(
    path = %path.display(),
    seed = ?config.run.seed,
    size = config.threshold.size,
    trials = config.rank_order.trials,
    "Configuration loaded successfully"
  );

  Ok(config)
}

/// Parse and validate configuration from TOML text.
///
/// # Errors
/// TOML syntax errors, unknown keys, or validation failures.
pub fn parse_config(content: &str) -> Result<AppConfig> {
  let config: AppConfig = toml::from_str(content).context("Failed to parse config TOML")?;
  validate_config(&config)?;
  Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - Finite distribution parameters, non-negative deviation
/// - Positive sample sizes, repeats, group size, and trial count
/// - A non-empty log level
fn validate_config(config: &AppConfig) -> Result<()> {
  let t = &config.threshold;
  anyhow::ensure!(
    t.mean.is_finite(),
    "threshold.mean must be finite, got {}",
    t.mean
  );
  anyhow::ensure!(
    t.std.is_finite() && t.std >= 0.0,
    "threshold.std must be finite and >= 0, got {}",
    t.std
  );
  anyhow::ensure!(t.size > 0, "threshold.size must be positive");
  anyhow::ensure!(t.repeats > 0, "threshold.repeats must be positive");

  let r = &config.rank_order;
  anyhow::ensure!(r.group_size >= 1, "rank_order.group_size must be at least 1");
  anyhow::ensure!(r.trials > 0, "rank_order.trials must be positive");

  anyhow::ensure!(
    !config.run.log_level.trim().is_empty(),
    "run.log_level must not be empty"
  );

  Ok(())
}
