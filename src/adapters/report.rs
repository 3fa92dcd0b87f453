//! Result Report - Text or JSON Lines on a Writer
//!
//! Text mode prints exactly what the experiments are expected to
//! print: one probability for the threshold experiment, then three
//! space-separated probabilities for the rank-order experiment.
//! JSON mode prints one object per experiment, with the closed-form
//! references alongside the estimates.

use std::io::Write;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::domain::{RankOrderEstimate, ThresholdEstimate};

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Bare numbers, one line per experiment.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

#[derive(Serialize)]
struct ThresholdRecord<'a> {
    experiment: &'static str,
    #[serde(flatten)]
    estimate: &'a ThresholdEstimate,
    analytic: f64,
}

#[derive(Serialize)]
struct RankOrderRecord<'a> {
    experiment: &'static str,
    #[serde(flatten)]
    counts: &'a RankOrderEstimate,
    youngest_probability: f64,
    oldest_probability: f64,
    at_least_median_probability: f64,
    analytic: [f64; 3],
}

/// Writes experiment results in the configured format.
pub struct Report<W: Write> {
    /// Destination, usually locked stdout.
    out: W,
    /// Rendering mode.
    format: OutputFormat,
}

impl<W: Write> Report<W> {
    /// Create a report writing to `out`.
    pub const fn new(out: W, format: OutputFormat) -> Self {
        Self { out, format }
    }

    /// Emit the threshold experiment result.
    pub fn write_threshold(&mut self, estimate: &ThresholdEstimate) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", estimate.probability)
                .context("Failed to write threshold estimate")?,
            OutputFormat::Json => {
                let record = ThresholdRecord {
                    experiment: "threshold",
                    estimate,
                    analytic: estimate.analytic(),
                };
                self.write_json(&record)?;
            }
        }
        self.out.flush().context("Failed to flush report")
    }

    /// Emit the rank-order experiment result.
    pub fn write_rank_order(&mut self, estimate: &RankOrderEstimate) -> Result<()> {
        let youngest = estimate.youngest_probability();
        let oldest = estimate.oldest_probability();
        let at_least_median = estimate.at_least_median_probability();

        match self.format {
            OutputFormat::Text => writeln!(self.out, "{youngest} {oldest} {at_least_median}")
                .context("Failed to write rank-order estimate")?,
            OutputFormat::Json => {
                let (a, b, c) = estimate.analytic();
                let record = RankOrderRecord {
                    experiment: "rank_order",
                    counts: estimate,
                    youngest_probability: youngest,
                    oldest_probability: oldest,
                    at_least_median_probability: at_least_median,
                    analytic: [a, b, c],
                };
                self.write_json(&record)?;
            }
        }
        self.out.flush().context("Failed to flush report")
    }

    fn write_json<T: Serialize>(&mut self, record: &T) -> Result<()> {
        let mut line = serde_json::to_string(record).context("Failed to serialize report")?;
        line.push('\n');
        self.out
            .write_all(line.as_bytes())
            .context("Failed to write report")
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threshold() -> ThresholdEstimate {
        ThresholdEstimate::from_fractions(2.0, 0.8, 4, vec![1.0, 0.75])
    }

    fn rank_order() -> RankOrderEstimate {
        RankOrderEstimate {
            group_size: 18,
            trials: 4,
            youngest: 1,
            oldest: 0,
            at_least_median: 2,
        }
    }

    #[test]
    fn test_text_output() {
        let mut report = Report::new(Vec::new(), OutputFormat::Text);
        report.write_threshold(&threshold()).unwrap();
        report.write_rank_order(&rank_order()).unwrap();
        let text = String::from_utf8(report.into_inner()).unwrap();
        assert_eq!(text, "0.875\n0.25 0 0.5\n");
    }

    #[test]
    fn test_json_output() {
        let mut report = Report::new(Vec::new(), OutputFormat::Json);
        report.write_threshold(&threshold()).unwrap();
        report.write_rank_order(&rank_order()).unwrap();
        let text = String::from_utf8(report.into_inner()).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["experiment"], "threshold");
        assert_eq!(lines[0]["probability"], 0.875);
        assert_eq!(lines[0]["trial_fractions"].as_array().unwrap().len(), 2);
        assert_eq!(lines[1]["experiment"], "rank_order");
        assert_eq!(lines[1]["youngest"], 1);
        assert_eq!(lines[1]["at_least_median_probability"], 0.5);
        assert_eq!(lines[1]["analytic"][2], 0.5);
    }

    #[test]
    fn test_format_from_toml_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            format: OutputFormat,
        }
        let w: Wrapper = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(w.format, OutputFormat::Json);
    }
}
