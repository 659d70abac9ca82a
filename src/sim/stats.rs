//! Monte Carlo estimation of the percolation threshold: the fraction of
//! open sites at which a random grid first percolates, averaged over
//! independent trials.
use std::fmt;
use std::io::Write;
use std::sync::atomic::AtomicBool;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::GridError;
use crate::sim::driver::{RunConfig, run_silent};

#[derive(Debug, Error)]
pub enum StatsError {
    #[error("at least one trial is required")]
    NoTrials,
    #[error(transparent)]
    Grid(#[from] GridError),
}

#[derive(Debug, Clone)]
pub struct StatsConfig {
    pub size: usize,
    pub trials: usize,
    /// Base seed; each trial derives its own seed from it, so reports are
    /// reproducible regardless of how rayon schedules the trials.
    pub seed: Option<u64>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            size: 20,
            trials: 50,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdReport {
    pub size: usize,
    pub trials: usize,
    pub mean: f64,
    pub stddev: f64,
    pub confidence_low: f64,
    pub confidence_high: f64,
}

impl fmt::Display for ThresholdReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "percolation threshold on a {}x{} grid over {} trials",
            self.size, self.size, self.trials
        )?;
        writeln!(f, "mean                    = {:.6}", self.mean)?;
        writeln!(f, "stddev                  = {:.6}", self.stddev)?;
        write!(
            f,
            "95% confidence interval = [{:.6}, {:.6}]",
            self.confidence_low, self.confidence_high
        )
    }
}

impl ThresholdReport {
    pub fn save_to_file(&self, file_path: &str) -> std::io::Result<()> {
        let mut file = std::fs::File::create(file_path)?;
        writeln!(file, "{}", self)
    }
}

/// Runs `trials` independent simulations to percolation and reports the
/// sample mean, standard deviation, and 95% confidence interval of the
/// vacancy fraction at first percolation.
pub fn estimate_threshold(config: &StatsConfig) -> Result<ThresholdReport, StatsError> {
    if config.trials == 0 {
        return Err(StatsError::NoTrials);
    }

    // Never raised: bulk trials run to completion, a full grid always
    // percolates.
    let cancel = AtomicBool::new(false);

    let thresholds = (0..config.trials)
        .into_par_iter()
        .map(|trial| {
            let run = RunConfig {
                size: config.size,
                seed: config.seed.map(|base| trial_seed(base, trial)),
                site_limit: None,
            };
            run_silent(&run, &cancel).map(|summary| summary.vacancy())
        })
        .collect::<Result<Vec<f64>, GridError>>()?;

    let trials = thresholds.len() as f64;
    let mean = thresholds.iter().sum::<f64>() / trials;
    let stddev = if thresholds.len() > 1 {
        let variance = thresholds
            .iter()
            .map(|value| (value - mean) * (value - mean))
            .sum::<f64>()
            / (trials - 1.0);
        variance.sqrt()
    } else {
        0.0
    };
    let half_width = 1.96 * stddev / trials.sqrt();

    Ok(ThresholdReport {
        size: config.size,
        trials: config.trials,
        mean,
        stddev,
        confidence_low: mean - half_width,
        confidence_high: mean + half_width,
    })
}

/// Splitmix64 step over the base seed and trial index.
fn trial_seed(base: u64, trial: usize) -> u64 {
    let mut z = base.wrapping_add((trial as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_trials_is_rejected() {
        let config = StatsConfig {
            trials: 0,
            ..StatsConfig::default()
        };
        assert!(matches!(
            estimate_threshold(&config),
            Err(StatsError::NoTrials)
        ));
    }

    #[test]
    fn invalid_grid_size_propagates() {
        let config = StatsConfig {
            size: 0,
            trials: 3,
            seed: Some(1),
        };
        assert!(matches!(
            estimate_threshold(&config),
            Err(StatsError::Grid(GridError::InvalidSize(0)))
        ));
    }

    #[test]
    fn fixed_seed_gives_reproducible_report() {
        let config = StatsConfig {
            size: 6,
            trials: 8,
            seed: Some(99),
        };
        let first = estimate_threshold(&config).unwrap();
        let second = estimate_threshold(&config).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn threshold_stays_in_sane_bounds() {
        let config = StatsConfig {
            size: 5,
            trials: 12,
            seed: Some(4),
        };
        let report = estimate_threshold(&config).unwrap();
        assert!(report.mean > 0.0);
        assert!(report.mean < 1.0);
        assert!(report.confidence_low <= report.mean);
        assert!(report.mean <= report.confidence_high);
    }

    #[test]
    fn single_trial_has_zero_spread() {
        let config = StatsConfig {
            size: 4,
            trials: 1,
            seed: Some(17),
        };
        let report = estimate_threshold(&config).unwrap();
        assert_eq!(report.stddev, 0.0);
        assert_eq!(report.confidence_low, report.mean);
        assert_eq!(report.confidence_high, report.mean);
    }
}
