//! Random simulation driver: opens uniformly random sites until the grid
//! percolates, the site limit is reached, or the cancellation flag is
//! raised. The driver never sleeps; pacing belongs to the caller.
use std::sync::atomic::{AtomicBool, Ordering};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::grid::{GridError, Percolation};
use crate::sim::snapshot::GridSnapshot;

#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Grid dimension n.
    pub size: usize,
    /// Fixed RNG seed; None draws entropy from the OS.
    pub seed: Option<u64>,
    /// Stop after this many sites even without percolation. None means run
    /// until the grid percolates, which a fully opened grid always does.
    pub site_limit: Option<usize>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            size: 20,
            seed: None,
            site_limit: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    pub size: usize,
    pub opened: usize,
    pub percolated: bool,
    pub cancelled: bool,
}

impl RunSummary {
    /// Fraction of sites open when the run stopped.
    pub fn vacancy(&self) -> f64 {
        self.opened as f64 / (self.size * self.size) as f64
    }
}

/// Runs one simulation, handing a fresh snapshot to `observe` after every
/// opened site.
pub fn run_until_percolation<F>(
    config: &RunConfig,
    cancel: &AtomicBool,
    mut observe: F,
) -> Result<RunSummary, GridError>
where
    F: FnMut(&GridSnapshot),
{
    run_inner(config, cancel, Some(&mut observe))
}

/// Runs one simulation without capturing snapshots; used for bulk trials
/// where only the summary matters.
pub fn run_silent(config: &RunConfig, cancel: &AtomicBool) -> Result<RunSummary, GridError> {
    run_inner(config, cancel, None)
}

fn run_inner(
    config: &RunConfig,
    cancel: &AtomicBool,
    mut observe: Option<&mut dyn FnMut(&GridSnapshot)>,
) -> Result<RunSummary, GridError> {
    let mut model = Percolation::new(config.size)?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut cancelled = false;
    while !model.percolates() {
        if cancel.load(Ordering::Relaxed) {
            cancelled = true;
            break;
        }
        if let Some(limit) = config.site_limit {
            if model.open_sites() >= limit {
                break;
            }
        }

        let row = rng.random_range(1..=config.size);
        let col = rng.random_range(1..=config.size);
        if model
            .is_open(row, col)
            .expect("picked coordinates are in range")
        {
            continue;
        }
        model.open(row, col).expect("picked coordinates are in range");
        debug!("opened ({row}, {col}), {} sites open", model.open_sites());

        if let Some(observe) = observe.as_mut() {
            let step = model.open_sites();
            let snapshot = GridSnapshot::capture(&mut model, step);
            observe(&snapshot);
        }
    }

    let summary = RunSummary {
        size: config.size,
        opened: model.open_sites(),
        percolated: model.percolates(),
        cancelled,
    };
    info!(
        "run finished: {} of {} sites open, percolated={}, cancelled={}",
        summary.opened,
        summary.size * summary.size,
        summary.percolated,
        summary.cancelled
    );
    Ok(summary)
}
