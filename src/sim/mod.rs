//! Simulation collaborators around the connectivity core: the random
//! driver loop, snapshot messages for renderers, and Monte Carlo
//! threshold statistics. Everything here goes through the core's public
//! surface only.

pub mod driver;
pub mod snapshot;
pub mod stats;

pub use driver::{RunConfig, RunSummary, run_silent, run_until_percolation};
pub use snapshot::{CellState, GridSnapshot};
pub use stats::{StatsConfig, StatsError, ThresholdReport, estimate_threshold};
