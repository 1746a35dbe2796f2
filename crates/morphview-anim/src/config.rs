//! Configuration for the scheduler and the workbench
//!
//! Both structs carry sensible defaults. [`SchedulerConfig::from_env`]
//! layers environment overrides on top of the defaults:
//!
//! - `MORPHVIEW_TICK_MS`: tick interval in milliseconds
//! - `MORPHVIEW_CELLS_PER_TICK`: cursor positions processed per tick
//!
//! Unparsable values are ignored with a warning.

use morphview_pattern::DEFAULT_DENSITY;
use std::time::Duration;
use tracing::warn;

/// Environment variable for the tick interval
pub const TICK_MS_ENV: &str = "MORPHVIEW_TICK_MS";

/// Environment variable for the cursor positions per tick
pub const CELLS_PER_TICK_ENV: &str = "MORPHVIEW_CELLS_PER_TICK";

/// Animation timing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulerConfig {
    /// Wall-clock time between ticks
    pub tick_interval: Duration,
    /// Cursor positions revealed per tick (at least 1)
    pub cells_per_tick: usize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(60),
            cells_per_tick: 1,
        }
    }
}

impl SchedulerConfig {
    /// Defaults with environment overrides applied
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides read through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(TICK_MS_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(ms) => config.tick_interval = Duration::from_millis(ms),
                Err(_) => warn!(key = TICK_MS_ENV, value = %raw, "ignoring invalid override"),
            }
        }

        if let Some(raw) = lookup(CELLS_PER_TICK_ENV) {
            match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => config.cells_per_tick = n,
                _ => warn!(key = CELLS_PER_TICK_ENV, value = %raw, "ignoring invalid override"),
            }
        }

        config
    }

    /// One full row per tick, so an animation takes `rows` ticks plus the
    /// finalize tick.
    pub fn row_per_tick(cols: usize) -> Self {
        Self {
            cells_per_tick: cols.max(1),
            ..Self::default()
        }
    }
}

/// Shapes and seeding for a workbench
#[derive(Debug, Clone, PartialEq)]
pub struct WorkbenchConfig {
    /// Input grid rows
    pub grid_rows: usize,
    /// Input grid columns
    pub grid_cols: usize,
    /// Structuring element rows
    pub element_rows: usize,
    /// Structuring element columns
    pub element_cols: usize,
    /// Probability that a randomized cell is set
    pub random_density: f64,
    /// Seed for the randomizer; `None` draws one at startup
    pub seed: Option<u64>,
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            grid_rows: 10,
            grid_cols: 10,
            element_rows: 3,
            element_cols: 3,
            random_density: DEFAULT_DENSITY,
            seed: None,
        }
    }
}
