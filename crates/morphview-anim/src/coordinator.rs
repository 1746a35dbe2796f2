//! Request coordinator
//!
//! Turns "something changed" events into a single recompute pipeline:
//!
//! 1. Apply the change to a copy of the [`Workbench`]
//! 2. Run the operator engine on the copy
//! 3. Commit the copy and restart the animation with the new target
//!
//! A change whose recompute fails is dropped whole, so neither the workbench
//! nor the running animation is disturbed. Diffing is left entirely to the
//! scheduler.

use crate::config::{SchedulerConfig, WorkbenchConfig};
use crate::scheduler::{AnimationScheduler, TickOutcome};
use crate::sink::CellSink;
use crate::ticker::Ticker;
use crate::AnimResult;
use morphview_core::BooleanGrid;
use morphview_morph::{MorphResult, OperationKind, StructuringElement, apply};
use morphview_pattern::{random_grid, render_glyph};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;
use tracing::debug;

/// Current input grid, structuring element, and operation
///
/// Both grids keep the shape they were created with.
#[derive(Debug, Clone, PartialEq)]
pub struct Workbench {
    input: BooleanGrid,
    element: StructuringElement,
    operation: OperationKind,
}

impl Workbench {
    /// Clear input grid and all-set element, shaped by `config`
    pub fn new(config: &WorkbenchConfig) -> AnimResult<Self> {
        Ok(Self {
            input: BooleanGrid::new(config.grid_rows, config.grid_cols)?,
            element: StructuringElement::new(config.element_rows, config.element_cols)?,
            operation: OperationKind::default(),
        })
    }

    /// Current input grid
    pub fn input_grid(&self) -> &BooleanGrid {
        &self.input
    }

    /// Current structuring element
    pub fn structuring_element(&self) -> &StructuringElement {
        &self.element
    }

    /// Current operation
    pub fn operation(&self) -> OperationKind {
        self.operation
    }

    /// Run the selected operation on the current input
    pub fn compute_target(&self) -> MorphResult<BooleanGrid> {
        apply(&self.input, &self.element, self.operation)
    }
}

/// Event entry point tying the workbench, engine, and scheduler together
#[derive(Debug)]
pub struct RequestCoordinator {
    workbench: Workbench,
    scheduler: AnimationScheduler,
    ticker: Ticker,
    rng: StdRng,
    density: f64,
}

impl RequestCoordinator {
    /// Create a coordinator with an idle scheduler.
    ///
    /// No animation runs until the first event.
    pub fn new(workbench: WorkbenchConfig, scheduler: SchedulerConfig) -> AnimResult<Self> {
        let seed = workbench.seed.unwrap_or_else(rand::random);
        debug!(seed, "randomizer seeded");

        Ok(Self {
            workbench: Workbench::new(&workbench)?,
            ticker: Ticker::new(scheduler.tick_interval),
            scheduler: AnimationScheduler::new(scheduler),
            rng: StdRng::seed_from_u64(seed),
            density: workbench.random_density,
        })
    }

    /// Current workbench state
    pub fn workbench(&self) -> &Workbench {
        &self.workbench
    }

    /// Scheduler state
    pub fn scheduler(&self) -> &AnimationScheduler {
        &self.scheduler
    }

    /// When the host should next call [`pump`](Self::pump); `None` while idle
    pub fn next_deadline(&self) -> Option<Instant> {
        self.ticker.deadline()
    }

    /// Flip an input cell and recompute
    pub fn toggle_input_cell(&mut self, row: usize, col: usize) -> AnimResult<()> {
        self.update(|wb| {
            wb.input.toggle(row, col)?;
            Ok(())
        })
    }

    /// Flip a structuring element cell and recompute
    pub fn toggle_structure_cell(&mut self, row: usize, col: usize) -> AnimResult<()> {
        self.update(|wb| {
            wb.element.toggle(row, col)?;
            Ok(())
        })
    }

    /// Select an operation and recompute
    pub fn set_operation(&mut self, op: OperationKind) -> AnimResult<()> {
        self.update(|wb| {
            wb.operation = op;
            Ok(())
        })
    }

    /// Select an operation by name and recompute.
    ///
    /// Unknown names fail with `InvalidOperation` and change nothing.
    pub fn set_operation_named(&mut self, name: &str) -> AnimResult<()> {
        let op: OperationKind = name.parse()?;
        self.set_operation(op)
    }

    /// Replace the input grid and recompute.
    ///
    /// A grid whose shape differs from the current input is ignored and
    /// `Ok(false)` is returned.
    pub fn seed_input_grid(&mut self, grid: BooleanGrid) -> AnimResult<bool> {
        if !grid.same_shape(&self.workbench.input) {
            debug!(
                rows = grid.rows(),
                cols = grid.cols(),
                "ignoring seed with mismatched shape"
            );
            return Ok(false);
        }
        self.update(|wb| {
            wb.input = grid;
            Ok(())
        })?;
        Ok(true)
    }

    /// Seed the input with the glyph for `ch` and recompute
    pub fn load_glyph(&mut self, ch: char) -> AnimResult<bool> {
        let (rows, cols) = self.workbench.input.shape();
        let grid = render_glyph(ch, rows, cols)?;
        self.seed_input_grid(grid)
    }

    /// Seed the input with a random fill and recompute
    pub fn randomize(&mut self) -> AnimResult<bool> {
        let (rows, cols) = self.workbench.input.shape();
        let grid = random_grid(rows, cols, self.density, &mut self.rng)?;
        self.seed_input_grid(grid)
    }

    /// Recompute without changing anything
    pub fn refresh(&mut self) -> AnimResult<()> {
        self.update(|_| Ok(()))
    }

    /// Run every tick due at `now` and return the number performed.
    ///
    /// Disarms the ticker once the animation converges.
    pub fn pump<S: CellSink + ?Sized>(&mut self, now: Instant, sink: &mut S) -> u32 {
        let due = self.ticker.poll(now);
        let mut ran = 0;
        for _ in 0..due {
            match self.scheduler.tick(sink) {
                TickOutcome::Stepped { .. } => ran += 1,
                TickOutcome::Converged => {
                    ran += 1;
                    self.ticker.disarm();
                    break;
                }
                TickOutcome::Idle => {
                    self.ticker.disarm();
                    break;
                }
            }
        }
        ran
    }

    /// Skip the animation and drive the sink straight to convergence
    pub fn finish<S: CellSink + ?Sized>(&mut self, sink: &mut S) -> usize {
        let ticks = self.scheduler.run_to_completion(sink);
        self.ticker.disarm();
        ticks
    }

    fn update(
        &mut self,
        change: impl FnOnce(&mut Workbench) -> AnimResult<()>,
    ) -> AnimResult<()> {
        let mut next = self.workbench.clone();
        change(&mut next)?;
        let target = next.compute_target()?;

        debug!(
            operation = %next.operation,
            set_before = next.input.count_true(),
            set_after = target.count_true(),
            "recomputed target"
        );

        self.scheduler
            .start(next.input.clone(), target, next.element.shape())?;
        self.workbench = next;
        self.ticker.arm(Instant::now());
        Ok(())
    }
}
