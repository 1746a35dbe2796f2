//! Animated convergence scheduler
//!
//! Reveals a precomputed target grid to a [`CellSink`] one footprint at a
//! time, so an observer can follow which neighborhoods the operator changed.
//!
//! # States
//!
//! - **Idle**: no animation; [`AnimationScheduler::tick`] does nothing
//! - **Running**: each tick visits the next cursor position(s) in row-major
//!   order. Every cell of the footprint window centered on the cursor whose
//!   input value differs from the target gets `begin_transition(target)`.
//! - Once the cursor has passed the last row, the next tick forces every cell
//!   to the target, renders, and returns to Idle.
//!
//! Calling [`AnimationScheduler::start`] while Running discards the current
//! animation outright and restarts from `(0, 0)` with the new grids.

use crate::config::SchedulerConfig;
use crate::sink::CellSink;
use crate::{AnimError, AnimResult};
use morphview_core::{BooleanGrid, Window};
use tracing::{debug, info, trace};

/// Result of one [`AnimationScheduler::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No animation was running
    Idle,
    /// Cursor positions were revealed; `(row, col)` is the last one visited
    Stepped { row: usize, col: usize },
    /// Every cell was forced to the target and the scheduler is now Idle
    Converged,
}

/// Transient state of the running animation
#[derive(Debug, Clone)]
struct AnimationState {
    input: BooleanGrid,
    target: BooleanGrid,
    footprint: (usize, usize),
    cursor: (usize, usize),
}

impl AnimationState {
    fn rows(&self) -> usize {
        self.target.rows()
    }

    fn cols(&self) -> usize {
        self.target.cols()
    }

    fn scan_done(&self) -> bool {
        self.cursor.0 >= self.rows()
    }

    fn window(&self) -> Window {
        let (h, w) = self.footprint;
        Window::centered(self.cursor, self.footprint, (h / 2, w / 2), self.target.shape())
    }

    /// Issue transitions for changed cells in the window at the cursor.
    fn reveal<S: CellSink + ?Sized>(&self, sink: &mut S) -> usize {
        let mut issued = 0;
        for (r, c) in self.window().cells() {
            let target = self.target.get_unchecked(r, c);
            if self.input.get_unchecked(r, c) != target {
                sink.begin_transition(r, c, target);
                issued += 1;
            }
        }
        issued
    }

    fn advance(&mut self) {
        self.cursor.1 += 1;
        if self.cursor.1 == self.cols() {
            self.cursor = (self.cursor.0 + 1, 0);
        }
    }

    fn finalize<S: CellSink + ?Sized>(&self, sink: &mut S) {
        for (r, c, state) in self.target.cells() {
            sink.force_state(r, c, state);
        }
        sink.render_frame();
    }
}

/// Timer-driven reveal of a target grid
///
/// The scheduler holds at most one animation. It never reads a clock; the
/// host calls [`tick`](Self::tick) from its own timer.
#[derive(Debug, Clone, Default)]
pub struct AnimationScheduler {
    config: SchedulerConfig,
    state: Option<AnimationState>,
    started: u64,
}

impl AnimationScheduler {
    /// Create an idle scheduler
    pub fn new(config: SchedulerConfig) -> Self {
        Self {
            config,
            state: None,
            started: 0,
        }
    }

    /// Configuration in use
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Begin animating from `input` to `target`, superseding any running
    /// animation.
    ///
    /// `footprint` is the `(height, width)` of the window revealed at each
    /// cursor position; its origin follows the structuring element rule
    /// `(height / 2, width / 2)`.
    ///
    /// # Errors
    ///
    /// Returns [`AnimError::ShapeMismatch`] if the grids differ in shape or
    /// the footprint has a zero dimension. The current animation is left
    /// untouched in that case.
    pub fn start(
        &mut self,
        input: BooleanGrid,
        target: BooleanGrid,
        footprint: (usize, usize),
    ) -> AnimResult<()> {
        if !input.same_shape(&target) {
            return Err(AnimError::ShapeMismatch(format!(
                "input {}x{} vs target {}x{}",
                input.rows(),
                input.cols(),
                target.rows(),
                target.cols()
            )));
        }
        if footprint.0 == 0 || footprint.1 == 0 {
            return Err(AnimError::ShapeMismatch(format!(
                "footprint must be at least 1x1, got {}x{}",
                footprint.0, footprint.1
            )));
        }

        if let Some(old) = self.state.take() {
            debug!(
                animation = self.started,
                row = old.cursor.0,
                col = old.cursor.1,
                "superseding running animation"
            );
        }

        self.started += 1;
        info!(
            animation = self.started,
            rows = target.rows(),
            cols = target.cols(),
            footprint_h = footprint.0,
            footprint_w = footprint.1,
            "animation started"
        );
        self.state = Some(AnimationState {
            input,
            target,
            footprint,
            cursor: (0, 0),
        });
        Ok(())
    }

    /// Perform one unit of work.
    pub fn tick<S: CellSink + ?Sized>(&mut self, sink: &mut S) -> TickOutcome {
        let Some(state) = self.state.as_mut() else {
            return TickOutcome::Idle;
        };

        if state.scan_done() {
            state.finalize(sink);
            self.state = None;
            info!(animation = self.started, "animation converged");
            return TickOutcome::Converged;
        }

        let mut last = state.cursor;
        for _ in 0..self.config.cells_per_tick.max(1) {
            if state.scan_done() {
                break;
            }
            last = state.cursor;
            let issued = state.reveal(sink);
            trace!(row = last.0, col = last.1, issued, "revealed window");
            state.advance();
        }
        sink.render_frame();

        TickOutcome::Stepped {
            row: last.0,
            col: last.1,
        }
    }

    /// Tick until Idle and return the number of ticks taken.
    pub fn run_to_completion<S: CellSink + ?Sized>(&mut self, sink: &mut S) -> usize {
        let mut ticks = 0;
        while self.tick(sink) != TickOutcome::Idle {
            ticks += 1;
        }
        ticks
    }

    /// True while an animation is in progress
    pub fn is_running(&self) -> bool {
        self.state.is_some()
    }

    /// Next cursor position of the running animation
    pub fn cursor(&self) -> Option<(usize, usize)> {
        self.state.as_ref().map(|s| s.cursor)
    }

    /// Target grid of the running animation
    pub fn target(&self) -> Option<&BooleanGrid> {
        self.state.as_ref().map(|s| &s.target)
    }

    /// Number of animations started so far
    pub fn animations_started(&self) -> u64 {
        self.started
    }
}
