//! Rendering sink contract
//!
//! The scheduler never draws anything itself. It drives a [`CellSink`] with
//! per-cell commands and asks it to present a frame after each tick.

/// Receiver of per-cell display commands.
///
/// Every method must be cheap and non-blocking. `begin_transition` may be
/// called again on a cell whose previous transition has not finished.
pub trait CellSink {
    /// Start animating cell `(row, col)` toward `target`.
    fn begin_transition(&mut self, row: usize, col: usize, target: bool);

    /// Snap cell `(row, col)` to `state`, cancelling any transition.
    fn force_state(&mut self, row: usize, col: usize, state: bool);

    /// Present the commands issued since the previous frame.
    fn render_frame(&mut self);
}

impl<S: CellSink + ?Sized> CellSink for &mut S {
    fn begin_transition(&mut self, row: usize, col: usize, target: bool) {
        (**self).begin_transition(row, col, target);
    }

    fn force_state(&mut self, row: usize, col: usize, state: bool) {
        (**self).force_state(row, col, state);
    }

    fn render_frame(&mut self) {
        (**self).render_frame();
    }
}

/// Sink that discards every command
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl CellSink for NullSink {
    fn begin_transition(&mut self, _row: usize, _col: usize, _target: bool) {}

    fn force_state(&mut self, _row: usize, _col: usize, _state: bool) {}

    fn render_frame(&mut self) {}
}
