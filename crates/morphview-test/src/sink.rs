//! Recording sink for scheduler tests

use morphview_anim::CellSink;
use morphview_core::BooleanGrid;

/// One command received by a [`RecordingSink`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkCommand {
    /// `begin_transition(row, col, target)`
    Begin { row: usize, col: usize, target: bool },
    /// `force_state(row, col, state)`
    Force { row: usize, col: usize, state: bool },
    /// `render_frame()`
    Frame,
}

/// Sink that logs every command and mirrors the displayed grid.
///
/// Transitions are treated as completing immediately, so
/// [`shown`](Self::shown) is what a renderer would settle on.
#[derive(Debug, Clone)]
pub struct RecordingSink {
    shown: BooleanGrid,
    last_forced: Vec<Option<bool>>,
    commands: Vec<SinkCommand>,
}

impl RecordingSink {
    /// Start from `initial` as the displayed grid
    pub fn new(initial: &BooleanGrid) -> Self {
        Self {
            shown: initial.clone(),
            last_forced: vec![None; initial.rows() * initial.cols()],
            commands: Vec::new(),
        }
    }

    /// Grid as currently displayed
    pub fn shown(&self) -> &BooleanGrid {
        &self.shown
    }

    /// Every command in arrival order
    pub fn commands(&self) -> &[SinkCommand] {
        &self.commands
    }

    /// Number of `render_frame` calls
    pub fn frames(&self) -> usize {
        self.count(|c| matches!(c, SinkCommand::Frame))
    }

    /// Number of `begin_transition` calls
    pub fn transitions(&self) -> usize {
        self.count(|c| matches!(c, SinkCommand::Begin { .. }))
    }

    /// Number of `force_state` calls
    pub fn forces(&self) -> usize {
        self.count(|c| matches!(c, SinkCommand::Force { .. }))
    }

    /// Grid assembled from the most recent `force_state` of each cell, or
    /// `None` if some cell was never forced.
    pub fn forced_grid(&self) -> Option<BooleanGrid> {
        let mut grid = BooleanGrid::new(self.shown.rows(), self.shown.cols()).ok()?;
        for (idx, forced) in self.last_forced.iter().enumerate() {
            let state = (*forced)?;
            grid.set_unchecked(idx / self.shown.cols(), idx % self.shown.cols(), state);
        }
        Some(grid)
    }

    /// Drop the command log and forget forced states, keeping the display
    pub fn clear(&mut self) {
        self.commands.clear();
        self.last_forced.iter_mut().for_each(|f| *f = None);
    }

    fn count(&self, pred: impl Fn(&SinkCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| pred(c)).count()
    }
}

impl CellSink for RecordingSink {
    fn begin_transition(&mut self, row: usize, col: usize, target: bool) {
        self.commands.push(SinkCommand::Begin { row, col, target });
        self.shown.set_unchecked(row, col, target);
    }

    fn force_state(&mut self, row: usize, col: usize, state: bool) {
        self.commands.push(SinkCommand::Force { row, col, state });
        self.shown.set_unchecked(row, col, state);
        self.last_forced[row * self.shown.cols() + col] = Some(state);
    }

    fn render_frame(&mut self) {
        self.commands.push(SinkCommand::Frame);
    }
}
