//! morphview-anim - Animated convergence of morphology results
//!
//! This crate drives the display side of the workbench:
//!
//! - [`AnimationScheduler`]: reveals a target grid footprint by footprint
//! - [`CellSink`]: the per-cell command interface a renderer implements
//! - [`Ticker`]: fixed-cadence deadline tracking for the host's timer
//! - [`RequestCoordinator`]: recomputes on every edit and restarts the
//!   animation
//!
//! Everything runs on the caller's thread. The engine call is synchronous;
//! the scheduler does one bounded step per tick.
//!
//! # Example
//!
//! ```
//! use morphview_anim::{NullSink, RequestCoordinator, SchedulerConfig, WorkbenchConfig};
//! use morphview_morph::OperationKind;
//!
//! let mut coord =
//!     RequestCoordinator::new(WorkbenchConfig::default(), SchedulerConfig::default()).unwrap();
//! coord.load_glyph('A').unwrap();
//! coord.set_operation(OperationKind::Dilation).unwrap();
//! assert!(coord.scheduler().is_running());
//!
//! coord.finish(&mut NullSink);
//! assert!(coord.next_deadline().is_none());
//! ```

pub mod config;
pub mod coordinator;
mod error;
pub mod scheduler;
pub mod sink;
pub mod ticker;

pub use config::{SchedulerConfig, WorkbenchConfig};
pub use coordinator::{RequestCoordinator, Workbench};
pub use error::{AnimError, AnimResult};
pub use scheduler::{AnimationScheduler, TickOutcome};
pub use sink::{CellSink, NullSink};
pub use ticker::Ticker;
