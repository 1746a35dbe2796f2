//! morphview-test - Regression test support
//!
//! - [`RegParams`]: indexed comparisons that collect failures and report
//!   them together at [`RegParams::cleanup`]
//! - [`RecordingSink`]: a [`CellSink`](morphview_anim::CellSink) that logs
//!   every command and tracks what a renderer would display
//!
//! # Usage
//!
//! ```ignore
//! use morphview_test::RegParams;
//!
//! let mut rp = RegParams::new("binmorph");
//! rp.compare_grids(&expected, &actual);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: `compare` (default) or `display`; display mode also
//!   prints the grids passed to [`RegParams::show_grid`]

mod params;
mod sink;

pub use params::{RegParams, RegTestMode};
pub use sink::{RecordingSink, SinkCommand};
