//! Readiness report output.
//!
//! - [`render_report`] prints the human report through a
//!   [`UserInterface`](crate::ui::UserInterface)
//! - [`JsonReport`] is the machine-readable form used by `check --json`

pub mod json;
pub mod render;

pub use json::{JsonCheck, JsonReport};
pub use render::{render_report, REPORT_TITLE};
