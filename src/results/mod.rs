//! Result types and report rendering
//!
//! This module defines the normalized hit records and how they are printed.

mod format;
mod types;

pub use format::{render_hit, render_outcome, render_report, DIVIDER_WIDTH};
pub use types::*;
