//! # MopedTune Core Library
//!
//! Core functionality for the MopedTune top speed calculator.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - Tuning data tables (built-in revisions and JSON tuning files)
//! - Part selections parsed from form values
//! - Top speed calculation with per-part bonuses and safety warnings
//! - Standard part defaults depending on the cylinder kit
//! - Display formatting for results and option lists
//!
//! ## Example
//!
//! ```rust
//! use mopedtune_core::prelude::*;
//!
//! let data = TuningData::for_revision(Revision::Classic);
//! let selection = Selection::from_form("60", "2", "13", "45", "2")?;
//! let result = calculate(&data, &selection)?;
//! assert_eq!(result.total_speed, 55);
//! # Ok::<(), mopedtune_core::TuningError>(())
//! ```

pub mod calculator;
pub mod defaults;
pub mod display;
mod error;
pub mod selection;
pub mod session;
pub mod tuning;

pub use error::TuningError;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::calculator::{calculate, SpeedResult, Warning};
    pub use crate::defaults::{standard_indices, StandardIndices};
    pub use crate::display::{format_bonus, format_speed, relabel_options, ResultDisplay};
    pub use crate::selection::{CylinderChoice, Selection};
    pub use crate::session::TuningSession;
    pub use crate::tuning::{CarbModel, Gearing, GearingMultiplier, Revision, TuningData};
    pub use crate::TuningError;
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
