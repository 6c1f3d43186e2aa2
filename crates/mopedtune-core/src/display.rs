//! Result presentation
//!
//! Text for the result panel and option lists. Nothing here changes a
//! number; the calculator output is only formatted.

use serde::{Deserialize, Serialize};

use crate::calculator::SpeedResult;

/// Suffix marking the standard option in a list
pub const STANDARD_SUFFIX: &str = " (Standard)";

/// Format a bonus as "+N km/h", "-N km/h" or "±0 km/h"
pub fn format_bonus(value: i32) -> String {
    if value > 0 {
        format!("+{} km/h", value)
    } else if value < 0 {
        format!("{} km/h", value)
    } else {
        "±0 km/h".to_string()
    }
}

/// Format a plain speed as "N km/h"
pub fn format_speed(value: i32) -> String {
    format!("{} km/h", value)
}

/// Display strings for every field of the result panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultDisplay {
    /// Headline number without unit
    pub speed: String,
    /// Base speed
    pub base: String,
    /// Gearing bonus
    pub gearing: String,
    /// Carburetor bonus
    pub carb: String,
    /// Exhaust bonus
    pub exhaust: String,
    /// Total with unit
    pub total: String,
    /// Warning messages in order
    pub warnings: Vec<String>,
}

impl ResultDisplay {
    /// Format a calculation result
    pub fn from_result(result: &SpeedResult) -> Self {
        Self {
            speed: result.total_speed.to_string(),
            base: format_speed(result.base_speed),
            gearing: format_bonus(result.gearing_bonus),
            carb: format_bonus(result.carb_bonus),
            exhaust: format_bonus(result.exhaust_bonus),
            total: format_speed(result.total_speed),
            warnings: result
                .warnings
                .iter()
                .map(|w| w.message().to_string())
                .collect(),
        }
    }
}

impl From<&SpeedResult> for ResultDisplay {
    fn from(result: &SpeedResult) -> Self {
        Self::from_result(result)
    }
}

/// Mark the standard option in a list of labels
///
/// Any existing " (Standard)" suffix is stripped first, so the function can
/// be applied again whenever the standard index moves.
pub fn relabel_options<S: AsRef<str>>(labels: &[S], standard_index: usize) -> Vec<String> {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let base = label.as_ref().replacen(STANDARD_SUFFIX, "", 1);
            if i == standard_index {
                base + STANDARD_SUFFIX
            } else {
                base
            }
        })
        .collect()
}
