//! Standard Part Defaults
//!
//! Which exhaust and carburetor count as "standard" depends on the cylinder
//! kit. The same indices serve as the calculator's bonus baselines, so a
//! standard part always contributes ±0 km/h.

use serde::{Deserialize, Serialize};

use crate::selection::CylinderChoice;
use crate::tuning::TuningData;

/// Cylinders above this displacement get the larger standard exhaust
pub const EXHAUST_THRESHOLD_CC: u32 = 60;
/// Standard exhaust up to [`EXHAUST_THRESHOLD_CC`]
pub const EXHAUST_LOWER_STANDARD_INDEX: usize = 1;
/// Standard exhaust above [`EXHAUST_THRESHOLD_CC`]
pub const EXHAUST_UPPER_STANDARD_INDEX: usize = 2;

/// Cylinders above this displacement get the larger standard carburetor
pub const CARB_THRESHOLD_CC: u32 = 70;
/// Standard carburetor up to [`CARB_THRESHOLD_CC`]
pub const CARB_LOWER_STANDARD_INDEX: usize = 0;
/// Standard carburetor above [`CARB_THRESHOLD_CC`]
pub const CARB_UPPER_STANDARD_INDEX: usize = 3;

/// Recommended option indices for a cylinder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardIndices {
    /// Standard exhaust index
    pub exhaust: usize,
    /// Standard carburetor index, `None` when the carburetor scheme has none
    pub carb: Option<usize>,
}

/// Standard exhaust index for a displacement
pub fn standard_exhaust_index(numeric_cc: u32) -> usize {
    if numeric_cc > EXHAUST_THRESHOLD_CC {
        EXHAUST_UPPER_STANDARD_INDEX
    } else {
        EXHAUST_LOWER_STANDARD_INDEX
    }
}

/// Standard carburetor index for a displacement (cumulative table scheme)
pub fn standard_carb_index(numeric_cc: u32) -> usize {
    if numeric_cc > CARB_THRESHOLD_CC {
        CARB_UPPER_STANDARD_INDEX
    } else {
        CARB_LOWER_STANDARD_INDEX
    }
}

/// Standard parts for a cylinder under the given tuning data
pub fn standard_indices(data: &TuningData, cylinder: CylinderChoice) -> StandardIndices {
    let cc = cylinder.numeric_cc();
    StandardIndices {
        exhaust: standard_exhaust_index(cc),
        carb: data
            .carb_model
            .has_standard_carb()
            .then(|| standard_carb_index(cc)),
    }
}
