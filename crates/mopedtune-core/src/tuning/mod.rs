//! Tuning Data Tables
//!
//! The constants behind the speed model: stock gearing, base speeds per
//! cylinder kit, sprocket sensitivity and the carburetor/exhaust bonus
//! schemes. Two revisions are built in (see [`Revision`]); custom tables can
//! be loaded from JSON.
//!
//! ## JSON Layout
//!
//! ```text
//! {
//!   "base_gearing": { "front": 13, "rear": 45 },
//!   "base_speeds": { "stock": 30, "50": 40, "60": 45 },
//!   "gearing_multiplier": { "front": 5, "rear": 2 },
//!   "carb_model": { "table": { "bonuses": [0, 3, 6, 9, 11, 13, 14], "cap_index": 5 } },
//!   "exhaust_step_bonus": 4,
//!   "exhaust_options": 4,
//!   "exhaust_reso_index": 3,
//!   "max_cylinder_for_reso": 65
//! }
//! ```

mod file;
mod revisions;

pub use revisions::Revision;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::selection::CylinderChoice;

/// Sprocket tooth counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gearing {
    /// Front (engine) sprocket
    pub front: u32,
    /// Rear (wheel) sprocket
    pub rear: u32,
}

/// Speed change in km/h per tooth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GearingMultiplier {
    /// Gain per extra front tooth
    pub front: i32,
    /// Gain per tooth removed at the rear
    pub rear: i32,
}

/// Carburetor bonus scheme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarbModel {
    /// Fixed bonus per option index
    Step {
        /// km/h per index step
        bonus_per_step: i32,
        /// Number of carburetor options
        steps: usize,
    },
    /// Cumulative bonus table with a cap for large cylinders
    Table {
        /// Cumulative bonus per option index, non-decreasing
        bonuses: Vec<i32>,
        /// Largest index that still adds speed
        cap_index: usize,
    },
}

impl CarbModel {
    /// Number of valid carburetor option indices
    pub fn carb_options(&self) -> usize {
        match self {
            CarbModel::Step { steps, .. } => *steps,
            CarbModel::Table { bonuses, .. } => bonuses.len(),
        }
    }

    /// Whether this scheme has its own baseline/default carburetor
    pub fn has_standard_carb(&self) -> bool {
        matches!(self, CarbModel::Table { .. })
    }
}

/// Complete set of constants for the speed model
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuningData {
    /// Stock sprocket setup
    pub base_gearing: Gearing,

    /// Base top speed in km/h per cylinder kit
    pub base_speeds: BTreeMap<CylinderChoice, i32>,

    /// Sprocket sensitivity
    pub gearing_multiplier: GearingMultiplier,

    /// Carburetor bonus scheme
    pub carb_model: CarbModel,

    /// km/h per exhaust index step
    pub exhaust_step_bonus: i32,

    /// Number of exhaust options
    pub exhaust_options: usize,

    /// Index of the resonance exhaust
    pub exhaust_reso_index: usize,

    /// Largest displacement the resonance exhaust must not be run on
    pub max_cylinder_for_reso: u32,
}

impl TuningData {
    /// Built-in table for a revision
    pub fn for_revision(revision: Revision) -> Self {
        revision.tuning_data()
    }

    /// Base speed for a cylinder, if the table knows it
    pub fn base_speed(&self, cylinder: CylinderChoice) -> Option<i32> {
        self.base_speeds.get(&cylinder.lookup_key()).copied()
    }

    /// Cylinder kits in table order (stock first, then by displacement)
    pub fn cylinders(&self) -> impl Iterator<Item = CylinderChoice> + '_ {
        self.base_speeds.keys().copied()
    }

    /// Number of valid carburetor option indices
    pub fn carb_options(&self) -> usize {
        self.carb_model.carb_options()
    }
}

impl Default for TuningData {
    fn default() -> Self {
        Self::for_revision(Revision::default())
    }
}
