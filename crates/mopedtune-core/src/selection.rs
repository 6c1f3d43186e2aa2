//! Part Selection
//!
//! A [`Selection`] is one snapshot of the tuning form: cylinder kit,
//! carburetor, sprockets and exhaust. It is rebuilt on every change and
//! never stored beyond a single calculation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::defaults::StandardIndices;
use crate::TuningError;

/// Displacement the stock cylinder is treated as for threshold comparisons
pub const STOCK_NUMERIC_CC: u32 = 50;

/// Form value of the stock cylinder option
const STOCK_KEY: &str = "stock";

/// Cylinder kit choice
///
/// The stock cylinder has its own entry in the speed table, distinct from
/// the 50cc kit, but compares like a 50cc engine against thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CylinderChoice {
    /// Unmodified factory cylinder
    Stock,
    /// Aftermarket kit with the given displacement in cc
    Displacement(u32),
}

impl CylinderChoice {
    /// Key used against the base speed table
    pub fn lookup_key(self) -> CylinderChoice {
        self
    }

    /// Displacement used for all threshold comparisons
    pub fn numeric_cc(self) -> u32 {
        match self {
            CylinderChoice::Stock => STOCK_NUMERIC_CC,
            CylinderChoice::Displacement(cc) => cc,
        }
    }
}

impl FromStr for CylinderChoice {
    type Err = TuningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(STOCK_KEY) {
            return Ok(CylinderChoice::Stock);
        }
        trimmed
            .parse::<u32>()
            .map(CylinderChoice::Displacement)
            .map_err(|_| TuningError::InvalidSelection(format!("unknown cylinder '{}'", trimmed)))
    }
}

impl TryFrom<String> for CylinderChoice {
    type Error = TuningError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CylinderChoice> for String {
    fn from(choice: CylinderChoice) -> Self {
        choice.to_string()
    }
}

impl fmt::Display for CylinderChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CylinderChoice::Stock => write!(f, "{}", STOCK_KEY),
            CylinderChoice::Displacement(cc) => write!(f, "{}", cc),
        }
    }
}

/// Current state of the tuning form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Cylinder kit
    pub cylinder: CylinderChoice,
    /// Index into the carburetor option list
    pub carb_index: usize,
    /// Front sprocket tooth count
    pub front_teeth: u32,
    /// Rear sprocket tooth count
    pub rear_teeth: u32,
    /// Index into the exhaust option list
    pub exhaust_index: usize,
}

impl Selection {
    /// Build a selection from raw form values
    ///
    /// # Arguments
    /// * `cylinder` - "stock" or a displacement such as "70"
    /// * `carb` / `exhaust` - option indices
    /// * `front` / `rear` - sprocket tooth counts (must be positive)
    pub fn from_form(
        cylinder: &str,
        carb: &str,
        front: &str,
        rear: &str,
        exhaust: &str,
    ) -> Result<Self, TuningError> {
        Ok(Self {
            cylinder: cylinder.parse()?,
            carb_index: parse_field("carburetor", carb)?,
            front_teeth: parse_teeth("front sprocket", front)?,
            rear_teeth: parse_teeth("rear sprocket", rear)?,
            exhaust_index: parse_field("exhaust", exhaust)?,
        })
    }

    /// Return a copy with the standard carburetor and exhaust applied
    ///
    /// Without a carburetor default (step model) the carburetor is kept.
    pub fn with_standard_parts(self, standard: StandardIndices) -> Self {
        Self {
            carb_index: standard.carb.unwrap_or(self.carb_index),
            exhaust_index: standard.exhaust,
            ..self
        }
    }
}

fn parse_field<T: FromStr>(field: &str, raw: &str) -> Result<T, TuningError> {
    let raw = raw.trim();
    raw.parse().map_err(|_| {
        TuningError::InvalidSelection(format!("{} value '{}' is not a valid number", field, raw))
    })
}

fn parse_teeth(field: &str, raw: &str) -> Result<u32, TuningError> {
    match parse_field::<u32>(field, raw)? {
        0 => Err(TuningError::InvalidSelection(format!("{} needs at least one tooth", field))),
        teeth => Ok(teeth),
    }
}
