//! Top Speed Calculator
//!
//! Turns a [`Selection`] into a [`SpeedResult`] under a [`TuningData`]
//! table. The model is linear: a base speed per cylinder kit plus one
//! bonus each for gearing, carburetor and exhaust.
//!
//! Carburetor and exhaust bonuses are measured against the standard parts
//! for the cylinder (see [`crate::defaults`]), so the standard part is
//! always worth ±0 km/h.

use serde::{Deserialize, Serialize};

use crate::defaults::{standard_carb_index, standard_exhaust_index, CARB_THRESHOLD_CC};
use crate::selection::Selection;
use crate::tuning::{CarbModel, Gearing, GearingMultiplier, TuningData};
use crate::TuningError;

/// Exhaust index of the smallest (18mm) exhaust
pub const SMALL_EXHAUST_INDEX: usize = 0;

/// Smallest displacement the small exhaust must not be run on
pub const SMALL_EXHAUST_MIN_CC: u32 = 65;

/// Safety advice for a part combination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Warning {
    /// Resonance exhaust on a cylinder too small for it
    ResoExhaust,
    /// Small exhaust on a cylinder too large for it
    SmallExhaust,
    /// Carburetor beyond the largest one that helps this cylinder
    OversizedCarb,
}

impl Warning {
    /// User-facing message
    pub fn message(self) -> &'static str {
        match self {
            Warning::ResoExhaust => "28er Reso Auspuff auf keinen Fall mit diesem Zylinder fahren!",
            Warning::SmallExhaust => "18er Auspuff auf keinen Fall mit diesem Zylinder fahren!",
            Warning::OversizedCarb => {
                "Dieser Vergaser ist zu groß für den Zylinder und bringt keine Mehrleistung!"
            }
        }
    }
}

/// Speed estimate broken down by component (all km/h)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedResult {
    /// Top speed of the cylinder kit with stock parts
    pub base_speed: i32,
    /// Gain or loss from the sprockets
    pub gearing_bonus: i32,
    /// Gain or loss from the carburetor
    pub carb_bonus: i32,
    /// Gain or loss from the exhaust
    pub exhaust_bonus: i32,
    /// Sum of the four components above
    pub total_speed: i32,
    /// Warnings in evaluation order
    pub warnings: Vec<Warning>,
}

impl SpeedResult {
    /// True if any warning applies
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Calculate the top speed estimate for a selection
///
/// # Errors
/// `InvalidSelection` if the cylinder is not in the speed table or the
/// carburetor/exhaust index is outside its option list.
pub fn calculate(data: &TuningData, selection: &Selection) -> Result<SpeedResult, TuningError> {
    let cylinder = selection.cylinder;
    let cc = cylinder.numeric_cc();

    let base_speed = data.base_speed(cylinder).ok_or_else(|| {
        TuningError::InvalidSelection(format!("no base speed for cylinder '{}'", cylinder))
    })?;

    check_index("carburetor", selection.carb_index, data.carb_options())?;
    check_index("exhaust", selection.exhaust_index, data.exhaust_options)?;

    let gearing_bonus = gearing_bonus(
        data.base_gearing,
        data.gearing_multiplier,
        selection.front_teeth,
        selection.rear_teeth,
    )?;
    let carb_bonus = carb_bonus(&data.carb_model, selection.carb_index, cc)?;
    let exhaust_bonus = index_delta(selection.exhaust_index, standard_exhaust_index(cc))
        .and_then(|steps| steps.checked_mul(i64::from(data.exhaust_step_bonus)));
    let exhaust_bonus = narrow(exhaust_bonus, "exhaust bonus")?;

    // Four i32 components always fit in an i64
    let total_speed = narrow(
        Some(
            i64::from(base_speed)
                + i64::from(gearing_bonus)
                + i64::from(carb_bonus)
                + i64::from(exhaust_bonus),
        ),
        "total speed",
    )?;
    let warnings = collect_warnings(data, selection);

    tracing::debug!(
        "Speed for {} / carb {} / {}-{} / exhaust {}: {} + {} + {} + {} = {} km/h",
        cylinder,
        selection.carb_index,
        selection.front_teeth,
        selection.rear_teeth,
        selection.exhaust_index,
        base_speed,
        gearing_bonus,
        carb_bonus,
        exhaust_bonus,
        total_speed
    );
    for warning in &warnings {
        tracing::info!("{:?}: {}", warning, warning.message());
    }

    Ok(SpeedResult {
        base_speed,
        gearing_bonus,
        carb_bonus,
        exhaust_bonus,
        total_speed,
        warnings,
    })
}

/// Speed gained from sprockets relative to the stock gearing
///
/// More teeth at the front raise speed, more teeth at the rear lower it.
///
/// # Errors
/// `InvalidSelection` if the bonus for these tooth counts does not fit in
/// an `i32`.
pub fn gearing_bonus(
    base: Gearing,
    multiplier: GearingMultiplier,
    front: u32,
    rear: u32,
) -> Result<i32, TuningError> {
    let front_gain = (i64::from(front) - i64::from(base.front))
        .checked_mul(i64::from(multiplier.front));
    let rear_gain =
        (i64::from(base.rear) - i64::from(rear)).checked_mul(i64::from(multiplier.rear));
    let bonus = front_gain
        .zip(rear_gain)
        .and_then(|(front_gain, rear_gain)| front_gain.checked_add(rear_gain));

    narrow(bonus, "gearing bonus").map_err(|_| {
        TuningError::InvalidSelection(format!(
            "gearing bonus for {}/{} teeth is out of range",
            front, rear
        ))
    })
}

/// Speed gained from the carburetor
fn carb_bonus(model: &CarbModel, carb_index: usize, cc: u32) -> Result<i32, TuningError> {
    match model {
        CarbModel::Step { bonus_per_step, .. } => {
            let bonus = i64::try_from(carb_index)
                .ok()
                .and_then(|steps| steps.checked_mul(i64::from(*bonus_per_step)));
            narrow(bonus, "carburetor bonus")
        }
        CarbModel::Table { bonuses, cap_index } => {
            let effective = if cc > CARB_THRESHOLD_CC {
                carb_index.min(*cap_index)
            } else {
                carb_index
            };
            let bonus_at = |index: usize| {
                bonuses.get(index).copied().ok_or_else(|| {
                    TuningError::InvalidTuningData(format!(
                        "carburetor bonus table has no entry {}",
                        index
                    ))
                })
            };
            bonus_at(effective)?
                .checked_sub(bonus_at(standard_carb_index(cc))?)
                .ok_or_else(|| {
                    TuningError::InvalidTuningData("carburetor bonus is out of range".into())
                })
        }
    }
}

/// Signed distance between two option indices
fn index_delta(index: usize, base: usize) -> Option<i64> {
    let index = i64::try_from(index).ok()?;
    let base = i64::try_from(base).ok()?;
    index.checked_sub(base)
}

/// Narrow an intermediate value to km/h, rejecting anything `i32` cannot hold
fn narrow(value: Option<i64>, what: &str) -> Result<i32, TuningError> {
    value
        .and_then(|v| i32::try_from(v).ok())
        .ok_or_else(|| TuningError::InvalidSelection(format!("{} is out of range", what)))
}

fn collect_warnings(data: &TuningData, selection: &Selection) -> Vec<Warning> {
    let cc = selection.cylinder.numeric_cc();
    let mut warnings = Vec::new();

    if selection.exhaust_index == data.exhaust_reso_index && cc <= data.max_cylinder_for_reso {
        warnings.push(Warning::ResoExhaust);
    } else if selection.exhaust_index == SMALL_EXHAUST_INDEX && cc >= SMALL_EXHAUST_MIN_CC {
        warnings.push(Warning::SmallExhaust);
    }

    if let CarbModel::Table { cap_index, .. } = data.carb_model {
        if cc <= CARB_THRESHOLD_CC && selection.carb_index > cap_index {
            warnings.push(Warning::OversizedCarb);
        }
    }

    warnings
}

fn check_index(field: &str, index: usize, options: usize) -> Result<(), TuningError> {
    if index < options {
        Ok(())
    } else {
        Err(TuningError::InvalidSelection(format!(
            "{} index {} is out of range (0..{})",
            field, index, options
        )))
    }
}
