//! Tuning Session
//!
//! Holds the current form state for a front end and recomputes on every
//! change. Changing the cylinder first resets carburetor and exhaust to the
//! standard parts for the new cylinder, then recalculates, so the result
//! always reflects the defaulted parts.

use crate::calculator::{calculate, SpeedResult};
use crate::defaults::{standard_indices, StandardIndices};
use crate::selection::{CylinderChoice, Selection};
use crate::tuning::TuningData;
use crate::TuningError;

/// Current selection plus its last computed result
#[derive(Debug, Clone)]
pub struct TuningSession {
    data: TuningData,
    selection: Selection,
    result: SpeedResult,
}

impl TuningSession {
    /// Start a session the way a freshly loaded form looks
    ///
    /// First cylinder kit in the table, standard carburetor and exhaust,
    /// stock sprockets.
    pub fn new(data: TuningData) -> Result<Self, TuningError> {
        let cylinder = data.cylinders().next().ok_or_else(|| {
            TuningError::InvalidTuningData("base_speeds must list at least one cylinder".into())
        })?;
        Self::with_cylinder(data, cylinder)
    }

    /// Start a session with a specific cylinder kit and standard parts
    pub fn with_cylinder(data: TuningData, cylinder: CylinderChoice) -> Result<Self, TuningError> {
        let selection = Selection {
            cylinder,
            carb_index: 0,
            front_teeth: data.base_gearing.front,
            rear_teeth: data.base_gearing.rear,
            exhaust_index: 0,
        }
        .with_standard_parts(standard_indices(&data, cylinder));
        let result = calculate(&data, &selection)?;
        Ok(Self {
            data,
            selection,
            result,
        })
    }

    /// Tuning data in use
    pub fn data(&self) -> &TuningData {
        &self.data
    }

    /// Current selection
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Result for the current selection
    pub fn result(&self) -> &SpeedResult {
        &self.result
    }

    /// Standard parts for the current cylinder
    pub fn standard_indices(&self) -> StandardIndices {
        standard_indices(&self.data, self.selection.cylinder)
    }

    /// Change cylinder kit, resetting carburetor and exhaust to standard
    pub fn select_cylinder(
        &mut self,
        cylinder: CylinderChoice,
    ) -> Result<&SpeedResult, TuningError> {
        let standard = standard_indices(&self.data, cylinder);
        tracing::debug!(
            "Cylinder {} selected, standard exhaust {}, standard carb {:?}",
            cylinder,
            standard.exhaust,
            standard.carb
        );
        self.apply(Selection {
            cylinder,
            ..self.selection
        }
        .with_standard_parts(standard))
    }

    /// Change carburetor option
    pub fn select_carb(&mut self, carb_index: usize) -> Result<&SpeedResult, TuningError> {
        self.apply(Selection {
            carb_index,
            ..self.selection
        })
    }

    /// Change front sprocket
    pub fn select_front(&mut self, front_teeth: u32) -> Result<&SpeedResult, TuningError> {
        self.apply(Selection {
            front_teeth,
            ..self.selection
        })
    }

    /// Change rear sprocket
    pub fn select_rear(&mut self, rear_teeth: u32) -> Result<&SpeedResult, TuningError> {
        self.apply(Selection {
            rear_teeth,
            ..self.selection
        })
    }

    /// Change exhaust option
    pub fn select_exhaust(&mut self, exhaust_index: usize) -> Result<&SpeedResult, TuningError> {
        self.apply(Selection {
            exhaust_index,
            ..self.selection
        })
    }

    /// Recalculate with a new selection, keeping the old state on error
    fn apply(&mut self, selection: Selection) -> Result<&SpeedResult, TuningError> {
        self.result = calculate(&self.data, &selection)?;
        self.selection = selection;
        Ok(&self.result)
    }
}
