//! Tuning data files
//!
//! Loading, saving and validating JSON tuning tables.

use std::fs;
use std::path::Path;

use super::{CarbModel, TuningData};
use crate::defaults::{CARB_UPPER_STANDARD_INDEX, EXHAUST_UPPER_STANDARD_INDEX};
use crate::TuningError;

impl TuningData {
    /// Parse and validate tuning data from a JSON string
    pub fn from_json(content: &str) -> Result<Self, TuningError> {
        let data: TuningData = serde_json::from_str(content)?;
        data.validate()?;
        Ok(data)
    }

    /// Load tuning data from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let data = Self::from_json(&content).inspect_err(|e| {
            tracing::warn!("Rejected tuning data from {}: {}", path.display(), e);
        })?;
        tracing::info!(
            "Loaded tuning data from {} ({} cylinder kits)",
            path.display(),
            data.base_speeds.len()
        );
        Ok(data)
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> Result<String, TuningError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Save tuning data to a JSON file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), TuningError> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Check that every index the calculator can reach exists
    pub fn validate(&self) -> Result<(), TuningError> {
        if self.base_speeds.is_empty() {
            return Err(invalid("base_speeds must list at least one cylinder"));
        }

        if self.exhaust_options <= EXHAUST_UPPER_STANDARD_INDEX {
            return Err(invalid(format!(
                "exhaust_options must be greater than {} to hold both standard exhausts",
                EXHAUST_UPPER_STANDARD_INDEX
            )));
        }

        if self.exhaust_reso_index >= self.exhaust_options {
            return Err(invalid(format!(
                "exhaust_reso_index {} is out of range for {} exhaust options",
                self.exhaust_reso_index, self.exhaust_options
            )));
        }

        match &self.carb_model {
            CarbModel::Step { steps, .. } => {
                if *steps == 0 {
                    return Err(invalid("step carburetor model needs at least one step"));
                }
            }
            CarbModel::Table { bonuses, cap_index } => {
                if bonuses.len() <= CARB_UPPER_STANDARD_INDEX {
                    return Err(invalid(format!(
                        "carburetor bonus table needs more than {} entries",
                        CARB_UPPER_STANDARD_INDEX
                    )));
                }
                if *cap_index >= bonuses.len() {
                    return Err(invalid(format!(
                        "cap_index {} is out of range for {} carburetor bonuses",
                        cap_index,
                        bonuses.len()
                    )));
                }
                if let Some(pos) = bonuses.windows(2).position(|w| w[1] < w[0]) {
                    return Err(invalid(format!(
                        "carburetor bonuses must not decrease (index {} to {})",
                        pos,
                        pos + 1
                    )));
                }
            }
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> TuningError {
    TuningError::InvalidTuningData(message.into())
}
