//! Command logic behind the shell
//!
//! Everything here returns values instead of printing, so `main` only
//! decides how to show them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use mopedtune_core::defaults::standard_indices;
use mopedtune_core::selection::{CylinderChoice, Selection};
use mopedtune_core::session::TuningSession;
use mopedtune_core::tuning::{Revision, TuningData};

use crate::args::PartArgs;
use crate::options;

/// Pick the tuning data to run with
///
/// `data` (from `--data`) wins, then an explicit `revision`, then
/// `user_file` if it exists, then the newest built-in revision.
pub fn resolve_tuning_data(
    data: Option<&Path>,
    revision: Option<Revision>,
    user_file: Option<&Path>,
) -> Result<TuningData> {
    if let Some(path) = data {
        return load_file(path);
    }

    if let Some(revision) = revision {
        info!("Using built-in {} tuning data", revision);
        return Ok(TuningData::for_revision(revision));
    }

    if let Some(path) = user_file.filter(|p| p.exists()) {
        return load_file(path);
    }

    Ok(TuningData::default())
}

fn load_file(path: &Path) -> Result<TuningData> {
    TuningData::from_file(path)
        .with_context(|| format!("Failed to load tuning data from {}", path.display()))
}

/// Cylinder from the command line, or the first one in the table
pub fn parse_cylinder(data: &TuningData, raw: Option<&str>) -> Result<CylinderChoice> {
    match raw {
        Some(raw) => Ok(raw.parse::<CylinderChoice>()?),
        None => data
            .cylinders()
            .next()
            .context("Tuning data lists no cylinders"),
    }
}

/// Session for `calc`, with omitted parts left at standard/base values
pub fn calc_session(data: TuningData, parts: &PartArgs) -> Result<TuningSession> {
    let cylinder = parse_cylinder(&data, parts.cylinder.as_deref())?;

    // Same order as the form: cylinder (with its standard parts) first, then each part
    let mut session = TuningSession::with_cylinder(data, cylinder)?;
    let current = *session.selection();
    let selection = Selection::from_form(
        &cylinder.to_string(),
        parts.carb.as_deref().unwrap_or(&current.carb_index.to_string()),
        parts.front.as_deref().unwrap_or(&current.front_teeth.to_string()),
        parts.rear.as_deref().unwrap_or(&current.rear_teeth.to_string()),
        parts.exhaust.as_deref().unwrap_or(&current.exhaust_index.to_string()),
    )?;
    session.select_carb(selection.carb_index)?;
    session.select_front(selection.front_teeth)?;
    session.select_rear(selection.rear_teeth)?;
    session.select_exhaust(selection.exhaust_index)?;
    Ok(session)
}

/// Everything the `options` command shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionLists {
    pub cylinders: Vec<String>,
    pub carburetors: Vec<String>,
    pub exhausts: Vec<String>,
}

impl OptionLists {
    pub fn new(data: &TuningData, cylinder: CylinderChoice) -> Self {
        let standard = standard_indices(data, cylinder);
        Self {
            cylinders: data.cylinders().map(|c| c.to_string()).collect(),
            carburetors: options::carb_labels(data, standard),
            exhausts: options::exhaust_labels(data, standard),
        }
    }
}
