//! Rendering results for the terminal

use serde::Serialize;

use mopedtune_core::calculator::SpeedResult;
use mopedtune_core::display::ResultDisplay;
use mopedtune_core::selection::Selection;

/// JSON document printed by `calc --json`
#[derive(Debug, Serialize)]
pub struct CalcReport<'a> {
    pub selection: &'a Selection,
    pub result: &'a SpeedResult,
    pub display: ResultDisplay,
}

impl<'a> CalcReport<'a> {
    pub fn new(selection: &'a Selection, result: &'a SpeedResult) -> Self {
        Self {
            selection,
            result,
            display: ResultDisplay::from_result(result),
        }
    }
}

/// Result panel as plain text
pub fn render_result(selection: &Selection, result: &SpeedResult) -> String {
    let display = ResultDisplay::from_result(result);
    let mut out = format!(
        "Zylinder {} | Vergaser {} | {}/{} | Auspuff {}\n",
        selection.cylinder,
        selection.carb_index,
        selection.front_teeth,
        selection.rear_teeth,
        selection.exhaust_index
    );
    out.push_str(&format!("Höchstgeschwindigkeit: {} km/h\n", display.speed));
    out.push_str(&format!("  Basis:        {}\n", display.base));
    out.push_str(&format!("  Übersetzung:  {}\n", display.gearing));
    out.push_str(&format!("  Vergaser:     {}\n", display.carb));
    out.push_str(&format!("  Auspuff:      {}\n", display.exhaust));
    out.push_str(&format!("  Gesamt:       {}\n", display.total));

    if result.has_warnings() {
        out.push_str("Warnungen:\n");
        for warning in &display.warnings {
            out.push_str(&format!("  ⚠ {}\n", warning));
        }
    }

    out
}
