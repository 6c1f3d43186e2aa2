//! Option lists shown to the user
//!
//! The core only knows option indices; labels belong to the front end.

use mopedtune_core::calculator::SMALL_EXHAUST_INDEX;
use mopedtune_core::defaults::StandardIndices;
use mopedtune_core::display::relabel_options;
use mopedtune_core::tuning::TuningData;

/// Carburetor labels, with the standard option marked if there is one
pub fn carb_labels(data: &TuningData, standard: StandardIndices) -> Vec<String> {
    let labels: Vec<String> = (0..data.carb_options())
        .map(|i| format!("Vergaser Stufe {}", i))
        .collect();
    match standard.carb {
        Some(index) => relabel_options(&labels, index),
        None => labels,
    }
}

/// Exhaust labels with the standard option marked
pub fn exhaust_labels(data: &TuningData, standard: StandardIndices) -> Vec<String> {
    let labels: Vec<String> = (0..data.exhaust_options)
        .map(|i| {
            if i == data.exhaust_reso_index {
                "28er Reso Auspuff".to_string()
            } else if i == SMALL_EXHAUST_INDEX {
                "18er Auspuff".to_string()
            } else {
                format!("Auspuff Stufe {}", i)
            }
        })
        .collect();
    relabel_options(&labels, standard.exhaust)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mopedtune_core::defaults::standard_indices;
    use mopedtune_core::selection::CylinderChoice;
    use mopedtune_core::tuning::Revision;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_exhaust_labels_for_70cc() {
        let data = TuningData::for_revision(Revision::Classic);
        let standard = standard_indices(&data, CylinderChoice::Displacement(70));
        assert_eq!(
            exhaust_labels(&data, standard),
            vec![
                "18er Auspuff",
                "Auspuff Stufe 1",
                "Auspuff Stufe 2 (Standard)",
                "28er Reso Auspuff"
            ]
        );
    }

    #[test]
    fn test_step_carb_labels_unmarked() {
        let data = TuningData::for_revision(Revision::Classic);
        let standard = standard_indices(&data, CylinderChoice::Stock);
        let labels = carb_labels(&data, standard);
        assert_eq!(labels.len(), 5);
        assert!(labels.iter().all(|l| !l.contains("(Standard)")));
    }

    #[test]
    fn test_table_carb_labels_marked() {
        let data = TuningData::for_revision(Revision::Extended);
        let standard = standard_indices(&data, CylinderChoice::Displacement(74));
        let labels = carb_labels(&data, standard);
        assert_eq!(labels[3], "Vergaser Stufe 3 (Standard)");
    }
}
