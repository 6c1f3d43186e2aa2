//! Tests for standard part defaults

use mopedtune_core::defaults::{standard_indices, StandardIndices};
use mopedtune_core::selection::CylinderChoice;
use mopedtune_core::tuning::{Revision, TuningData};

#[test]
fn test_exhaust_default_small_cylinders() {
    let data = TuningData::for_revision(Revision::Extended);
    for cylinder in [
        CylinderChoice::Stock,
        CylinderChoice::Displacement(50),
        CylinderChoice::Displacement(60),
    ] {
        assert_eq!(standard_indices(&data, cylinder).exhaust, 1, "{}", cylinder);
    }
}

#[test]
fn test_exhaust_default_large_cylinders() {
    let data = TuningData::for_revision(Revision::Extended);
    for cc in [65, 70, 72, 74] {
        assert_eq!(
            standard_indices(&data, CylinderChoice::Displacement(cc)).exhaust,
            2,
            "{}cc",
            cc
        );
    }
}

#[test]
fn test_table_carb_default() {
    let data = TuningData::for_revision(Revision::Extended);
    for cc in [50, 60, 65, 70] {
        assert_eq!(standard_indices(&data, CylinderChoice::Displacement(cc)).carb, Some(0));
    }
    for cc in [72, 74] {
        assert_eq!(standard_indices(&data, CylinderChoice::Displacement(cc)).carb, Some(3));
    }
    assert_eq!(standard_indices(&data, CylinderChoice::Stock).carb, Some(0));
}

#[test]
fn test_step_model_only_sets_exhaust() {
    let data = TuningData::for_revision(Revision::Classic);
    assert_eq!(
        standard_indices(&data, CylinderChoice::Displacement(65)),
        StandardIndices {
            exhaust: 2,
            carb: None
        }
    );
}
