//! Tests for the top speed calculator

use mopedtune_core::calculator::{calculate, Warning};
use mopedtune_core::selection::{CylinderChoice, Selection};
use mopedtune_core::tuning::{CarbModel, Revision, TuningData};
use mopedtune_core::TuningError;
use pretty_assertions::assert_eq;

fn classic() -> TuningData {
    TuningData::for_revision(Revision::Classic)
}

fn extended() -> TuningData {
    TuningData::for_revision(Revision::Extended)
}

fn form(cylinder: &str, carb: &str, front: &str, rear: &str, exhaust: &str) -> Selection {
    Selection::from_form(cylinder, carb, front, rear, exhaust).expect("valid form values")
}

#[test]
fn test_classic_end_to_end() {
    let result = calculate(&classic(), &form("60", "2", "13", "45", "2")).unwrap();

    assert_eq!(result.base_speed, 45);
    assert_eq!(result.gearing_bonus, 0);
    assert_eq!(result.carb_bonus, 6);
    // 60cc uses the smaller standard exhaust, so index 2 is one step up
    assert_eq!(result.exhaust_bonus, 4);
    assert_eq!(result.total_speed, 55);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_classic_end_to_end_large_cylinder() {
    let result = calculate(&classic(), &form("65", "2", "13", "45", "2")).unwrap();

    assert_eq!(result.base_speed, 50);
    assert_eq!(result.carb_bonus, 6);
    assert_eq!(result.exhaust_bonus, 0);
    assert_eq!(result.total_speed, 56);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_extended_end_to_end() {
    let result = calculate(&extended(), &form("74", "5", "15", "40", "3")).unwrap();

    assert_eq!(result.base_speed, 70);
    assert_eq!(result.gearing_bonus, 20);
    assert_eq!(result.carb_bonus, 4);
    assert_eq!(result.exhaust_bonus, 4);
    assert_eq!(result.total_speed, 98);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_total_is_sum_of_components() {
    for data in [classic(), extended()] {
        let cylinders: Vec<CylinderChoice> = data.cylinders().collect();
        for cylinder in cylinders {
            for carb_index in 0..data.carb_options() {
                for exhaust_index in 0..data.exhaust_options {
                    for (front_teeth, rear_teeth) in [(12, 48), (13, 45), (15, 40)] {
                        let selection = Selection {
                            cylinder,
                            carb_index,
                            front_teeth,
                            rear_teeth,
                            exhaust_index,
                        };
                        let r = calculate(&data, &selection).unwrap();
                        assert_eq!(
                            r.total_speed,
                            r.base_speed + r.gearing_bonus + r.carb_bonus + r.exhaust_bonus,
                            "additivity broken for {:?}",
                            selection
                        );
                    }
                }
            }
        }
    }
}

#[test]
fn test_stock_and_50cc_differ_only_in_base_speed() {
    let stock = calculate(&classic(), &form("stock", "1", "14", "44", "3")).unwrap();
    let fifty = calculate(&classic(), &form("50", "1", "14", "44", "3")).unwrap();

    assert_eq!(stock.base_speed, 30);
    assert_eq!(fifty.base_speed, 40);
    assert_eq!(stock.gearing_bonus, fifty.gearing_bonus);
    assert_eq!(stock.carb_bonus, fifty.carb_bonus);
    assert_eq!(stock.exhaust_bonus, fifty.exhaust_bonus);
    assert_eq!(stock.warnings, fifty.warnings);
}

#[test]
fn test_gearing_monotonic() {
    let data = classic();
    let speed = |front: &str, rear: &str| {
        calculate(&data, &form("60", "0", front, rear, "1"))
            .unwrap()
            .gearing_bonus
    };

    assert_eq!(speed("13", "45"), 0);
    assert!(speed("14", "45") > speed("13", "45"));
    assert!(speed("15", "45") > speed("14", "45"));
    assert!(speed("13", "46") < speed("13", "45"));
    assert!(speed("13", "47") < speed("13", "46"));
    assert_ne!(speed("14", "45"), 0);
    assert_ne!(speed("13", "44"), 0);
}

#[test]
fn test_table_carb_non_decreasing_and_capped() {
    let data = extended();
    for cylinder in ["stock", "60", "70", "72", "74"] {
        let bonuses: Vec<i32> = (0..data.carb_options())
            .map(|i| {
                calculate(&data, &form(cylinder, &i.to_string(), "13", "45", "2"))
                    .unwrap()
                    .carb_bonus
            })
            .collect();
        assert!(
            bonuses.windows(2).all(|w| w[0] <= w[1]),
            "carb bonus decreased for {}: {:?}",
            cylinder,
            bonuses
        );
    }

    let capped: Vec<i32> = (5..7)
        .map(|i| {
            calculate(&data, &form("72", &i.to_string(), "13", "45", "2"))
                .unwrap()
                .carb_bonus
        })
        .collect();
    assert_eq!(capped, vec![4, 4]);
}

#[test]
fn test_table_carb_baseline_for_large_cylinders() {
    let standard = calculate(&extended(), &form("72", "3", "13", "45", "2")).unwrap();
    assert_eq!(standard.carb_bonus, 0);

    let smaller = calculate(&extended(), &form("72", "0", "13", "45", "2")).unwrap();
    assert_eq!(smaller.carb_bonus, -9);
}

#[test]
fn test_reso_warning_on_stock() {
    let result = calculate(&classic(), &form("stock", "0", "13", "45", "3")).unwrap();
    assert_eq!(result.warnings, vec![Warning::ResoExhaust]);
}

#[test]
fn test_reso_warning_up_to_65cc() {
    let at_limit = calculate(&classic(), &form("65", "0", "13", "45", "3")).unwrap();
    assert_eq!(at_limit.warnings, vec![Warning::ResoExhaust]);

    let above = calculate(&classic(), &form("70", "0", "13", "45", "3")).unwrap();
    assert!(above.warnings.is_empty());
}

#[test]
fn test_small_exhaust_warning_on_70cc() {
    let result = calculate(&classic(), &form("70", "0", "13", "45", "0")).unwrap();
    assert_eq!(result.warnings, vec![Warning::SmallExhaust]);
}

#[test]
fn test_small_exhaust_fine_on_60cc() {
    let result = calculate(&classic(), &form("60", "0", "13", "45", "0")).unwrap();
    assert!(result.warnings.is_empty());
}

#[test]
fn test_no_warning_for_standard_60cc() {
    let result = calculate(&classic(), &form("60", "0", "13", "45", "1")).unwrap();
    assert!(result.warnings.is_empty());
}

#[test]
fn test_classic_never_warns_about_carb() {
    let result = calculate(&classic(), &form("50", "4", "13", "45", "1")).unwrap();
    assert!(result.warnings.is_empty());
}

#[test]
fn test_oversized_carb_warning() {
    let result = calculate(&extended(), &form("60", "6", "13", "45", "2")).unwrap();
    assert_eq!(result.warnings, vec![Warning::OversizedCarb]);
}

#[test]
fn test_oversized_carb_not_reported_above_70cc() {
    let result = calculate(&extended(), &form("74", "6", "13", "45", "2")).unwrap();
    assert!(result.warnings.is_empty());
}

#[test]
fn test_exhaust_and_carb_warnings_together() {
    let result = calculate(&extended(), &form("stock", "6", "13", "45", "3")).unwrap();
    assert_eq!(result.warnings, vec![Warning::ResoExhaust, Warning::OversizedCarb]);

    let result = calculate(&extended(), &form("70", "6", "13", "45", "0")).unwrap();
    assert_eq!(result.warnings, vec![Warning::SmallExhaust, Warning::OversizedCarb]);
}

#[test]
fn test_invalid_selections() {
    let data = classic();

    let unknown_cylinder = form("74", "0", "13", "45", "2");
    assert!(matches!(
        calculate(&data, &unknown_cylinder),
        Err(TuningError::InvalidSelection(_))
    ));

    let carb_out_of_range = form("60", "5", "13", "45", "1");
    assert!(matches!(
        calculate(&data, &carb_out_of_range),
        Err(TuningError::InvalidSelection(_))
    ));

    let exhaust_out_of_range = form("60", "0", "13", "45", "4");
    assert!(matches!(
        calculate(&data, &exhaust_out_of_range),
        Err(TuningError::InvalidSelection(_))
    ));
}

#[test]
fn test_custom_step_size() {
    let mut data = classic();
    data.carb_model = CarbModel::Step {
        bonus_per_step: 2,
        steps: 8,
    };

    let result = calculate(&data, &form("50", "7", "13", "45", "1")).unwrap();
    assert_eq!(result.carb_bonus, 14);
    assert_eq!(result.total_speed, 54);
}

#[test]
fn test_huge_sprockets_are_rejected_not_wrapped() {
    for teeth in ["2147483647", "3000000000", "4294967295"] {
        let big_front = form("60", "0", teeth, "45", "1");
        assert!(
            matches!(calculate(&classic(), &big_front), Err(TuningError::InvalidSelection(_))),
            "front {} accepted",
            teeth
        );

        let big_rear = form("60", "0", "13", teeth, "1");
        assert!(
            matches!(calculate(&extended(), &big_rear), Err(TuningError::InvalidSelection(_))),
            "rear {} accepted",
            teeth
        );
    }
}

#[test]
fn test_large_representable_sprockets() {
    let result = calculate(&classic(), &form("60", "0", "113", "45", "1")).unwrap();
    assert_eq!(result.gearing_bonus, 500);
    assert_eq!(result.total_speed, 545);
}
