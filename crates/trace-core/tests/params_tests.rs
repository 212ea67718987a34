// Host-side tests for parameter defaults, knob ranges and constants.

use trace_core::*;

#[test]
fn defaults_match_reference_sliders() {
    let p = SimulationParameters::default();
    assert_eq!(p.primary_angular_speed, 1.0);
    assert_eq!(p.secondary_angular_speed, 4.0);
    assert_eq!(p.primary_radius, 2.0);
    assert_eq!(p.secondary_radius, 1.0);
}

#[test]
fn every_knob_shares_slider_bounds() {
    for knob in Knob::ALL {
        let r = knob.range();
        assert_eq!(r.min, 0.1);
        assert_eq!(r.max, 5.0);
        assert!(r.contains(r.default), "{:?}", knob);
        assert_eq!(r.default, SimulationParameters::default().get(knob));
    }
}

#[test]
fn set_clamps_into_range() {
    let mut p = SimulationParameters::default();
    p.set(Knob::PrimaryRadius, 9.0);
    assert_eq!(p.primary_radius, 5.0);
    p.set(Knob::SecondaryAngularSpeed, -3.0);
    assert_eq!(p.secondary_angular_speed, 0.1);
    p.set(Knob::PrimaryAngularSpeed, 2.5);
    assert_eq!(p.primary_angular_speed, 2.5);
}

#[test]
fn non_finite_values_are_ignored() {
    let mut p = SimulationParameters::default();
    p.set(Knob::SecondaryRadius, f64::NAN);
    p.set(Knob::PrimaryRadius, f64::INFINITY);
    assert_eq!(p, SimulationParameters::default());
}

#[test]
fn nudge_steps_and_saturates() {
    let mut p = SimulationParameters::default();
    p.nudge(Knob::SecondaryRadius, KNOB_STEP);
    assert!((p.secondary_radius - 1.1).abs() < 1e-12);
    for _ in 0..100 {
        p.nudge(Knob::SecondaryRadius, -KNOB_STEP);
    }
    assert_eq!(p.secondary_radius, KNOB_MIN);
}

#[test]
fn direct_construction_is_not_clamped() {
    let p = SimulationParameters {
        primary_angular_speed: -2.0,
        ..SimulationParameters::default()
    };
    assert_eq!(p.primary_angular_speed, -2.0);
}

#[test]
fn labels_are_distinct() {
    let mut labels: Vec<&str> = Knob::ALL.iter().map(|k| k.label()).collect();
    labels.dedup();
    assert_eq!(labels.len(), 4);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_consistent() {
    assert!(TRACE_CAPACITY > 0);
    assert!(FRAMES_PER_TIME_UNIT > 0.0);
    assert!(FRAME_INTERVAL_MS > 0);
    assert!(MAX_STEPS_PER_RENDER >= 1);
    // the default mechanism fits inside the visible window
    assert!(SimulationParameters::default().reach() < SCENE_HALF_EXTENT as f64);
    assert!(2.0 * KNOB_MAX <= SCENE_HALF_EXTENT as f64);
    assert!(ELLIPSE_SEMI_MAJOR >= ELLIPSE_SEMI_MINOR);
}
