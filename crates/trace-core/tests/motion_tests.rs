// Host-side tests for the gear motion model.

use rand::prelude::*;
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use trace_core::*;

const EPS: f64 = 1e-9;

fn reference_params() -> SimulationParameters {
    SimulationParameters {
        primary_angular_speed: 1.0,
        secondary_angular_speed: 4.0,
        primary_radius: 2.0,
        secondary_radius: 1.0,
    }
}

fn random_params(rng: &mut StdRng) -> SimulationParameters {
    SimulationParameters {
        primary_angular_speed: rng.gen_range(-5.0..5.0),
        secondary_angular_speed: rng.gen_range(-5.0..5.0),
        primary_radius: rng.gen_range(0.1..5.0),
        secondary_radius: rng.gen_range(0.1..5.0),
    }
}

#[test]
fn start_of_motion_lies_on_x_axis() {
    let p = reference_params();
    let c = center_position(0.0, &p);
    let t = trace_position(0.0, &p);
    assert!((c.x - 2.0).abs() < EPS && c.y.abs() < EPS);
    assert!((t.x - 3.0).abs() < EPS && t.y.abs() < EPS);
}

#[test]
fn quarter_turn_of_gear_a_is_full_turn_of_gear_b() {
    let p = reference_params();
    let c = center_position(FRAC_PI_2, &p);
    let t = trace_position(FRAC_PI_2, &p);
    assert!(c.x.abs() < EPS);
    assert!((c.y - 2.0).abs() < EPS);
    assert!((t.x - 1.0).abs() < EPS);
    assert!((t.y - 2.0).abs() < EPS);
}

#[test]
fn center_stays_on_primary_circle() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..500 {
        let p = random_params(&mut rng);
        let t = rng.gen_range(-1_000.0..1_000.0);
        let r = center_position(t, &p).length();
        assert!((r - p.primary_radius).abs() < 1e-9, "t={t} r={r}");
    }
}

#[test]
fn tracing_point_stays_on_secondary_circle() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..500 {
        let p = random_params(&mut rng);
        let t = rng.gen_range(-1_000.0..1_000.0);
        let arm = trace_position(t, &p) - center_position(t, &p);
        assert!((arm.length() - p.secondary_radius).abs() < 1e-9);
    }
}

#[test]
fn motion_repeats_after_common_period() {
    // 1 and 4 rad/unit both complete whole turns after 2π
    let p = reference_params();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..100 {
        let t = rng.gen_range(-50.0..50.0);
        let a = trace_position(t, &p);
        let b = trace_position(t + TAU, &p);
        assert!((a - b).length() < 1e-9);
    }
}

#[test]
fn negative_and_repeated_times_are_fine() {
    let p = reference_params();
    let a = trace_position(-PI, &p);
    let b = trace_position(-PI, &p);
    assert_eq!(a, b);
    // cos(-π)=-1, cos(-4π)=1
    assert!((a.x - (-2.0 + 1.0)).abs() < EPS);
}

#[test]
fn sample_matches_individual_functions() {
    let p = reference_params();
    let s = sample(1.234, &p);
    assert_eq!(s.time, 1.234);
    assert!((s.center_position - center_position(1.234, &p)).length() < EPS);
    assert!((s.trace_position - trace_position(1.234, &p)).length() < EPS);
}

#[test]
fn nan_time_propagates() {
    let p = reference_params();
    let t = trace_position(f64::NAN, &p);
    assert!(t.x.is_nan() && t.y.is_nan());
}

#[test]
fn zero_speeds_freeze_the_mechanism() {
    let p = SimulationParameters {
        primary_angular_speed: 0.0,
        secondary_angular_speed: 0.0,
        ..reference_params()
    };
    assert_eq!(trace_position(0.0, &p), trace_position(123.0, &p));
}

#[test]
fn frame_time_uses_frames_per_unit() {
    assert_eq!(frame_time(0, 50.0), 0.0);
    assert!((frame_time(50, 50.0) - 1.0).abs() < EPS);
    assert!((frame_time(25, FRAMES_PER_TIME_UNIT) - 0.5).abs() < EPS);
}
