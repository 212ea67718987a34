// Host-side tests for the scaled-and-rotated ellipse.

use glam::DVec2;
use std::f64::consts::{FRAC_PI_2, TAU};
use trace_core::*;

#[test]
fn linspace_includes_both_ends() {
    let v = linspace(0.0, TAU, 300);
    assert_eq!(v.len(), 300);
    assert_eq!(v[0], 0.0);
    assert_eq!(v[299], TAU);
    let step = v[1] - v[0];
    assert!((step - TAU / 299.0).abs() < 1e-12);
}

#[test]
fn linspace_edge_cases() {
    assert!(linspace(0.0, 1.0, 0).is_empty());
    assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    assert_eq!(linspace(-1.0, 1.0, 3), vec![-1.0, 0.0, 1.0]);
}

#[test]
fn default_ellipse_matches_reference_plot() {
    let e = EllipseSpec::default();
    assert_eq!(e.semi_major, 5.0);
    assert_eq!(e.semi_minor, 2.0);
    assert!((e.rotation - 30f64.to_radians()).abs() < 1e-15);
    assert_eq!(e.points().len(), 300);
}

#[test]
fn points_satisfy_rotated_ellipse_equation() {
    let e = EllipseSpec::default();
    let (s, c) = e.rotation.sin_cos();
    for p in e.points() {
        // rotate back into the ellipse's own frame
        let u = p.x * c + p.y * s;
        let v = -p.x * s + p.y * c;
        let f = (u / e.semi_major).powi(2) + (v / e.semi_minor).powi(2);
        assert!((f - 1.0).abs() < 1e-9, "f={f}");
    }
}

#[test]
fn curve_is_closed() {
    let pts = EllipseSpec::default().points();
    let first = pts[0];
    let last = pts[pts.len() - 1];
    assert!((first - last).length() < 1e-9);
}

#[test]
fn first_point_is_rotated_major_axis() {
    let e = EllipseSpec::default();
    let p = e.points()[0];
    let expected = DVec2::new(5.0 * e.rotation.cos(), 5.0 * e.rotation.sin());
    assert!((p - expected).length() < 1e-12);
}

#[test]
fn quarter_turn_rotation_swaps_axes() {
    let e = EllipseSpec {
        semi_major: 4.0,
        semi_minor: 1.0,
        rotation: FRAC_PI_2,
        samples: 5,
    };
    let pts = e.points();
    // θ = 0 lands on +y, θ = π/2 on -x
    assert!((pts[0] - DVec2::new(0.0, 4.0)).length() < 1e-12);
    assert!((pts[1] - DVec2::new(-1.0, 0.0)).length() < 1e-12);
}
