use crate::constants::{
    ELLIPSE_ROTATION_DEG, ELLIPSE_SAMPLES, ELLIPSE_SEMI_MAJOR, ELLIPSE_SEMI_MINOR,
};
use glam::DVec2;
use std::f64::consts::TAU;

/// `samples` evenly spaced values over `[start, end]`, both ends included.
pub fn linspace(start: f64, end: f64, samples: usize) -> Vec<f64> {
    match samples {
        0 => Vec::new(),
        1 => vec![start],
        n => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// An ellipse built by scaling the unit circle and then rotating it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipseSpec {
    pub semi_major: f64,
    pub semi_minor: f64,
    pub rotation: f64, // radians, counter-clockwise
    pub samples: usize,
}

impl Default for EllipseSpec {
    fn default() -> Self {
        Self {
            semi_major: ELLIPSE_SEMI_MAJOR,
            semi_minor: ELLIPSE_SEMI_MINOR,
            rotation: ELLIPSE_ROTATION_DEG.to_radians(),
            samples: ELLIPSE_SAMPLES,
        }
    }
}

impl EllipseSpec {
    pub fn points(&self) -> Vec<DVec2> {
        let scale = DVec2::new(self.semi_major, self.semi_minor);
        let rot = DVec2::from_angle(self.rotation);
        linspace(0.0, TAU, self.samples)
            .into_iter()
            .map(|theta| rot.rotate(DVec2::new(theta.cos(), theta.sin()) * scale))
            .collect()
    }
}
