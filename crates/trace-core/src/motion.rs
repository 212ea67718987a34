//! Two-gear motion model.
//!
//! Gear B's center orbits the origin at `primary_radius` with angular speed
//! `primary_angular_speed`. The tracing point orbits gear B's center at
//! `secondary_radius` with `secondary_angular_speed`. Both positions are pure
//! functions of time and the parameter snapshot.

use crate::params::SimulationParameters;
use glam::DVec2;

/// Positions of both moving points at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSample {
    pub time: f64,
    pub center_position: DVec2,
    pub trace_position: DVec2,
}

#[inline]
fn orbit(radius: f64, angular_speed: f64, t: f64) -> DVec2 {
    let angle = angular_speed * t;
    DVec2::new(radius * angle.cos(), radius * angle.sin())
}

/// Secondary rotation center at time `t`.
#[inline]
pub fn center_position(t: f64, p: &SimulationParameters) -> DVec2 {
    orbit(p.primary_radius, p.primary_angular_speed, t)
}

/// Tracing point at time `t`.
#[inline]
pub fn trace_position(t: f64, p: &SimulationParameters) -> DVec2 {
    center_position(t, p) + orbit(p.secondary_radius, p.secondary_angular_speed, t)
}

pub fn sample(t: f64, p: &SimulationParameters) -> FrameSample {
    let center = center_position(t, p);
    FrameSample {
        time: t,
        center_position: center,
        trace_position: center + orbit(p.secondary_radius, p.secondary_angular_speed, t),
    }
}

/// Simulated time for a frame index.
#[inline]
pub fn frame_time(frame_index: u64, frames_per_time_unit: f64) -> f64 {
    frame_index as f64 / frames_per_time_unit
}
