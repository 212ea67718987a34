//! Simulation parameter snapshots and the knobs that tune them.
//!
//! A [`SimulationParameters`] value is what a frontend's sliders or keys read
//! out once per frame. Building one directly keeps the values as given; going
//! through a [`Knob`] clamps into the slider range.

use crate::constants::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    pub primary_angular_speed: f64,
    pub secondary_angular_speed: f64,
    pub primary_radius: f64,
    pub secondary_radius: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            primary_angular_speed: DEFAULT_PRIMARY_ANGULAR_SPEED,
            secondary_angular_speed: DEFAULT_SECONDARY_ANGULAR_SPEED,
            primary_radius: DEFAULT_PRIMARY_RADIUS,
            secondary_radius: DEFAULT_SECONDARY_RADIUS,
        }
    }
}

impl SimulationParameters {
    pub fn get(&self, knob: Knob) -> f64 {
        match knob {
            Knob::PrimaryAngularSpeed => self.primary_angular_speed,
            Knob::SecondaryAngularSpeed => self.secondary_angular_speed,
            Knob::PrimaryRadius => self.primary_radius,
            Knob::SecondaryRadius => self.secondary_radius,
        }
    }

    /// Set a knob, clamped to its range. Non-finite values are ignored.
    pub fn set(&mut self, knob: Knob, value: f64) {
        if !value.is_finite() {
            return;
        }
        let v = knob.range().clamp(value);
        match knob {
            Knob::PrimaryAngularSpeed => self.primary_angular_speed = v,
            Knob::SecondaryAngularSpeed => self.secondary_angular_speed = v,
            Knob::PrimaryRadius => self.primary_radius = v,
            Knob::SecondaryRadius => self.secondary_radius = v,
        }
    }

    pub fn nudge(&mut self, knob: Knob, delta: f64) {
        self.set(knob, self.get(knob) + delta);
    }

    /// Largest distance the tracing point can reach from the origin.
    pub fn reach(&self) -> f64 {
        self.primary_radius.abs() + self.secondary_radius.abs()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Knob {
    PrimaryAngularSpeed,
    SecondaryAngularSpeed,
    PrimaryRadius,
    SecondaryRadius,
}

impl Knob {
    pub const ALL: [Knob; 4] = [
        Knob::PrimaryAngularSpeed,
        Knob::SecondaryAngularSpeed,
        Knob::PrimaryRadius,
        Knob::SecondaryRadius,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Knob::PrimaryAngularSpeed => "Gear A Speed",
            Knob::SecondaryAngularSpeed => "Gear B Speed",
            Knob::PrimaryRadius => "Distance A to B",
            Knob::SecondaryRadius => "Distance B to Trace",
        }
    }

    pub fn range(self) -> KnobRange {
        let default = SimulationParameters::default().get(self);
        KnobRange {
            min: KNOB_MIN,
            max: KNOB_MAX,
            default,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KnobRange {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl KnobRange {
    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}
