use trace_core::{Knob, SimulationParameters, KNOB_STEP};
use winit::keyboard::NamedKey;

/// Something a key press asks the app to do.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Control {
    Nudge(Knob, f64),
    TogglePause,
    ClearTraces,
    ToggleEllipse,
    Quit,
}

#[inline]
pub fn control_for_key(key: &str) -> Option<Control> {
    match key {
        "q" | "Q" => Some(Control::Nudge(Knob::PrimaryAngularSpeed, KNOB_STEP)),
        "a" | "A" => Some(Control::Nudge(Knob::PrimaryAngularSpeed, -KNOB_STEP)),
        "w" | "W" => Some(Control::Nudge(Knob::SecondaryAngularSpeed, KNOB_STEP)),
        "s" | "S" => Some(Control::Nudge(Knob::SecondaryAngularSpeed, -KNOB_STEP)),
        "e" | "E" => Some(Control::Nudge(Knob::PrimaryRadius, KNOB_STEP)),
        "d" | "D" => Some(Control::Nudge(Knob::PrimaryRadius, -KNOB_STEP)),
        "r" | "R" => Some(Control::Nudge(Knob::SecondaryRadius, KNOB_STEP)),
        "f" | "F" => Some(Control::Nudge(Knob::SecondaryRadius, -KNOB_STEP)),
        "c" | "C" => Some(Control::ClearTraces),
        _ => None,
    }
}

#[inline]
pub fn control_for_named(key: NamedKey) -> Option<Control> {
    match key {
        NamedKey::Space => Some(Control::TogglePause),
        NamedKey::Tab => Some(Control::ToggleEllipse),
        NamedKey::Escape => Some(Control::Quit),
        _ => None,
    }
}

/// Keyboard-tuned parameters, standing in for the slider panel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct KeyboardParameters {
    pub params: SimulationParameters,
}

impl KeyboardParameters {
    pub fn nudge(&mut self, knob: Knob, delta: f64) -> f64 {
        self.params.nudge(knob, delta);
        self.params.get(knob)
    }
}

impl trace_core::ParameterSource for KeyboardParameters {
    fn snapshot(&self) -> SimulationParameters {
        self.params
    }
}
