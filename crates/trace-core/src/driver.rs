//! Frame driver: poll parameters, sample the motion, record both paths.
//!
//! Frontends own a [`TraceDriver`] and call [`TraceDriver::step`] on their
//! own schedule, then [`TraceDriver::render`] with whatever drawing surface
//! they have. Nothing here blocks or touches the platform.

use crate::constants::{FRAMES_PER_TIME_UNIT, TRACE_CAPACITY};
use crate::motion::{self, FrameSample};
use crate::params::SimulationParameters;
use crate::trace::{TraceBuffer, TraceError};
use glam::DVec2;

/// Supplies the parameter snapshot for the next frame.
pub trait ParameterSource {
    fn snapshot(&self) -> SimulationParameters;
}

impl ParameterSource for SimulationParameters {
    fn snapshot(&self) -> SimulationParameters {
        *self
    }
}

/// What a renderer gets to look at once per frame.
#[derive(Clone, Copy, Debug)]
pub struct FrameView<'a> {
    pub trace_path: &'a TraceBuffer<DVec2>,
    pub center_path: &'a TraceBuffer<DVec2>,
    pub sample: FrameSample,
}

pub trait Renderer {
    fn draw(&mut self, view: FrameView<'_>);
}

/// Renderer that draws nothing, for headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _view: FrameView<'_>) {}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DriverSettings {
    pub trace_capacity: usize,
    pub frames_per_time_unit: f64,
}

impl Default for DriverSettings {
    fn default() -> Self {
        Self {
            trace_capacity: TRACE_CAPACITY,
            frames_per_time_unit: FRAMES_PER_TIME_UNIT,
        }
    }
}

impl DriverSettings {
    pub fn validate(&self) -> Result<(), TraceError> {
        if !(self.frames_per_time_unit.is_finite() && self.frames_per_time_unit > 0.0) {
            return Err(TraceError::InvalidConfiguration(format!(
                "frames per time unit must be a positive number (got {})",
                self.frames_per_time_unit
            )));
        }
        if self.trace_capacity == 0 {
            return Err(TraceError::InvalidConfiguration(
                "trace capacity must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

pub struct TraceDriver<S: ParameterSource> {
    source: S,
    settings: DriverSettings,
    trace_path: TraceBuffer<DVec2>,
    center_path: TraceBuffer<DVec2>,
    frame_index: u64,
    latest: Option<FrameSample>,
}

impl<S: ParameterSource> TraceDriver<S> {
    pub fn new(source: S, settings: DriverSettings) -> Result<Self, TraceError> {
        settings.validate()?;
        Ok(Self {
            source,
            settings,
            trace_path: TraceBuffer::new(settings.trace_capacity)?,
            center_path: TraceBuffer::new(settings.trace_capacity)?,
            frame_index: 0,
            latest: None,
        })
    }

    /// Sample the motion at `t` with a fresh parameter snapshot and record it.
    pub fn advance(&mut self, t: f64) -> FrameSample {
        let params = self.source.snapshot();
        let s = motion::sample(t, &params);
        self.center_path.append(s.center_position);
        self.trace_path.append(s.trace_position);
        self.latest = Some(s);
        s
    }

    /// Advance to the time of the current frame index, then move to the next frame.
    pub fn step(&mut self) -> FrameSample {
        let t = motion::frame_time(self.frame_index, self.settings.frames_per_time_unit);
        self.frame_index += 1;
        self.advance(t)
    }

    pub fn render(&self, renderer: &mut dyn Renderer) {
        if let Some(sample) = self.latest {
            renderer.draw(FrameView {
                trace_path: &self.trace_path,
                center_path: &self.center_path,
                sample,
            });
        }
    }

    /// Drop both recorded paths. Time keeps running.
    pub fn reset(&mut self) {
        self.trace_path.clear();
        self.center_path.clear();
        self.latest = None;
        log::debug!("trace paths cleared at frame {}", self.frame_index);
    }

    /// Drop both paths and start again from frame 0.
    pub fn rewind(&mut self) {
        self.reset();
        self.frame_index = 0;
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn settings(&self) -> &DriverSettings {
        &self.settings
    }

    pub fn trace_path(&self) -> &TraceBuffer<DVec2> {
        &self.trace_path
    }

    pub fn center_path(&self) -> &TraceBuffer<DVec2> {
        &self.center_path
    }

    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    pub fn latest(&self) -> Option<FrameSample> {
        self.latest
    }
}
