use crate::controls::{Control, KeyboardParameters};
use crate::scene::FrameGeometry;
use trace_core::{
    path_vertices, EllipseSpec, FramePacer, Knob, TraceDriver, ELLIPSE_RGBA, FRAME_INTERVAL_MS,
    MAX_STEPS_PER_RENDER,
};

/// Everything the window loop mutates between frames.
pub struct App {
    pub driver: TraceDriver<KeyboardParameters>,
    pub geometry: FrameGeometry,
    pacer: FramePacer,
    paused: bool,
    show_ellipse: bool,
    ellipse: Vec<glam::DVec2>,
}

impl App {
    pub fn new(driver: TraceDriver<KeyboardParameters>) -> Self {
        Self {
            driver,
            geometry: FrameGeometry::default(),
            pacer: FramePacer::new(FRAME_INTERVAL_MS, MAX_STEPS_PER_RENDER),
            paused: false,
            show_ellipse: false,
            ellipse: EllipseSpec::default().points(),
        }
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    /// Apply a control. Returns `false` when the app should quit.
    pub fn apply(&mut self, control: Control) -> bool {
        match control {
            Control::Nudge(knob, delta) => {
                let value = self.driver.source_mut().nudge(knob, delta);
                log::info!("{} = {:.1}", knob.label(), value);
            }
            Control::TogglePause => {
                self.paused = !self.paused;
                log::info!("paused: {}", self.paused);
            }
            Control::ClearTraces => self.driver.reset(),
            Control::ToggleEllipse => self.show_ellipse = !self.show_ellipse,
            Control::Quit => return false,
        }
        true
    }

    /// Step the driver for `dt_sec` of wall time and rebuild the geometry.
    pub fn update(&mut self, dt_sec: f64) {
        let steps = self.pacer.due(dt_sec);
        if !self.paused {
            for _ in 0..steps {
                self.driver.step();
            }
        }
        self.geometry.clear();
        self.driver.render(&mut self.geometry);
        if self.show_ellipse {
            self.geometry
                .push_strip(path_vertices(&self.ellipse, ELLIPSE_RGBA));
        }
    }

    pub fn title(&self) -> String {
        let p = self.driver.source().params;
        let knobs = Knob::ALL
            .iter()
            .map(|k| format!("{} {:.1}", k.label(), p.get(*k)))
            .collect::<Vec<_>>()
            .join(" | ");
        let status = if self.paused() { " (paused)" } else { "" };
        format!("Adjustable Gear Tracing Motion{status} - {knobs}")
    }
}
