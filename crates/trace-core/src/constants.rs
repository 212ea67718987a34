// Shared tuning constants used by both web and native frontends.

// Knob defaults and slider bounds
pub const DEFAULT_PRIMARY_ANGULAR_SPEED: f64 = 1.0; // gear A, rad per time unit
pub const DEFAULT_SECONDARY_ANGULAR_SPEED: f64 = 4.0; // gear B, rad per time unit
pub const DEFAULT_PRIMARY_RADIUS: f64 = 2.0; // origin -> gear B center
pub const DEFAULT_SECONDARY_RADIUS: f64 = 1.0; // gear B center -> tracing point
pub const KNOB_MIN: f64 = 0.1;
pub const KNOB_MAX: f64 = 5.0;
pub const KNOB_STEP: f64 = 0.1; // keyboard nudge per press

// Driver timing
pub const TRACE_CAPACITY: usize = 2000; // points kept per path
pub const FRAMES_PER_TIME_UNIT: f64 = 50.0; // frame index -> simulated time
pub const FRAME_INTERVAL_MS: u64 = 20; // wall-clock pacing between steps
pub const MAX_STEPS_PER_RENDER: u32 = 5; // catch-up limit after a stall

// Scene layout
pub const SCENE_HALF_EXTENT: f32 = 10.0; // visible world is [-10, 10] on the short axis
pub const TRACE_DOT_RADIUS: f32 = 0.15; // world-space radius of the tracing point marker

// Ellipse overlay
pub const ELLIPSE_SEMI_MAJOR: f64 = 5.0;
pub const ELLIPSE_SEMI_MINOR: f64 = 2.0;
pub const ELLIPSE_ROTATION_DEG: f64 = 30.0;
pub const ELLIPSE_SAMPLES: usize = 300;

// Palette
pub const BACKGROUND_RGB: [f32; 3] = [0.02, 0.02, 0.04];
pub const TRACE_RGBA: [f32; 4] = [0.3, 0.6, 1.0, 1.0]; // trace path
pub const CENTER_RGBA: [f32; 4] = [0.9, 0.9, 0.9, 0.5]; // gear B center path, dashed in the plot
pub const DOT_RGBA: [f32; 4] = [0.95, 0.2, 0.2, 1.0]; // tracing point
pub const ELLIPSE_RGBA: [f32; 4] = [0.3, 0.9, 0.4, 1.0];
