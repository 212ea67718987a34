use trace_core::Knob;

// Page element ids the frontend looks up.
pub const TRACE_CANVAS_ID: &str = "trace-canvas";
pub const ELLIPSE_CANVAS_ID: &str = "ellipse-canvas";
pub const RESET_BUTTON_ID: &str = "reset";

#[inline]
pub fn knob_element_id(knob: Knob) -> &'static str {
    match knob {
        Knob::PrimaryAngularSpeed => "omega-a",
        Knob::SecondaryAngularSpeed => "omega-b",
        Knob::PrimaryRadius => "radius-a",
        Knob::SecondaryRadius => "radius-b",
    }
}

/// CSS color string for a linear RGBA tuple in [0, 1].
pub fn css_rgba(color: [f32; 4]) -> String {
    let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    format!(
        "rgba({}, {}, {}, {})",
        channel(color[0]),
        channel(color[1]),
        channel(color[2]),
        color[3].clamp(0.0, 1.0)
    )
}

/// Dash pattern for the gear B center path, in device pixels.
#[inline]
pub fn center_dash_px(device_pixel_ratio: f64) -> [f64; 2] {
    let dpr = if device_pixel_ratio > 0.0 { device_pixel_ratio } else { 1.0 };
    [6.0 * dpr, 4.0 * dpr]
}
