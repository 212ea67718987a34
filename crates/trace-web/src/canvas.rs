use crate::dom;
use crate::view::{center_dash_px, css_rgba, knob_element_id};
use glam::DVec2;
use trace_core::{
    EllipseSpec, FrameView, Knob, ParameterSource, Renderer, SimulationParameters, Viewport,
    BACKGROUND_RGB, CENTER_RGBA, DOT_RGBA, ELLIPSE_RGBA, KNOB_STEP, SCENE_HALF_EXTENT,
    TRACE_DOT_RADIUS, TRACE_RGBA,
};
use wasm_bindgen::JsValue;
use web_sys as web;

const TITLE: &str = "Adjustable Gear Tracing Motion";

/// Reads the four range inputs on every snapshot.
pub struct SliderParameters {
    inputs: Vec<(Knob, web::HtmlInputElement)>,
}

impl SliderParameters {
    pub fn from_document(document: &web::Document) -> anyhow::Result<Self> {
        let mut inputs = Vec::with_capacity(Knob::ALL.len());
        for knob in Knob::ALL {
            let input: web::HtmlInputElement = dom::element_by_id(document, knob_element_id(knob))?;
            let range = knob.range();
            input.set_min(&range.min.to_string());
            input.set_max(&range.max.to_string());
            input.set_step(&KNOB_STEP.to_string());
            input.set_value_as_number(range.default);
            inputs.push((knob, input));
        }
        Ok(Self { inputs })
    }
}

impl ParameterSource for SliderParameters {
    fn snapshot(&self) -> SimulationParameters {
        let mut params = SimulationParameters::default();
        for (knob, input) in &self.inputs {
            // NaN while the field is being edited; `set` keeps the default then
            params.set(*knob, input.value_as_number());
        }
        params
    }
}

fn stroke_polyline<'a>(
    ctx: &web::CanvasRenderingContext2d,
    viewport: &Viewport,
    points: impl IntoIterator<Item = &'a DVec2>,
) {
    ctx.begin_path();
    let mut first = true;
    for p in points {
        let px = viewport.to_pixels(*p);
        if first {
            ctx.move_to(px.x as f64, px.y as f64);
            first = false;
        } else {
            ctx.line_to(px.x as f64, px.y as f64);
        }
    }
    ctx.stroke();
}

fn clear(ctx: &web::CanvasRenderingContext2d, viewport: &Viewport) {
    let [r, g, b] = BACKGROUND_RGB;
    ctx.set_fill_style_str(&css_rgba([r, g, b, 1.0]));
    ctx.fill_rect(0.0, 0.0, viewport.width as f64, viewport.height as f64);
}

fn set_dash(ctx: &web::CanvasRenderingContext2d, dash: &[f64]) {
    let pattern = js_sys::Array::new();
    for d in dash {
        pattern.push(&JsValue::from_f64(*d));
    }
    if let Err(e) = ctx.set_line_dash(&pattern) {
        log::warn!("setLineDash failed: {e:?}");
    }
}

pub struct CanvasRenderer {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = dom::context_2d(&canvas)?;
        Ok(Self { canvas, ctx })
    }

    fn viewport(&self) -> Viewport {
        Viewport::new(SCENE_HALF_EXTENT, self.canvas.width(), self.canvas.height())
    }
}

impl Renderer for CanvasRenderer {
    fn draw(&mut self, view: FrameView<'_>) {
        let viewport = self.viewport();
        let dpr = dom::device_pixel_ratio();
        let ctx = &self.ctx;
        clear(ctx, &viewport);

        ctx.set_line_width(1.0 * dpr);
        set_dash(ctx, &center_dash_px(dpr));
        ctx.set_stroke_style_str(&css_rgba(CENTER_RGBA));
        stroke_polyline(ctx, &viewport, view.center_path);

        set_dash(ctx, &[]);
        ctx.set_line_width(1.5 * dpr);
        ctx.set_stroke_style_str(&css_rgba(TRACE_RGBA));
        stroke_polyline(ctx, &viewport, view.trace_path);

        let dot = viewport.to_pixels(view.sample.trace_position);
        let radius = viewport.scale_to_pixels(TRACE_DOT_RADIUS) as f64;
        ctx.set_fill_style_str(&css_rgba(DOT_RGBA));
        ctx.begin_path();
        if ctx
            .arc(dot.x as f64, dot.y as f64, radius.max(2.0), 0.0, std::f64::consts::TAU)
            .is_ok()
        {
            ctx.fill();
        }

        ctx.set_fill_style_str(&css_rgba(TRACE_RGBA));
        ctx.set_font(&format!("{}px sans-serif", (16.0 * dpr).round()));
        if let Err(e) = ctx.fill_text(TITLE, 12.0 * dpr, 24.0 * dpr) {
            log::warn!("fillText failed: {e:?}");
        }
    }
}

/// One-off plot of the reference ellipse.
pub fn draw_ellipse(canvas: &web::HtmlCanvasElement, spec: &EllipseSpec) -> anyhow::Result<()> {
    let ctx = dom::context_2d(canvas)?;
    let viewport = Viewport::new(
        (spec.semi_major.max(spec.semi_minor) * 1.2) as f32,
        canvas.width(),
        canvas.height(),
    );
    clear(&ctx, &viewport);

    let dpr = dom::device_pixel_ratio();
    let extents = viewport.half_extents().as_dvec2();
    ctx.set_line_width(1.0 * dpr);
    ctx.set_stroke_style_str(&css_rgba(CENTER_RGBA));
    stroke_polyline(&ctx, &viewport, &[DVec2::new(-extents.x, 0.0), DVec2::new(extents.x, 0.0)]);
    stroke_polyline(&ctx, &viewport, &[DVec2::new(0.0, -extents.y), DVec2::new(0.0, extents.y)]);

    ctx.set_line_width(2.0 * dpr);
    ctx.set_stroke_style_str(&css_rgba(ELLIPSE_RGBA));
    stroke_polyline(&ctx, &viewport, &spec.points());
    log::debug!("ellipse drawn with {} samples", spec.samples);
    Ok(())
}
