#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use trace_core::{
    DriverSettings, EllipseSpec, FramePacer, TraceDriver, FRAME_INTERVAL_MS, MAX_STEPS_PER_RENDER,
};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod canvas;
mod dom;
mod frame;
mod view;

use canvas::{CanvasRenderer, SliderParameters};
use frame::FrameContext;
use view::{ELLIPSE_CANVAS_ID, RESET_BUTTON_ID, TRACE_CANVAS_ID};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("trace-web starting");

    init().map_err(|e| {
        log::error!("init error: {e:?}");
        JsValue::from_str(&e.to_string())
    })
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, TRACE_CANVAS_ID)?;
    dom::sync_canvas_backing_size(&canvas);
    {
        let canvas_resize = canvas.clone();
        dom::add_resize_listener(move || dom::sync_canvas_backing_size(&canvas_resize));
    }

    // static plot, only when the page has room for it
    if let Some(el) = document.get_element_by_id(ELLIPSE_CANVAS_ID) {
        match dom::element_by_id::<web::HtmlCanvasElement>(&document, ELLIPSE_CANVAS_ID) {
            Ok(ellipse_canvas) => {
                dom::sync_canvas_backing_size(&ellipse_canvas);
                canvas::draw_ellipse(&ellipse_canvas, &EllipseSpec::default())?;
            }
            Err(e) => log::warn!("skipping ellipse plot on {}: {e}", el.tag_name()),
        }
    }

    let source = SliderParameters::from_document(&document)?;
    let driver = TraceDriver::new(source, DriverSettings::default())?;
    let frame_ctx = Rc::new(RefCell::new(FrameContext {
        driver,
        renderer: CanvasRenderer::new(canvas)?,
        pacer: FramePacer::new(FRAME_INTERVAL_MS, MAX_STEPS_PER_RENDER),
        last_instant: Instant::now(),
    }));

    {
        let frame_ctx = frame_ctx.clone();
        dom::add_click_listener(&document, RESET_BUTTON_ID, move || {
            frame_ctx.borrow_mut().driver.reset();
            log::info!("traces cleared");
        });
    }

    frame::start_loop(frame_ctx);
    Ok(())
}
