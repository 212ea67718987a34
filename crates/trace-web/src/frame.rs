use crate::canvas::{CanvasRenderer, SliderParameters};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use trace_core::{FramePacer, TraceDriver};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub driver: TraceDriver<SliderParameters>,
    pub renderer: CanvasRenderer,
    pub pacer: FramePacer,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f64();
        self.last_instant = now;

        for _ in 0..self.pacer.due(dt_sec) {
            self.driver.step();
        }
        self.driver.render(&mut self.renderer);
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn request_frame(tick: &Tick) {
    let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref().map(|c| c.as_ref().clone()))
    else {
        return;
    };
    if let Err(e) = w.request_animation_frame(cb.unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {e:?}");
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Tick = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}
