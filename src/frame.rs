use crate::effects::ScrollEffectsCoordinator;
use crate::sections::gallery::GalleryScroller;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Longest frame delta fed to animations; a backgrounded tab resumes
/// smoothly instead of jumping.
const MAX_FRAME_DT_MS: f64 = 100.0;

pub struct FrameContext {
    pub effects: Rc<RefCell<ScrollEffectsCoordinator>>,
    pub gallery: Option<GalleryScroller>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(
        effects: Rc<RefCell<ScrollEffectsCoordinator>>,
        gallery: Option<GalleryScroller>,
    ) -> Self {
        Self {
            effects,
            gallery,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_ms = (dt.as_secs_f64() * 1000.0).min(MAX_FRAME_DT_MS);

        self.effects.borrow_mut().animate(dt_ms);
        if let Some(gallery) = self.gallery.as_mut() {
            gallery.step(dt_ms / 1000.0);
        }
    }
}

/// Free-running `requestAnimationFrame` loop; lives until the page unloads.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
