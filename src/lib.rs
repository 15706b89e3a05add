#![cfg(target_arch = "wasm32")]
use effects::ScrollEffectsCoordinator;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod cloud_layer;
mod constants;
mod core;
mod dom;
mod effects;
mod frame;
mod grain;
mod sections;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("lymina-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Scroll effects first so the hero is positioned before anything loads.
    let effects = Rc::new(RefCell::new(ScrollEffectsCoordinator::new(&window, &document)));
    effects::wire(&effects);

    if let Err(e) = sections::reveal::observe_sections(&document) {
        log::warn!("[reveal] disabled: {:?}", e);
    }
    sections::social_bar::wire(&document, &window);
    sections::tour::render(&document);
    let gallery = sections::gallery::render(&document);
    sections::newsletter::wire(&document);
    if let Err(e) = sections::banner::start(&document, &window) {
        log::warn!("[banner] disabled: {:?}", e);
    }

    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext::new(
        effects.clone(),
        gallery,
    ))));

    ScrollEffectsCoordinator::load_assets(effects).await;
    log::info!("LYMINA website initialized");
    Ok(())
}
