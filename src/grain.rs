use crate::constants::{ASSET_LOAD_TIMEOUT_MS, GRAIN_VIDEO_SRC};
use crate::core::{GrainConfig, GrainEvent, GrainLoad, Reveal};
use crate::dom;
use js_sys::{Function, Promise};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Append the looping film-grain video to `<body>` and fade it in once it
/// can play through.
///
/// Returns how initialization settled, or `None` when the video failed
/// first. A slow video still resolves after the load timeout; it fades in
/// later by itself if it becomes playable, and is removed if it fails.
pub async fn load(document: &web::Document, config: &GrainConfig) -> Option<Reveal> {
    let body = document.body()?;
    let video = document
        .create_element("video")
        .ok()
        .and_then(|el| el.dyn_into::<web::HtmlVideoElement>().ok())?;
    video.style().set_css_text(&config.css_text());
    video.set_muted(true);
    video.set_loop(true);
    _ = video.set_attribute("playsinline", "");

    let state = Rc::new(RefCell::new(GrainLoad::default()));
    let target_opacity = config.target_opacity;
    let playback_rate = config.playback_rate;
    let on_ready = {
        let video = video.clone();
        let state = state.clone();
        Closure::wrap(Box::new(move || {
            if !state.borrow_mut().playable() {
                return;
            }
            video.set_playback_rate(playback_rate);
            let play = video.play().ok();
            let video = video.clone();
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Some(play) = play {
                    // Autoplay may be refused; the overlay is decorative.
                    _ = JsFuture::from(play).await;
                }
                dom::next_frame().await;
                if state.borrow().is_shown() {
                    dom::set_style(&video, "opacity", &target_opacity.to_string());
                }
            });
        }) as Box<dyn FnMut()>)
    };
    _ = video.add_event_listener_with_callback("canplaythrough", on_ready.as_ref().unchecked_ref());
    on_ready.forget();

    let on_failed = {
        let video = video.clone();
        let state = state.clone();
        Closure::once_into_js(move || {
            if state.borrow_mut().failed() {
                log::warn!("[grain] video failed to load; overlay removed");
                video.remove();
            }
        })
    };
    dom::add_once_listener(&video, "error", on_failed.unchecked_ref());

    let race = Promise::new(&mut |resolve: Function, _reject: Function| {
        let ready = resolve.clone();
        let on_ready = Closure::once_into_js(move || {
            _ = ready.call1(&JsValue::NULL, &JsValue::from_str("ready"));
        });
        dom::add_once_listener(&video, "canplaythrough", on_ready.unchecked_ref());

        let failed = resolve.clone();
        let on_error = Closure::once_into_js(move || {
            _ = failed.call1(&JsValue::NULL, &JsValue::from_str("error"));
        });
        dom::add_once_listener(&video, "error", on_error.unchecked_ref());

        if let Some(w) = web::window() {
            let on_timeout = Closure::once_into_js(move || {
                _ = resolve.call1(&JsValue::NULL, &JsValue::from_str("timeout"));
            });
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                on_timeout.unchecked_ref(),
                ASSET_LOAD_TIMEOUT_MS,
            );
        }
    });

    video.set_src(GRAIN_VIDEO_SRC);
    if body.append_child(&video).is_err() {
        return None;
    }

    let event = match JsFuture::from(race).await.ok().and_then(|v| v.as_string()).as_deref() {
        Some("ready") => GrainEvent::CanPlayThrough,
        Some("error") => GrainEvent::Error,
        _ => GrainEvent::Timeout,
    };
    if event == GrainEvent::Timeout {
        log::warn!("[grain] not playable after {}ms", ASSET_LOAD_TIMEOUT_MS);
    }
    let settled = state.borrow_mut().settle(event);
    settled
}
