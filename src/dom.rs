use crate::core::ScrollState;
use js_sys::{Function, Promise};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Lift a JS exception into `anyhow`.
pub fn js_err(e: JsValue) -> anyhow::Error {
    anyhow::anyhow!("{:?}", e)
}

/// First element matching `selector`, as an `HtmlElement`. Missing or
/// non-HTML elements yield `None`.
pub fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

/// Current scroll offset and viewport size.
pub fn scroll_state(window: &web::Window) -> ScrollState {
    let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    ScrollState::new(
        window.scroll_y().unwrap_or(0.0),
        dim(window.inner_width()),
        dim(window.inner_height()),
    )
}

/// Resolved value of a CSS custom property on the document root, trimmed.
/// Empty when unset.
pub fn css_var(window: &web::Window, document: &web::Document, name: &str) -> String {
    document
        .document_element()
        .and_then(|root| window.get_computed_style(&root).ok().flatten())
        .and_then(|style| style.get_property_value(name).ok())
        .map(|v| v.trim().to_string())
        .unwrap_or_default()
}

/// Attach a page-lifetime listener to the window.
pub fn add_window_listener<E: wasm_bindgen::convert::FromWasmAbi + 'static>(
    event: &str,
    passive: bool,
    handler: impl FnMut(E) + 'static,
) {
    let Some(window) = web::window() else {
        return;
    };
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let options = web::AddEventListenerOptions::new();
    options.set_passive(passive);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

/// Listener removed by the browser after its first call.
pub fn add_once_listener(target: &web::EventTarget, event: &str, callback: &Function) {
    let options = web::AddEventListenerOptions::new();
    options.set_once(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event, callback, &options,
    );
}

/// Resolves after `ms` milliseconds.
pub async fn sleep_ms(ms: i32) {
    let promise = Promise::new(&mut |resolve: Function, _reject: Function| {
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms);
        } else {
            _ = resolve.call0(&JsValue::NULL);
        }
    });
    _ = JsFuture::from(promise).await;
}

/// Resolves on the next animation frame.
pub async fn next_frame() {
    let promise = Promise::new(&mut |resolve: Function, _reject: Function| {
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(&resolve);
        } else {
            _ = resolve.call0(&JsValue::NULL);
        }
    });
    _ = JsFuture::from(promise).await;
}

/// Resolves once the image has loaded or failed, or after `timeout_ms`.
/// Returns `true` when the image settled first; already-complete images
/// return immediately.
pub async fn image_settled_or_timeout(img: &web::HtmlImageElement, timeout_ms: i32) -> bool {
    if img.complete() {
        return true;
    }
    let loaded = Promise::new(&mut |resolve: Function, _reject: Function| {
        let on_done = resolve.clone();
        let settle = Closure::once_into_js(move || {
            _ = on_done.call1(&JsValue::NULL, &JsValue::TRUE);
        });
        add_once_listener(img, "load", settle.unchecked_ref());
        add_once_listener(img, "error", settle.unchecked_ref());
        if let Some(w) = web::window() {
            let on_timeout = Closure::once_into_js(move || {
                _ = resolve.call1(&JsValue::NULL, &JsValue::FALSE);
            });
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(
                on_timeout.unchecked_ref(),
                timeout_ms,
            );
        }
    });
    JsFuture::from(loaded)
        .await
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}
