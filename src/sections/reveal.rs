use crate::constants::{REVEALED_CLASS, REVEAL_SECTIONS_SELECTOR, REVEAL_THRESHOLD};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Toggle `is-visible` on each `main section` as it enters or leaves the
/// viewport.
pub fn observe_sections(document: &web::Document) -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, _: JsValue| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                continue;
            };
            let class_list = entry.target().class_list();
            if entry.is_intersecting() {
                _ = class_list.add_1(REVEALED_CLASS);
            } else {
                _ = class_list.remove_1(REVEALED_CLASS);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, JsValue)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow::anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    let sections = dom::query_all(document, REVEAL_SECTIONS_SELECTOR);
    for section in &sections {
        observer.observe(section);
    }
    log::info!("[reveal] observing {} sections", sections.len());
    Ok(())
}
