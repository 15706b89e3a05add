use crate::constants::{BANNER_TICK_MS, FOOTER_SELECTOR, RELEASE, RELEASE_BANNER_CLASS};
use crate::core::banner::{footer_fade, ReleaseConfig};
use crate::dom;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

struct Banner {
    root: web::HtmlElement,
    text: web::Element,
    link: web::Element,
}

impl Banner {
    fn create(document: &web::Document, body: &web::HtmlElement) -> anyhow::Result<Self> {
        let root: web::HtmlElement = document
            .create_element("div")
            .map_err(dom::js_err)?
            .dyn_into()
            .map_err(|_| anyhow::anyhow!("div is not an HtmlElement"))?;
        root.set_class_name(RELEASE_BANNER_CLASS);

        let text = document.create_element("span").map_err(dom::js_err)?;
        text.set_class_name("release-text");
        let link = document.create_element("a").map_err(dom::js_err)?;
        link.set_class_name("release-link");
        link.set_attribute("target", "_blank").map_err(dom::js_err)?;
        root.append_child(&text).map_err(dom::js_err)?;
        root.append_child(&link).map_err(dom::js_err)?;

        body.insert_before(&root, body.first_child().as_ref())
            .map_err(dom::js_err)?;
        Ok(Self { root, text, link })
    }

    fn update(&self, config: &ReleaseConfig, release_ms: f64) {
        let content = config.content(release_ms - js_sys::Date::now());
        self.text.set_text_content(Some(&content.text));
        self.link.set_text_content(Some(content.link_label));
        _ = self.link.set_attribute("href", content.link_href);
    }

    fn fade_for_footer(&self, document: &web::Document, window: &web::Window) {
        let Ok(Some(footer)) = document.query_selector(FOOTER_SELECTOR) else {
            return;
        };
        let state = dom::scroll_state(window);
        let fade = footer_fade(footer.get_bounding_client_rect().top(), state.viewport_height);
        dom::set_style(&self.root, "opacity", &fade.opacity.to_string());
        dom::set_style(
            &self.root,
            "pointer-events",
            if fade.interactive { "auto" } else { "none" },
        );
        dom::set_style(
            &self.root,
            "visibility",
            if fade.visible { "visible" } else { "hidden" },
        );
    }
}

/// Insert the release banner, tick the countdown every second and fade it
/// out as the footer comes into view.
pub fn start(document: &web::Document, window: &web::Window) -> anyhow::Result<()> {
    if !RELEASE.enabled {
        return Ok(());
    }
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;
    let release_ms = js_sys::Date::new(&JsValue::from_str(RELEASE.release_at)).get_time();
    if release_ms.is_nan() {
        anyhow::bail!("unparseable release date {:?}", RELEASE.release_at);
    }
    let banner = std::rc::Rc::new(Banner::create(document, &body)?);
    banner.update(&RELEASE, release_ms);

    let ticking = banner.clone();
    let tick = Closure::wrap(Box::new(move || {
        ticking.update(&RELEASE, release_ms);
    }) as Box<dyn FnMut()>);
    window
        .set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            BANNER_TICK_MS,
        )
        .map_err(dom::js_err)?;
    tick.forget();

    let doc = document.clone();
    let win = window.clone();
    dom::add_window_listener("scroll", true, move |_: web::Event| {
        banner.fade_for_footer(&doc, &win);
    });
    log::info!("[banner] {} countdown started", RELEASE.name);
    Ok(())
}
