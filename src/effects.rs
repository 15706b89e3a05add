use crate::cloud_layer::CloudLayer;
use crate::constants::*;
use crate::core::constants::{LOGO_FADE_IN_SEC, SUN_FADE_IN_SEC};
use crate::core::parallax::opacity_transition;
use crate::core::{
    BackgroundConfig, CloudConfig, FadeGate, GrainConfig, LogoConfig, Reveal, ScrollState,
    SunConfig, Visibility,
};
use crate::dom;
use crate::grain;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Maps scroll position to the hero visuals: sun, logo, page background
/// and the cloud layer. One instance per page load, shared with the event
/// closures it installs.
pub struct ScrollEffectsCoordinator {
    window: web::Window,
    document: web::Document,
    body: Option<web::HtmlElement>,
    sun: Option<web::HtmlImageElement>,
    logo: Option<web::HtmlImageElement>,
    sun_config: SunConfig,
    logo_config: LogoConfig,
    background: Option<BackgroundConfig>,
    sun_visibility: Visibility,
    logo_gate: FadeGate,
    clouds: Option<CloudLayer>,
    state: ScrollState,
}

fn query_image(document: &web::Document, selector: &str) -> Option<web::HtmlImageElement> {
    let el = dom::query_html(document, selector)?;
    match el.dyn_into::<web::HtmlImageElement>() {
        Ok(img) => Some(img),
        Err(_) => {
            log::warn!("[effects] {} is not an <img>; skipping", selector);
            None
        }
    }
}

fn read_background(window: &web::Window, document: &web::Document) -> Option<BackgroundConfig> {
    let from = dom::css_var(window, document, CSS_COLOR_FROM);
    let to = dom::css_var(window, document, CSS_COLOR_TO);
    let threshold = dom::css_var(window, document, CSS_BG_THRESHOLD);
    match BackgroundConfig::from_tokens(&from, &to, &threshold) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            log::warn!("[effects] background colors unavailable: {}", e);
            None
        }
    }
}

impl ScrollEffectsCoordinator {
    pub fn new(window: &web::Window, document: &web::Document) -> Self {
        let sun = query_image(document, SUN_SELECTOR);
        let logo = query_image(document, LOGO_SELECTOR);
        log::info!(
            "[effects] sun={} logo={}",
            sun.is_some(),
            logo.is_some()
        );
        Self {
            window: window.clone(),
            document: document.clone(),
            body: document.body(),
            sun,
            logo,
            sun_config: SunConfig::default(),
            logo_config: LogoConfig::default(),
            background: read_background(window, document),
            sun_visibility: Visibility::Loading,
            logo_gate: FadeGate::default(),
            clouds: None,
            state: dom::scroll_state(window),
        }
    }

    /// Re-read the scroll position and update every scroll-driven element.
    pub fn handle_scroll(&mut self) {
        self.state = dom::scroll_state(&self.window);
        self.apply();
    }

    pub fn handle_resize(&mut self) {
        self.state = dom::scroll_state(&self.window);
        if let Some(clouds) = self.clouds.as_mut() {
            clouds.handle_resize(&self.document, &self.state);
        }
        self.apply();
    }

    /// Per-frame tick for the free-running cloud wobble.
    pub fn animate(&mut self, dt_ms: f64) {
        if let Some(clouds) = self.clouds.as_mut() {
            clouds.advance(dt_ms);
            clouds.apply(&self.state);
        }
    }

    fn apply(&self) {
        self.apply_background();
        self.apply_sun();
        self.apply_logo();
        if let Some(clouds) = self.clouds.as_ref() {
            clouds.apply(&self.state);
        }
    }

    fn apply_background(&self) {
        let (Some(body), Some(bg)) = (self.body.as_ref(), self.background.as_ref()) else {
            return;
        };
        let color = bg.color_at(self.state.scroll_y);
        dom::set_style(body, "background-color", &color.to_string());
    }

    fn apply_sun(&self) {
        let Some(sun) = self.sun.as_ref() else {
            return;
        };
        let frame = self.sun_config.frame(&self.state);
        dom::set_style(sun, "transform", &frame.css_transform());
    }

    fn apply_logo(&self) {
        let Some(logo) = self.logo.as_ref() else {
            return;
        };
        if !self.logo_gate.drives_transform() {
            return;
        }
        let frame = self.logo_config.frame(&self.state);
        if self.logo_gate.drives_opacity() {
            dom::set_style(logo, "opacity", &frame.opacity.to_string());
        }
        dom::set_style(logo, "transform", &frame.css_transform());
    }

    /// Progressive asset loading: grain runs alongside the sun, then the
    /// logo, then the clouds.
    pub async fn load_assets(this: Rc<RefCell<Self>>) {
        let document = this.borrow().document.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Some(reason) = grain::load(&document, &GrainConfig::default()).await {
                log::info!("[effects] grain settled ({:?})", reason);
            }
        });
        Self::reveal_sun(this.clone()).await;
        Self::reveal_logo(this.clone()).await;
        Self::reveal_clouds(this).await;
    }

    async fn reveal_sun(this: Rc<RefCell<Self>>) {
        let Some(sun) = this.borrow().sun.clone() else {
            return;
        };
        let reason = settle(&sun).await;
        dom::next_frame().await;
        dom::set_style(&sun, "transition", &opacity_transition(SUN_FADE_IN_SEC));
        dom::sleep_ms(FADE_REGISTER_DELAY_MS).await;
        if this.borrow_mut().sun_visibility.reveal(reason) {
            dom::set_style(&sun, "opacity", "1");
            log::info!("[effects] sun visible ({:?})", reason);
        }
    }

    async fn reveal_logo(this: Rc<RefCell<Self>>) {
        let Some(logo) = this.borrow().logo.clone() else {
            return;
        };
        let reason = settle(&logo).await;

        let skip_fade = {
            let mut me = this.borrow_mut();
            me.state = dom::scroll_state(&me.window);
            let skip = me.logo_config.skips_fade_in(me.state.scroll_y);
            if skip {
                me.logo_gate.reveal_immediately(reason);
            } else {
                me.logo_gate.begin_fade(reason);
            }
            me.apply_logo();
            skip
        };
        log::info!("[effects] logo visible ({:?}, fade={})", reason, !skip_fade);
        if skip_fade {
            return;
        }

        let opacity_start = this.borrow().logo_config.opacity_start;
        dom::next_frame().await;
        dom::set_style(&logo, "transition", &opacity_transition(LOGO_FADE_IN_SEC));
        dom::sleep_ms(FADE_REGISTER_DELAY_MS).await;
        dom::set_style(&logo, "opacity", &opacity_start.to_string());
        dom::sleep_ms((LOGO_FADE_IN_SEC * 1000.0) as i32).await;

        dom::set_style(&logo, "transition", "");
        let mut me = this.borrow_mut();
        me.logo_gate.finish_fade();
        me.apply_logo();
    }

    async fn reveal_clouds(this: Rc<RefCell<Self>>) {
        let layer = {
            let me = this.borrow();
            CloudLayer::new(&me.document, CloudConfig::default(), &me.state)
        };
        let Some(layer) = layer else {
            return;
        };
        let container = layer.container().clone();
        log::info!("[effects] clouds placed: {}", layer.sprite_count());
        this.borrow_mut().clouds = Some(layer);

        dom::next_frame().await;
        dom::sleep_ms(FADE_REGISTER_DELAY_MS).await;
        dom::set_style(&container, "opacity", "1");
        if let Some(clouds) = this.borrow_mut().clouds.as_mut() {
            if clouds.mark_visible() {
                log::info!("[effects] clouds visible");
            }
        }
    }
}

async fn settle(img: &web::HtmlImageElement) -> Reveal {
    if dom::image_settled_or_timeout(img, ASSET_LOAD_TIMEOUT_MS).await {
        Reveal::AssetLoaded
    } else {
        log::warn!("[effects] {} timed out; revealing anyway", img.src());
        Reveal::TimeoutFallback
    }
}

/// Install scroll/resize listeners and apply the initial state.
pub fn wire(effects: &Rc<RefCell<ScrollEffectsCoordinator>>) {
    let on_scroll = effects.clone();
    dom::add_window_listener("scroll", true, move |_: web::Event| {
        on_scroll.borrow_mut().handle_scroll();
    });
    let on_resize = effects.clone();
    dom::add_window_listener("resize", true, move |_: web::Event| {
        on_resize.borrow_mut().handle_resize();
    });
    effects.borrow_mut().handle_scroll();
}
