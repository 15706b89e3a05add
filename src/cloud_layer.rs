use crate::constants::{cloud_texture, CLOUDS_CONTAINER_SELECTOR, CLOUD_CLASS};
use crate::core::constants::CLOUDS_FADE_IN_SEC;
use crate::core::parallax::opacity_transition;
use crate::core::{CloudConfig, CloudField, Reveal, ScrollState, Visibility};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM side of the cloud field: one `<img>` per sprite inside the
/// clouds container, keyed by sprite index.
pub struct CloudLayer {
    container: web::HtmlElement,
    field: CloudField,
    elements: Vec<(usize, web::HtmlElement)>,
    time_ms: f64,
    visibility: Visibility,
}

impl CloudLayer {
    /// `None` when the page has no clouds container.
    pub fn new(document: &web::Document, config: CloudConfig, state: &ScrollState) -> Option<Self> {
        let container = dom::query_html(document, CLOUDS_CONTAINER_SELECTOR)?;
        dom::set_style(&container, "transition", &opacity_transition(CLOUDS_FADE_IN_SEC));
        let mut layer = Self {
            container,
            field: CloudField::new(config, state.viewport_width),
            elements: Vec::new(),
            time_ms: 0.0,
            visibility: Visibility::Loading,
        };
        layer.rebuild(document);
        layer.apply(state);
        Some(layer)
    }

    pub fn container(&self) -> &web::HtmlElement {
        &self.container
    }

    pub fn sprite_count(&self) -> usize {
        self.elements.len()
    }

    /// Container fade-in has been triggered.
    pub fn mark_visible(&mut self) -> bool {
        self.visibility.reveal(Reveal::AssetLoaded)
    }

    fn rebuild(&mut self, document: &web::Document) {
        self.container.set_inner_html("");
        self.elements.clear();
        for (index, sprite) in self.field.sprites.iter().enumerate() {
            let img = match document
                .create_element("img")
                .ok()
                .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok())
            {
                Some(img) => img,
                None => continue,
            };
            img.set_src(&cloud_texture(sprite.variant));
            img.set_class_name(CLOUD_CLASS);
            img.style().set_css_text(&sprite.placement_css());
            if self.container.append_child(&img).is_err() {
                continue;
            }
            self.elements.push((index, img.into()));
        }
    }

    /// Regenerate sprites after a large width change.
    pub fn handle_resize(&mut self, document: &web::Document, state: &ScrollState) {
        if self.field.resize(state.viewport_width) {
            log::info!(
                "[clouds] viewport width {} -> regenerated {} sprites",
                state.viewport_width,
                self.field.sprites.len()
            );
            self.rebuild(document);
            self.apply(state);
        }
    }

    pub fn advance(&mut self, dt_ms: f64) {
        self.time_ms += dt_ms;
    }

    pub fn apply(&self, state: &ScrollState) {
        for (index, el) in &self.elements {
            let Some(sprite) = self.field.sprites.get(*index) else {
                continue;
            };
            let frame = sprite.frame(&self.field.config, state, self.time_ms);
            dom::set_style(el, "transform", &frame.css_transform());
            dom::set_style(el, "opacity", &frame.opacity.to_string());
        }
    }
}
