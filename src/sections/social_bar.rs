use crate::constants::{SOCIAL_BAR_HIDDEN_CLASS, SOCIAL_BAR_SELECTOR};
use crate::core::social::SocialBar;
use crate::dom;
use web_sys as web;

pub fn wire(document: &web::Document, window: &web::Window) {
    let Some(bar_el) = dom::query_html(document, SOCIAL_BAR_SELECTOR) else {
        return;
    };
    let window = window.clone();
    let mut bar = SocialBar::new(window.scroll_y().unwrap_or(0.0));
    dom::add_window_listener("scroll", true, move |_: web::Event| {
        let hidden = bar.update(window.scroll_y().unwrap_or(0.0));
        _ = bar_el
            .class_list()
            .toggle_with_force(SOCIAL_BAR_HIDDEN_CLASS, hidden);
    });
}
