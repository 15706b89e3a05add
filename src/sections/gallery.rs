use crate::constants::{
    GALLERY_ALT, GALLERY_IMAGE_COUNT, GALLERY_PINGPONG_DWELL_SEC,
    GALLERY_PINGPONG_SPEED_PX_PER_SEC, GALLERY_TRACK_SELECTOR,
};
use crate::core::gallery::{build_track, render_track, PingPong};
use crate::dom;
use web_sys as web;

/// Drives `scrollLeft` of the track's parent back and forth.
pub struct GalleryScroller {
    viewport: web::Element,
    motion: PingPong,
}

impl GalleryScroller {
    pub fn step(&mut self, dt_sec: f64) {
        self.motion.set_extent(
            self.viewport.scroll_width() as f64,
            self.viewport.client_width() as f64,
        );
        let was_forward = self.motion.is_forward();
        let offset = self.motion.step(dt_sec);
        self.viewport.set_scroll_left(offset.round() as i32);
        if self.motion.is_forward() != was_forward {
            log::debug!("[gallery] turning at {}px", self.motion.offset());
        }
    }
}

/// Fill the gallery track with a shuffled, tripled image list.
///
/// Tracks marked `data-autoscroll="pingpong"` are scrolled from script;
/// the rest rely on the stylesheet's looping marquee.
pub fn render(document: &web::Document) -> Option<GalleryScroller> {
    let track = dom::query_html(document, GALLERY_TRACK_SELECTOR)?;
    let paths = build_track(GALLERY_IMAGE_COUNT, &mut rand::thread_rng());
    track.set_inner_html(&render_track(&paths, GALLERY_ALT));
    log::info!("[gallery] rendered {} items", paths.len());

    if track.get_attribute("data-autoscroll").as_deref() != Some("pingpong") {
        return None;
    }
    let viewport = track.parent_element()?;
    Some(GalleryScroller {
        viewport,
        motion: PingPong::new(GALLERY_PINGPONG_SPEED_PX_PER_SEC, GALLERY_PINGPONG_DWELL_SEC),
    })
}
