// Page wiring constants: selectors, asset paths, timings and site content.
//
// Tuning values for the effects themselves live in `core/constants.rs`.
use crate::core::banner::ReleaseConfig;
use crate::core::tour::{EmptyNotice, TourEntry};

// Element selectors
pub const SUN_SELECTOR: &str = ".sun-image";
pub const LOGO_SELECTOR: &str = ".band-logo";
pub const CLOUDS_CONTAINER_SELECTOR: &str = ".clouds-container";
pub const GALLERY_TRACK_SELECTOR: &str = ".gallery-track";
pub const SHOW_LIST_SELECTOR: &str = ".show-list";
pub const SOCIAL_BAR_SELECTOR: &str = ".social-bar";
pub const REVEAL_SECTIONS_SELECTOR: &str = "main section";
pub const FOOTER_SELECTOR: &str = "footer";
pub const NEWSLETTER_FORM_ID: &str = "newsletter-form";
pub const NEWSLETTER_EMAIL_ID: &str = "email";
pub const NEWSLETTER_MESSAGE_ID: &str = "form-message";

// Classes
pub const CLOUD_CLASS: &str = "cloud";
pub const REVEALED_CLASS: &str = "is-visible";
pub const SOCIAL_BAR_HIDDEN_CLASS: &str = "social-bar--hidden";
pub const RELEASE_BANNER_CLASS: &str = "release-banner";

// Theme tokens read from :root
pub const CSS_COLOR_FROM: &str = "--pop-baby-blue";
pub const CSS_COLOR_TO: &str = "--pop-hot-red";
pub const CSS_BG_THRESHOLD: &str = "--bg-color-change-threshold";
pub const CSS_MESSAGE_OK_COLOR: &str = "var(--sunset-purple)";
pub const CSS_MESSAGE_ERR_COLOR: &str = "var(--error-red)";

// Assets
pub const GRAIN_VIDEO_SRC: &str = "assets/videos/film-grain.mp4";
pub const GALLERY_IMAGE_COUNT: usize = 5;
pub const GALLERY_ALT: &str = "Lymina gallery image";

pub fn cloud_texture(variant: u32) -> String {
    format!("assets/images/clouds/cloud{}.png", variant)
}

// Timings (ms)
pub const ASSET_LOAD_TIMEOUT_MS: i32 = 2000;
pub const FADE_REGISTER_DELAY_MS: i32 = 50; // lets a style transition register before opacity changes
pub const MESSAGE_CLEAR_MS: i32 = 6000;
pub const BANNER_TICK_MS: i32 = 1000;

// Section reveal
pub const REVEAL_THRESHOLD: f64 = 0.1;

// Gallery ping-pong (only for tracks marked `data-autoscroll="pingpong"`)
pub const GALLERY_PINGPONG_SPEED_PX_PER_SEC: f64 = 40.0;
pub const GALLERY_PINGPONG_DWELL_SEC: f64 = 1.5;

// Newsletter
pub const NEWSLETTER_TABLE: &str = "emails";
pub const NEWSLETTER_SUBMITTING_LABEL: &str = "SUBSCRIBING...";
pub const SUPABASE_URL: Option<&str> = option_env!("LYMINA_SUPABASE_URL");
pub const SUPABASE_ANON_KEY: Option<&str> = option_env!("LYMINA_SUPABASE_ANON_KEY");

// Site content
pub const TOUR_SCHEDULE: &[TourEntry] = &[];

pub const NO_SHOWS_NOTICE: EmptyNotice = EmptyNotice {
    heading: "Bald kommen Updates für Festivals 2026!",
    body: "Wir arbeiten an neuen Terminen und werden euch bald über kommende Auftritte informieren. Bleibt dran!",
};

pub const RELEASE: ReleaseConfig = ReleaseConfig {
    enabled: true,
    name: "Holidays in Space",
    release_at: "2026-01-29T23:59:59",
    presave_link: "https://distrokid.com/hyperfollow/lymina/holidays-in-space",
    listen_link: "https://open.spotify.com/intl-de/album/4CBedgTKN560NCtwG4ac3p",
};
