// Release countdown banner.

pub const FOOTER_FADE_PX: f64 = 150.0;

const MS_PER_SEC: u64 = 1_000;
const MS_PER_MIN: u64 = 60 * MS_PER_SEC;
const MS_PER_HOUR: u64 = 60 * MS_PER_MIN;
const MS_PER_DAY: u64 = 24 * MS_PER_HOUR;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl Countdown {
    /// Split a remaining duration; `None` once the release is reached.
    pub fn from_millis(remaining_ms: f64) -> Option<Self> {
        if remaining_ms.is_nan() || remaining_ms <= 0.0 {
            return None;
        }
        let ms = remaining_ms as u64;
        Some(Self {
            days: ms / MS_PER_DAY,
            hours: (ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (ms % MS_PER_HOUR) / MS_PER_MIN,
            seconds: (ms % MS_PER_MIN) / MS_PER_SEC,
        })
    }
}

#[derive(Clone, Debug)]
pub struct ReleaseConfig {
    pub enabled: bool,
    pub name: &'static str,
    /// ISO-8601 local time, parsed by the browser.
    pub release_at: &'static str,
    pub presave_link: &'static str,
    pub listen_link: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BannerContent {
    pub text: String,
    pub link_label: &'static str,
    pub link_href: &'static str,
}

impl ReleaseConfig {
    pub fn content(&self, remaining_ms: f64) -> BannerContent {
        match Countdown::from_millis(remaining_ms) {
            Some(c) => BannerContent {
                text: format!(
                    "{} in {}d {}h {}m {}s",
                    self.name, c.days, c.hours, c.minutes, c.seconds
                ),
                link_label: "Pre-Save",
                link_href: self.presave_link,
            },
            None => BannerContent {
                text: format!("{} jetzt erhältlich!", self.name),
                link_label: "Jetzt anhören",
                link_href: self.listen_link,
            },
        }
    }
}

/// Banner presentation as the footer scrolls into view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FooterFade {
    pub opacity: f64,
    pub visible: bool,
    pub interactive: bool,
}

/// `footer_top` is the footer's top edge relative to the viewport.
pub fn footer_fade(footer_top: f64, viewport_height: f64) -> FooterFade {
    let distance = footer_top - viewport_height;
    if distance <= 0.0 {
        FooterFade {
            opacity: 0.0,
            visible: false,
            interactive: false,
        }
    } else if distance < FOOTER_FADE_PX {
        FooterFade {
            opacity: distance / FOOTER_FADE_PX,
            visible: true,
            interactive: false,
        }
    } else {
        FooterFade {
            opacity: 1.0,
            visible: true,
            interactive: true,
        }
    }
}
