use super::constants::{BG_CHANGE_THRESHOLD_PX, BG_TRANSITION_SPAN_PX};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("empty color token")]
    Empty,
    #[error("expected #rrggbb, got {0:?}")]
    Format(String),
}

/// 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise linear blend, `t` clamped to [0, 1], rounded to nearest.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    /// Accepts `#rrggbb` or `rrggbb`, case-insensitive, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::Format(s.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| ColorParseError::Format(s.to_string()))
        };
        Ok(Rgb::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Page background that holds `from` until `threshold`, then blends to `to`
/// over the next `span` pixels of scroll.
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundConfig {
    pub from: Rgb,
    pub to: Rgb,
    pub threshold: f64,
    pub span: f64,
}

impl BackgroundConfig {
    pub fn new(from: Rgb, to: Rgb) -> Self {
        Self {
            from,
            to,
            threshold: BG_CHANGE_THRESHOLD_PX,
            span: BG_TRANSITION_SPAN_PX,
        }
    }

    /// Build from theme tokens as read from CSS custom properties.
    ///
    /// An empty or malformed `threshold` token (e.g. `"300px"`) falls back
    /// to the default threshold; malformed colors are an error.
    pub fn from_tokens(from: &str, to: &str, threshold: &str) -> Result<Self, ColorParseError> {
        let mut config = Self::new(from.parse()?, to.parse()?);
        if let Some(px) = parse_px(threshold) {
            config.threshold = px;
        }
        Ok(config)
    }

    pub fn progress_at(&self, scroll_y: f64) -> f64 {
        if scroll_y < self.threshold {
            return 0.0;
        }
        ((scroll_y - self.threshold) / self.span).min(1.0)
    }

    pub fn color_at(&self, scroll_y: f64) -> Rgb {
        if scroll_y < self.threshold {
            return self.from;
        }
        self.from.lerp(self.to, self.progress_at(scroll_y))
    }
}

/// Parse a CSS pixel length such as `"300px"` or `"300"`.
pub fn parse_px(token: &str) -> Option<f64> {
    let token = token.trim();
    let number = token.strip_suffix("px").unwrap_or(token).trim();
    number.parse::<f64>().ok().filter(|v| v.is_finite() && *v >= 0.0)
}
