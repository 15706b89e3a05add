pub mod banner;
pub mod clouds;
pub mod color;
pub mod constants;
pub mod gallery;
pub mod html;
pub mod newsletter;
pub mod parallax;
pub mod social;
pub mod tour;
pub mod visibility;

pub use clouds::{CloudConfig, CloudField};
pub use color::BackgroundConfig;
pub use parallax::{GrainConfig, LogoConfig, ScrollState, SunConfig};
pub use visibility::{FadeGate, GrainEvent, GrainLoad, Reveal, Visibility};
