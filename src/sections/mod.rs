pub mod banner;
pub mod gallery;
pub mod newsletter;
pub mod reveal;
pub mod social_bar;
pub mod tour;
