//! Core module - project store, layout, configuration and errors

pub mod config;
pub mod error;
pub mod image;
pub mod layout;
pub mod store;

pub use config::{Config, ImportPolicy};
pub use error::ChainError;
pub use image::BackgroundImage;
pub use layout::AnchorLayout;
pub use store::{Annotation, ChainStore};
