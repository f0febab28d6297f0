//! CLI command implementations

pub mod check;
pub mod completions;
pub mod edit;
pub mod image;
pub mod new;
pub mod show;
pub mod utils;
