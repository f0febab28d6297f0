//! Project file format and its diagnostics

pub mod diagnostics;
pub mod project_file;

pub use diagnostics::ProjectFileError;
pub use project_file::{decode, encode, LoadReport, ProjectDocument};
