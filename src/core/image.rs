//! Background image reference
//!
//! The backdrop is opaque to the chain: it is stored and persisted as a
//! string (usually a `data:` URL) and never decoded here.

use base64::{engine::general_purpose::STANDARD, Engine};
use std::path::Path;

/// Opaque reference to a raster backdrop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundImage(String);

impl BackgroundImage {
    /// Wrap an existing reference (data URL, link, identifier)
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// Embed raw image bytes as a base64 `data:` URL
    pub fn from_bytes(bytes: &[u8], mime: &str) -> Self {
        Self(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
    }

    /// Read and embed an image file, guessing its MIME type from the extension
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        Ok(Self::from_bytes(&bytes, mime.essence_str()))
    }

    /// The stored reference
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// MIME type of a `data:` URL reference
    pub fn mime_type(&self) -> Option<&str> {
        let rest = self.0.strip_prefix("data:")?;
        let end = rest.find([';', ','])?;
        Some(&rest[..end]).filter(|m| !m.is_empty())
    }

    /// Length of the stored reference in bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for BackgroundImage {
    fn from(reference: String) -> Self {
        Self(reference)
    }
}

impl std::fmt::Display for BackgroundImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.mime_type() {
            Some(mime) => write!(f, "embedded {} ({} bytes)", mime, self.len()),
            None => write!(f, "{}", self.0),
        }
    }
}
