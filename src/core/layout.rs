//! Annotation layout - where new callouts are placed on the diagram

use serde::{Deserialize, Serialize};

use crate::entities::dimension::Anchor;

/// Deterministic placement of synthesized anchors
///
/// The anchor for chain position `i` sits at `origin + (step * i, 0)`, so
/// callouts of freshly added dimensions line up left to right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnchorLayout {
    /// Anchor of the first dimension
    pub origin: Anchor,

    /// Horizontal distance between consecutive anchors
    pub step: f64,
}

impl Default for AnchorLayout {
    fn default() -> Self {
        Self {
            origin: Anchor::new(50.0, 100.0),
            step: 150.0,
        }
    }
}

impl AnchorLayout {
    /// Default anchor for the dimension at `index`
    pub fn anchor_for(&self, index: usize) -> Anchor {
        Anchor::new(self.origin.x + self.step * index as f64, self.origin.y)
    }
}
