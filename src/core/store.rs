//! Chain store - the in-memory project being edited
//!
//! Owns the ordered dimensions (each with its anchor) and the optional
//! background image. Every operation either completes fully or returns an
//! error with the store untouched. The one exception is unparseable numeric
//! input, which is kept as an invalid marker on the edited field.
//!
//! The store is a plain value with no internal synchronization: share it
//! between threads only behind your own lock.

use crate::core::config::Config;
use crate::core::error::ChainError;
use crate::core::image::BackgroundImage;
use crate::entities::dimension::{Anchor, Dimension, DimensionField, NumericField};
use crate::entities::stackup::{self, AggregateResult};
use crate::format::{self, LoadReport, ProjectDocument};

/// Name used in diagnostics for imported buffers without a file name
const UNNAMED_SOURCE: &str = "<project>";

/// A dimension's callout as a renderer draws it
#[derive(Debug, Clone, PartialEq)]
pub struct Annotation {
    pub index: usize,
    pub label: String,
    pub anchor: Anchor,
}

/// In-memory dimension chain project
#[derive(Debug, Clone)]
pub struct ChainStore {
    dimensions: Vec<Dimension>,
    background: Option<BackgroundImage>,
    config: Config,
}

impl ChainStore {
    /// Create an empty project
    pub fn new(config: Config) -> Self {
        Self {
            dimensions: Vec::new(),
            background: None,
            config,
        }
    }

    /// Create the two-dimension starter project
    pub fn sample(config: Config) -> Self {
        let layout = config.layout;
        Self {
            dimensions: vec![
                Dimension::new("L1", 120.2, -0.1, 0.1).at(layout.anchor_for(0)),
                Dimension::new("L2", 40.0, -0.2, 0.3).at(layout.anchor_for(1)),
            ],
            background: None,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn dimension(&self, index: usize) -> Result<&Dimension, ChainError> {
        ChainError::check_index(index, self.dimensions.len())?;
        Ok(&self.dimensions[index])
    }

    pub fn len(&self) -> usize {
        self.dimensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }

    pub fn background(&self) -> Option<&BackgroundImage> {
        self.background.as_ref()
    }

    /// Current aggregate of the chain, recomputed on every call
    pub fn aggregate(&self) -> Result<AggregateResult, ChainError> {
        stackup::calculate(&self.dimensions)
    }

    /// Callouts for every dimension, in chain order
    pub fn annotations(&self) -> impl Iterator<Item = Annotation> + '_ {
        self.dimensions
            .iter()
            .enumerate()
            .map(|(index, dim)| Annotation {
                index,
                label: dim.label(),
                anchor: dim.anchor,
            })
    }

    /// Append a zeroed dimension named `L<n>` with a layout anchor
    ///
    /// Returns the index of the new dimension.
    pub fn add_entry(&mut self) -> usize {
        let index = self.dimensions.len();
        let dim = Dimension::new(format!("L{}", index + 1), 0.0, 0.0, 0.0)
            .at(self.config.layout.anchor_for(index));
        log::debug!("add {} at ({}, {})", dim.id, dim.anchor.x, dim.anchor.y);
        self.dimensions.push(dim);
        index
    }

    /// Set one field from user-entered text
    ///
    /// Numeric text that does not parse is stored as an invalid marker, so
    /// the raw input stays visible, and reported as
    /// [`ChainError::InvalidNumericInput`]. The aggregate is unavailable
    /// until the field is corrected.
    pub fn update_field(
        &mut self,
        index: usize,
        field: DimensionField,
        value: &str,
    ) -> Result<(), ChainError> {
        ChainError::check_index(index, self.dimensions.len())?;
        let dim = &mut self.dimensions[index];

        let Some(slot) = dim.numeric_mut(field) else {
            log::debug!("rename dimension {}: {} -> {}", index + 1, dim.id, value);
            dim.id = value.to_string();
            return Ok(());
        };

        let parsed = NumericField::parse(value);
        let valid = parsed.is_valid();
        *slot = parsed;

        if valid {
            log::debug!("set {} of dimension {} to {}", field, index + 1, value);
            Ok(())
        } else {
            Err(ChainError::InvalidNumericInput {
                index,
                field,
                raw: value.to_string(),
            })
        }
    }

    /// Remove the dimension (and its anchor) at `index`
    pub fn delete_entry(&mut self, index: usize) -> Result<Dimension, ChainError> {
        ChainError::check_index(index, self.dimensions.len())?;
        let removed = self.dimensions.remove(index);
        log::debug!("removed dimension {} ({})", index + 1, removed.id);
        Ok(removed)
    }

    /// Reposition the callout of the dimension at `index`
    ///
    /// Both coordinates must be finite.
    pub fn move_anchor(&mut self, index: usize, x: f64, y: f64) -> Result<(), ChainError> {
        ChainError::check_index(index, self.dimensions.len())?;
        for (axis, value) in [('x', x), ('y', y)] {
            if !value.is_finite() {
                return Err(ChainError::InvalidCoordinate { index, axis, value });
            }
        }
        self.dimensions[index].anchor = Anchor::new(x, y);
        log::debug!("moved dimension {} to ({}, {})", index + 1, x, y);
        Ok(())
    }

    pub fn set_background(&mut self, image: BackgroundImage) {
        self.background = Some(image);
    }

    pub fn clear_background(&mut self) {
        self.background = None;
    }

    /// Serialize the whole project
    pub fn export_project(&self) -> Vec<u8> {
        format::encode(&self.dimensions, self.background.as_ref(), self.config.pretty)
    }

    /// Replace the project with the contents of `bytes`
    pub fn import_project(&mut self, bytes: &[u8]) -> Result<LoadReport, ChainError> {
        self.import_named(bytes, UNNAMED_SOURCE)
    }

    /// Like [`import_project`](Self::import_project), naming the source in
    /// diagnostics
    ///
    /// On failure the current project is left unchanged.
    pub fn import_named(&mut self, bytes: &[u8], filename: &str) -> Result<LoadReport, ChainError> {
        let (doc, report) = format::decode(
            bytes,
            filename,
            self.config.import_policy,
            &self.config.layout,
        )?;

        let ProjectDocument {
            dimensions,
            background,
        } = doc;
        log::debug!(
            "imported {} dimension(s) from {} ({} policy)",
            dimensions.len(),
            filename,
            self.config.import_policy
        );
        self.dimensions = dimensions;
        self.background = background;
        Ok(report)
    }
}
