//! Error taxonomy for chain editing
//!
//! Every failure is local and recoverable: a failed operation leaves the
//! store exactly as it was before the call.

use miette::Diagnostic;
use thiserror::Error;

use crate::entities::dimension::DimensionField;
use crate::format::ProjectFileError;

/// Errors raised by [`ChainStore`](crate::core::ChainStore) operations
#[derive(Debug, Error, Diagnostic)]
pub enum ChainError {
    /// Caller passed an index that is not currently valid
    #[error("No dimension {} in a chain of {len} dimension(s)", .index + 1)]
    #[diagnostic(code(dimchain::index_out_of_range))]
    IndexOutOfRange { index: usize, len: usize },

    /// User-entered text failed to parse as a finite number
    #[error("Invalid numeric input for {field} of dimension {}: '{raw}'", .index + 1)]
    #[diagnostic(
        code(dimchain::invalid_numeric_input),
        help("enter a finite decimal number such as 12.5 or -0.05")
    )]
    InvalidNumericInput {
        index: usize,
        field: DimensionField,
        raw: String,
    },

    /// Callout coordinate that cannot be saved
    #[error("Invalid {axis} coordinate for dimension {}: {value}", .index + 1)]
    #[diagnostic(
        code(dimchain::invalid_coordinate),
        help("callout coordinates must be finite numbers")
    )]
    InvalidCoordinate { index: usize, axis: char, value: f64 },

    /// Import payload is not a usable project file
    #[error(transparent)]
    #[diagnostic(transparent)]
    MalformedProjectFile(#[from] ProjectFileError),
}

impl ChainError {
    /// Check an index against the current chain length
    pub fn check_index(index: usize, len: usize) -> Result<(), ChainError> {
        if index < len {
            Ok(())
        } else {
            Err(ChainError::IndexOutOfRange { index, len })
        }
    }
}
