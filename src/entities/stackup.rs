//! Stack-up calculator - aggregate nominal and tolerance of a dimension chain
//!
//! The chain is purely additive: nominals and both tolerance offsets are
//! summed independently, and the functional clearance is
//! `[nominal_sum + tol_min_sum, nominal_sum + tol_max_sum]`.

use serde::{Deserialize, Serialize};

use crate::core::error::ChainError;
use crate::entities::dimension::{Dimension, DimensionField};

/// Aggregate of a dimension chain
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateResult {
    /// Sum of all nominal values
    pub nominal_sum: f64,

    /// Sum of all lower tolerance offsets
    pub tol_min_sum: f64,

    /// Sum of all upper tolerance offsets
    pub tol_max_sum: f64,

    /// Smallest functional clearance (`nominal_sum + tol_min_sum`)
    pub clearance_min: f64,

    /// Largest functional clearance (`nominal_sum + tol_max_sum`)
    pub clearance_max: f64,
}

impl AggregateResult {
    /// Build from the three independent sums
    pub fn from_sums(nominal_sum: f64, tol_min_sum: f64, tol_max_sum: f64) -> Self {
        Self {
            nominal_sum,
            tol_min_sum,
            tol_max_sum,
            clearance_min: nominal_sum + tol_min_sum,
            clearance_max: nominal_sum + tol_max_sum,
        }
    }

    /// Width of the functional clearance range
    pub fn clearance_band(&self) -> f64 {
        self.clearance_max - self.clearance_min
    }

    /// True when the summed lower offset exceeds the summed upper one
    pub fn is_inverted(&self) -> bool {
        self.clearance_min > self.clearance_max
    }
}

/// Compute the aggregate of an ordered chain
///
/// An empty chain sums to zero. Fails with
/// [`ChainError::InvalidNumericInput`] naming the first field that still
/// holds unparsed text; nothing is summed until every field is valid.
/// Non-finite values are not rejected and propagate arithmetically.
pub fn calculate(dimensions: &[Dimension]) -> Result<AggregateResult, ChainError> {
    let mut nominal_sum = 0.0;
    let mut tol_min_sum = 0.0;
    let mut tol_max_sum = 0.0;

    for (index, dim) in dimensions.iter().enumerate() {
        let Some((nominal, tol_min, tol_max)) = dim.values() else {
            let (field, raw) = dim
                .first_invalid()
                .map(|(field, raw)| (field, raw.to_string()))
                .unwrap_or((DimensionField::Nominal, String::new()));
            return Err(ChainError::InvalidNumericInput { index, field, raw });
        };

        nominal_sum += nominal;
        tol_min_sum += tol_min;
        tol_max_sum += tol_max;
    }

    Ok(AggregateResult::from_sums(nominal_sum, tol_min_sum, tol_max_sum))
}
