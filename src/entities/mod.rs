//! Entity type definitions

pub mod dimension;
pub mod stackup;

pub use dimension::{Anchor, Dimension, DimensionField, NumericField};
pub use stackup::{calculate, AggregateResult};
