//! Dimension entity - one linear dimension of the chain and its diagram anchor
//!
//! A dimension carries a nominal value and an asymmetric tolerance interval
//! `[tol_min, tol_max]`, in millimeters. Each numeric field is kept as a
//! [`NumericField`] so that text the user typed but which is not a number
//! stays visible instead of collapsing into zero.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A user-editable numeric field
#[derive(Debug, Clone, PartialEq)]
pub enum NumericField {
    /// A finite parsed value
    Valid(f64),
    /// Raw text that did not parse as a finite number
    Invalid(String),
}

impl NumericField {
    /// Parse user-entered text
    ///
    /// Surrounding whitespace is ignored. Empty text, `NaN` and infinities
    /// are kept as [`NumericField::Invalid`] with the entered text.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => NumericField::Valid(v),
            _ => NumericField::Invalid(raw.to_string()),
        }
    }

    /// The resolved value, if valid
    pub fn value(&self) -> Option<f64> {
        match self {
            NumericField::Valid(v) => Some(*v),
            NumericField::Invalid(_) => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, NumericField::Valid(_))
    }
}

impl Default for NumericField {
    fn default() -> Self {
        NumericField::Valid(0.0)
    }
}

impl From<f64> for NumericField {
    fn from(v: f64) -> Self {
        NumericField::Valid(v)
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericField::Valid(v) => write!(f, "{}", v),
            NumericField::Invalid(raw) => write!(f, "{}", raw),
        }
    }
}

/// 2D position of a dimension's callout in diagram space
///
/// Diagram space is unbounded; clipping to a visible canvas is up to the
/// renderer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Anchor {
    pub x: f64,
    pub y: f64,
}

impl Anchor {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Editable fields of a dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionField {
    Id,
    Nominal,
    TolMin,
    TolMax,
}

impl DimensionField {
    /// The numeric fields, in table order
    pub const NUMERIC: [DimensionField; 3] = [
        DimensionField::Nominal,
        DimensionField::TolMin,
        DimensionField::TolMax,
    ];
}

impl fmt::Display for DimensionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionField::Id => write!(f, "id"),
            DimensionField::Nominal => write!(f, "nominal"),
            DimensionField::TolMin => write!(f, "tolMin"),
            DimensionField::TolMax => write!(f, "tolMax"),
        }
    }
}

impl FromStr for DimensionField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" | "name" => Ok(DimensionField::Id),
            "nominal" | "valeur" | "value" => Ok(DimensionField::Nominal),
            "tolmin" | "tol-min" | "tol_min" | "min" => Ok(DimensionField::TolMin),
            "tolmax" | "tol-max" | "tol_max" | "max" => Ok(DimensionField::TolMax),
            other => Err(format!(
                "unknown field '{}' (expected id, nominal, tolMin or tolMax)",
                other
            )),
        }
    }
}

/// One dimension of the chain, together with its diagram anchor
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    /// User label, conventionally unique (L1, L2, ...)
    pub id: String,

    /// Nominal value (mm)
    pub nominal: NumericField,

    /// Lower tolerance offset (mm), usually <= 0
    pub tol_min: NumericField,

    /// Upper tolerance offset (mm), usually >= 0
    pub tol_max: NumericField,

    /// Callout position on the diagram
    pub anchor: Anchor,
}

impl Dimension {
    /// Create a dimension with valid numeric fields
    pub fn new(id: impl Into<String>, nominal: f64, tol_min: f64, tol_max: f64) -> Self {
        Self {
            id: id.into(),
            nominal: NumericField::Valid(nominal),
            tol_min: NumericField::Valid(tol_min),
            tol_max: NumericField::Valid(tol_max),
            anchor: Anchor::default(),
        }
    }

    /// Builder-style anchor placement
    pub fn at(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Get a numeric field
    ///
    /// Returns `None` for [`DimensionField::Id`].
    pub fn numeric(&self, field: DimensionField) -> Option<&NumericField> {
        match field {
            DimensionField::Id => None,
            DimensionField::Nominal => Some(&self.nominal),
            DimensionField::TolMin => Some(&self.tol_min),
            DimensionField::TolMax => Some(&self.tol_max),
        }
    }

    pub(crate) fn numeric_mut(&mut self, field: DimensionField) -> Option<&mut NumericField> {
        match field {
            DimensionField::Id => None,
            DimensionField::Nominal => Some(&mut self.nominal),
            DimensionField::TolMin => Some(&mut self.tol_min),
            DimensionField::TolMax => Some(&mut self.tol_max),
        }
    }

    /// First numeric field holding unparsed text, with that text
    pub fn first_invalid(&self) -> Option<(DimensionField, &str)> {
        DimensionField::NUMERIC.into_iter().find_map(|field| {
            match self.numeric(field) {
                Some(NumericField::Invalid(raw)) => Some((field, raw.as_str())),
                _ => None,
            }
        })
    }

    /// Resolved `(nominal, tol_min, tol_max)` when every field is valid
    pub fn values(&self) -> Option<(f64, f64, f64)> {
        Some((
            self.nominal.value()?,
            self.tol_min.value()?,
            self.tol_max.value()?,
        ))
    }

    /// Width of the tolerance interval (`tol_max - tol_min`)
    pub fn tolerance_band(&self) -> Option<f64> {
        Some(self.tol_max.value()? - self.tol_min.value()?)
    }

    /// Smallest and largest admissible size
    pub fn limits(&self) -> Option<(f64, f64)> {
        let (nominal, tol_min, tol_max) = self.values()?;
        Some((nominal + tol_min, nominal + tol_max))
    }

    /// True when the lower offset exceeds the upper one
    ///
    /// Inverted intervals are allowed and propagate into the aggregate.
    pub fn is_inverted(&self) -> bool {
        matches!(self.tolerance_band(), Some(band) if band < 0.0)
    }

    /// Callout text drawn next to the anchor
    pub fn label(&self) -> String {
        format!("{}: {} mm", self.id, self.nominal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_parse_valid() {
        assert_eq!(NumericField::parse("12.5"), NumericField::Valid(12.5));
        assert_eq!(NumericField::parse(" -0.1 "), NumericField::Valid(-0.1));
        assert_eq!(NumericField::parse("0"), NumericField::Valid(0.0));
        assert_eq!(NumericField::parse("1e-3"), NumericField::Valid(0.001));
    }

    #[test]
    fn test_numeric_parse_rejects_garbage() {
        assert_eq!(
            NumericField::parse("abc"),
            NumericField::Invalid("abc".to_string())
        );
        assert_eq!(NumericField::parse(""), NumericField::Invalid(String::new()));
        assert!(!NumericField::parse("NaN").is_valid());
        assert!(!NumericField::parse("inf").is_valid());
        assert!(!NumericField::parse("1,5").is_valid());
    }

    #[test]
    fn test_invalid_is_not_zero() {
        let field = NumericField::parse("abc");
        assert_eq!(field.value(), None);
        assert_ne!(field, NumericField::Valid(0.0));
    }

    #[test]
    fn test_field_from_str_aliases() {
        assert_eq!("valeur".parse::<DimensionField>(), Ok(DimensionField::Nominal));
        assert_eq!("tolMin".parse::<DimensionField>(), Ok(DimensionField::TolMin));
        assert_eq!("tol-max".parse::<DimensionField>(), Ok(DimensionField::TolMax));
        assert_eq!("ID".parse::<DimensionField>(), Ok(DimensionField::Id));
        assert!("width".parse::<DimensionField>().is_err());
    }

    #[test]
    fn test_limits_and_band() {
        let dim = Dimension::new("L2", 40.0, -0.25, 0.5);
        assert_eq!(dim.limits(), Some((39.75, 40.5)));
        assert_eq!(dim.tolerance_band(), Some(0.75));
        assert!(!dim.is_inverted());
    }

    #[test]
    fn test_inverted_interval() {
        let dim = Dimension::new("L1", 10.0, 0.5, -0.5);
        assert!(dim.is_inverted());
        assert_eq!(dim.limits(), Some((10.5, 9.5)));
    }

    #[test]
    fn test_first_invalid_reports_table_order() {
        let mut dim = Dimension::new("L1", 10.0, -0.1, 0.1);
        assert_eq!(dim.first_invalid(), None);

        dim.tol_max = NumericField::parse("x");
        dim.tol_min = NumericField::parse("y");
        assert_eq!(dim.first_invalid(), Some((DimensionField::TolMin, "y")));
        assert_eq!(dim.values(), None);
        assert_eq!(dim.limits(), None);
    }

    #[test]
    fn test_label() {
        let dim = Dimension::new("L1", 120.2, -0.1, 0.1);
        assert_eq!(dim.label(), "L1: 120.2 mm");

        let mut bad = Dimension::new("L2", 0.0, 0.0, 0.0);
        bad.nominal = NumericField::parse("12..5");
        assert_eq!(bad.label(), "L2: 12..5 mm");
    }
}
