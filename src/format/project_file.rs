//! Project file codec
//!
//! On disk a project is a JSON object with three keys:
//!
//! ```json
//! {
//!   "cotes": [{ "id": "L1", "valeur": 120.2, "tolMin": -0.1, "tolMax": 0.1 }],
//!   "imageSrc": "data:image/png;base64,...",
//!   "positions": [{ "x": 50, "y": 100 }]
//! }
//! ```
//!
//! `cotes` and `positions` are parallel arrays paired by index. In memory
//! each [`Dimension`] owns its anchor, so the pairing is resolved here.

use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::core::config::ImportPolicy;
use crate::core::image::BackgroundImage;
use crate::core::layout::AnchorLayout;
use crate::entities::dimension::{Anchor, Dimension, NumericField};
use crate::format::diagnostics::{json_type_name, ProjectFileError};

pub const KEY_DIMENSIONS: &str = "cotes";
pub const KEY_IMAGE: &str = "imageSrc";
pub const KEY_ANCHORS: &str = "positions";

/// Wire shape of one dimension
///
/// Numeric values are optional because invalid fields are written as
/// `null`.
#[derive(Debug, Deserialize)]
struct DimensionRecord {
    #[serde(default)]
    id: String,
    #[serde(default)]
    valeur: Option<f64>,
    #[serde(default, rename = "tolMin")]
    tol_min: Option<f64>,
    #[serde(default, rename = "tolMax")]
    tol_max: Option<f64>,
}

/// Contents of a decoded project file
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectDocument {
    pub dimensions: Vec<Dimension>,
    pub background: Option<BackgroundImage>,
}

/// Non-fatal repairs made while decoding leniently
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadReport {
    /// Top-level fields that were present but unusable and fell back to defaults
    pub defaulted_fields: Vec<&'static str>,
    /// Dimensions loaded with a `null` numeric field
    pub null_numerics: usize,
    /// Anchors synthesized because `positions` was shorter than `cotes`
    pub padded_anchors: usize,
    /// Entries of `positions` beyond the last dimension
    pub dropped_anchors: usize,
}

impl LoadReport {
    /// True when the file loaded without any repair
    pub fn is_clean(&self) -> bool {
        *self == LoadReport::default()
    }
}

/// Serialize a chain to project file JSON
///
/// Never fails: invalid and non-finite numbers are written as `null`.
pub fn encode(
    dimensions: &[Dimension],
    background: Option<&BackgroundImage>,
    pretty: bool,
) -> Vec<u8> {
    let cotes: Vec<Value> = dimensions
        .iter()
        .map(|d| {
            json!({
                "id": d.id,
                "valeur": d.nominal.value(),
                "tolMin": d.tol_min.value(),
                "tolMax": d.tol_max.value(),
            })
        })
        .collect();
    let positions: Vec<Value> = dimensions
        .iter()
        .map(|d| json!({ "x": d.anchor.x, "y": d.anchor.y }))
        .collect();

    let doc = json!({
        KEY_DIMENSIONS: cotes,
        KEY_IMAGE: background.map(BackgroundImage::as_str),
        KEY_ANCHORS: positions,
    });

    let text = if pretty {
        format!("{:#}\n", doc)
    } else {
        doc.to_string()
    };
    text.into_bytes()
}

/// Parse project file bytes
///
/// Syntax errors and non-object documents fail under every policy; what
/// happens to unusable fields depends on `policy`.
pub fn decode(
    bytes: &[u8],
    filename: &str,
    policy: ImportPolicy,
    layout: &AnchorLayout,
) -> Result<(ProjectDocument, LoadReport), ProjectFileError> {
    let content = std::str::from_utf8(bytes)?;
    let value: Value = serde_json::from_str(content)
        .map_err(|e| ProjectFileError::from_json_error(&e, content, filename))?;

    let Value::Object(map) = value else {
        return Err(ProjectFileError::NotAnObject {
            found: json_type_name(&value),
        });
    };

    let mut report = LoadReport::default();

    let records: Vec<DimensionRecord> =
        read_field(&map, KEY_DIMENSIONS, policy, &mut report)?.unwrap_or_default();
    let anchors: Vec<Anchor> =
        read_field(&map, KEY_ANCHORS, policy, &mut report)?.unwrap_or_default();
    let image: Option<String> = read_field(&map, KEY_IMAGE, policy, &mut report)?;

    if policy == ImportPolicy::Strict && records.len() != anchors.len() {
        return Err(ProjectFileError::LengthMismatch {
            dimensions: records.len(),
            anchors: anchors.len(),
        });
    }

    let mut dimensions = Vec::with_capacity(records.len());
    for (index, record) in records.into_iter().enumerate() {
        let nulls = [&record.valeur, &record.tol_min, &record.tol_max]
            .iter()
            .filter(|v| v.is_none())
            .count();
        if nulls > 0 {
            if policy == ImportPolicy::Strict {
                return Err(ProjectFileError::InvalidField {
                    field: format!("{}[{}]", KEY_DIMENSIONS, index),
                    message: "numeric value is null or missing".to_string(),
                });
            }
            report.null_numerics += 1;
        }

        let anchor = match anchors.get(index) {
            Some(anchor) => *anchor,
            None => {
                report.padded_anchors += 1;
                layout.anchor_for(index)
            }
        };

        dimensions.push(Dimension {
            id: record.id,
            nominal: numeric(record.valeur),
            tol_min: numeric(record.tol_min),
            tol_max: numeric(record.tol_max),
            anchor,
        });
    }
    report.dropped_anchors = anchors.len().saturating_sub(dimensions.len());

    if report.padded_anchors > 0 {
        log::debug!(
            "{}: synthesized {} missing position(s)",
            filename,
            report.padded_anchors
        );
    }
    if report.dropped_anchors > 0 {
        log::debug!(
            "{}: ignored {} extra position(s)",
            filename,
            report.dropped_anchors
        );
    }

    Ok((
        ProjectDocument {
            dimensions,
            background: image.map(BackgroundImage::from),
        },
        report,
    ))
}

fn numeric(value: Option<f64>) -> NumericField {
    match value {
        Some(v) => NumericField::Valid(v),
        None => NumericField::Invalid(String::new()),
    }
}

/// Read one top-level field; `None` when absent or null
fn read_field<T: serde::de::DeserializeOwned>(
    map: &Map<String, Value>,
    key: &'static str,
    policy: ImportPolicy,
    report: &mut LoadReport,
) -> Result<Option<T>, ProjectFileError> {
    let Some(value) = map.get(key).filter(|v| !v.is_null()) else {
        return Ok(None);
    };

    match T::deserialize(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => match policy {
            ImportPolicy::Strict => Err(ProjectFileError::InvalidField {
                field: key.to_string(),
                message: e.to_string(),
            }),
            ImportPolicy::Lenient => {
                log::debug!("ignoring malformed `{}`: {}", key, e);
                report.defaulted_fields.push(key);
                Ok(None)
            }
        },
    }
}
