//! Shared helper functions for CLI commands

use crate::entities::dimension::NumericField;

/// Format a millimeter value with a fixed number of decimals
pub fn format_mm(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Format an editable numeric field for a table cell
///
/// Invalid fields show their raw text so the user sees what to fix.
pub fn format_field(field: &NumericField, decimals: usize) -> String {
    match field {
        NumericField::Valid(v) => format_mm(*v, decimals),
        NumericField::Invalid(raw) => format!("<invalid: {}>", raw),
    }
}

/// Truncate a string to max_len, adding "..." if truncated
///
/// Counts characters, not bytes.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Convert a 1-based dimension number from the command line to an index
pub fn position_to_index(position: usize) -> miette::Result<usize> {
    position
        .checked_sub(1)
        .ok_or_else(|| miette::miette!("Dimension numbers start at 1"))
}
