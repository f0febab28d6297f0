//! Project file errors with source-annotated diagnostics

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Reasons a project file cannot be imported
#[derive(Debug, Error, Diagnostic)]
pub enum ProjectFileError {
    #[error("Project file is not valid UTF-8")]
    #[diagnostic(code(dimchain::project::encoding))]
    Encoding(#[from] std::str::Utf8Error),

    #[error("Project file is not valid JSON: {message}")]
    #[diagnostic(
        code(dimchain::project::syntax),
        help("project files are JSON documents with `cotes`, `imageSrc` and `positions` keys")
    )]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
    },

    #[error("Project file must contain a JSON object, found {found}")]
    #[diagnostic(code(dimchain::project::not_an_object))]
    NotAnObject { found: &'static str },

    #[error("Field `{field}` is malformed: {message}")]
    #[diagnostic(
        code(dimchain::project::invalid_field),
        help("strict import rejects malformed fields; use lenient import to fall back to defaults")
    )]
    InvalidField { field: String, message: String },

    #[error("Project file has {dimensions} dimension(s) but {anchors} position(s)")]
    #[diagnostic(
        code(dimchain::project::length_mismatch),
        help("strict import requires one position per dimension")
    )]
    LengthMismatch { dimensions: usize, anchors: usize },
}

impl ProjectFileError {
    /// Build a syntax error pointing at the location serde_json reported
    pub fn from_json_error(err: &serde_json::Error, content: &str, filename: &str) -> Self {
        let span = offset_of(content, err.line(), err.column()).map(|offset| {
            let len = usize::from(offset < content.len());
            SourceSpan::from((offset, len))
        });

        ProjectFileError::Syntax {
            message: err.to_string(),
            src: NamedSource::new(filename, content.to_string()),
            span,
        }
    }
}

/// Byte offset of a 1-based line/column position
fn offset_of(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let mut offset = 0;
    for (i, text) in content.split_inclusive('\n').enumerate() {
        if i + 1 == line {
            let col = column.saturating_sub(1).min(text.len());
            return Some(offset + col);
        }
        offset += text.len();
    }
    Some(content.len())
}

/// JSON type name for messages
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_of() {
        let content = "{\n  \"cotes\": x\n}";
        assert_eq!(offset_of(content, 1, 1), Some(0));
        assert_eq!(offset_of(content, 2, 3), Some(4));
        assert_eq!(offset_of(content, 0, 0), None);
        assert_eq!(offset_of(content, 9, 1), Some(content.len()));
    }

    #[test]
    fn test_syntax_error_has_span() {
        let content = "{\"cotes\": [}";
        let err = serde_json::from_str::<serde_json::Value>(content).unwrap_err();
        match ProjectFileError::from_json_error(&err, content, "chain.json") {
            ProjectFileError::Syntax { span, message, .. } => {
                assert!(span.is_some());
                assert!(!message.is_empty());
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
