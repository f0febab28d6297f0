//! Output formatting utilities

use crate::cli::OutputFormat;

/// Determine the effective output format based on context
pub fn effective_format(format: OutputFormat, is_terminal: bool) -> OutputFormat {
    match format {
        OutputFormat::Auto => {
            if is_terminal {
                OutputFormat::Pretty
            } else {
                OutputFormat::Tsv
            }
        }
        other => other,
    }
}

/// Whether stdout is an interactive terminal
pub fn stdout_is_terminal() -> bool {
    console::Term::stdout().is_term()
}
