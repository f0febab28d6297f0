//! Shared utilities for CLI commands

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::fs;
use std::path::Path;

use crate::cli::helpers::format_mm;
use crate::core::{ChainStore, Config};
use crate::format::LoadReport;

/// Read a project file into a store
pub fn load_store(path: &Path, config: Config) -> Result<(ChainStore, LoadReport)> {
    let bytes = fs::read(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("cannot read {}", path.display()))?;

    let mut store = ChainStore::new(config);
    let report = store.import_named(&bytes, &path.display().to_string())?;
    Ok((store, report))
}

/// Write a store back to its project file
pub fn save_store(path: &Path, store: &ChainStore) -> Result<()> {
    fs::write(path, store.export_project())
        .into_diagnostic()
        .wrap_err_with(|| format!("cannot write {}", path.display()))?;
    log::debug!("saved {} dimension(s) to {}", store.len(), path.display());
    Ok(())
}

/// Print repairs made while loading leniently
pub fn print_load_report(report: &LoadReport) {
    for field in &report.defaulted_fields {
        eprintln!(
            "{} Ignored malformed `{}`, using an empty value",
            style("!").yellow(),
            field
        );
    }
    if report.null_numerics > 0 {
        eprintln!(
            "{} {} dimension(s) have empty numeric fields",
            style("!").yellow(),
            report.null_numerics
        );
    }
    if report.padded_anchors > 0 {
        eprintln!(
            "{} Placed {} missing callout(s) at default positions",
            style("!").yellow(),
            report.padded_anchors
        );
    }
    if report.dropped_anchors > 0 {
        eprintln!(
            "{} Ignored {} position(s) without a dimension",
            style("!").yellow(),
            report.dropped_anchors
        );
    }
}

/// One-line functional clearance summary
pub fn clearance_line(store: &ChainStore) -> String {
    let decimals = store.config().decimals;
    match store.aggregate() {
        Ok(agg) => format!(
            "Functional clearance: {} mm to {} mm",
            style(format_mm(agg.clearance_min, decimals)).bold(),
            style(format_mm(agg.clearance_max, decimals)).bold()
        ),
        Err(e) => format!("Functional clearance: {} ({})", style("unavailable").red(), e),
    }
}
