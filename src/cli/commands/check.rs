//! `dimchain check` command - validate a project file
//!
//! Loads the file with the configured import policy and reports every
//! repair and suspicious value. Unresolved numeric fields fail the check;
//! inverted tolerances and duplicate labels are warnings only.

use console::style;
use miette::Result;
use std::collections::HashMap;
use std::path::PathBuf;

use crate::cli::commands::utils::{clearance_line, load_store, print_load_report};
use crate::cli::GlobalOpts;
use crate::core::ChainStore;

#[derive(clap::Args, Debug)]
pub struct CheckArgs {
    /// Project file
    pub file: PathBuf,
}

/// Findings of a check
#[derive(Debug, Default, PartialEq)]
pub struct CheckSummary {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Inspect the loaded chain
pub fn inspect(store: &ChainStore) -> CheckSummary {
    let mut summary = CheckSummary::default();
    let mut seen: HashMap<&str, usize> = HashMap::new();

    for (i, dim) in store.dimensions().iter().enumerate() {
        if let Some((field, raw)) = dim.first_invalid() {
            summary.errors.push(format!(
                "{} (dimension {}): {} is not a number: '{}'",
                dim.id,
                i + 1,
                field,
                raw
            ));
        }
        if dim.is_inverted() {
            summary.warnings.push(format!(
                "{} (dimension {}): tolMin is greater than tolMax",
                dim.id,
                i + 1
            ));
        }
        let first = *seen.entry(dim.id.as_str()).or_insert(i + 1);
        if first != i + 1 {
            summary.warnings.push(format!(
                "{} is used by dimensions {} and {}",
                dim.id,
                first,
                i + 1
            ));
        }
    }

    summary
}

pub fn run(args: CheckArgs, global: &GlobalOpts) -> Result<()> {
    let config = global.config();
    let policy = config.import_policy;
    let (store, report) = load_store(&args.file, config)?;
    print_load_report(&report);

    let summary = inspect(&store);
    for warning in &summary.warnings {
        println!("{} {}", style("!").yellow(), warning);
    }
    for error in &summary.errors {
        println!("{} {}", style("✗").red(), error);
    }

    if !summary.errors.is_empty() {
        return Err(miette::miette!(
            "{} has {} invalid field(s)",
            args.file.display(),
            summary.errors.len()
        ));
    }

    println!(
        "{} {}: {} dimension(s), {} import{}",
        style("✓").green(),
        style(args.file.display()).cyan(),
        store.len(),
        policy,
        if report.is_clean() { "" } else { " (repaired)" }
    );
    println!("  {}", clearance_line(&store));
    Ok(())
}
