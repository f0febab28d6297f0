//! `dimchain show` command - chain table, totals and functional clearance

use console::style;
use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::commands::utils::{clearance_line, load_store, print_load_report};
use crate::cli::helpers::{format_field, format_mm, truncate_str};
use crate::cli::output::{effective_format, stdout_is_terminal};
use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::ChainStore;
use crate::entities::stackup::AggregateResult;

#[derive(clap::Args, Debug)]
pub struct ShowArgs {
    /// Project file
    pub file: PathBuf,
}

/// Table row for pretty output
#[derive(Tabled)]
struct DimensionRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "NOMINAL")]
    nominal: String,
    #[tabled(rename = "TOL MIN")]
    tol_min: String,
    #[tabled(rename = "TOL MAX")]
    tol_max: String,
    #[tabled(rename = "X")]
    x: String,
    #[tabled(rename = "Y")]
    y: String,
}

/// Structured view for JSON/YAML output
#[derive(Serialize)]
struct ChainView {
    dimensions: Vec<DimensionView>,
    background: Option<String>,
    aggregate: Option<AggregateResult>,
}

#[derive(Serialize)]
struct DimensionView {
    id: String,
    nominal: Option<f64>,
    tol_min: Option<f64>,
    tol_max: Option<f64>,
    x: f64,
    y: f64,
}

pub fn run(args: ShowArgs, global: &GlobalOpts) -> Result<()> {
    let (store, report) = load_store(&args.file, global.config())?;
    print_load_report(&report);

    match effective_format(global.output, stdout_is_terminal()) {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&view(&store)).into_diagnostic()?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yml::to_string(&view(&store)).into_diagnostic()?;
            print!("{}", yaml);
        }
        OutputFormat::Tsv => {
            let stdout = std::io::stdout();
            write_delimited(&store, b'\t', stdout.lock())?;
        }
        OutputFormat::Csv => {
            let stdout = std::io::stdout();
            write_delimited(&store, b',', stdout.lock())?;
        }
        OutputFormat::Pretty | OutputFormat::Auto => print_pretty(&args, &store),
    }

    Ok(())
}

fn view(store: &ChainStore) -> ChainView {
    ChainView {
        dimensions: store
            .dimensions()
            .iter()
            .map(|d| DimensionView {
                id: d.id.clone(),
                nominal: d.nominal.value(),
                tol_min: d.tol_min.value(),
                tol_max: d.tol_max.value(),
                x: d.anchor.x,
                y: d.anchor.y,
            })
            .collect(),
        background: store.background().map(|b| b.as_str().to_string()),
        aggregate: store.aggregate().ok(),
    }
}

/// Write one row per dimension, with a header
pub fn write_delimited<W: Write>(store: &ChainStore, delimiter: u8, out: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(out);

    wtr.write_record(["n", "id", "nominal", "tol_min", "tol_max", "x", "y"])
        .into_diagnostic()?;
    for (i, d) in store.dimensions().iter().enumerate() {
        wtr.write_record([
            (i + 1).to_string(),
            d.id.clone(),
            d.nominal.to_string(),
            d.tol_min.to_string(),
            d.tol_max.to_string(),
            d.anchor.x.to_string(),
            d.anchor.y.to_string(),
        ])
        .into_diagnostic()?;
    }
    wtr.flush().into_diagnostic()?;
    Ok(())
}

fn print_pretty(args: &ShowArgs, store: &ChainStore) {
    let decimals = store.config().decimals;

    println!("{}", style("─".repeat(60)).dim());
    println!(
        "{}: {}",
        style("Project").bold(),
        style(args.file.display()).cyan()
    );
    let background = store
        .background()
        .map(|b| truncate_str(&b.to_string(), 50))
        .unwrap_or_else(|| "none".to_string());
    println!("{}: {}", style("Background").bold(), background);
    println!("{}", style("─".repeat(60)).dim());

    if store.is_empty() {
        println!();
        println!("No dimensions. Add one with `dimchain add`.");
        return;
    }

    let rows: Vec<DimensionRow> = store
        .dimensions()
        .iter()
        .enumerate()
        .map(|(i, d)| DimensionRow {
            position: i + 1,
            id: d.id.clone(),
            nominal: format_field(&d.nominal, decimals),
            tol_min: format_field(&d.tol_min, decimals),
            tol_max: format_field(&d.tol_max, decimals),
            x: format_mm(d.anchor.x, 1),
            y: format_mm(d.anchor.y, 1),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!();
    println!("{}", table);

    if let Ok(agg) = store.aggregate() {
        println!(
            "{}: nominal {}  tol min {}  tol max {}",
            style("Total").bold(),
            format_mm(agg.nominal_sum, decimals),
            format_mm(agg.tol_min_sum, decimals),
            format_mm(agg.tol_max_sum, decimals)
        );
    }
    println!("{}", clearance_line(store));

    for (i, d) in store.dimensions().iter().enumerate() {
        if d.is_inverted() {
            println!(
                "{} {} (dimension {}) has tolMin greater than tolMax",
                style("!").yellow(),
                d.id,
                i + 1
            );
        }
    }
}
