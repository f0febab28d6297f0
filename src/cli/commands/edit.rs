//! `dimchain add|set|rm|move` commands - edit the chain in place
//!
//! Each command loads the project, applies one operation and saves it. When
//! the operation fails the file is not written.

use console::style;
use miette::Result;
use std::path::{Path, PathBuf};

use crate::cli::commands::utils::{clearance_line, load_store, print_load_report, save_store};
use crate::cli::helpers::position_to_index;
use crate::cli::GlobalOpts;
use crate::core::ChainStore;
use crate::entities::DimensionField;

#[derive(clap::Args, Debug)]
pub struct AddArgs {
    /// Project file
    pub file: PathBuf,

    /// Label (default: L<n>)
    #[arg(long)]
    pub id: Option<String>,

    /// Nominal value (mm)
    #[arg(long, allow_hyphen_values = true)]
    pub nominal: Option<String>,

    /// Lower tolerance offset (mm)
    #[arg(long, allow_hyphen_values = true)]
    pub tol_min: Option<String>,

    /// Upper tolerance offset (mm)
    #[arg(long, allow_hyphen_values = true)]
    pub tol_max: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// Project file
    pub file: PathBuf,

    /// Dimension number (1-based)
    pub position: usize,

    /// Field to set: id, nominal, tolMin or tolMax
    pub field: DimensionField,

    /// New value
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

#[derive(clap::Args, Debug)]
pub struct RemoveArgs {
    /// Project file
    pub file: PathBuf,

    /// Dimension number (1-based)
    pub position: usize,
}

#[derive(clap::Args, Debug)]
pub struct MoveArgs {
    /// Project file
    pub file: PathBuf,

    /// Dimension number (1-based)
    pub position: usize,

    /// New callout x coordinate
    #[arg(allow_hyphen_values = true)]
    pub x: f64,

    /// New callout y coordinate
    #[arg(allow_hyphen_values = true)]
    pub y: f64,
}

fn open(file: &Path, global: &GlobalOpts) -> Result<ChainStore> {
    let (store, report) = load_store(file, global.config())?;
    print_load_report(&report);
    Ok(store)
}

pub fn run_add(args: AddArgs, global: &GlobalOpts) -> Result<()> {
    let mut store = open(&args.file, global)?;
    let index = store.add_entry();

    let edits = [
        (DimensionField::Id, args.id),
        (DimensionField::Nominal, args.nominal),
        (DimensionField::TolMin, args.tol_min),
        (DimensionField::TolMax, args.tol_max),
    ];
    for (field, value) in edits {
        if let Some(value) = value {
            store.update_field(index, field, &value)?;
        }
    }
    save_store(&args.file, &store)?;

    let dim = store.dimension(index)?;
    println!(
        "{} Added {} as dimension {}",
        style("✓").green(),
        style(&dim.id).cyan(),
        index + 1
    );
    println!("  {}", clearance_line(&store));
    Ok(())
}

pub fn run_set(args: SetArgs, global: &GlobalOpts) -> Result<()> {
    let mut store = open(&args.file, global)?;
    let index = position_to_index(args.position)?;

    store.update_field(index, args.field, &args.value)?;
    save_store(&args.file, &store)?;

    let dim = store.dimension(index)?;
    println!(
        "{} {} {} = {}",
        style("✓").green(),
        style(&dim.id).cyan(),
        args.field,
        args.value.trim()
    );
    println!("  {}", clearance_line(&store));
    Ok(())
}

pub fn run_remove(args: RemoveArgs, global: &GlobalOpts) -> Result<()> {
    let mut store = open(&args.file, global)?;
    let index = position_to_index(args.position)?;

    let removed = store.delete_entry(index)?;
    save_store(&args.file, &store)?;

    println!(
        "{} Removed {} ({} dimension(s) left)",
        style("✓").green(),
        style(&removed.id).cyan(),
        store.len()
    );
    println!("  {}", clearance_line(&store));
    Ok(())
}

pub fn run_move(args: MoveArgs, global: &GlobalOpts) -> Result<()> {
    let mut store = open(&args.file, global)?;
    let index = position_to_index(args.position)?;

    store.move_anchor(index, args.x, args.y)?;
    save_store(&args.file, &store)?;

    let dim = store.dimension(index)?;
    println!(
        "{} Moved {} callout to ({}, {})",
        style("✓").green(),
        style(&dim.id).cyan(),
        args.x,
        args.y
    );
    Ok(())
}
