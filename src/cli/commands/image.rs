//! `dimchain image` command - set or clear the background drawing

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};
use std::path::PathBuf;

use crate::cli::commands::utils::{load_store, print_load_report, save_store};
use crate::cli::GlobalOpts;
use crate::core::BackgroundImage;

#[derive(clap::Args, Debug)]
pub struct ImageArgs {
    /// Project file
    pub file: PathBuf,

    #[command(flatten)]
    pub source: ImageSource,
}

#[derive(clap::Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ImageSource {
    /// Image file to embed in the project
    pub image: Option<PathBuf>,

    /// Store a reference (URL or identifier) instead of embedding
    #[arg(long)]
    pub reference: Option<String>,

    /// Remove the background
    #[arg(long)]
    pub clear: bool,
}

pub fn run(args: ImageArgs, global: &GlobalOpts) -> Result<()> {
    let (mut store, report) = load_store(&args.file, global.config())?;
    print_load_report(&report);

    let ImageSource {
        image,
        reference,
        clear,
    } = args.source;

    if clear {
        store.clear_background();
        save_store(&args.file, &store)?;
        println!("{} Background cleared", style("✓").green());
        return Ok(());
    }

    let background = match (image, reference) {
        (Some(path), _) => BackgroundImage::from_path(&path)
            .into_diagnostic()
            .wrap_err_with(|| format!("cannot read image {}", path.display()))?,
        (None, Some(reference)) => BackgroundImage::new(reference),
        (None, None) => return Err(miette::miette!("No background image given")),
    };

    let summary = background.to_string();
    store.set_background(background);
    save_store(&args.file, &store)?;
    println!("{} Background set to {}", style("✓").green(), summary);
    Ok(())
}
