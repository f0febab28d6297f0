//! `dimchain new` command - create a project file

use console::style;
use miette::Result;
use std::path::PathBuf;

use crate::cli::commands::utils::{clearance_line, save_store};
use crate::cli::GlobalOpts;
use crate::core::ChainStore;

#[derive(clap::Args, Debug)]
pub struct NewArgs {
    /// Project file to create
    pub file: PathBuf,

    /// Start from the two-dimension example chain
    #[arg(long)]
    pub sample: bool,

    /// Overwrite an existing file
    #[arg(long, short = 'f')]
    pub force: bool,
}

pub fn run(args: NewArgs, global: &GlobalOpts) -> Result<()> {
    if args.file.exists() && !args.force {
        return Err(miette::miette!(
            help = "use --force to overwrite it",
            "{} already exists",
            args.file.display()
        ));
    }

    let config = global.config();
    let store = if args.sample {
        ChainStore::sample(config)
    } else {
        ChainStore::new(config)
    };
    save_store(&args.file, &store)?;

    println!(
        "{} Created {} with {} dimension(s)",
        style("✓").green(),
        style(args.file.display()).cyan(),
        store.len()
    );
    if !store.is_empty() {
        println!("  {}", clearance_line(&store));
    }
    Ok(())
}
