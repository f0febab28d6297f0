//! Command-line arguments

use clap::{Parser, Subcommand, ValueEnum};

use crate::cli::commands::check::CheckArgs;
use crate::cli::commands::completions::CompletionsArgs;
use crate::cli::commands::edit::{AddArgs, MoveArgs, RemoveArgs, SetArgs};
use crate::cli::commands::image::ImageArgs;
use crate::cli::commands::new::NewArgs;
use crate::cli::commands::show::ShowArgs;
use crate::core::{Config, ImportPolicy};

#[derive(Parser, Debug)]
#[command(
    name = "dimchain",
    version,
    about = "Dimension chain editor - functional clearance from toleranced dimensions",
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by every command
#[derive(clap::Args, Debug, Clone)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'o', global = true, default_value = "auto")]
    pub output: OutputFormat,

    /// Reject malformed project files instead of repairing them
    #[arg(long, global = true, env = "DIMCHAIN_STRICT")]
    pub strict: bool,

    /// Write indented JSON when saving
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Decimals shown for millimeter values
    #[arg(long, global = true)]
    pub decimals: Option<usize>,
}

impl GlobalOpts {
    /// Layered config with command-line overrides applied
    pub fn config(&self) -> Config {
        let mut config = Config::load();
        if self.strict {
            config.import_policy = ImportPolicy::Strict;
        }
        if self.pretty {
            config.pretty = true;
        }
        if let Some(decimals) = self.decimals {
            config.decimals = decimals;
        }
        config
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a new project file
    New(NewArgs),

    /// Show the chain, its totals and the functional clearance
    Show(ShowArgs),

    /// Append a dimension
    Add(AddArgs),

    /// Set one field of a dimension
    Set(SetArgs),

    /// Remove a dimension and its callout
    #[command(name = "rm")]
    Remove(RemoveArgs),

    /// Move a dimension's callout on the diagram
    #[command(name = "move")]
    Move(MoveArgs),

    /// Set or clear the background drawing
    Image(ImageArgs),

    /// Validate a project file and report repairs and warnings
    Check(CheckArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table on a terminal, TSV when piped
    Auto,
    /// Human-readable table
    Pretty,
    Json,
    Yaml,
    /// Tab-separated rows
    Tsv,
    /// Comma-separated rows
    Csv,
}
