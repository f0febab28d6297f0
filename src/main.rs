use clap::Parser;
use dimchain::cli::commands::{check, completions, edit, image, new, show};
use dimchain::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = &cli.global;

    match cli.command {
        Commands::New(args) => new::run(args, global),
        Commands::Show(args) => show::run(args, global),
        Commands::Add(args) => edit::run_add(args, global),
        Commands::Set(args) => edit::run_set(args, global),
        Commands::Remove(args) => edit::run_remove(args, global),
        Commands::Move(args) => edit::run_move(args, global),
        Commands::Image(args) => image::run(args, global),
        Commands::Check(args) => check::run(args, global),
        Commands::Completions(args) => completions::run(args),
    }
}
