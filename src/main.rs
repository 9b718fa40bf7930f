use clap::Parser;
use miette::Result;
use moncat::cli::{Cli, Commands};
use moncat::output::Printer;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::List(args) => moncat::cli::list::run(args, &printer)?,
        Commands::Show(args) => moncat::cli::show::run(args, &printer)?,
        Commands::Check(args) => moncat::cli::check::run(args, &printer)?,
        Commands::Completions(args) => moncat::cli::completions::run(args)?,
    }

    Ok(())
}
