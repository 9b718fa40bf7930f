pub mod check;
pub mod completions;
pub mod list;
pub mod show;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::catalog::MonsterCatalog;
use crate::discovery::{load_catalog, resolve_config};
use crate::error::Result;
use crate::output::{display_path, plural, Printer};

/// moncat - Monster template decoder and catalog tool
#[derive(Parser, Debug)]
#[command(name = "moncat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every monster in a directory
    List(list::ListArgs),

    /// Show all fields of one monster
    Show(show::ShowArgs),

    /// Load a directory and run the catalog lints
    Check(check::CheckArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Where to load the catalog from.
#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Monster directory (default: current directory)
    #[arg(default_value = ".")]
    pub dir: PathBuf,

    /// Configuration file (default: moncat.yaml inside DIR, if present)
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

impl CatalogArgs {
    /// Resolve the configuration and load the catalog.
    pub fn load(&self, printer: &Printer) -> Result<MonsterCatalog> {
        let config = resolve_config(&self.dir, self.config.as_deref())?;
        printer.status("Loading", &display_path(&config.directory));

        let catalog = load_catalog(&config)?;
        printer.status(
            "Loaded",
            &plural(catalog.len(), "monster", "monsters"),
        );
        Ok(catalog)
    }
}
