//! Check command implementation.
//!
//! Loads a catalog, runs the lints and fails when any lint is an error.

use clap::Args;

use crate::error::{MonError, Result};
use crate::output::{plural, Printer};
use crate::validation::validate_catalog;

use super::CatalogArgs;

/// Load a directory and run the catalog lints
#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let catalog = args.catalog.load(printer)?;
    let result = validate_catalog(&catalog);

    for diagnostic in result.iter() {
        printer.diagnostic(diagnostic);
    }

    let errors = result.error_count();
    let warnings = result.warning_count();
    let failed = errors > 0 || (args.strict && warnings > 0);

    if failed {
        return Err(MonError::Command {
            message: format!(
                "Check failed: {}, {}",
                plural(errors, "error", "errors"),
                plural(warnings, "warning", "warnings")
            ),
            help: None,
        });
    }

    if warnings > 0 {
        printer.warning("Checked", &plural(warnings, "warning", "warnings"));
    } else {
        printer.status("Checked", "no problems found");
    }

    Ok(())
}
