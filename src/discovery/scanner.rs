//! File system scanner for discovering monster files.

use std::io;
use std::path::PathBuf;

use walkdir::WalkDir;

use crate::error::{MonError, Result};

use super::manifest::CatalogConfig;

/// Find every monster file under the configured directory.
///
/// Only the top level is visited unless `recursive` is set. Entries that
/// vanish during the walk are skipped; any other read failure is an error.
/// Paths come back in filename order when `sort_files` is set, otherwise in
/// directory order.
pub fn scan_directory(config: &CatalogConfig) -> Result<Vec<PathBuf>> {
    let mut walker = WalkDir::new(&config.directory)
        .min_depth(1)
        .follow_links(true);
    if !config.recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.io_error().map(io::Error::kind) == Some(io::ErrorKind::NotFound) => {
                tracing::debug!(error = %e, "entry vanished during scan; skipping");
                continue;
            }
            Err(e) => return Err(walk_error(config, e)),
        };

        if entry.file_type().is_file() && config.matches_extension(entry.path()) {
            files.push(entry.into_path());
        }
    }

    if config.sort_files {
        files.sort();
    }

    Ok(files)
}

fn walk_error(config: &CatalogConfig, err: walkdir::Error) -> MonError {
    MonError::Io {
        path: err
            .path()
            .map(|p| p.to_path_buf())
            .unwrap_or_else(|| config.directory.clone()),
        message: format!("Failed to scan directory: {}", err),
    }
}
