//! File discovery and catalog loading.
//!
//! This module finds the monster files of a directory, decodes each one and
//! assembles the results into a [`MonsterCatalog`]. Options come from an
//! explicit [`CatalogConfig`], either built in code or read from a
//! `moncat.yaml` file.
//!
//! # Example
//!
//! ```ignore
//! use moncat::discovery::load_directory;
//!
//! let catalog = load_directory("data/monster")?;
//! println!("Loaded {} monsters", catalog.len());
//! ```

mod loader;
mod manifest;
mod scanner;

use std::path::Path;

use crate::catalog::{CatalogBuilder, MonsterCatalog};
use crate::error::{MonError, Result};

pub use loader::{decode_line, load_monster_file, SourceLines};
pub use manifest::CatalogConfig;
pub use scanner::scan_directory;

/// The name of the configuration file.
pub const MANIFEST_FILENAME: &str = "moncat.yaml";

/// Load every monster file described by `config` into a catalog.
///
/// The first fatal error aborts the load; no partial catalog is returned.
pub fn load_catalog(config: &CatalogConfig) -> Result<MonsterCatalog> {
    if !config.directory.is_dir() {
        return Err(MonError::DirectoryNotFound {
            path: config.directory.clone(),
        });
    }

    let files = scan_directory(config)?;
    tracing::debug!(
        directory = %config.directory.display(),
        files = files.len(),
        "scanned monster directory"
    );

    let mut builder = CatalogBuilder::new();
    let mut skipped = 0usize;
    for path in &files {
        match load_monster_file(path)? {
            Some(definition) => {
                builder.add(definition, path)?;
            }
            None => skipped += 1,
        }
    }

    let catalog = builder.build();
    tracing::info!(
        directory = %config.directory.display(),
        monsters = catalog.len(),
        skipped,
        "loaded monster catalog"
    );

    Ok(catalog)
}

/// Load a monster directory with default options.
pub fn load_directory(directory: impl AsRef<Path>) -> Result<MonsterCatalog> {
    load_catalog(&CatalogConfig::new(directory.as_ref()))
}

/// Resolve the configuration for a CLI invocation.
///
/// An explicit config file wins; otherwise a `moncat.yaml` inside the
/// directory is used when present, falling back to defaults.
pub fn resolve_config(directory: &Path, config_file: Option<&Path>) -> Result<CatalogConfig> {
    if let Some(path) = config_file {
        return CatalogConfig::load(path);
    }

    let manifest_path = directory.join(MANIFEST_FILENAME);
    if manifest_path.is_file() {
        CatalogConfig::load(&manifest_path)
    } else {
        Ok(CatalogConfig::new(directory))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_empty_directory() {
        let dir = tempdir().unwrap();
        let catalog = load_directory(dir.path()).unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_load_one_entry_per_file() {
        let dir = tempdir().unwrap();
        write(dir.path(), "rat.mon", "RaceNumber = 21\nName = \"rat\"\n");
        write(dir.path(), "orc.mon", "RaceNumber = 5\nName = \"orc\"\n");
        write(dir.path(), "troll.mon", "RaceNumber = 15\nName = \"troll\"\n");

        let catalog = load_directory(dir.path()).unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get("21").unwrap().name, "rat");
        assert_eq!(catalog.get("5").unwrap().name, "orc");
        assert_eq!(catalog.get("15").unwrap().name, "troll");
    }

    #[test]
    fn test_load_ignores_other_extensions() {
        let dir = tempdir().unwrap();
        write(dir.path(), "rat.mon", "RaceNumber = 21\n");
        write(dir.path(), "readme.txt", "RaceNumber = 22\n");

        let catalog = load_directory(dir.path()).unwrap();

        assert_eq!(catalog.len(), 1);
        assert!(!catalog.contains("22"));
    }

    #[test]
    fn test_load_nonexistent_directory() {
        let err = load_directory("/nonexistent/monster").unwrap_err();
        assert!(matches!(err, MonError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_load_file_instead_of_directory() {
        let dir = tempdir().unwrap();
        let file = write(dir.path(), "rat.mon", "RaceNumber = 21\n");

        let err = load_directory(&file).unwrap_err();
        assert!(matches!(err, MonError::DirectoryNotFound { .. }));
    }

    #[test]
    fn test_load_duplicate_race_id() {
        let dir = tempdir().unwrap();
        let first = write(dir.path(), "a.mon", "RaceNumber = 50\nName = \"a\"\n");
        let second = write(dir.path(), "b.mon", "RaceNumber = 50\nName = \"b\"\n");

        let err = load_directory(dir.path()).unwrap_err();
        match err {
            MonError::DuplicateKey {
                race_id,
                first: f,
                second: s,
            } => {
                assert_eq!(race_id, "50");
                assert_eq!(f, first);
                assert_eq!(s, second);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_load_aborts_on_bad_file() {
        let dir = tempdir().unwrap();
        write(dir.path(), "a.mon", "RaceNumber = 1\n");
        let bad = write(dir.path(), "b.mon", "RaceNumber = 2\nArmor = 70000\n");

        let err = load_directory(dir.path()).unwrap_err();
        match &err {
            MonError::InFile { path, .. } => assert_eq!(path, &bad),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(err.root(), MonError::NumericConversion { .. }));
    }

    #[test]
    fn test_load_missing_race_number_fails() {
        let dir = tempdir().unwrap();
        write(dir.path(), "nameless.mon", "Name = \"ghost\"\n");

        let err = load_directory(dir.path()).unwrap_err();
        assert!(matches!(
            err.root(),
            MonError::MissingProperty { property: "racenumber" }
        ));
    }

    #[test]
    fn test_load_latin1_directory() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("mummy.mon"),
            b"# Mumie\nRaceNumber = 65\nName = \"M\xfcmmy\"\n",
        )
        .unwrap();

        let catalog = load_directory(dir.path()).unwrap();
        assert_eq!(catalog.get("65").unwrap().name, "Mümmy");
    }

    #[test]
    fn test_load_recursive_config() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("bosses")).unwrap();
        write(dir.path(), "rat.mon", "RaceNumber = 21\n");
        write(&dir.path().join("bosses"), "demon.mon", "RaceNumber = 35\n");

        let config = CatalogConfig {
            recursive: true,
            ..CatalogConfig::new(dir.path())
        };
        let catalog = load_catalog(&config).unwrap();

        assert_eq!(catalog.len(), 2);
        assert!(catalog.source_of("35").unwrap().ends_with("bosses/demon.mon"));
    }

    #[cfg(unix)]
    #[test]
    fn test_load_fails_when_directory_walk_fails() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("bosses")).unwrap();
        write(dir.path(), "rat.mon", "RaceNumber = 21\n");
        std::os::unix::fs::symlink(dir.path(), dir.path().join("bosses/loop")).unwrap();

        let config = CatalogConfig {
            recursive: true,
            ..CatalogConfig::new(dir.path())
        };
        let err = load_catalog(&config).unwrap_err();
        assert!(matches!(err, MonError::Io { .. }));
    }

    #[test]
    fn test_resolve_config_prefers_manifest() {
        let dir = tempdir().unwrap();
        write(dir.path(), MANIFEST_FILENAME, "directory: monster\nrecursive: true\n");

        let config = resolve_config(dir.path(), None).unwrap();
        assert_eq!(config.directory, dir.path().join("monster"));
        assert!(config.recursive);
    }

    #[test]
    fn test_resolve_config_defaults() {
        let dir = tempdir().unwrap();

        let config = resolve_config(dir.path(), None).unwrap();
        assert_eq!(config, CatalogConfig::new(dir.path()));
    }

    #[test]
    fn test_resolve_config_manifest_without_directory() {
        let dir = tempdir().unwrap();
        write(dir.path(), MANIFEST_FILENAME, "sort_files: false\n");

        let config = resolve_config(dir.path(), None).unwrap();
        assert_eq!(config.directory, dir.path());
        assert!(!config.sort_files);
    }
}
