//! Lints for a loaded monster catalog.
//!
//! Runs a suite of checks against a built catalog and reports errors
//! and warnings. Used by `moncat check`.

mod checks;
mod warning;

pub use checks::MAX_LOOT_CHANCE;
pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::catalog::MonsterCatalog;

/// Run all lint checks against the catalog.
pub fn validate_catalog(catalog: &MonsterCatalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_empty_names(catalog));
    result.merge(checks::check_hitpoints(catalog));
    result.merge(checks::check_loot_chances(catalog));
    result.merge(checks::check_duplicate_names(catalog));

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogBuilder;
    use crate::mapper::parse_monster_str;

    #[test]
    fn test_validate_empty_catalog() {
        let catalog = CatalogBuilder::new().build();
        let result = validate_catalog(&catalog);
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_clean_monster() {
        let rat = parse_monster_str(
            "RaceNumber = 21\nName = \"rat\"\nSkills = {(HitPoints,20,0,20,0,0,0)}\n",
        )
        .unwrap();
        let mut builder = CatalogBuilder::new();
        builder.add(rat, "rat.mon").unwrap();

        let result = validate_catalog(&builder.build());
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_collects_all_checks() {
        let ghost = parse_monster_str(
            "RaceNumber = 7\nInventory = {(3031,5,2000)}\n",
        )
        .unwrap();
        let mut builder = CatalogBuilder::new();
        builder.add(ghost, "ghost.mon").unwrap();

        let result = validate_catalog(&builder.build());
        assert!(result.has_errors());
        // empty-name + no-hitpoints
        assert_eq!(result.warning_count(), 2);
        assert_eq!(result.error_count(), 1);
    }
}
