//! Lint checks for a monster catalog.
//!
//! Each check takes a `&MonsterCatalog` and returns a `ValidationResult`.
//! Races are visited in `race_ids()` order so output is stable.

use std::collections::BTreeMap;

use crate::catalog::MonsterCatalog;
use crate::types::RaceId;

use super::warning::{Diagnostic, ValidationResult};

/// Highest meaningful loot chance (per mille).
pub const MAX_LOOT_CHANCE: u16 = 1000;

/// Check for definitions without a name.
pub fn check_empty_names(catalog: &MonsterCatalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    for race_id in catalog.race_ids() {
        let Some(def) = catalog.get(race_id.as_str()) else {
            continue;
        };
        if def.name.trim().is_empty() {
            result.push(
                Diagnostic::warning(
                    "moncat::validate::empty-name",
                    format!("Race {} has no name", race_id),
                )
                .with_help("Add a `Name = \"...\"` line")
                .for_race(race_id),
            );
        }
    }

    result
}

/// Check for definitions that never set their hitpoints.
pub fn check_hitpoints(catalog: &MonsterCatalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    for race_id in catalog.race_ids() {
        let Some(def) = catalog.get(race_id.as_str()) else {
            continue;
        };
        if def.max_hitpoints == 0 {
            result.push(
                Diagnostic::warning(
                    "moncat::validate::no-hitpoints",
                    format!("{} (race {}) has no hitpoints", def.display_name(), race_id),
                )
                .with_help("Add a HitPoints tuple to the Skills list")
                .for_race(race_id),
            );
        }
    }

    result
}

/// Check for loot entries whose chance exceeds the per-mille scale.
pub fn check_loot_chances(catalog: &MonsterCatalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    for race_id in catalog.race_ids() {
        let Some(def) = catalog.get(race_id.as_str()) else {
            continue;
        };
        for item in def.inventory.iter().filter(|i| i.chance > MAX_LOOT_CHANCE) {
            result.push(
                Diagnostic::error(
                    "moncat::validate::loot-chance",
                    format!(
                        "{} (race {}) drops item {} with chance {}",
                        def.display_name(),
                        race_id,
                        item.item_id,
                        item.chance
                    ),
                )
                .with_help(format!("Chances are per mille; use at most {MAX_LOOT_CHANCE}"))
                .for_race(race_id),
            );
        }
    }

    result
}

/// Check for several races sharing one name.
pub fn check_duplicate_names(catalog: &MonsterCatalog) -> ValidationResult {
    let mut result = ValidationResult::new();

    let mut by_name: BTreeMap<String, Vec<&RaceId>> = BTreeMap::new();
    for race_id in catalog.race_ids() {
        let Some(def) = catalog.get(race_id.as_str()) else {
            continue;
        };
        let name = def.name.trim().to_lowercase();
        if !name.is_empty() {
            by_name.entry(name).or_default().push(race_id);
        }
    }

    for (name, races) in by_name {
        if races.len() < 2 {
            continue;
        }
        let list: Vec<&str> = races.iter().map(|r| r.as_str()).collect();
        result.push(
            Diagnostic::warning(
                "moncat::validate::duplicate-name",
                format!("Name '{}' is used by races {}", name, list.join(", ")),
            )
            .with_help("Give each race a distinct name")
            .for_race(races[0]),
        );
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogBuilder;
    use crate::types::{InventoryItem, MonsterDefinition};
    use pretty_assertions::assert_eq;

    fn monster(race_id: &str, name: &str, hitpoints: u16) -> MonsterDefinition {
        MonsterDefinition {
            race_id: RaceId::from(race_id),
            name: name.to_string(),
            max_hitpoints: hitpoints,
            ..Default::default()
        }
    }

    fn catalog(defs: Vec<MonsterDefinition>) -> MonsterCatalog {
        let mut builder = CatalogBuilder::new();
        for def in defs {
            let source = format!("{}.mon", def.race_id);
            builder.add(def, source).unwrap();
        }
        builder.build()
    }

    #[test]
    fn test_empty_name() {
        let result = check_empty_names(&catalog(vec![
            monster("1", "", 10),
            monster("2", "rat", 10),
        ]));

        assert_eq!(result.warning_count(), 1);
        let d = result.iter().next().unwrap();
        assert_eq!(d.code, "moncat::validate::empty-name");
        assert_eq!(d.race_id, Some(RaceId::from("1")));
    }

    #[test]
    fn test_no_hitpoints() {
        let result = check_hitpoints(&catalog(vec![
            monster("1", "ghost", 0),
            monster("2", "rat", 20),
        ]));

        assert_eq!(result.warning_count(), 1);
        assert!(result.iter().next().unwrap().message.contains("ghost"));
    }

    #[test]
    fn test_loot_chance_above_scale() {
        let mut rat = monster("21", "rat", 20);
        rat.inventory = vec![
            InventoryItem {
                item_id: 3976,
                chance: 1000,
                count: None,
            },
            InventoryItem {
                item_id: 3031,
                chance: 1500,
                count: None,
            },
        ];

        let result = check_loot_chances(&catalog(vec![rat]));

        assert_eq!(result.error_count(), 1);
        assert!(result.iter().next().unwrap().message.contains("3031"));
    }

    #[test]
    fn test_duplicate_names_ignore_case() {
        let result = check_duplicate_names(&catalog(vec![
            monster("21", "rat", 20),
            monster("3", "Rat", 20),
            monster("5", "orc", 70),
        ]));

        assert_eq!(result.warning_count(), 1);
        let d = result.iter().next().unwrap();
        assert_eq!(d.message, "Name 'rat' is used by races 3, 21");
        assert_eq!(d.race_id, Some(RaceId::from("3")));
    }
}
