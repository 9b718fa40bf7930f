//! Monster catalog keyed by race id.
//!
//! The catalog is immutable after construction - use [`CatalogBuilder`] to
//! assemble one. Race ids are unique; adding a second definition with an id
//! already present is an error, never an overwrite.
//!
//! # Example
//!
//! ```ignore
//! use moncat::catalog::CatalogBuilder;
//!
//! let mut builder = CatalogBuilder::new();
//! builder.add(rat, "monster/rat.mon")?;
//! builder.add(orc, "monster/orc.mon")?;
//!
//! let catalog = builder.build();
//! let rat = catalog.get("21");
//! ```

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{MonError, Result};
use crate::types::{MonsterDefinition, RaceId};

/// Immutable set of monster definitions, keyed by race id.
#[derive(Debug, Default)]
pub struct MonsterCatalog {
    monsters: HashMap<RaceId, MonsterDefinition>,
    sources: HashMap<RaceId, PathBuf>,
}

impl MonsterCatalog {
    /// Get a definition by race id.
    pub fn get(&self, race_id: &str) -> Option<&MonsterDefinition> {
        self.monsters.get(race_id)
    }

    /// Check whether a race id is present.
    pub fn contains(&self, race_id: &str) -> bool {
        self.monsters.contains_key(race_id)
    }

    /// The file a definition was loaded from.
    pub fn source_of(&self, race_id: &str) -> Option<&Path> {
        self.sources.get(race_id).map(PathBuf::as_path)
    }

    /// All race ids, numeric ids first in numeric order, then the rest.
    pub fn race_ids(&self) -> Vec<&RaceId> {
        let mut ids: Vec<&RaceId> = self.monsters.keys().collect();
        ids.sort_by_key(|id| (id.number().is_none(), id.number(), id.as_str()));
        ids
    }

    /// All definitions, in no particular order.
    pub fn definitions(&self) -> impl Iterator<Item = &MonsterDefinition> {
        self.monsters.values()
    }

    /// All (race id, definition) pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&RaceId, &MonsterDefinition)> {
        self.monsters.iter()
    }

    /// Number of definitions.
    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }
}

/// Builder for constructing a MonsterCatalog.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    monsters: HashMap<RaceId, MonsterDefinition>,
    sources: HashMap<RaceId, PathBuf>,
}

impl CatalogBuilder {
    /// Create a new catalog builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition loaded from `source`.
    ///
    /// Fails with `DuplicateKey` when the race id is already present.
    pub fn add(
        &mut self,
        definition: MonsterDefinition,
        source: impl Into<PathBuf>,
    ) -> Result<&mut Self> {
        let source = source.into();

        match self.monsters.entry(definition.race_id.clone()) {
            Entry::Occupied(existing) => {
                let first = self
                    .sources
                    .get(existing.key())
                    .cloned()
                    .unwrap_or_default();
                Err(MonError::DuplicateKey {
                    race_id: existing.key().to_string(),
                    first,
                    second: source,
                })
            }
            Entry::Vacant(slot) => {
                self.sources.insert(slot.key().clone(), source);
                slot.insert(definition);
                Ok(self)
            }
        }
    }

    /// Number of definitions added so far.
    pub fn len(&self) -> usize {
        self.monsters.len()
    }

    /// Check if nothing was added yet.
    pub fn is_empty(&self) -> bool {
        self.monsters.is_empty()
    }

    /// Freeze the builder into a catalog.
    pub fn build(self) -> MonsterCatalog {
        MonsterCatalog {
            monsters: self.monsters,
            sources: self.sources,
        }
    }
}
