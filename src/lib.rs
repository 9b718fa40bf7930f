//! moncat - Monster template decoder and catalog builder
//!
//! A library for decoding `.mon` monster definition files into typed
//! templates and collecting a directory of them into a catalog keyed by
//! race id.

pub mod catalog;
pub mod cli;
pub mod discovery;
pub mod error;
pub mod mapper;
pub mod output;
pub mod parser;
pub mod types;
pub mod validation;

pub use catalog::{CatalogBuilder, MonsterCatalog};
pub use discovery::{load_catalog, load_directory, CatalogConfig, MANIFEST_FILENAME};
pub use error::{MonError, Result};
pub use mapper::{parse_monster, parse_monster_str, FieldOutcome};
pub use types::{
    BloodType, CountRange, CreatureFlag, InventoryItem, MonsterDefinition, Outfit, RaceId,
    SkillDescriptor, SkillKind, SkillName, Strategy,
};
pub use validation::{validate_catalog, Diagnostic, Severity, ValidationResult};
