//! Core types for monster templates.

pub mod flags;
pub mod monster;
pub mod skill;

pub use flags::CreatureFlag;
pub use monster::{
    BloodType, CountRange, InventoryItem, MonsterDefinition, Outfit, RaceId, Strategy,
};
pub use skill::{SkillDescriptor, SkillKind, SkillName, SkillTuple};
