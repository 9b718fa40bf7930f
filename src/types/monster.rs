//! Monster template definitions.
//!
//! A [`MonsterDefinition`] is built from one `.mon` file. Fields not declared
//! in the file keep their defaults.

use std::borrow::Borrow;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use strum::{Display, EnumString};

use super::flags::CreatureFlag;
use super::skill::{SkillDescriptor, SkillKind};

/// Unique catalog key of a monster template (the file's `RaceNumber` text).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RaceId(String);

impl RaceId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Numeric value of the id, when it is a plain number.
    pub fn number(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl fmt::Display for RaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for RaceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RaceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Visual template: look type plus four colour indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outfit {
    pub look_type: u16,
    pub head: u8,
    pub body: u8,
    pub legs: u8,
    pub feet: u8,
}

/// Target selection weighting, carried through uninterpreted.
///
/// Written in files as `(closest, weakest, strongest, random)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Strategy {
    pub closest: u8,
    pub weakest: u8,
    pub strongest: u8,
    pub random: u8,
}

/// Blood (and corpse splash) kind. Unknown names leave the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum BloodType {
    #[default]
    None,
    Blood,
    Slime,
    Bones,
    Fire,
    Energy,
}

/// How many of an item a drop yields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountRange {
    pub min: u16,
    pub max: u16,
}

impl fmt::Display for CountRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.max)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

/// A possible drop: item, chance out of 1000, optional count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InventoryItem {
    pub item_id: u16,
    pub chance: u16,
    pub count: Option<CountRange>,
}

/// A monster template read from one file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonsterDefinition {
    pub race_id: RaceId,
    pub name: String,
    pub article: String,
    pub outfit: Outfit,
    pub corpse: u16,
    pub blood: BloodType,
    pub experience: u32,
    pub summon_cost: u16,
    pub flee_threshold: u16,
    pub attack: u16,
    pub defend: u16,
    pub armor: u16,
    pub lose_target: u8,
    pub strategy: Strategy,
    pub flags: BTreeSet<CreatureFlag>,
    /// Skills registered from the file (unarmed combat only).
    pub skills: BTreeMap<SkillKind, SkillDescriptor>,
    pub max_hitpoints: u16,
    pub base_speed: u16,
    pub capacity: u16,
    pub inventory: Vec<InventoryItem>,
    pub phrases: Vec<String>,
}

impl MonsterDefinition {
    /// Whether the template carries a creature flag.
    pub fn has_flag(&self, flag: CreatureFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Name prefixed with its article, e.g. "a rat".
    pub fn display_name(&self) -> String {
        if self.article.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.article, self.name)
        }
    }
}
