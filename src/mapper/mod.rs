//! Property-to-field mapping.
//!
//! Every known property name has a handler that decodes the raw value and
//! writes it into a [`MonsterDefinition`]. Handlers report what they did:
//!
//! - [`FieldOutcome::Applied`]: the value was recognized and written.
//! - [`FieldOutcome::Defaulted`]: the value was well-formed but named something
//!   unknown (blood type, flag, skill); the affected field keeps its default.
//! - [`FieldOutcome::Ignored`]: the property is a placeholder (`spells`,
//!   `poison`) or unknown.
//!
//! Malformed values are errors and abort the file.

use std::io;
use std::str::FromStr;

use crate::error::{MonError, Result};
use crate::parser::values::{
    numeric_error, parse_inventory, parse_number, parse_outfit, parse_phrases,
    parse_property_elements, parse_skills, parse_strategy, parse_text, FixedWidth,
};
use crate::parser::{tokenize_str, Property};
use crate::types::{BloodType, CreatureFlag, MonsterDefinition, RaceId, SkillKind, SkillName};

/// Result of applying one property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOutcome {
    Applied,
    Defaulted,
    Ignored,
}

/// Decodes one property into a definition.
pub type Handler = fn(&mut MonsterDefinition, &Property) -> Result<FieldOutcome>;

const HANDLERS: &[(&str, Handler)] = &[
    ("racenumber", set_race_id),
    ("name", set_name),
    ("article", set_article),
    ("outfit", set_outfit),
    ("corpse", set_corpse),
    ("blood", set_blood),
    ("experience", set_experience),
    ("summoncost", set_summon_cost),
    ("fleethreshold", set_flee_threshold),
    ("attack", set_attack),
    ("defend", set_defend),
    ("armor", set_armor),
    ("losetarget", set_lose_target),
    ("strategy", set_strategy),
    ("flags", set_flags),
    ("skills", set_skills),
    ("spells", placeholder),
    ("poison", placeholder),
    ("inventory", set_inventory),
    ("talk", set_phrases),
];

/// Look up the handler for a lower-case property name.
pub fn handler_for(name: &str) -> Option<Handler> {
    HANDLERS
        .iter()
        .find(|(property, _)| *property == name)
        .map(|&(_, handler)| handler)
}

/// Apply one property to a definition.
pub fn apply_property(def: &mut MonsterDefinition, prop: &Property) -> Result<FieldOutcome> {
    match handler_for(&prop.name) {
        Some(handler) => handler(def, prop),
        None => {
            tracing::debug!(property = %prop.name, line = prop.line(), "ignoring unknown property");
            Ok(FieldOutcome::Ignored)
        }
    }
}

/// Build a definition from a property stream.
///
/// Fails on the first read or decode error, or when no `RaceNumber` was
/// declared.
pub fn parse_monster<I>(properties: I) -> Result<MonsterDefinition>
where
    I: IntoIterator<Item = io::Result<Property>>,
{
    let mut def = MonsterDefinition::default();
    for prop in properties {
        apply_property(&mut def, &prop?)?;
    }

    if def.race_id.is_empty() {
        return Err(MonError::MissingProperty {
            property: "racenumber",
        });
    }

    Ok(def)
}

/// Build a definition from in-memory source text.
pub fn parse_monster_str(source: &str) -> Result<MonsterDefinition> {
    parse_monster(tokenize_str(source))
}

fn set_number<T: FixedWidth>(field: &mut T, prop: &Property) -> Result<FieldOutcome> {
    *field = parse_number(prop, &prop.value)?;
    Ok(FieldOutcome::Applied)
}

fn set_race_id(def: &mut MonsterDefinition, prop: &Property) -> Result<FieldOutcome> {
    def.race_id = RaceId::new(prop.value.trim());
    Ok(FieldOutcome::Applied)
}

fn set_name(def: &mut MonsterDefinition, prop: &Property) -> Result<FieldOutcome> {
    def.name = parse_text(&prop.value);
    Ok(FieldOutcome::Applied)
}

fn set_article(def: &mut MonsterDefinition, prop: &Property) -> Result<FieldOutcome> {
    def.article = parse_text(&prop.value);
    Ok(FieldOutcome::Applied)
}

fn set_outfit(def: &mut MonsterDefinition, prop: &Property) -> Result<FieldOutcome> {
    def.outfit = parse_outfit(prop)?;
    Ok(FieldOutcome::Applied)
}

fn set_corpse(def: &mut MonsterDefinition, prop: &Property) -> Result<FieldOutcome> {
    set_number(&mut def.corpse, prop)
}

fn set_blood(def: &mut MonsterDefinition, prop: &Property) -> Result<FieldOutcome> {
    let text = parse_text(&prop.value);
    match BloodType::from_str(&text) {
        Ok(blood) => {
            def.blood = blood;
            Ok(FieldOutcome::Applied)
        }
        Err(_) => {
            tracing::debug!(value = %text, line = prop.line(), "unknown blood type, keeping default");
            Ok(FieldOutcome::Defaulted)
        }
    }
}

fn set_experience(def: &mut MonsterDefinition, prop: &Property) -> Result<FieldOutcome> {
    set_number(&mut def.experience, prop)
}

fn set_summon_cost(def: &mut MonsterDefinition, prop: &Property) -> Result<FieldOutcome> {
    set_number(&mut def.summon_cost, prop)
}

fn set_flee_threshold(def: &mut MonsterDefinition, prop: &Property) -> Result<FieldOutcome> {
    set_number(&mut def.flee_threshold, prop)
}

fn set_attack(def: &mut MonsterDefinition, prop: &Property) -> Result<FieldOutcome> {
    set_number(&mut def.attack, prop)
}

fn set_defend(def: &mut MonsterDefinition, prop: &Property) -> Result<FieldOutcome> {
    set_number(&mut def.defend, prop)
}

fn set_armor(def: &mut MonsterDefinition, prop: &Property) -> Result<FieldOutcome> {
    set_number(&mut def.armor, prop)
}

fn set_lose_target(def: &mut MonsterDefinition, prop: &Property) -> Result<FieldOutcome> {
    set_number(&mut def.lose_target, prop)
}

fn set_strategy(def: &mut MonsterDefinition, prop: &Property) -> Result<FieldOutcome> {
    def.strategy = parse_strategy(prop)?;
    Ok(FieldOutcome::Applied)
}

/// Flags map by name only; a `=payload` is never read, so `NoHit=0` still sets the flag.
fn set_flags(def: &mut MonsterDefinition, prop: &Property) -> Result<FieldOutcome> {
    let mut outcome = FieldOutcome::Applied;

    for element in parse_property_elements(prop)? {
        let flag = element
            .attributes
            .first()
            .filter(|_| element.is_flag)
            .and_then(|attribute| CreatureFlag::from_file_name(&attribute.name));

        match flag {
            Some(flag) => {
                def.flags.insert(flag);
            }
            None => {
                tracing::debug!(element = %element.name, line = prop.line(), "skipping unrecognized flag");
                outcome = FieldOutcome::Defaulted;
            }
        }
    }

    Ok(outcome)
}

/// Convert a skill's default level into a `u16` field.
fn level_u16(prop: &Property, level: i32) -> Result<u16> {
    u16::try_from(level).map_err(|_| numeric_error(prop, &level.to_string(), u16::EXPECTED))
}

fn set_skills(def: &mut MonsterDefinition, prop: &Property) -> Result<FieldOutcome> {
    let mut outcome = FieldOutcome::Applied;

    for skill in parse_skills(prop)? {
        let Ok(name) = SkillName::from_str(&skill.name) else {
            tracing::debug!(skill = %skill.name, line = prop.line(), "skipping unknown skill");
            outcome = FieldOutcome::Defaulted;
            continue;
        };
        let levels = skill.descriptor;

        match name {
            SkillName::HitPoints => {
                def.max_hitpoints = if levels.current_level < 0 {
                    u16::MAX
                } else {
                    level_u16(prop, levels.default_level)?
                };
            }
            SkillName::GoStrength => {
                def.base_speed = if levels.current_level < 0 {
                    0
                } else {
                    level_u16(prop, levels.default_level)?
                };
            }
            SkillName::CarryStrength => {
                def.capacity = if levels.current_level < 0 {
                    0
                } else {
                    level_u16(prop, levels.default_level)?
                };
            }
            other => {
                // Only unarmed combat is registered; other skills stay with the runtime.
                if let Some(SkillKind::NoWeapon) = other.kind() {
                    if levels.current_level > 0 {
                        def.skills.insert(SkillKind::NoWeapon, levels);
                    }
                }
            }
        }
    }

    Ok(outcome)
}

fn placeholder(_def: &mut MonsterDefinition, prop: &Property) -> Result<FieldOutcome> {
    tracing::debug!(property = %prop.name, line = prop.line(), "property recognized but not translated");
    Ok(FieldOutcome::Ignored)
}

fn set_inventory(def: &mut MonsterDefinition, prop: &Property) -> Result<FieldOutcome> {
    def.inventory = parse_inventory(prop)?;
    Ok(FieldOutcome::Applied)
}

fn set_phrases(def: &mut MonsterDefinition, prop: &Property) -> Result<FieldOutcome> {
    def.phrases = parse_phrases(prop)?;
    Ok(FieldOutcome::Applied)
}
