//! Skill names, kinds and progression descriptors.

use strum::{Display, EnumString};

/// Skill names recognized in the `Skills` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum SkillName {
    HitPoints,
    GoStrength,
    CarryStrength,
    FistFighting,
    ClubFighting,
    SwordFighting,
    AxeFighting,
    DistanceFighting,
    Shielding,
    Magic,
    Fishing,
    Level,
    Mana,
    SoulPoints,
}

impl SkillName {
    /// The combat skill kind a name trains, if any.
    pub fn kind(self) -> Option<SkillKind> {
        match self {
            SkillName::FistFighting => Some(SkillKind::NoWeapon),
            SkillName::ClubFighting => Some(SkillKind::Club),
            SkillName::SwordFighting => Some(SkillKind::Sword),
            SkillName::AxeFighting => Some(SkillKind::Axe),
            SkillName::DistanceFighting => Some(SkillKind::Ranged),
            SkillName::Shielding => Some(SkillKind::Shield),
            SkillName::Magic => Some(SkillKind::Magic),
            SkillName::Fishing => Some(SkillKind::Fishing),
            _ => None,
        }
    }
}

/// Key of the skill mapping on a monster definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum SkillKind {
    NoWeapon,
    Club,
    Sword,
    Axe,
    Ranged,
    Shield,
    Magic,
    Fishing,
}

/// Progression parameters of one skill.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkillDescriptor {
    pub default_level: i32,
    pub current_level: i32,
    pub maximum_level: i32,
    pub target_count: u32,
    pub count_increase_factor: u32,
    pub increaser_per_level: u8,
}

/// A skill entry as written in a file: name plus descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillTuple {
    pub name: String,
    pub descriptor: SkillDescriptor,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_skill_name_parses_case_insensitively() {
        assert_eq!(SkillName::from_str("hitpoints"), Ok(SkillName::HitPoints));
        assert_eq!(SkillName::from_str("GoStrength"), Ok(SkillName::GoStrength));
        assert!(SkillName::from_str("Juggling").is_err());
    }

    #[test]
    fn test_skill_kind() {
        assert_eq!(SkillName::FistFighting.kind(), Some(SkillKind::NoWeapon));
        assert_eq!(SkillName::DistanceFighting.kind(), Some(SkillKind::Ranged));
        assert_eq!(SkillName::HitPoints.kind(), None);
    }
}
