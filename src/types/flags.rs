//! Creature flags and their names in monster files.

use strum::{Display, EnumIter};

/// A boolean trait of a monster template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumIter)]
pub enum CreatureFlag {
    CanPushItems,
    CanPushCreatures,
    CanSeeInvisible,
    CannotBePushed,
    KeepsDistance,
    CannotBeSummoned,
    CannotBeIllusioned,
    CannotBeConvinced,
    ImmuneToFire,
    ImmuneToPoison,
    ImmuneToEnergy,
    ImmuneToPhysical,
    ImmuneToLifeDrain,
    ImmuneToParalysis,
}

/// File flag names and the creature flags they translate to.
const FLAG_NAMES: &[(&str, CreatureFlag)] = &[
    ("KickBoxes", CreatureFlag::CanPushItems),
    ("KickCreatures", CreatureFlag::CanPushCreatures),
    ("SeeInvisible", CreatureFlag::CanSeeInvisible),
    ("Unpushable", CreatureFlag::CannotBePushed),
    ("DistanceFighting", CreatureFlag::KeepsDistance),
    ("NoSummon", CreatureFlag::CannotBeSummoned),
    ("NoIllusion", CreatureFlag::CannotBeIllusioned),
    ("NoConvince", CreatureFlag::CannotBeConvinced),
    ("NoBurning", CreatureFlag::ImmuneToFire),
    ("NoPoison", CreatureFlag::ImmuneToPoison),
    ("NoEnergy", CreatureFlag::ImmuneToEnergy),
    ("NoHit", CreatureFlag::ImmuneToPhysical),
    ("NoLifeDrain", CreatureFlag::ImmuneToLifeDrain),
    ("NoParalyze", CreatureFlag::ImmuneToParalysis),
];

impl CreatureFlag {
    /// Translate a flag name as written in a monster file (case-insensitive).
    pub fn from_file_name(name: &str) -> Option<Self> {
        FLAG_NAMES
            .iter()
            .find(|(file_name, _)| file_name.eq_ignore_ascii_case(name))
            .map(|&(_, flag)| flag)
    }

    /// The name this flag is written as in monster files.
    pub fn file_name(self) -> &'static str {
        FLAG_NAMES
            .iter()
            .find(|&&(_, flag)| flag == self)
            .map(|&(name, _)| name)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_from_file_name() {
        assert_eq!(
            CreatureFlag::from_file_name("KickBoxes"),
            Some(CreatureFlag::CanPushItems)
        );
        assert_eq!(
            CreatureFlag::from_file_name("nohit"),
            Some(CreatureFlag::ImmuneToPhysical)
        );
        assert_eq!(CreatureFlag::from_file_name("CanFly"), None);
    }

    #[test]
    fn test_every_flag_has_a_file_name() {
        for flag in CreatureFlag::iter() {
            let name = flag.file_name();
            assert!(!name.is_empty(), "{} has no file name", flag);
            assert_eq!(CreatureFlag::from_file_name(name), Some(flag));
        }
    }
}
