//! Show command implementation.
//!
//! Prints every decoded field of one monster.

use std::fmt::Write;

use clap::Args;

use crate::error::{MonError, Result};
use crate::output::{display_path, Printer};
use crate::types::MonsterDefinition;

use super::CatalogArgs;

/// Show all fields of one monster
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Race id (the file's RaceNumber)
    pub race: String,

    #[command(flatten)]
    pub catalog: CatalogArgs,
}

pub fn run(args: ShowArgs, printer: &Printer) -> Result<()> {
    let catalog = args.catalog.load(printer)?;

    let def = catalog.get(&args.race).ok_or_else(|| MonError::Command {
        message: format!("No monster with race id {}", args.race),
        help: Some("Run `moncat list` to see the available race ids".to_string()),
    })?;

    if let Some(source) = catalog.source_of(&args.race) {
        printer.info("Source", &display_path(source));
    }
    print!("{}", render_definition(def));
    Ok(())
}

/// Format a definition as `field: value` lines.
pub fn render_definition(def: &MonsterDefinition) -> String {
    let mut out = String::new();
    let o = &def.outfit;
    let s = &def.strategy;

    let _ = writeln!(out, "race:          {}", def.race_id);
    let _ = writeln!(out, "name:          {}", def.name);
    let _ = writeln!(out, "article:       {}", def.article);
    let _ = writeln!(
        out,
        "outfit:        {} ({}-{}-{}-{})",
        o.look_type, o.head, o.body, o.legs, o.feet
    );
    let _ = writeln!(out, "corpse:        {}", def.corpse);
    let _ = writeln!(out, "blood:         {}", def.blood);
    let _ = writeln!(out, "experience:    {}", def.experience);
    let _ = writeln!(out, "summon cost:   {}", def.summon_cost);
    let _ = writeln!(out, "flee at:       {}", def.flee_threshold);
    let _ = writeln!(out, "attack:        {}", def.attack);
    let _ = writeln!(out, "defend:        {}", def.defend);
    let _ = writeln!(out, "armor:         {}", def.armor);
    let _ = writeln!(out, "lose target:   {}", def.lose_target);
    let _ = writeln!(
        out,
        "strategy:      {}/{}/{}/{}",
        s.closest, s.weakest, s.strongest, s.random
    );
    let _ = writeln!(out, "hitpoints:     {}", def.max_hitpoints);
    let _ = writeln!(out, "speed:         {}", def.base_speed);
    let _ = writeln!(out, "capacity:      {}", def.capacity);

    let flags: Vec<String> = def.flags.iter().map(|f| f.to_string()).collect();
    let _ = writeln!(out, "flags:         {}", flags.join(", "));

    for (kind, skill) in &def.skills {
        let _ = writeln!(
            out,
            "skill:         {} {}/{}/{} ({}, x{}, +{})",
            kind,
            skill.default_level,
            skill.current_level,
            skill.maximum_level,
            skill.target_count,
            skill.count_increase_factor,
            skill.increaser_per_level
        );
    }

    for item in &def.inventory {
        let count = item
            .count
            .map(|c| format!(" x{c}"))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "loot:          {}{} @ {}/1000",
            item.item_id, count, item.chance
        );
    }

    for phrase in &def.phrases {
        let _ = writeln!(out, "says:          {:?}", phrase);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapper::parse_monster_str;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_render_definition() {
        let def = parse_monster_str(
            r#"RaceNumber = 21
Name = "rat"
Article = "a"
Outfit = (21, 0-0-0-0)
Flags = {KickBoxes}
Inventory = {(3031,3,750)}
Talk = {"Meep!"}
"#,
        )
        .unwrap();

        let text = render_definition(&def);

        assert!(text.contains("race:          21\n"));
        assert!(text.contains("outfit:        21 (0-0-0-0)\n"));
        assert!(text.contains("flags:         CanPushItems\n"));
        assert!(text.contains("loot:          3031 x1-3 @ 750/1000\n"));
        assert!(text.contains("says:          \"Meep!\"\n"));
    }

    #[test]
    fn test_show_unknown_race() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("rat.mon"), "RaceNumber = 21\n").unwrap();

        let args = ShowArgs {
            race: "99".to_string(),
            catalog: CatalogArgs {
                dir: dir.path().to_path_buf(),
                config: None,
            },
        };

        let err = run(args, &Printer::plain()).unwrap_err();
        assert!(matches!(err, MonError::Command { .. }));
    }
}
