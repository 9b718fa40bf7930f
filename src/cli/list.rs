//! List command implementation.
//!
//! Loads a catalog and prints one row per race.

use std::fmt::Write;

use clap::Args;

use crate::catalog::MonsterCatalog;
use crate::error::Result;
use crate::output::Printer;

use super::CatalogArgs;

/// List every monster in a directory
#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub catalog: CatalogArgs,
}

pub fn run(args: ListArgs, printer: &Printer) -> Result<()> {
    let catalog = args.catalog.load(printer)?;
    print!("{}", render_table(&catalog));
    Ok(())
}

/// Format the catalog as a table sorted by race id.
pub fn render_table(catalog: &MonsterCatalog) -> String {
    let rows: Vec<[String; 4]> = catalog
        .race_ids()
        .into_iter()
        .filter_map(|id| catalog.get(id.as_str()))
        .map(|def| {
            [
                def.race_id.to_string(),
                def.name.clone(),
                def.max_hitpoints.to_string(),
                def.experience.to_string(),
            ]
        })
        .collect();

    let race_width = column_width(&rows, 0, "RACE");
    let name_width = column_width(&rows, 1, "NAME");
    let hp_width = column_width(&rows, 2, "HP");

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<race_width$}  {:<name_width$}  {:>hp_width$}  EXP",
        "RACE", "NAME", "HP"
    );
    for [race, name, hp, exp] in &rows {
        let _ = writeln!(
            out,
            "{race:<race_width$}  {name:<name_width$}  {hp:>hp_width$}  {exp}"
        );
    }
    out
}

fn column_width(rows: &[[String; 4]], column: usize, header: &str) -> usize {
    rows.iter()
        .map(|row| row[column].chars().count())
        .chain(std::iter::once(header.len()))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogBuilder;
    use crate::mapper::parse_monster_str;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_table_sorted() {
        let mut builder = CatalogBuilder::new();
        for source in [
            "RaceNumber = 100\nName = \"dragon\"\nExperience = 700\nSkills = {(HitPoints,1000,0,1000,0,0,0)}",
            "RaceNumber = 21\nName = \"rat\"\nExperience = 5\nSkills = {(HitPoints,20,0,20,0,0,0)}",
        ] {
            let def = parse_monster_str(source).unwrap();
            builder.add(def, "x.mon").unwrap();
        }

        let table = render_table(&builder.build());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(
            lines,
            vec![
                "RACE  NAME      HP  EXP",
                "21    rat       20  5",
                "100   dragon  1000  700",
            ]
        );
    }

    #[test]
    fn test_render_empty_table() {
        let table = render_table(&CatalogBuilder::new().build());
        assert_eq!(table, "RACE  NAME  HP  EXP\n");
    }
}
