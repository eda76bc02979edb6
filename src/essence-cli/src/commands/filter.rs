//! Tag filter command handler

use anyhow::Result;
use essence::{
    filter_weapons, match_score, weapon_type_by_name, BrowseFilter, Catalogue, Language,
    TagQuery, TagSlot, Weapon,
};
use std::io::{self, Write};

use super::{rarity_label, tags_label, type_label};

/// Build a tag query from user input, accepting localized tag labels
pub fn query(
    catalogue: &Catalogue,
    main: Option<String>,
    stat: Option<String>,
    skill: Option<String>,
) -> TagQuery {
    let canonical = |slot: TagSlot, input: Option<String>| {
        input.map(|tag| {
            let tag = tag.trim();
            catalogue
                .labels()
                .canonical(slot, tag)
                .unwrap_or(tag)
                .to_string()
        })
    };

    TagQuery {
        main: canonical(TagSlot::Main, main),
        stat: canonical(TagSlot::Stat, stat),
        skill: canonical(TagSlot::Skill, skill),
    }
}

/// Build a browse filter, accepting weapon type names in either language
pub fn browse(rarity: Option<u8>, weapon_type: Option<String>) -> BrowseFilter {
    BrowseFilter {
        rarity,
        weapon_type: weapon_type.map(|t| match weapon_type_by_name(t.trim()) {
            Some(known) => known.code.to_string(),
            None => t,
        }),
    }
}

/// Handle the filter command
pub fn handle(
    catalogue: &Catalogue,
    query: &TagQuery,
    browse: &BrowseFilter,
    lang: Language,
    json: bool,
) -> Result<()> {
    let weapons = browse.apply(filter_weapons(catalogue.weapons(), query));
    let mut out = io::stdout().lock();

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&weapons)?)?;
        return Ok(());
    }

    render(&mut out, &weapons, query, lang)
}

fn render(out: &mut impl Write, weapons: &[&Weapon], query: &TagQuery, lang: Language) -> Result<()> {
    if weapons.is_empty() {
        writeln!(out, "No weapons match")?;
        writeln!(out, "\nTry 'essence list tags main' to see valid tag names")?;
        return Ok(());
    }

    writeln!(out, "Matching weapons ({}):\n", weapons.len())?;
    writeln!(
        out,
        "{:<6} {:<6} {:<28} {:<14} Tags",
        "Score", "Rarity", "Weapon", "Type"
    )?;
    writeln!(out, "{}", "-".repeat(80))?;

    for weapon in weapons {
        writeln!(
            out,
            "{:<6} {:<6} {:<28} {:<14} {}",
            match_score(weapon, query),
            rarity_label(weapon),
            weapon.display_name(lang),
            type_label(weapon, lang),
            tags_label(weapon, lang)
        )?;
    }

    Ok(())
}
