//! Catalogue listing command handlers

use crate::cli::ListCommand;
use anyhow::Result;
use essence::{
    area_coverage, filter_weapons, unique_tags, Area, BrowseFilter, Catalogue, Language,
    TagQuery, TagSlot,
};
use std::io::{self, Write};

use super::filter::browse;
use super::{rarity_label, tags_label, type_label};

/// Handle the list command
pub fn handle(command: ListCommand, catalogue: &Catalogue, lang: Language) -> Result<()> {
    let mut out = io::stdout().lock();
    match command {
        ListCommand::Weapons {
            rarity,
            weapon_type,
        } => weapons(&mut out, catalogue, &browse(rarity, weapon_type), lang),
        ListCommand::Areas => areas(&mut out, catalogue, lang),
        ListCommand::Tags { slot } => tags(&mut out, catalogue, slot, lang),
    }
}

fn weapons(
    out: &mut impl Write,
    catalogue: &Catalogue,
    filter: &BrowseFilter,
    lang: Language,
) -> Result<()> {
    // An empty query keeps every weapon, highest rarity first
    let weapons = filter.apply(filter_weapons(catalogue.weapons(), &TagQuery::new()));

    writeln!(out, "Known weapons ({}):\n", weapons.len())?;
    for weapon in weapons {
        writeln!(
            out,
            "  {:<4} {:<28} {:<14} {:<24} {}",
            rarity_label(weapon),
            weapon.display_name(lang),
            type_label(weapon, lang),
            weapon.id,
            tags_label(weapon, lang)
        )?;
    }

    Ok(())
}

fn areas(out: &mut impl Write, catalogue: &Catalogue, lang: Language) -> Result<()> {
    writeln!(out, "Known areas ({}):", catalogue.areas().len())?;

    for area in catalogue.areas() {
        writeln!(out)?;
        writeln!(
            out,
            "{} ({}) - all tags of {} weapons drop here",
            area.display_name(lang),
            area.id,
            area_coverage(area, catalogue.weapons())
        )?;
        for slot in TagSlot::ALL {
            writeln!(
                out,
                "  {:<6} {}",
                format!("{}:", slot),
                slot_labels(catalogue, area, slot, lang).join(", ")
            )?;
        }
    }

    Ok(())
}

fn slot_labels(catalogue: &Catalogue, area: &Area, slot: TagSlot, lang: Language) -> Vec<String> {
    area.slot(slot)
        .iter()
        .map(|tag| catalogue.labels().label(slot, tag).get(lang).to_string())
        .collect()
}

fn tags(out: &mut impl Write, catalogue: &Catalogue, slot: TagSlot, lang: Language) -> Result<()> {
    let tags = unique_tags(catalogue.weapons(), slot, lang);

    writeln!(out, "Known {} tags ({}):\n", slot, tags.len())?;
    for tag in tags {
        writeln!(out, "  {}", tag)?;
    }

    Ok(())
}
