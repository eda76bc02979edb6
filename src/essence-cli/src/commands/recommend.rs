//! Area recommendation command handler

use anyhow::Result;
use essence::{
    recommend_with_labels, BestAreaResult, Catalogue, Eligibility, Language, MatchOptions,
    Weapon,
};
use std::io::{self, Write};

use super::{rarity_label, tags_label, type_label};

/// Handle the recommend command
///
/// # Arguments
/// * `query` - Weapon id or name, in either language
/// * `lenient` - Accept areas that cover only one secondary tag
/// * `json` - Print the raw result instead of a report
pub fn handle(
    catalogue: &Catalogue,
    query: &str,
    lang: Language,
    lenient: bool,
    json: bool,
) -> Result<()> {
    let mut out = io::stdout().lock();

    let Some(weapon) = catalogue.find_weapon(query) else {
        return not_found(&mut out, catalogue, query, lang);
    };

    let result = best_area(catalogue, weapon, lenient);

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&result)?)?;
        return Ok(());
    }

    render(&mut out, weapon, result.as_ref(), lang, lenient)
}

fn best_area<'a>(
    catalogue: &'a Catalogue,
    weapon: &Weapon,
    lenient: bool,
) -> Option<BestAreaResult<'a>> {
    let options = MatchOptions {
        eligibility: if lenient {
            Eligibility::Lenient
        } else {
            Eligibility::Strict
        },
    };
    recommend_with_labels(
        weapon,
        catalogue.weapons(),
        catalogue.areas(),
        catalogue.labels(),
        options,
    )
}

fn not_found(out: &mut impl Write, catalogue: &Catalogue, query: &str, lang: Language) -> Result<()> {
    writeln!(out, "No weapon found for '{}'", query)?;

    let suggestions = catalogue.suggest_weapons(query);
    if suggestions.is_empty() {
        writeln!(out, "\nTry 'essence list weapons' to see all weapon names")?;
    } else {
        writeln!(out, "\nDid you mean:")?;
        for weapon in suggestions.iter().take(10) {
            writeln!(out, "  {} ({})", weapon.display_name(lang), weapon.id)?;
        }
    }

    Ok(())
}

/// Write the recommendation report for `weapon`
fn render(
    out: &mut impl Write,
    weapon: &Weapon,
    result: Option<&BestAreaResult<'_>>,
    lang: Language,
    lenient: bool,
) -> Result<()> {
    writeln!(
        out,
        "{} {} {}  [{}]",
        rarity_label(weapon),
        weapon.display_name(lang),
        type_label(weapon, lang),
        tags_label(weapon, lang)
    )?;
    writeln!(out)?;

    let Some(best) = result else {
        writeln!(out, "No area drops every tag of this weapon.")?;
        if !lenient {
            writeln!(out, "Try --lenient to accept areas covering one secondary tag.")?;
        }
        return Ok(());
    };

    writeln!(
        out,
        "Farm in: {} ({} perfect)",
        best.area.display_name(lang),
        best.perfect_total
    )?;

    for lock in &best.locked_tags {
        writeln!(out)?;
        writeln!(
            out,
            "Lock {}: {} perfect",
            lock.locked_tag.get(lang),
            lock.perfect_count
        )?;

        if lock.perfect_count == 0 {
            writeln!(out, "  (no other weapon is fully farmable with this lock)")?;
            continue;
        }

        for group in lock.groups_main_first(weapon.tags.main()) {
            writeln!(out, "  {}", group.main.get(lang))?;
            for other in &group.weapons {
                writeln!(
                    out,
                    "    {:<4} {:<28} {}",
                    rarity_label(other),
                    other.display_name(lang),
                    tags_label(other, lang)
                )?;
            }
        }
    }

    Ok(())
}
