//! Command handlers for essence CLI
//!
//! Each subcommand has its own module with handler functions.

pub mod configure;
pub mod filter;
pub mod list;
pub mod recommend;

use essence::{Language, TagSlot, Weapon};

/// Star label of a weapon's rarity, e.g. "★6"
fn rarity_label(weapon: &Weapon) -> &'static str {
    weapon.rarity_tier().map_or("?", |tier| tier.label)
}

/// Localized weapon type, falling back to the catalogue code
fn type_label(weapon: &Weapon, lang: Language) -> &str {
    weapon
        .weapon_type()
        .map_or(weapon.weapon_type.as_str(), |t| t.label(lang))
}

/// Non-empty tags joined for display, e.g. "Strength / Attack / Pursuit"
fn tags_label(weapon: &Weapon, lang: Language) -> String {
    TagSlot::ALL
        .iter()
        .map(|&slot| weapon.tag_label(slot, lang))
        .filter(|tag| !tag.is_empty())
        .collect::<Vec<_>>()
        .join(" / ")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        let catalogue = test_support::catalogue();
        let alpha = catalogue.weapon("alpha").unwrap();
        let delta = catalogue.weapon("delta").unwrap();

        assert_eq!(rarity_label(alpha), "★6");
        assert_eq!(type_label(alpha, Language::Jp), "片手剣");
        assert_eq!(tags_label(alpha, Language::En), "Strength / Attack / Pursuit");
        assert_eq!(tags_label(alpha, Language::Jp), "筋力 / 攻撃力 / 追撃");
        // Empty skill is skipped
        assert_eq!(tags_label(delta, Language::En), "Agility / Crit Rate");
    }
}
