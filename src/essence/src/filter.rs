//! Tag-based weapon browsing
//!
//! Independent of area recommendation: narrows the weapon catalogue by
//! optional main/stat/skill constraints, and by rarity and weapon type.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::catalogue::{TagSlot, Weapon};
use crate::reference::Language;

/// Optional constraint per tag slot. Unset (or empty) means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagQuery {
    #[serde(default)]
    pub main: Option<String>,
    #[serde(default)]
    pub stat: Option<String>,
    #[serde(default)]
    pub skill: Option<String>,
}

impl TagQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_main(mut self, tag: impl Into<String>) -> Self {
        self.main = Some(tag.into());
        self
    }

    pub fn with_stat(mut self, tag: impl Into<String>) -> Self {
        self.stat = Some(tag.into());
        self
    }

    pub fn with_skill(mut self, tag: impl Into<String>) -> Self {
        self.skill = Some(tag.into());
        self
    }

    /// Constraint for a slot, if set
    pub fn get(&self, slot: TagSlot) -> Option<&str> {
        let tag = match slot {
            TagSlot::Main => &self.main,
            TagSlot::Stat => &self.stat,
            TagSlot::Skill => &self.skill,
        };
        tag.as_deref().filter(|t| !t.is_empty())
    }

    /// True when no slot is constrained
    pub fn is_empty(&self) -> bool {
        TagSlot::ALL.iter().all(|&slot| self.get(slot).is_none())
    }

    /// Every set constraint equals the weapon's tag in that slot.
    ///
    /// A skill constraint excludes weapons without a skill tag.
    pub fn matches(&self, weapon: &Weapon) -> bool {
        TagSlot::ALL.iter().all(|&slot| {
            self.get(slot)
                .map_or(true, |tag| weapon.tags.get(slot) == tag)
        })
    }
}

/// Number of set constraints the weapon hits exactly (0-3)
pub fn match_score(weapon: &Weapon, query: &TagQuery) -> u8 {
    TagSlot::ALL
        .iter()
        .filter(|&&slot| query.get(slot).is_some_and(|tag| weapon.tags.get(slot) == tag))
        .count() as u8
}

/// Weapons matching `query`, best score first, then highest rarity.
///
/// Ties keep catalogue order.
pub fn filter_weapons<'a>(weapons: &'a [Weapon], query: &TagQuery) -> Vec<&'a Weapon> {
    let mut matching: Vec<&Weapon> = weapons.iter().filter(|w| query.matches(w)).collect();
    matching.sort_by(|a, b| {
        match_score(b, query)
            .cmp(&match_score(a, query))
            .then_with(|| b.rarity.cmp(&a.rarity))
    });
    tracing::trace!(
        query = ?query,
        matched = matching.len(),
        total = weapons.len(),
        "filtered weapons"
    );
    matching
}

/// Rarity and weapon-type filter for the weapon grid
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseFilter {
    #[serde(default)]
    pub rarity: Option<u8>,
    #[serde(default)]
    pub weapon_type: Option<String>,
}

impl BrowseFilter {
    pub fn matches(&self, weapon: &Weapon) -> bool {
        self.rarity.map_or(true, |r| weapon.rarity == r)
            && self
                .weapon_type
                .as_deref()
                .map_or(true, |t| weapon.weapon_type == t)
    }

    /// Keep matching weapons, preserving order
    pub fn apply<'a, I>(&self, weapons: I) -> Vec<&'a Weapon>
    where
        I: IntoIterator<Item = &'a Weapon>,
    {
        weapons.into_iter().filter(|w| self.matches(w)).collect()
    }
}

/// Sorted, de-duplicated, non-empty tag labels for one slot
pub fn unique_tags(weapons: &[Weapon], slot: TagSlot, lang: Language) -> Vec<String> {
    weapons
        .iter()
        .map(|w| w.tag_label(slot, lang).trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
