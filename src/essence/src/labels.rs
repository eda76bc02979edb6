//! Localized tag labels
//!
//! Matching only ever compares canonical tags. Display labels in other
//! languages are resolved from the weapon catalogue's `tags_jp` column.

use std::collections::HashMap;

use serde::Serialize;

use crate::catalogue::{TagSlot, Weapon};
use crate::reference::Language;

/// A canonical tag together with its localized label, when one is known
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LabelPair {
    pub en: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jp: Option<String>,
}

impl LabelPair {
    /// A label with no localized variant
    pub fn new(en: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            jp: None,
        }
    }

    pub fn with_jp(mut self, jp: impl Into<String>) -> Self {
        self.jp = Some(jp.into());
        self
    }

    /// Label in the given language, falling back to the canonical tag
    pub fn get(&self, lang: Language) -> &str {
        match (lang, self.jp.as_deref()) {
            (Language::Jp, Some(jp)) => jp,
            _ => &self.en,
        }
    }
}

/// Canonical tag -> localized label, per slot
#[derive(Debug, Clone, Default)]
pub struct TagLabels {
    by_slot: [HashMap<String, String>; 3],
    /// Localized label -> canonical tag, first weapon in catalogue order wins
    reverse: [HashMap<String, String>; 3],
}

impl TagLabels {
    /// Collect labels from every weapon that carries localized tags.
    ///
    /// The first non-empty label seen for a tag wins.
    pub fn from_weapons(weapons: &[Weapon]) -> Self {
        let mut labels = Self::default();

        for weapon in weapons {
            let Some(localized) = &weapon.tags_jp else {
                continue;
            };
            for slot in TagSlot::ALL {
                let en = weapon.tags.get(slot);
                let jp = localized.get(slot);
                if en.is_empty() || jp.is_empty() {
                    continue;
                }
                labels.by_slot[slot.index()]
                    .entry(en.to_string())
                    .or_insert_with(|| jp.to_string());
                labels.reverse[slot.index()]
                    .entry(jp.to_string())
                    .or_insert_with(|| en.to_string());
            }
        }

        labels
    }

    /// Localized label for a tag. Secondary tags fall back to the other
    /// secondary slot, since area slots share that vocabulary.
    pub fn localized(&self, slot: TagSlot, tag: &str) -> Option<&str> {
        self.by_slot[slot.index()]
            .get(tag)
            .or_else(|| {
                slot.other_secondary()
                    .and_then(|other| self.by_slot[other.index()].get(tag))
            })
            .map(String::as_str)
    }

    /// Label pair for a tag
    pub fn label(&self, slot: TagSlot, tag: &str) -> LabelPair {
        LabelPair {
            en: tag.to_string(),
            jp: self.localized(slot, tag).map(str::to_string),
        }
    }

    /// Resolve user input in either language to the canonical tag.
    ///
    /// A localized label shared by several tags resolves to the tag of the
    /// first weapon carrying it.
    pub fn canonical<'a>(&'a self, slot: TagSlot, input: &'a str) -> Option<&'a str> {
        if self.by_slot[slot.index()].contains_key(input) {
            return Some(input);
        }
        self.reverse[slot.index()].get(input).map(String::as_str)
    }
}
