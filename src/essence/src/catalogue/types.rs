//! Catalogue record types

use serde::{Deserialize, Serialize};

use super::CatalogueError;
use crate::reference::{
    rarity_by_tier, weapon_type_by_code, Language, ParseError, RarityTier, WeaponType,
};

/// Position of a tag on a weapon, or of a slot on an area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagSlot {
    /// Main attribute (position 0)
    Main,
    /// Stat (position 1)
    Stat,
    /// Skill (position 2)
    Skill,
}

impl TagSlot {
    /// All slots in tuple order
    pub const ALL: [TagSlot; 3] = [TagSlot::Main, TagSlot::Stat, TagSlot::Skill];

    /// Index into the 3-tuple
    pub fn index(self) -> usize {
        match self {
            Self::Main => 0,
            Self::Stat => 1,
            Self::Skill => 2,
        }
    }

    /// The other secondary slot (stat <-> skill). Main has none.
    pub fn other_secondary(self) -> Option<TagSlot> {
        match self {
            Self::Main => None,
            Self::Stat => Some(Self::Skill),
            Self::Skill => Some(Self::Stat),
        }
    }
}

impl std::fmt::Display for TagSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Main => write!(f, "main"),
            Self::Stat => write!(f, "stat"),
            Self::Skill => write!(f, "skill"),
        }
    }
}

impl std::str::FromStr for TagSlot {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "main" | "attribute" => Ok(Self::Main),
            "stat" | "secondary" => Ok(Self::Stat),
            "skill" => Ok(Self::Skill),
            _ => Err(ParseError::InvalidTagSlot(s.to_string())),
        }
    }
}

/// Ordered `[main, stat, skill]` tag tuple. An empty string means "no tag".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Tags([String; 3]);

impl Tags {
    pub fn new(main: impl Into<String>, stat: impl Into<String>, skill: impl Into<String>) -> Self {
        Self([main.into(), stat.into(), skill.into()])
    }

    pub fn main(&self) -> &str {
        &self.0[0]
    }

    pub fn stat(&self) -> &str {
        &self.0[1]
    }

    pub fn skill(&self) -> &str {
        &self.0[2]
    }

    /// Tag at a slot (may be empty)
    pub fn get(&self, slot: TagSlot) -> &str {
        &self.0[slot.index()]
    }

    /// Tags in tuple order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Given one secondary tag, return the remaining secondary tag.
    ///
    /// Returns `None` when `locked` is empty or is neither the stat nor the
    /// skill tag. The stat position is checked first.
    pub fn other_secondary(&self, locked: &str) -> Option<&str> {
        if locked.is_empty() {
            None
        } else if self.stat() == locked {
            Some(self.skill())
        } else if self.skill() == locked {
            Some(self.stat())
        } else {
            None
        }
    }
}

impl TryFrom<Vec<String>> for Tags {
    type Error = usize;

    /// Fails with the number of tags found when it isn't exactly three
    fn try_from(tags: Vec<String>) -> Result<Self, Self::Error> {
        let found = tags.len();
        let array: [String; 3] = tags.try_into().map_err(|_| found)?;
        Ok(Self(array))
    }
}

/// A weapon record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWeapon")]
pub struct Weapon {
    /// Unique, stable identifier
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_jp: Option<String>,
    /// Rarity tier (3-6)
    pub rarity: u8,
    /// Weapon type code (see [`crate::reference::WEAPON_TYPES`])
    #[serde(rename = "type")]
    pub weapon_type: String,
    /// Canonical tags used for all matching
    pub tags: Tags,
    /// Localized tags, display only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags_jp: Option<Tags>,
}

impl Weapon {
    /// Display name in the given language, falling back to English
    pub fn display_name(&self, lang: Language) -> &str {
        match (lang, self.name_jp.as_deref()) {
            (Language::Jp, Some(name)) if !name.is_empty() => name,
            _ => &self.name,
        }
    }

    /// Display label of the tag at `slot`, falling back to the canonical tag
    pub fn tag_label(&self, slot: TagSlot, lang: Language) -> &str {
        match (lang, &self.tags_jp) {
            (Language::Jp, Some(jp)) if !jp.get(slot).is_empty() => jp.get(slot),
            _ => self.tags.get(slot),
        }
    }

    pub fn rarity_tier(&self) -> Option<&'static RarityTier> {
        rarity_by_tier(self.rarity)
    }

    pub fn weapon_type(&self) -> Option<&'static WeaponType> {
        weapon_type_by_code(&self.weapon_type)
    }
}

/// Weapon record as written in catalogue files, before validation
#[derive(Debug, Deserialize)]
struct RawWeapon {
    id: String,
    name: String,
    #[serde(default)]
    name_jp: Option<String>,
    rarity: u8,
    #[serde(rename = "type")]
    weapon_type: String,
    tags: Vec<String>,
    #[serde(default)]
    tags_jp: Option<Vec<String>>,
}

impl TryFrom<RawWeapon> for Weapon {
    type Error = CatalogueError;

    fn try_from(raw: RawWeapon) -> Result<Self, Self::Error> {
        if raw.id.trim().is_empty() {
            return Err(CatalogueError::EmptyId);
        }

        let tags = Tags::try_from(raw.tags).map_err(|found| CatalogueError::MalformedTags {
            id: raw.id.clone(),
            found,
        })?;

        let tags_jp = raw
            .tags_jp
            .map(Tags::try_from)
            .transpose()
            .map_err(|found| CatalogueError::MalformedLocalizedTags {
                id: raw.id.clone(),
                found,
            })?;

        if rarity_by_tier(raw.rarity).is_none() {
            return Err(CatalogueError::UnknownRarity {
                id: raw.id,
                rarity: raw.rarity,
            });
        }

        if weapon_type_by_code(&raw.weapon_type).is_none() {
            return Err(CatalogueError::UnknownWeaponType {
                id: raw.id,
                weapon_type: raw.weapon_type,
            });
        }

        Ok(Self {
            id: raw.id,
            name: raw.name,
            name_jp: raw.name_jp,
            rarity: raw.rarity,
            weapon_type: raw.weapon_type,
            tags,
            tags_jp,
        })
    }
}

/// A farming area and the tag values its drops can roll in each slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawArea")]
pub struct Area {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_jp: Option<String>,
    /// Allowed values for `[main, stat, skill]`, in catalogue order
    pub tag_slots: [Vec<String>; 3],
}

impl Area {
    /// Allowed values for one slot
    pub fn slot(&self, slot: TagSlot) -> &[String] {
        &self.tag_slots[slot.index()]
    }

    /// Main-attribute values this area offers, in catalogue order
    pub fn main_tags(&self) -> &[String] {
        self.slot(TagSlot::Main)
    }

    /// Whether `tag` can roll in the given slot
    pub fn offers(&self, slot: TagSlot, tag: &str) -> bool {
        self.slot(slot).iter().any(|t| t == tag)
    }

    /// Whether `tag` can roll in either secondary slot
    pub fn offers_secondary(&self, tag: &str) -> bool {
        self.offers(TagSlot::Stat, tag) || self.offers(TagSlot::Skill, tag)
    }

    pub fn display_name(&self, lang: Language) -> &str {
        match (lang, self.name_jp.as_deref()) {
            (Language::Jp, Some(name)) if !name.is_empty() => name,
            _ => &self.name,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawArea {
    id: String,
    name: String,
    #[serde(default)]
    name_jp: Option<String>,
    tag_slots: Vec<Vec<String>>,
}

impl TryFrom<RawArea> for Area {
    type Error = CatalogueError;

    fn try_from(raw: RawArea) -> Result<Self, Self::Error> {
        if raw.id.trim().is_empty() {
            return Err(CatalogueError::EmptyId);
        }

        let found = raw.tag_slots.len();
        let tag_slots: [Vec<String>; 3] = raw
            .tag_slots
            .try_into()
            .map_err(|_| CatalogueError::MalformedSlots {
                id: raw.id.clone(),
                found,
            })?;

        Ok(Self {
            id: raw.id,
            name: raw.name,
            name_jp: raw.name_jp,
            tag_slots,
        })
    }
}
