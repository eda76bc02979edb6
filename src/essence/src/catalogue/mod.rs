//! Weapon and area catalogues
//!
//! Catalogues are static reference data: loaded once, validated on load,
//! and never mutated afterwards. The built-in catalogues are embedded from
//! `share/manifest/` at compile time.

mod db;
mod types;

use thiserror::Error;

pub use db::{load_areas, load_weapons, Catalogue};
pub use types::{Area, TagSlot, Tags, Weapon};

/// Errors raised while loading a catalogue
#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalogue record has an empty id")]
    EmptyId,

    #[error("weapon '{id}' must have exactly 3 tags (found {found})")]
    MalformedTags { id: String, found: usize },

    #[error("weapon '{id}' must have exactly 3 localized tags (found {found})")]
    MalformedLocalizedTags { id: String, found: usize },

    #[error("area '{id}' must have exactly 3 tag slots (found {found})")]
    MalformedSlots { id: String, found: usize },

    #[error("weapon '{id}' has unknown rarity {rarity}")]
    UnknownRarity { id: String, rarity: u8 },

    #[error("weapon '{id}' has unknown weapon type '{weapon_type}'")]
    UnknownWeaponType { id: String, weapon_type: String },

    #[error("duplicate weapon id '{0}'")]
    DuplicateWeapon(String),

    #[error("duplicate area id '{0}'")]
    DuplicateArea(String),
}
