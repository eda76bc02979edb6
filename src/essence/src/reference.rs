//! Reference data for weapons
//!
//! Hardcoded reference data for rarity tiers, weapon types, and display
//! languages. Catalogue records are validated against these tables when
//! they are loaded, and the presentation layer uses them for labels.

use thiserror::Error;

mod language;
mod rarity;
mod weapon;

pub use language::Language;
pub use rarity::{rarity_by_tier, rarity_color, RarityTier, RARITY_TIERS};
pub use weapon::{weapon_type_by_code, weapon_type_by_name, WeaponType, WEAPON_TYPES};

/// Error parsing a reference value from a string
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown language '{0}' (expected 'en' or 'jp')")]
    InvalidLanguage(String),

    #[error("unknown tag slot '{0}' (expected 'main', 'stat' or 'skill')")]
    InvalidTagSlot(String),
}
