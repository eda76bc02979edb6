//! # essence
//!
//! Essence farming-area recommender.
//!
//! This library provides functionality to:
//! - Load and validate weapon and area catalogues
//! - Recommend the best farming area for a weapon, and list the other
//!   weapons that become perfectly farmable when a secondary tag is locked
//! - Filter the weapon catalogue by main/stat/skill tags, rarity and type
//!
//! All operations are pure functions over read-only catalogues.
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalogue = essence::Catalogue::builtin();
//! let weapon = catalogue.find_weapon("Thunderberge").ok_or("unknown weapon")?;
//!
//! match essence::recommend(weapon, catalogue.weapons(), catalogue.areas()) {
//!     Some(best) => {
//!         println!("Farm in: {}", best.area.name);
//!         for lock in &best.locked_tags {
//!             println!("  lock {}: {} perfect", lock.locked_tag.en, lock.perfect_count);
//!         }
//!     }
//!     None => println!("No area drops every tag for {}", weapon.name),
//! }
//! # Ok(())
//! # }
//! ```

pub mod catalogue;
pub mod filter;
pub mod labels;
pub mod matcher;
pub mod reference;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used items
#[doc(inline)]
pub use catalogue::{
    load_areas, load_weapons, Area, Catalogue, CatalogueError, TagSlot, Tags, Weapon,
};
#[doc(inline)]
pub use filter::{filter_weapons, match_score, unique_tags, BrowseFilter, TagQuery};
#[doc(inline)]
pub use labels::{LabelPair, TagLabels};
#[doc(inline)]
pub use matcher::{
    area_coverage, candidate_areas, is_candidate, recommend, recommend_with,
    recommend_with_labels, BestAreaResult, Eligibility, LockedTagResult, MainTagGroup,
    MatchOptions,
};

// Reference data (rarities, weapon types, languages)
#[doc(inline)]
pub use reference::{
    rarity_by_tier, rarity_color, weapon_type_by_code, weapon_type_by_name, Language, ParseError,
    RarityTier, WeaponType, RARITY_TIERS, WEAPON_TYPES,
};
