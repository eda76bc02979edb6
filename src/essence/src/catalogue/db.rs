//! In-memory catalogue of weapons and areas

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;

use super::types::{Area, Weapon};
use super::CatalogueError;
use crate::labels::TagLabels;

// Embed manifest files at compile time
const WEAPONS_JSON: &str = include_str!("../../../../share/manifest/weapons.json");
const AREAS_JSON: &str = include_str!("../../../../share/manifest/areas.json");

static BUILTIN: Lazy<Catalogue> = Lazy::new(|| {
    Catalogue::from_json(WEAPONS_JSON, AREAS_JSON).expect("Failed to parse built-in catalogue")
});

/// Validated weapon and area catalogues.
///
/// Iteration order is the order records appear in the source files, and
/// that order is the tie-break for every ranking in this crate.
#[derive(Debug, Clone)]
pub struct Catalogue {
    weapons: Vec<Weapon>,
    areas: Vec<Area>,
    labels: TagLabels,
}

impl Catalogue {
    /// Build a catalogue, rejecting duplicate weapon or area ids
    pub fn new(weapons: Vec<Weapon>, areas: Vec<Area>) -> Result<Self, CatalogueError> {
        let mut seen = HashSet::new();
        for weapon in &weapons {
            if !seen.insert(weapon.id.as_str()) {
                return Err(CatalogueError::DuplicateWeapon(weapon.id.clone()));
            }
        }

        let mut seen = HashSet::new();
        for area in &areas {
            if !seen.insert(area.id.as_str()) {
                return Err(CatalogueError::DuplicateArea(area.id.clone()));
            }
        }

        let labels = TagLabels::from_weapons(&weapons);
        tracing::debug!(
            weapons = weapons.len(),
            areas = areas.len(),
            "catalogue loaded"
        );

        Ok(Self {
            weapons,
            areas,
            labels,
        })
    }

    /// The catalogue shipped with the crate
    pub fn builtin() -> &'static Catalogue {
        &BUILTIN
    }

    /// Parse both catalogues from JSON arrays
    pub fn from_json(weapons_json: &str, areas_json: &str) -> Result<Self, CatalogueError> {
        let weapons: Vec<Weapon> = serde_json::from_str(weapons_json)?;
        let areas: Vec<Area> = serde_json::from_str(areas_json)?;
        Self::new(weapons, areas)
    }

    /// Load both catalogues from JSON files
    pub fn load<P: AsRef<Path>, Q: AsRef<Path>>(
        weapons_path: P,
        areas_path: Q,
    ) -> Result<Self, CatalogueError> {
        Self::new(load_weapons(weapons_path)?, load_areas(areas_path)?)
    }

    /// Replace the weapons, keeping the areas
    pub fn with_weapons(self, weapons: Vec<Weapon>) -> Result<Self, CatalogueError> {
        Self::new(weapons, self.areas)
    }

    /// Replace the areas, keeping the weapons
    pub fn with_areas(self, areas: Vec<Area>) -> Result<Self, CatalogueError> {
        Self::new(self.weapons, areas)
    }

    pub fn weapons(&self) -> &[Weapon] {
        &self.weapons
    }

    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    pub fn labels(&self) -> &TagLabels {
        &self.labels
    }

    /// Weapon by exact id
    pub fn weapon(&self, id: &str) -> Option<&Weapon> {
        self.weapons.iter().find(|w| w.id == id)
    }

    /// Area by exact id
    pub fn area(&self, id: &str) -> Option<&Area> {
        self.areas.iter().find(|a| a.id == id)
    }

    /// Resolve a user query to a weapon.
    ///
    /// Tries, in order: exact id, case-insensitive name in either language,
    /// then a partial name match if exactly one weapon matches.
    pub fn find_weapon(&self, query: &str) -> Option<&Weapon> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        if let Some(weapon) = self.weapon(query) {
            return Some(weapon);
        }

        let query_lower = query.to_lowercase();
        let exact = self.weapons.iter().find(|w| {
            w.name.to_lowercase() == query_lower || w.name_jp.as_deref() == Some(query)
        });
        if exact.is_some() {
            return exact;
        }

        let mut partial = self.weapons.iter().filter(|w| {
            w.name.to_lowercase().contains(&query_lower)
                || w.name_jp.as_deref().is_some_and(|n| n.contains(query))
        });
        match (partial.next(), partial.next()) {
            (Some(weapon), None) => Some(weapon),
            _ => None,
        }
    }

    /// Weapons whose name partially matches, for "did you mean" hints
    pub fn suggest_weapons(&self, query: &str) -> Vec<&Weapon> {
        let query_lower = query.trim().to_lowercase();
        if query_lower.is_empty() {
            return Vec::new();
        }
        self.weapons
            .iter()
            .filter(|w| {
                w.name.to_lowercase().contains(&query_lower)
                    || w.id.contains(&query_lower)
                    || w.name_jp.as_deref().is_some_and(|n| n.contains(query.trim()))
            })
            .collect()
    }
}

/// Load a weapon catalogue file
pub fn load_weapons<P: AsRef<Path>>(path: P) -> Result<Vec<Weapon>, CatalogueError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Load an area catalogue file
pub fn load_areas<P: AsRef<Path>>(path: P) -> Result<Vec<Area>, CatalogueError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
