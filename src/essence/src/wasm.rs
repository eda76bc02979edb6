//! WebAssembly bindings for essence
//!
//! JavaScript-friendly bindings for the presentation layer. Results are
//! returned as JSON strings shaped like the Rust result types.

use crate::catalogue::{Catalogue as RustCatalogue, TagSlot};
use crate::filter::{filter_weapons, BrowseFilter, TagQuery};
use crate::matcher::{recommend_with_labels, Eligibility, MatchOptions};
use crate::reference::Language;
use wasm_bindgen::prelude::*;

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialize failed: {}", e)))
}

/// JavaScript-friendly Catalogue wrapper
#[wasm_bindgen]
pub struct Catalogue {
    inner: RustCatalogue,
}

#[wasm_bindgen]
impl Catalogue {
    /// Parse weapon and area catalogues from JSON arrays
    #[wasm_bindgen(constructor)]
    pub fn new(weapons_json: &str, areas_json: &str) -> Result<Catalogue, JsValue> {
        let inner = RustCatalogue::from_json(weapons_json, areas_json)
            .map_err(|e| JsValue::from_str(&format!("Catalogue load failed: {}", e)))?;
        Ok(Catalogue { inner })
    }

    /// The catalogue compiled into the library
    #[wasm_bindgen(js_name = builtin)]
    pub fn builtin() -> Catalogue {
        Catalogue {
            inner: RustCatalogue::builtin().clone(),
        }
    }

    /// Best farming area for a weapon id, or `null`
    ///
    /// # Arguments
    /// * `weapon_id` - Id of the selected weapon
    /// * `lenient` - Accept areas covering only one secondary tag
    #[wasm_bindgen(js_name = recommend)]
    pub fn recommend(&self, weapon_id: &str, lenient: bool) -> Result<String, JsValue> {
        let weapon = self
            .inner
            .weapon(weapon_id)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown weapon: {}", weapon_id)))?;
        let options = MatchOptions {
            eligibility: if lenient {
                Eligibility::Lenient
            } else {
                Eligibility::Strict
            },
        };
        let result = recommend_with_labels(
            weapon,
            self.inner.weapons(),
            self.inner.areas(),
            self.inner.labels(),
            options,
        );
        to_json(&result)
    }

    /// Weapons matching optional tag constraints and grid filters
    #[wasm_bindgen(js_name = filterWeapons)]
    pub fn filter_weapons(
        &self,
        main: Option<String>,
        stat: Option<String>,
        skill: Option<String>,
        rarity: Option<u8>,
        weapon_type: Option<String>,
    ) -> Result<String, JsValue> {
        let query = TagQuery { main, stat, skill };
        let browse = BrowseFilter {
            rarity,
            weapon_type,
        };
        let weapons = browse.apply(filter_weapons(self.inner.weapons(), &query));
        to_json(&weapons)
    }

    /// Sorted tag labels for a slot ("main", "stat", "skill") in a language
    #[wasm_bindgen(js_name = uniqueTags)]
    pub fn unique_tags(&self, slot: &str, lang: &str) -> Result<String, JsValue> {
        let slot: TagSlot = slot
            .parse()
            .map_err(|e| JsValue::from_str(&format!("{}", e)))?;
        let lang: Language = lang
            .parse()
            .map_err(|e| JsValue::from_str(&format!("{}", e)))?;
        to_json(&crate::filter::unique_tags(self.inner.weapons(), slot, lang))
    }

    #[wasm_bindgen(js_name = weapons)]
    pub fn weapons(&self) -> Result<String, JsValue> {
        to_json(&self.inner.weapons())
    }

    #[wasm_bindgen(js_name = areas)]
    pub fn areas(&self) -> Result<String, JsValue> {
        to_json(&self.inner.areas())
    }
}
