//! Weapon type definitions

/// Weapon type information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeaponType {
    /// Catalogue code, as written in the `type` field of a weapon record
    pub code: &'static str,
    pub name: &'static str,
    pub name_jp: &'static str,
}

/// All weapon types
pub const WEAPON_TYPES: &[WeaponType] = &[
    WeaponType {
        code: "Greatsword",
        name: "Greatsword",
        name_jp: "大剣",
    },
    WeaponType {
        code: "Polearm",
        name: "Polearm",
        name_jp: "長柄武器",
    },
    WeaponType {
        code: "Handcannon",
        name: "Handcannon",
        name_jp: "拳銃",
    },
    WeaponType {
        code: "Sword",
        name: "Sword",
        name_jp: "片手剣",
    },
    WeaponType {
        code: "Arts Unit",
        name: "Arts Unit",
        name_jp: "アーツユニット",
    },
];

/// Get weapon type by code
pub fn weapon_type_by_code(code: &str) -> Option<&'static WeaponType> {
    WEAPON_TYPES.iter().find(|w| w.code == code)
}

/// Get weapon type by display name in either language (reverse lookup)
pub fn weapon_type_by_name(name: &str) -> Option<&'static WeaponType> {
    WEAPON_TYPES
        .iter()
        .find(|w| w.name.eq_ignore_ascii_case(name) || w.name_jp == name)
}

impl WeaponType {
    /// Display name in the given language
    pub fn label(&self, lang: super::Language) -> &'static str {
        match lang {
            super::Language::En => self.name,
            super::Language::Jp => self.name_jp,
        }
    }
}
