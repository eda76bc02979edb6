//! Configuration management for essence CLI

use anyhow::{Context, Result};
use essence::{load_areas, load_weapons, Catalogue, Language};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::CatalogueArgs;

#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Default display language
    pub language: Option<Language>,
    /// Weapon catalogue used instead of the built-in one
    pub weapons: Option<PathBuf>,
    /// Area catalogue used instead of the built-in one
    pub areas: Option<PathBuf>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("essence");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Display language: flag (or `ESSENCE_LANG`) first, then config, then English
    pub fn language(&self, flag: Option<Language>) -> Language {
        flag.or(self.language).unwrap_or_default()
    }

    /// Resolve the catalogue to query.
    ///
    /// Each file falls back independently: flag (or env), then config, then
    /// the catalogue compiled into the library.
    pub fn catalogue(&self, args: &CatalogueArgs) -> Result<Cow<'static, Catalogue>> {
        let weapons = args.weapons.as_deref().or(self.weapons.as_deref());
        let areas = args.areas.as_deref().or(self.areas.as_deref());

        if weapons.is_none() && areas.is_none() {
            return Ok(Cow::Borrowed(Catalogue::builtin()));
        }

        let mut catalogue = Catalogue::builtin().clone();
        if let Some(path) = weapons {
            tracing::debug!(path = %path.display(), "loading weapon catalogue");
            let loaded = load_weapons(path)
                .with_context(|| format!("Failed to load weapons from {}", path.display()))?;
            catalogue = catalogue
                .with_weapons(loaded)
                .with_context(|| format!("Invalid weapon catalogue {}", path.display()))?;
        }
        if let Some(path) = areas {
            tracing::debug!(path = %path.display(), "loading area catalogue");
            let loaded = load_areas(path)
                .with_context(|| format!("Failed to load areas from {}", path.display()))?;
            catalogue = catalogue
                .with_areas(loaded)
                .with_context(|| format!("Invalid area catalogue {}", path.display()))?;
        }

        Ok(Cow::Owned(catalogue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const WEAPONS: &str = r#"[
        {"id": "only", "name": "Only Blade", "rarity": 6, "type": "Sword",
         "tags": ["Strength", "Attack", "Pursuit"]}
    ]"#;

    #[test]
    fn test_missing_file_is_default() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            language: Some(Language::Jp),
            weapons: Some(PathBuf::from("/data/weapons.json")),
            areas: None,
        };
        config.save_to(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("language = \"jp\""));
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_config_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "language = \"klingon\"").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_language_precedence() {
        let config = Config {
            language: Some(Language::Jp),
            ..Config::default()
        };
        assert_eq!(config.language(Some(Language::En)), Language::En);
        assert_eq!(config.language(None), Language::Jp);
        assert_eq!(Config::default().language(None), Language::En);
    }

    #[test]
    fn test_catalogue_defaults_to_builtin() {
        let catalogue = Config::default()
            .catalogue(&CatalogueArgs::default())
            .unwrap();
        assert!(matches!(catalogue, Cow::Borrowed(_)));
        assert_eq!(catalogue.areas().len(), Catalogue::builtin().areas().len());
    }

    #[test]
    fn test_flag_overrides_config() {
        let dir = TempDir::new().unwrap();
        let flag_path = dir.path().join("weapons.json");
        fs::write(&flag_path, WEAPONS).unwrap();

        let config = Config {
            weapons: Some(dir.path().join("missing.json")),
            ..Config::default()
        };
        let args = CatalogueArgs {
            weapons: Some(flag_path),
            areas: None,
        };

        let catalogue = config.catalogue(&args).unwrap();
        assert_eq!(catalogue.weapons().len(), 1);
        assert_eq!(catalogue.weapons()[0].id, "only");
        // Areas still come from the built-in catalogue
        assert_eq!(catalogue.areas().len(), Catalogue::builtin().areas().len());
    }

    #[test]
    fn test_config_catalogue_path_used() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("weapons.json");
        fs::write(&path, WEAPONS).unwrap();

        let config = Config {
            weapons: Some(path),
            ..Config::default()
        };
        let catalogue = config.catalogue(&CatalogueArgs::default()).unwrap();
        assert_eq!(catalogue.weapons().len(), 1);
    }

    #[test]
    fn test_missing_catalogue_errors() {
        let dir = TempDir::new().unwrap();
        let args = CatalogueArgs {
            weapons: None,
            areas: Some(dir.path().join("nope.json")),
        };
        let err = Config::default().catalogue(&args).unwrap_err();
        assert!(err.to_string().contains("Failed to load areas"));
    }
}
