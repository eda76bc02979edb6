//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up essence CLI defaults.

use crate::config::Config;
use anyhow::Result;
use essence::Language;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Requested configuration changes
#[derive(Debug, Default)]
pub struct Changes {
    pub language: Option<Language>,
    pub weapons: Option<PathBuf>,
    pub areas: Option<PathBuf>,
    pub clear: bool,
}

impl Changes {
    fn is_empty(&self) -> bool {
        self.language.is_none() && self.weapons.is_none() && self.areas.is_none() && !self.clear
    }

    /// Apply to `config`; `clear` resets it before the other changes
    fn apply(self, config: &mut Config) {
        if self.clear {
            *config = Config::default();
        }
        if let Some(language) = self.language {
            config.language = Some(language);
        }
        if let Some(weapons) = self.weapons {
            config.weapons = Some(weapons);
        }
        if let Some(areas) = self.areas {
            config.areas = Some(areas);
        }
    }
}

/// Handle the configure command
///
/// # Arguments
/// * `changes` - Settings to store
/// * `show` - If true, show current configuration
pub fn handle(changes: Changes, show: bool) -> Result<()> {
    let path = Config::config_path()?;
    let mut out = io::stdout().lock();
    run(&mut out, &path, changes, show)
}

fn run(out: &mut impl Write, path: &Path, changes: Changes, show: bool) -> Result<()> {
    let mut config = Config::load_from(path)?;

    if show {
        return show_config(out, &config, path);
    }

    if changes.is_empty() {
        return show_usage(out);
    }

    changes.apply(&mut config);
    config.save_to(path)?;

    writeln!(out, "Configuration saved to: {}", path.display())?;
    show_config(out, &config, path)
}

/// Display current configuration
fn show_config(out: &mut impl Write, config: &Config, path: &Path) -> Result<()> {
    let describe = |value: Option<&Path>| {
        value.map_or("built-in".to_string(), |p| p.display().to_string())
    };

    writeln!(out, "Language: {}", config.language(None))?;
    writeln!(out, "Weapons:  {}", describe(config.weapons.as_deref()))?;
    writeln!(out, "Areas:    {}", describe(config.areas.as_deref()))?;
    writeln!(out, "Config file: {}", path.display())?;

    Ok(())
}

/// Show usage help for the configure command
fn show_usage(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Usage: essence configure --language jp")?;
    writeln!(out, "   or: essence configure --weapons PATH --areas PATH")?;
    writeln!(out, "   or: essence configure --clear")?;
    writeln!(out, "   or: essence configure --show")?;
    writeln!(out)?;
    writeln!(out, "Flags and ESSENCE_LANG / ESSENCE_WEAPONS / ESSENCE_AREAS")?;
    writeln!(out, "override the configured values.")?;
    Ok(())
}
