//! Core CLI definitions

use clap::{Args, Parser, Subcommand};
use essence::Language;
use std::path::PathBuf;

use super::list::ListCommand;

#[derive(Parser)]
#[command(name = "essence")]
#[command(about = "Find the best area to farm essences for a weapon", long_about = None)]
pub struct Cli {
    /// Display language: en or jp (uses configured default if not provided)
    #[arg(long, global = true, env = "ESSENCE_LANG")]
    pub lang: Option<Language>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Catalogue file overrides shared by the query commands
#[derive(Args, Debug, Default, Clone)]
pub struct CatalogueArgs {
    /// Path to a weapon catalogue (JSON array)
    #[arg(long, global = true, env = "ESSENCE_WEAPONS")]
    pub weapons: Option<PathBuf>,

    /// Path to an area catalogue (JSON array)
    #[arg(long, global = true, env = "ESSENCE_AREAS")]
    pub areas: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Recommend the best farming area for a weapon
    #[command(visible_alias = "r")]
    Recommend {
        /// Weapon id or name (e.g. "thunderberge", "Forgeborn Scathe")
        #[arg(required = true, num_args = 1..)]
        weapon: Vec<String>,

        /// Accept areas that cover the main tag and only one secondary tag
        #[arg(long)]
        lenient: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        catalogue: CatalogueArgs,
    },

    /// Filter weapons by tags, rarity and weapon type
    #[command(visible_alias = "f")]
    Filter {
        /// Main (attribute) tag, in either language
        #[arg(long)]
        main: Option<String>,

        /// Stat (secondary) tag, in either language
        #[arg(long)]
        stat: Option<String>,

        /// Skill tag, in either language
        #[arg(long)]
        skill: Option<String>,

        /// Rarity tier (3-6)
        #[arg(long, value_parser = clap::value_parser!(u8).range(3..=6))]
        rarity: Option<u8>,

        /// Weapon type (e.g. "Sword", "Arts Unit")
        #[arg(long = "type")]
        weapon_type: Option<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        catalogue: CatalogueArgs,
    },

    /// Browse the weapon and area catalogues
    #[command(visible_alias = "l")]
    List {
        #[command(subcommand)]
        command: ListCommand,

        #[command(flatten)]
        catalogue: CatalogueArgs,
    },

    /// Configure default settings
    #[command(visible_alias = "c")]
    Configure {
        /// Set default display language (en, jp)
        #[arg(long)]
        language: Option<Language>,

        /// Set default weapon catalogue path
        #[arg(long)]
        weapons: Option<PathBuf>,

        /// Set default area catalogue path
        #[arg(long)]
        areas: Option<PathBuf>,

        /// Reset configuration to defaults
        #[arg(long)]
        clear: bool,

        /// Show current configuration
        #[arg(long)]
        show: bool,
    },
}
