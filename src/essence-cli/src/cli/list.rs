//! CLI definitions for the list command

use clap::Subcommand;
use essence::TagSlot;

#[derive(Subcommand)]
pub enum ListCommand {
    /// List weapons, highest rarity first
    Weapons {
        /// Only weapons of this rarity tier (3-6)
        #[arg(long, value_parser = clap::value_parser!(u8).range(3..=6))]
        rarity: Option<u8>,

        /// Only weapons of this type (e.g. "Polearm")
        #[arg(long = "type")]
        weapon_type: Option<String>,
    },

    /// List areas with the tags they drop and how many weapons they fully cover
    Areas,

    /// List the tag vocabulary of one slot (main, stat, skill)
    Tags {
        /// Tag slot
        slot: TagSlot,
    },
}
