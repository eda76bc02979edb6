//! Rarity tier definitions

/// Rarity tier information
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RarityTier {
    pub tier: u8,
    /// Star label shown on filter buttons (e.g. "★6")
    pub label: &'static str,
    /// Card background colour (RGBA hex)
    pub color: &'static str,
}

/// All rarity tiers, highest first
pub const RARITY_TIERS: &[RarityTier] = &[
    RarityTier {
        tier: 6,
        label: "★6",
        color: "#ff4d4d36",
    },
    RarityTier {
        tier: 5,
        label: "★5",
        color: "#ffcc004d",
    },
    RarityTier {
        tier: 4,
        label: "★4",
        color: "#9933ff57",
    },
    RarityTier {
        tier: 3,
        label: "★3",
        color: "#3399ff41",
    },
];

/// Fallback card colour for unknown tiers
const UNKNOWN_COLOR: &str = "#1a1a1a";

/// Get rarity tier by tier number
pub fn rarity_by_tier(tier: u8) -> Option<&'static RarityTier> {
    RARITY_TIERS.iter().find(|r| r.tier == tier)
}

/// Card colour for a rarity, falling back to a neutral dark colour
pub fn rarity_color(tier: u8) -> &'static str {
    rarity_by_tier(tier).map_or(UNKNOWN_COLOR, |r| r.color)
}
