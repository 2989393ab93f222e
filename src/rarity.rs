use crate::Tiered;

/// Rarity tiers, rarest first. Three stars is what you get when nothing
/// rarer hits.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Tiered)]
pub enum Rarity {
    #[tier(stars = 5)]
    Five,
    #[tier(stars = 4)]
    Four,
    #[tier(stars = 3, fallback)]
    Three,
}

impl Rarity {
    /// Tiers that carry pity counters and guarantees.
    pub const HIGH: [Rarity; 2] = [Rarity::Five, Rarity::Four];

    pub fn is_fallback(self) -> bool {
        self == Self::FALLBACK
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}*", self.stars())
    }
}
