//! Per-tier draw probabilities and the soft pity ramp.

use crate::rarity::Rarity;

/// Probability of drawing a tier with `base` odds after `pity` pulls without it.
///
/// Below `threshold` the odds are flat. From `threshold` on, every pull adds
/// `10 * base`, so `pity == threshold` already draws at eleven times the base.
#[inline]
pub fn compute_odds(base: f64, threshold: u32, pity: u32) -> f64 {
    if pity < threshold {
        return base;
    }
    base + (f64::from(pity - threshold) + 1.0) * base * 10.0
}

/// Base odds and soft pity threshold for one tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierOdds {
    pub base: f64,
    pub threshold: u32,
}

impl TierOdds {
    pub const fn new(base: f64, threshold: u32) -> Self {
        Self { base, threshold }
    }

    #[inline]
    pub fn at(&self, pity: u32) -> f64 {
        compute_odds(self.base, self.threshold, pity)
    }
}

/// Odds for every high tier of one banner flavor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OddsTable {
    pub five: TierOdds,
    pub four: TierOdds,
}

impl OddsTable {
    /// Character and standard banners.
    pub const CHARACTER: OddsTable = OddsTable {
        five: TierOdds::new(0.006, 74),
        four: TierOdds::new(0.051, 9),
    };

    /// Weapon banners.
    pub const WEAPON: OddsTable = OddsTable {
        five: TierOdds::new(0.007, 63),
        four: TierOdds::new(0.06, 8),
    };

    /// `None` for the fallback tier, which is never rolled for.
    pub fn get(&self, tier: Rarity) -> Option<TierOdds> {
        match tier {
            Rarity::Five => Some(self.five),
            Rarity::Four => Some(self.four),
            Rarity::Three => None,
        }
    }
}
