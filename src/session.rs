//! The pull state machine.

use rand::Rng;

use crate::banner::{BannerConfig, BannerKind, Drops, FeaturedSplit};
use crate::error::ConfigError;
use crate::pity::{PityCounters, parse_overrides};
use crate::rarity::Rarity;
use crate::selector::select_tier;

/// One pull: the tier drawn and the item it landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PullResult<'a> {
    pub tier: Rarity,
    pub item: &'a str,
}

/// Pity state for one run on one banner.
///
/// Borrows its banner; many sessions can share one config.
#[derive(Debug, Clone)]
pub struct BannerSession<'a> {
    config: &'a BannerConfig,
    pity: PityCounters,
}

impl<'a> BannerSession<'a> {
    /// Fresh session with zeroed pity.
    pub fn new(config: &'a BannerConfig) -> Self {
        log::debug!("banner {} ({:?})", config.name, config.kind());
        log::debug!("{config:#?}");
        Self {
            config,
            pity: PityCounters::new(),
        }
    }

    /// Session starting from `4:3,5:73,5g:1` style pity. Guarantee keys are
    /// ignored on the standard banner.
    pub fn with_pity(config: &'a BannerConfig, pity: &str) -> Result<Self, ConfigError> {
        let overrides = parse_overrides(pity)?;
        let mut session = Self::new(config);
        session
            .pity
            .apply(&overrides, config.kind().has_guarantees());
        Ok(session)
    }

    pub fn config(&self) -> &'a BannerConfig {
        self.config
    }

    pub fn kind(&self) -> BannerKind {
        self.config.kind()
    }

    pub fn pity(&self) -> &PityCounters {
        &self.pity
    }

    pub fn pull<R: Rng + ?Sized>(&mut self, rng: &mut R) -> PullResult<'a> {
        let config = self.config;
        self.pity.bump();
        log::debug!("pulling {}, pity is {}", config.name, self.pity);

        let tier = select_tier(config.kind().odds(), &self.pity, rng);
        if tier.is_fallback() {
            return PullResult {
                tier,
                item: config.three.sample(rng),
            };
        }

        self.pity.reset(tier);
        // TODO secondary pity: cap pulls without a featured 5* (270) or 4* (30).
        let item = match &config.drops {
            Drops::Standard { four, five } => match tier {
                Rarity::Five => five.sample(rng),
                _ => four.sample(rng),
            },
            Drops::Event { four, five, .. } => {
                let split = match tier {
                    Rarity::Five => five,
                    _ => four,
                };
                self.fifty_fifty(tier, split, rng)
            }
        };
        PullResult { tier, item }
    }

    /// Draw `n` pulls in order.
    pub fn pulls<R: Rng + ?Sized>(&mut self, n: usize, rng: &mut R) -> Vec<PullResult<'a>> {
        (0..n).map(|_| self.pull(rng)).collect()
    }

    /// Featured on a won coin flip or an active guarantee; otherwise "other",
    /// and the next draw of this tier is guaranteed.
    fn fifty_fifty<R: Rng + ?Sized>(
        &mut self,
        tier: Rarity,
        split: &'a FeaturedSplit,
        rng: &mut R,
    ) -> &'a str {
        let guaranteed = self.pity.is_guaranteed(tier);
        log::debug!("pull {tier}, guaranteed pity: {}", guaranteed as u8);
        if guaranteed || rng.random_bool(0.5) {
            self.pity.set_guaranteed(tier, false);
            split.featured.sample(rng)
        } else {
            self.pity.set_guaranteed(tier, true);
            split.other.sample(rng)
        }
    }
}
