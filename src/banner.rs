//! Resolved banner configurations: which pools a pull can land in.

use crate::catalog::{FeaturedItems, StdPools};
use crate::error::ConfigError;
use crate::odds::OddsTable;
use crate::pool::Pool;

/// Character or weapon banner. Decides the odds table and which 5* pool
/// backs the "other" side of the 50/50.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flavor {
    Character,
    Weapon,
}

impl Flavor {
    /// Event banners whose name ends in this suffix are weapon banners.
    pub const WEAPON_SUFFIX: &'static str = "_weap";

    pub fn from_banner_name(name: &str) -> Self {
        if name.ends_with(Self::WEAPON_SUFFIX) {
            Flavor::Weapon
        } else {
            Flavor::Character
        }
    }

    pub fn odds(self) -> &'static OddsTable {
        match self {
            Flavor::Character => &OddsTable::CHARACTER,
            Flavor::Weapon => &OddsTable::WEAPON,
        }
    }
}

/// Which pull algorithm a banner uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    /// Permanent banner, no featured items and no guarantees.
    Standard,
    /// Limited banner with a 50/50 on every high tier.
    Event { flavor: Flavor },
}

impl BannerKind {
    pub fn odds(self) -> &'static OddsTable {
        match self {
            BannerKind::Standard => &OddsTable::CHARACTER,
            BannerKind::Event { flavor } => flavor.odds(),
        }
    }

    pub fn has_guarantees(self) -> bool {
        matches!(self, BannerKind::Event { .. })
    }
}

/// The two sides of an event banner's 50/50 for one tier.
///
/// `other` never contains a featured item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedSplit {
    pub featured: Pool,
    pub other: Pool,
}

impl FeaturedSplit {
    pub fn new<'a, I>(tier: u8, featured: &[String], standard: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = &'a String>,
    {
        let other = standard
            .into_iter()
            .filter(|item| !featured.contains(*item))
            .cloned();
        Ok(Self {
            featured: Pool::from_items(tier, "featured", featured.iter().cloned())?,
            other: Pool::from_items(tier, "other", other)?,
        })
    }
}

/// High tier pools, tagged by banner variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Drops {
    Standard {
        four: Pool,
        five: Pool,
    },
    Event {
        flavor: Flavor,
        four: FeaturedSplit,
        five: FeaturedSplit,
    },
}

/// Everything a session needs to resolve pulls on one banner. Immutable once
/// built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerConfig {
    pub name: String,
    pub three: Pool,
    pub drops: Drops,
}

impl BannerConfig {
    /// The permanent banner: every 4* and 5* character and weapon, starter
    /// characters included.
    pub fn standard(pools: &StdPools) -> Result<Self, ConfigError> {
        let four = pools
            .std_4_char_pool
            .iter()
            .chain(&pools.starter_char_pool)
            .chain(&pools.std_4_weap_pool)
            .cloned();
        let five = pools
            .std_5_char_pool
            .iter()
            .chain(&pools.std_5_weap_pool)
            .cloned();
        Ok(Self {
            name: crate::catalog::STANDARD.to_string(),
            three: Pool::from_items(3, "standard", pools.std_3_star_pool.iter().cloned())?,
            drops: Drops::Standard {
                four: Pool::from_items(4, "standard", four)?,
                five: Pool::from_items(5, "standard", five)?,
            },
        })
    }

    /// A limited banner. Featured items are split out of the standard pools;
    /// starter characters never show up here.
    pub fn event(
        name: &str,
        flavor: Flavor,
        pools: &StdPools,
        featured: &FeaturedItems,
    ) -> Result<Self, ConfigError> {
        let four = FeaturedSplit::new(
            4,
            &featured.four,
            pools.std_4_char_pool.iter().chain(&pools.std_4_weap_pool),
        )?;
        let five_standard = match flavor {
            Flavor::Character => &pools.std_5_char_pool,
            Flavor::Weapon => &pools.std_5_weap_pool,
        };
        let five = FeaturedSplit::new(5, &featured.five, five_standard)?;
        Ok(Self {
            name: name.to_string(),
            three: Pool::from_items(3, "standard", pools.std_3_star_pool.iter().cloned())?,
            drops: Drops::Event { flavor, four, five },
        })
    }

    pub fn kind(&self) -> BannerKind {
        match self.drops {
            Drops::Standard { .. } => BannerKind::Standard,
            Drops::Event { flavor, .. } => BannerKind::Event { flavor },
        }
    }
}
