//! # wishsim
//!
//! Gacha pull simulation with soft pity and 50/50 featured guarantees.
//!
//! A pull goes through three steps:
//!
//! 1. **Odds**: [`compute_odds`] turns a tier's base rate, its soft pity
//!    threshold and the current pity counter into a probability. Past the
//!    threshold every pull adds ten times the base rate.
//! 2. **Tier**: [`select_tier`] rolls for each tier rarest first and stops at
//!    the first hit; when nothing hits, the 3* fallback is returned.
//! 3. **Item**: a [`BannerSession`] picks the item. Standard banners draw from
//!    every item of the tier. Event banners flip a coin between featured and
//!    other items; losing guarantees the next draw of that tier is featured.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use wishsim::{BannerSession, Catalog};
//!
//! # fn main() -> Result<(), wishsim::ConfigError> {
//! let catalog = Catalog::load("data")?;
//! let banner = catalog.banner("venti")?;
//! let mut session = BannerSession::with_pity(&banner, "5:73,5g:1")?;
//!
//! let mut rng = rand::rng();
//! let pull = session.pull(&mut rng);
//! println!("{} {}", pull.tier, pull.item);
//! # Ok(()) }
//! ```
//!
//! ## Randomness
//! Sessions take any `rand::Rng`, so a seeded generator replays the exact
//! same pulls for the same banner and starting pity.
//!
//! ## Errors
//! Everything that can fail does so while building a banner or a session
//! ([`ConfigError`]). Pulling never fails.

extern crate self as wishsim;

pub mod banner;
pub mod catalog;
mod error;
pub mod odds;
pub mod pity;
mod pool;
pub mod rarity;
mod selector;
mod session;
#[cfg(test)]
mod testutil;

pub use banner::{BannerConfig, BannerKind, Flavor};
pub use catalog::Catalog;
pub use error::ConfigError;
pub use odds::{OddsTable, TierOdds, compute_odds};
pub use pity::PityCounters;
pub use pool::Pool;
pub use rarity::Rarity;
pub use selector::select_tier;
pub use session::{BannerSession, PullResult};

/// Derive macro imported from `wishsim_macros`.
pub use wishsim_macros::Tiered;

/// Rarity tiers in evaluation order.
///
/// Implemented by the `Tiered` derive:
///
/// ```rust,ignore
/// #[derive(Copy, Clone, PartialEq, Eq, Tiered)]
/// enum Rarity {
///     #[tier(stars = 5)] Five,
///     #[tier(stars = 4)] Four,
///     #[tier(stars = 3, fallback)] Three,
/// }
/// ```
pub trait Tiered: Copy + Eq + 'static {
    /// Every tier, rarest first.
    const PRIORITY: &'static [Self];
    /// Returned when no rarer tier hits. Never rolled for.
    const FALLBACK: Self;

    fn stars(self) -> u8;
    /// Star count as text, as used by pity input and catalog files.
    fn key(self) -> &'static str;
    fn from_key(key: &str) -> Option<Self>;
}
