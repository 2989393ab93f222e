//! Pity counters, guarantee flags and the `key:count` override syntax.

use crate::Tiered;
use crate::error::ConfigError;
use crate::rarity::Rarity;

/// Pull counts since each high tier was last drawn, plus the event banner
/// guarantee flags. The fallback tier has no pity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PityCounters {
    five: u32,
    four: u32,
    five_guaranteed: bool,
    four_guaranteed: bool,
}

impl PityCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, tier: Rarity) -> u32 {
        match tier {
            Rarity::Five => self.five,
            Rarity::Four => self.four,
            Rarity::Three => 0,
        }
    }

    pub fn set_count(&mut self, tier: Rarity, value: u32) {
        match tier {
            Rarity::Five => self.five = value,
            Rarity::Four => self.four = value,
            Rarity::Three => {}
        }
    }

    /// One more pull without any high tier.
    pub fn bump(&mut self) {
        for tier in Rarity::HIGH {
            self.set_count(tier, self.count(tier).saturating_add(1));
        }
    }

    pub fn reset(&mut self, tier: Rarity) {
        self.set_count(tier, 0);
    }

    /// Whether the next draw of `tier` is forced to be featured.
    pub fn is_guaranteed(&self, tier: Rarity) -> bool {
        match tier {
            Rarity::Five => self.five_guaranteed,
            Rarity::Four => self.four_guaranteed,
            Rarity::Three => false,
        }
    }

    pub fn set_guaranteed(&mut self, tier: Rarity, on: bool) {
        match tier {
            Rarity::Five => self.five_guaranteed = on,
            Rarity::Four => self.four_guaranteed = on,
            Rarity::Three => {}
        }
    }

    /// Apply parsed overrides. Guarantee flags only stick when `guarantees`
    /// is set, i.e. on event banners.
    pub fn apply(&mut self, overrides: &[PityOverride], guarantees: bool) {
        for o in overrides {
            match o.key {
                PityKey::Count(tier) => self.set_count(tier, o.value),
                PityKey::Guarantee(tier) if guarantees => self.set_guaranteed(tier, o.value != 0),
                PityKey::Guarantee(tier) => {
                    log::debug!("ignoring {}g guarantee on a banner without guarantees", tier.stars());
                }
            }
        }
    }
}

impl std::fmt::Display for PityCounters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "4:{},5:{},4g:{},5g:{}",
            self.four, self.five, self.four_guaranteed as u8, self.five_guaranteed as u8
        )
    }
}

/// Which piece of pity state an override targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PityKey {
    /// `4`, `5`
    Count(Rarity),
    /// `4g`, `5g`
    Guarantee(Rarity),
}

impl PityKey {
    pub fn parse(key: &str) -> Option<Self> {
        let (tier, guarantee) = match key.strip_suffix('g') {
            Some(tier) => (tier, true),
            None => (key, false),
        };
        let tier = Rarity::from_key(tier).filter(|t| !t.is_fallback())?;
        Some(if guarantee {
            PityKey::Guarantee(tier)
        } else {
            PityKey::Count(tier)
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PityOverride {
    pub key: PityKey,
    pub value: u32,
}

/// Parse `5:73,5g:1` style pity input.
///
/// Unknown keys are skipped without looking at their value. An entry without
/// a `:` is an error, as is a count that is not a non-negative integer.
pub fn parse_overrides(input: &str) -> Result<Vec<PityOverride>, ConfigError> {
    let mut out = Vec::new();
    if input.trim().is_empty() {
        return Ok(out);
    }
    for entry in input.split(',') {
        let entry = entry.trim();
        let Some((key, value)) = entry.split_once(':') else {
            return Err(ConfigError::MalformedPity(entry.to_string()));
        };
        let (key, value) = (key.trim(), value.trim());
        let Some(parsed) = PityKey::parse(key) else {
            log::debug!("ignoring unknown pity type `{key}`");
            continue;
        };
        let value = value
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidPityCount {
                key: key.to_string(),
                value: value.to_string(),
            })?;
        out.push(PityOverride { key: parsed, value });
    }
    Ok(out)
}
