//! Static banner data: the standard pools and the featured lists of every
//! event banner, as shipped in `std_pools.json` and `event_banners.json`.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::banner::{BannerConfig, Flavor};
use crate::error::ConfigError;

/// Name of the permanent banner.
pub const STANDARD: &str = "standard";

pub const POOLS_FILE: &str = "std_pools.json";
pub const EVENTS_FILE: &str = "event_banners.json";

/// Every item that can drop outside of a featured slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct StdPools {
    pub std_3_star_pool: Vec<String>,
    /// 4* characters only on the standard banner.
    pub starter_char_pool: Vec<String>,
    pub std_4_char_pool: Vec<String>,
    pub std_4_weap_pool: Vec<String>,
    pub std_5_char_pool: Vec<String>,
    pub std_5_weap_pool: Vec<String>,
}

/// Featured items of one event banner, keyed by star count in the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeaturedItems {
    #[serde(rename = "4")]
    pub four: Vec<String>,
    #[serde(rename = "5")]
    pub five: Vec<String>,
}

/// Read-only banner data, built once and handed to whoever resolves banners.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pools: StdPools,
    events: BTreeMap<String, FeaturedItems>,
}

impl Catalog {
    pub fn new(pools: StdPools, events: BTreeMap<String, FeaturedItems>) -> Self {
        Self { pools, events }
    }

    /// Load `std_pools.json` and `event_banners.json` from `dir`.
    pub fn load(dir: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let dir = dir.as_ref();
        let pools: StdPools = read_json(dir.join(POOLS_FILE))?;
        let events: BTreeMap<String, FeaturedItems> = read_json(dir.join(EVENTS_FILE))?;
        log::info!(
            "loaded catalog from {} ({} event banners)",
            dir.display(),
            events.len()
        );
        Ok(Self::new(pools, events))
    }

    pub fn pools(&self) -> &StdPools {
        &self.pools
    }

    /// `standard` first, then every event banner by name.
    pub fn banner_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(STANDARD).chain(self.events.keys().map(String::as_str))
    }

    /// Resolve a banner name into a ready-to-pull configuration.
    ///
    /// Event banners ending in `_weap` use the weapon pools and odds.
    pub fn banner(&self, name: &str) -> Result<BannerConfig, ConfigError> {
        if name == STANDARD {
            return BannerConfig::standard(&self.pools);
        }
        let featured = self
            .events
            .get(name)
            .ok_or_else(|| ConfigError::UnknownBanner(name.to_string()))?;
        BannerConfig::event(name, Flavor::from_banner_name(name), &self.pools, featured)
    }
}

fn read_json<T: DeserializeOwned>(path: PathBuf) -> Result<T, ConfigError> {
    let raw = match fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(source) => return Err(ConfigError::Io { path, source }),
    };
    serde_json::from_str(&raw).map_err(|source| ConfigError::Json { path, source })
}
