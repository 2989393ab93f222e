use rand::Rng;

use crate::error::ConfigError;

/// A non-empty list of item names, all equally likely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pool {
    items: Vec<String>,
}

impl Pool {
    /// Build from any iterator of names. `tier` and `category` only label
    /// the error when the pool turns out empty.
    pub fn from_items<I, S>(tier: u8, category: &'static str, items: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items: Vec<String> = items.into_iter().map(Into::into).collect();
        if items.is_empty() {
            return Err(ConfigError::EmptyPool { tier, category });
        }
        Ok(Self { items })
    }

    /// Number of items. Never zero.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    /// Sample **by reference**.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.items[rng.random_range(0..self.items.len())]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }
}
