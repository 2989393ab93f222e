use std::path::PathBuf;

/// Everything that can go wrong before the first pull.
///
/// Once a [`BannerSession`](crate::BannerSession) exists, pulling cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown banner `{0}` (use `list` to see banner names)")]
    UnknownBanner(String),

    #[error("malformed pity entry `{0}`, expected <pity type>:<pity count>")]
    MalformedPity(String),

    #[error("invalid pity count `{value}` for `{key}`")]
    InvalidPityCount { key: String, value: String },

    #[error("{tier}* {category} pool is empty")]
    EmptyPool { tier: u8, category: &'static str },

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
