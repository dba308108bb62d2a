//! Codec configuration loaded from environment variables.
//!
//! All settings come from environment variables (or a `.env` file via
//! `dotenvy`):
//!
//! | Variable                       | Default  |
//! |--------------------------------|----------|
//! | `POOL_CODEC_NARROWING_POLICY`  | `reject` |
//! | `POOL_CODEC_INTERNER_CAPACITY` | `1024`   |

use crate::codec::NarrowingPolicy;
use crate::error::CodecError;

/// Environment key for [`CodecConfig::narrowing`].
pub const NARROWING_POLICY_ENV: &str = "POOL_CODEC_NARROWING_POLICY";

/// Environment key for [`CodecConfig::interner_capacity`].
pub const INTERNER_CAPACITY_ENV: &str = "POOL_CODEC_INTERNER_CAPACITY";

const DEFAULT_INTERNER_CAPACITY: usize = 1024;

/// Codec settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecConfig {
    /// Handling of wire stage ids outside the 32-bit range.
    pub narrowing: NarrowingPolicy,

    /// Initial capacity of the interner built by
    /// [`crate::codec::PoolRecordCodec::from_config`].
    pub interner_capacity: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            narrowing: NarrowingPolicy::default(),
            interner_capacity: DEFAULT_INTERNER_CAPACITY,
        }
    }
}

impl CodecConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    /// Numeric values fall back to defaults when missing or invalid.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidConfig`] if
    /// `POOL_CODEC_NARROWING_POLICY` is set to anything other than
    /// `reject` or `truncate`.
    pub fn from_env() -> Result<Self, CodecError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Same as [`CodecConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CodecError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let narrowing = match lookup(NARROWING_POLICY_ENV) {
            Some(raw) => raw.parse::<NarrowingPolicy>()?,
            None => NarrowingPolicy::default(),
        };
        let interner_capacity =
            parse_value(lookup(INTERNER_CAPACITY_ENV), DEFAULT_INTERNER_CAPACITY);

        let config = Self {
            narrowing,
            interner_capacity,
        };
        tracing::debug!(
            narrowing = %config.narrowing,
            interner_capacity = config.interner_capacity,
            "loaded codec configuration"
        );
        Ok(config)
    }
}

/// Parses an optional raw value as `T`, returning `default` on missing or
/// invalid values.
fn parse_value<T: std::str::FromStr>(raw: Option<String>, default: T) -> T {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let Ok(config) = CodecConfig::from_lookup(lookup_from(&[])) else {
            panic!("empty environment must load");
        };
        assert_eq!(config, CodecConfig::default());
        assert_eq!(config.narrowing, NarrowingPolicy::Reject);
        assert_eq!(config.interner_capacity, 1024);
    }

    #[test]
    fn reads_both_keys() {
        let Ok(config) = CodecConfig::from_lookup(lookup_from(&[
            (NARROWING_POLICY_ENV, "truncate"),
            (INTERNER_CAPACITY_ENV, "64"),
        ])) else {
            panic!("valid environment must load");
        };
        assert_eq!(config.narrowing, NarrowingPolicy::Truncate);
        assert_eq!(config.interner_capacity, 64);
    }

    #[test]
    fn invalid_capacity_falls_back() {
        let Ok(config) =
            CodecConfig::from_lookup(lookup_from(&[(INTERNER_CAPACITY_ENV, "lots")]))
        else {
            panic!("bad capacity must fall back");
        };
        assert_eq!(config.interner_capacity, 1024);
    }

    #[test]
    fn invalid_policy_is_an_error() {
        let result = CodecConfig::from_lookup(lookup_from(&[(NARROWING_POLICY_ENV, "clamp")]));
        assert!(matches!(result, Err(CodecError::InvalidConfig(_))));
    }
}
