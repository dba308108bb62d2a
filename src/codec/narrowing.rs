//! Stage id width conversion between the 32-bit in-memory representation
//! and the 64-bit wire representation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Widens an in-memory stage id to its wire width. Lossless.
#[must_use]
pub const fn widen_stage_id(id: i32) -> i64 {
    id as i64
}

/// What to do with a wire stage id that does not fit in 32 bits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrowingPolicy {
    /// Fail the decode with [`CodecError::StageIdOutOfRange`].
    #[default]
    Reject,
    /// Keep the low 32 bits (two's complement), matching records written by
    /// producers that cast without a range check.
    Truncate,
}

impl NarrowingPolicy {
    /// Narrows a wire stage id to its in-memory width.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::StageIdOutOfRange`] under
    /// [`NarrowingPolicy::Reject`] when `value` is outside the `i32` range.
    pub fn narrow(self, value: i64) -> Result<i32, CodecError> {
        match i32::try_from(value) {
            Ok(id) => Ok(id),
            Err(_) => match self {
                Self::Reject => Err(CodecError::StageIdOutOfRange { value }),
                Self::Truncate => {
                    #[allow(clippy::cast_possible_truncation)]
                    let id = value as i32;
                    tracing::warn!(value, truncated = id, "stage id truncated to 32 bits");
                    Ok(id)
                }
            },
        }
    }

    /// Returns the configuration string for this policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Truncate => "truncate",
        }
    }
}

impl fmt::Display for NarrowingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NarrowingPolicy {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(Self::Reject),
            "truncate" => Ok(Self::Truncate),
            other => Err(CodecError::InvalidConfig(format!(
                "unknown narrowing policy `{other}` (expected `reject` or `truncate`)"
            ))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn widen_preserves_extremes() {
        assert_eq!(widen_stage_id(i32::MAX), 2_147_483_647);
        assert_eq!(widen_stage_id(i32::MIN), -2_147_483_648);
        assert_eq!(widen_stage_id(0), 0);
    }

    #[test]
    fn narrow_in_range_is_identity_for_both_policies() {
        for policy in [NarrowingPolicy::Reject, NarrowingPolicy::Truncate] {
            for id in [i32::MIN, -1, 0, 1, 999_999, i32::MAX] {
                let Ok(narrowed) = policy.narrow(widen_stage_id(id)) else {
                    panic!("{policy} rejected in-range id {id}");
                };
                assert_eq!(narrowed, id);
            }
        }
    }

    #[test]
    fn reject_out_of_range() {
        let too_big = i64::from(i32::MAX) + 1;
        match NarrowingPolicy::Reject.narrow(too_big) {
            Err(CodecError::StageIdOutOfRange { value }) => assert_eq!(value, too_big),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(NarrowingPolicy::Reject.narrow(i64::MIN).is_err());
    }

    #[test]
    fn truncate_keeps_low_bits() {
        let policy = NarrowingPolicy::Truncate;
        assert!(matches!(policy.narrow(1 << 32), Ok(0)));
        assert!(matches!(policy.narrow((1 << 32) + 7), Ok(7)));
        assert!(matches!(policy.narrow(i64::from(i32::MAX) + 1), Ok(i32::MIN)));
    }

    #[test]
    fn parses_from_config_strings() {
        assert!(matches!(
            "reject".parse::<NarrowingPolicy>(),
            Ok(NarrowingPolicy::Reject)
        ));
        assert!(matches!(
            " Truncate ".parse::<NarrowingPolicy>(),
            Ok(NarrowingPolicy::Truncate)
        ));
        assert!(matches!(
            "wrap".parse::<NarrowingPolicy>(),
            Err(CodecError::InvalidConfig(_))
        ));
    }

    #[test]
    fn default_is_reject() {
        assert_eq!(NarrowingPolicy::default(), NarrowingPolicy::Reject);
        assert_eq!(NarrowingPolicy::default().to_string(), "reject");
    }
}
