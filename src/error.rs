//! Codec error types with numeric error codes.
//!
//! [`CodecError`] is the central error type of the crate. Every variant maps
//! to a stable numeric code so that callers (typically a persistent store)
//! can log and classify failures without matching on message text.

/// Error enum for pool record encoding, decoding and configuration.
///
/// # Error Code Ranges
///
/// | Range     | Category      |
/// |-----------|---------------|
/// | 1000–1999 | Decode        |
/// | 2000–2999 | Range         |
/// | 3000–3999 | Configuration |
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The byte sequence is not a valid wire record: truncated, corrupted,
    /// invalid UTF-8 or an incompatible wire type for a known field.
    #[error("malformed pool record: {0}")]
    Parse(#[from] prost::DecodeError),

    /// A field that the in-memory record requires was absent on the wire.
    #[error("pool record is missing required field `{0}`")]
    MissingField(&'static str),

    /// A wire stage id does not fit in 32 bits and the narrowing policy
    /// rejects such values.
    #[error("stage id {value} does not fit in 32 bits")]
    StageIdOutOfRange {
        /// The 64-bit value read from the wire.
        value: i64,
    },

    /// Configuration value could not be interpreted.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl CodecError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::Parse(_) => 1001,
            Self::MissingField(_) => 1002,
            Self::StageIdOutOfRange { .. } => 2001,
            Self::InvalidConfig(_) => 3001,
        }
    }

    /// Returns `true` if the error was caused by the decoded payload rather
    /// than by configuration.
    #[must_use]
    pub const fn is_corruption(&self) -> bool {
        matches!(
            self,
            Self::Parse(_) | Self::MissingField(_) | Self::StageIdOutOfRange { .. }
        )
    }
}
