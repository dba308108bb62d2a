//! Encode/decode pair for [`PoolData`].

use std::collections::HashSet;
use std::sync::Arc;

use prost::Message;

use super::narrowing::{NarrowingPolicy, widen_stage_id};
use super::wire::PoolDataRecord;
use super::RecordCodec;
use crate::config::CodecConfig;
use crate::domain::PoolData;
use crate::error::CodecError;
use crate::interner::{ConcurrentInterner, StringInterner};

/// Stateless codec between [`PoolData`] and its protobuf wire form.
///
/// Holds the injected [`StringInterner`] used for decoded names and the
/// [`NarrowingPolicy`] applied to wire stage ids. Immutable after
/// construction; share it behind an `Arc` across threads.
#[derive(Debug, Clone)]
pub struct PoolRecordCodec {
    interner: Arc<dyn StringInterner>,
    narrowing: NarrowingPolicy,
}

impl PoolRecordCodec {
    /// Creates a codec using `interner` for names and the default
    /// ([`NarrowingPolicy::Reject`]) narrowing policy.
    #[must_use]
    pub fn new(interner: Arc<dyn StringInterner>) -> Self {
        Self {
            interner,
            narrowing: NarrowingPolicy::default(),
        }
    }

    /// Builds a codec with its own [`ConcurrentInterner`] sized from
    /// `config`.
    #[must_use]
    pub fn from_config(config: &CodecConfig) -> Self {
        let interner = Arc::new(ConcurrentInterner::with_capacity(config.interner_capacity));
        Self::new(interner).with_narrowing(config.narrowing)
    }

    /// Returns the codec with the given narrowing policy.
    #[must_use]
    pub fn with_narrowing(mut self, narrowing: NarrowingPolicy) -> Self {
        self.narrowing = narrowing;
        self
    }

    /// Returns the narrowing policy in effect.
    #[must_use]
    pub const fn narrowing(&self) -> NarrowingPolicy {
        self.narrowing
    }

    /// Returns the interner used for decoded names.
    #[must_use]
    pub fn interner(&self) -> &Arc<dyn StringInterner> {
        &self.interner
    }

    /// Encodes a pool record.
    ///
    /// Stage ids are written in set iteration order; readers must treat
    /// field 2 as unordered.
    #[must_use]
    pub fn encode(&self, input: &PoolData) -> Vec<u8> {
        let record = PoolDataRecord {
            name: Some(input.name.to_string()),
            stage_ids: input.stage_ids.iter().copied().map(widen_stage_id).collect(),
        };
        tracing::trace!(
            pool = %input.name,
            stage_count = record.stage_ids.len(),
            "encoding pool record"
        );
        record.encode_to_vec()
    }

    /// Decodes a pool record, interning its name.
    ///
    /// Duplicate stage ids on the wire collapse into one set element.
    ///
    /// # Errors
    ///
    /// - [`CodecError::Parse`] if `bytes` is truncated, corrupted or not
    ///   schema-compatible.
    /// - [`CodecError::MissingField`] if the record carries no name.
    /// - [`CodecError::StageIdOutOfRange`] if a stage id does not fit in
    ///   32 bits under [`NarrowingPolicy::Reject`].
    pub fn decode(&self, bytes: &[u8]) -> Result<PoolData, CodecError> {
        let record = PoolDataRecord::decode(bytes).map_err(|e| {
            tracing::debug!(error = %e, len = bytes.len(), "failed to parse pool record");
            CodecError::from(e)
        })?;

        let Some(raw_name) = record.name else {
            tracing::debug!(len = bytes.len(), "pool record without name");
            return Err(CodecError::MissingField("name"));
        };

        let stage_ids = record
            .stage_ids
            .into_iter()
            .map(|value| self.narrowing.narrow(value))
            .collect::<Result<HashSet<i32>, CodecError>>()?;

        let name = self.interner.intern(&raw_name);
        tracing::trace!(pool = %name, stage_count = stage_ids.len(), "decoded pool record");

        Ok(PoolData { name, stage_ids })
    }
}

impl Default for PoolRecordCodec {
    fn default() -> Self {
        Self::new(Arc::new(ConcurrentInterner::new()))
    }
}

impl RecordCodec<PoolData> for PoolRecordCodec {
    fn encode(&self, value: &PoolData) -> Vec<u8> {
        Self::encode(self, value)
    }

    fn decode(&self, bytes: &[u8]) -> Result<PoolData, CodecError> {
        Self::decode(self, bytes)
    }
}
