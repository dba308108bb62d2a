//! Binary codec for pool records.
//!
//! ```text
//! PoolData ──encode──► PoolDataRecord ──prost──► bytes
//!    ▲                                              │
//!    └──intern + narrow── PoolDataRecord ◄──prost───┘
//! ```
//!
//! - **wire**: the fixed protobuf message layout
//! - **narrowing**: 32 ↔ 64 bit stage id conversion and its policy
//! - **pool_codec**: [`PoolRecordCodec`], the encode/decode pair

pub mod narrowing;
pub mod pool_codec;
pub mod wire;

pub use narrowing::{NarrowingPolicy, widen_stage_id};
pub use pool_codec::PoolRecordCodec;
pub use wire::PoolDataRecord;

use crate::error::CodecError;

/// Converts one entity type to and from its binary wire form.
///
/// Stores hold one implementation per persisted entity and call it when
/// writing or reading raw values.
pub trait RecordCodec<T> {
    /// Encodes `value` to bytes. Encoding cannot fail.
    fn encode(&self, value: &T) -> Vec<u8>;

    /// Decodes bytes produced by [`RecordCodec::encode`] (or any
    /// schema-compatible writer).
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] when the bytes are not a valid record.
    fn decode(&self, bytes: &[u8]) -> Result<T, CodecError>;
}
