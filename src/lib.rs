//! # pool-record-codec
//!
//! Binary wire codec for scheduling-pool records.
//!
//! A [`PoolData`] (pool name plus the set of stage ids assigned to it) is
//! encoded to a fixed protobuf message and decoded back exactly. Decoded
//! names go through an injected [`StringInterner`] so that the many records
//! sharing a pool name also share one allocation.
//!
//! ## Architecture
//!
//! ```text
//! Store (caller, owns I/O)
//!     │
//!     ├── PoolRecordCodec (codec/)
//!     │     ├── PoolDataRecord   wire schema (prost)
//!     │     └── NarrowingPolicy  i64 → i32 stage ids
//!     │
//!     └── ConcurrentInterner (interner)
//! ```
//!
//! ## Example
//!
//! ```
//! use pool_record_codec::{PoolData, PoolRecordCodec};
//!
//! let codec = PoolRecordCodec::default();
//! let bytes = codec.encode(&PoolData::new("fair", [1, 2, 3]));
//! let decoded = codec.decode(&bytes)?;
//! assert_eq!(&*decoded.name, "fair");
//! assert_eq!(decoded.stage_count(), 3);
//! # Ok::<(), pool_record_codec::CodecError>(())
//! ```

pub mod codec;
pub mod config;
pub mod domain;
pub mod error;
pub mod interner;
pub mod telemetry;

pub use codec::{NarrowingPolicy, PoolRecordCodec, RecordCodec};
pub use config::CodecConfig;
pub use domain::PoolData;
pub use error::CodecError;
pub use interner::{ConcurrentInterner, StringInterner};
