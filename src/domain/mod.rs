//! Domain layer: the scheduling pool record handled by the codec.

pub mod pool_data;

pub use pool_data::PoolData;
