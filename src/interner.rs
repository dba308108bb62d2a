//! Shared string interning for decoded pool names.
//!
//! Many pool records in a store carry the same name. Decoding routes every
//! name through a [`StringInterner`] so equal names share one allocation.
//! The interner is an injected collaborator, not a process-wide global.

use std::fmt;
use std::sync::Arc;

use dashmap::DashMap;

/// Returns a canonical shared instance for equal string values.
///
/// Implementations must be safe to call concurrently: for a given value,
/// every call returns an `Arc` pointing at the same allocation for as long
/// as the interner keeps it.
pub trait StringInterner: Send + Sync + fmt::Debug {
    /// Returns the canonical instance equal in value to `s`.
    fn intern(&self, s: &str) -> Arc<str>;
}

/// Concurrent interner backed by a sharded [`DashMap`].
///
/// Lookups of already-interned values take a shard read lock only; the
/// first insertion of a value takes the shard write lock through the entry
/// API, so two racing callers still agree on one canonical instance.
#[derive(Debug, Default)]
pub struct ConcurrentInterner {
    entries: DashMap<Arc<str>, ()>,
}

impl ConcurrentInterner {
    /// Creates an empty interner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty interner with room for `capacity` distinct values.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: DashMap::with_capacity(capacity),
        }
    }

    /// Returns the number of distinct values held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no value has been interned (or all were purged).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops canonical values that are no longer referenced outside the
    /// interner and returns how many were removed.
    ///
    /// A value interned again after being purged gets a new allocation.
    pub fn purge_unused(&self) -> usize {
        let before = self.entries.len();
        self.entries.retain(|value, _| Arc::strong_count(value) > 1);
        let removed = before.saturating_sub(self.entries.len());
        tracing::debug!(removed, remaining = self.entries.len(), "purged interned strings");
        removed
    }
}

impl StringInterner for ConcurrentInterner {
    fn intern(&self, s: &str) -> Arc<str> {
        if let Some(existing) = self.entries.get(s) {
            return Arc::clone(existing.key());
        }
        let entry = self.entries.entry(Arc::from(s)).or_insert(());
        Arc::clone(entry.key())
    }
}
