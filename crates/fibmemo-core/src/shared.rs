//! Thread-safe wrapper around a single [`FibEngine`].

use std::collections::{BTreeMap, BTreeSet};

use num_bigint::BigUint;
use parking_lot::Mutex;

use crate::engine::{CacheSnapshot, FibEngine, MultiplicationCounters};
use crate::error::FibError;
use crate::options::EngineOptions;

/// A [`FibEngine`] behind a mutex.
///
/// Each call holds the lock for its whole duration, so concurrent callers
/// see the caches grow exactly as if their calls had run one after another.
#[derive(Debug, Default)]
pub struct SharedFibEngine {
    inner: Mutex<FibEngine>,
}

impl SharedFibEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::from_engine(FibEngine::new())
    }

    #[must_use]
    pub fn with_options(options: EngineOptions) -> Self {
        Self::from_engine(FibEngine::with_options(options))
    }

    #[must_use]
    pub fn from_engine(engine: FibEngine) -> Self {
        Self {
            inner: Mutex::new(engine),
        }
    }

    pub fn compute(&self, n: u64) -> Result<BigUint, FibError> {
        self.inner.lock().compute(n)
    }

    pub fn reset_caches(&self) {
        self.inner.lock().reset_caches();
    }

    pub fn reset_counters(&self) {
        self.inner.lock().reset_counters();
    }

    #[must_use]
    pub fn counters(&self) -> MultiplicationCounters {
        self.inner.lock().counters()
    }

    #[must_use]
    pub fn value_cache(&self) -> BTreeMap<u64, BigUint> {
        self.inner.lock().value_cache()
    }

    #[must_use]
    pub fn completed_exponents(&self) -> BTreeSet<u64> {
        self.inner.lock().completed_exponents()
    }

    #[must_use]
    pub fn snapshot(&self) -> CacheSnapshot {
        self.inner.lock().snapshot()
    }

    /// Unwrap the engine.
    #[must_use]
    pub fn into_inner(self) -> FibEngine {
        self.inner.into_inner()
    }
}
