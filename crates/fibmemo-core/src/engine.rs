//! Memoized matrix exponentiation.
//!
//! Computes F(n) as a cell of Q^e where Q = [[1,1],[1,0]] and
//! `e` is the cheapest of `n-1`, `n`, `n+1`. Binary exponentiation runs
//! least-significant bit first, so both the running power `Q^(2^k)` and
//! the running product `Q^(sum of bits so far)` are powers of Q. Each one
//! is recorded as a triplet `(F(e+1), F(e), F(e-1))` in the value cache
//! and its exponent is marked completed, which lets later calls rebuild
//! the matrix without multiplying.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::ops::RangeInclusive;

use num_bigint::BigUint;
use serde::Serialize;
use tracing::{debug, error};

use crate::constants::{BASE_COMPLETED, BASE_VALUES};
use crate::error::FibError;
use crate::matrix_ops::{multiply, square};
use crate::matrix_types::FibMatrix;
use crate::options::EngineOptions;
use crate::selection::{find_cheapest_exponent, Selection};

/// Real (non-memoized) matrix multiplications performed by an engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MultiplicationCounters {
    /// Multiplications folding a power into the running product.
    pub product: u64,
    /// Squarings advancing the running power.
    pub power: u64,
}

impl MultiplicationCounters {
    #[must_use]
    pub fn total(&self) -> u64 {
        self.product + self.power
    }
}

/// Serializable view of an engine's caches and counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheSnapshot {
    /// Index to decimal F(index).
    pub values: BTreeMap<u64, String>,
    /// Completed exponents, ascending.
    pub completed: Vec<u64>,
    pub counters: MultiplicationCounters,
}

/// Fibonacci engine owning its value cache, completed-exponent set and
/// multiplication counters.
///
/// Caches only grow; an existing entry is never overwritten. Calls take
/// `&mut self`, so sharing one engine between threads needs a lock (see
/// [`SharedFibEngine`](crate::shared::SharedFibEngine)).
#[derive(Debug, Clone)]
pub struct FibEngine {
    values: HashMap<u64, BigUint>,
    completed: HashSet<u64>,
    counters: MultiplicationCounters,
    options: EngineOptions,
}

impl FibEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    #[must_use]
    pub fn with_options(options: EngineOptions) -> Self {
        let mut engine = Self {
            values: HashMap::new(),
            completed: HashSet::new(),
            counters: MultiplicationCounters::default(),
            options,
        };
        engine.reset_caches();
        engine
    }

    /// Compute F(n).
    ///
    /// A cached index returns immediately without multiplying. Otherwise
    /// the cheapest neighboring exponent is raised by square-and-multiply,
    /// reusing every completed power it meets and caching every new one.
    pub fn compute(&mut self, n: u64) -> Result<BigUint, FibError> {
        if let Some(value) = self.values.get(&n) {
            debug!(n, "cache hit");
            return Ok(value.clone());
        }

        let Selection { exponent, cell } = find_cheapest_exponent(n);
        debug!(n, exponent, ?cell, "exponent selected");

        let mut remaining = exponent;
        let mut power = FibMatrix::fibonacci_q();
        let mut pow_a: u64 = 1;
        let mut prod_pow: u64 = 0;
        let mut product: Option<FibMatrix> = None;

        loop {
            if remaining & 1 == 1 {
                prod_pow += pow_a;
                let next = if self.completed.contains(&prod_pow) {
                    self.matrix_from_cache(prod_pow)?
                } else {
                    let fresh = match product.take() {
                        None => power.clone(),
                        Some(prev) => {
                            self.counters.product += 1;
                            debug!(exponent = prod_pow, "product multiplication");
                            multiply(&prev, &power)
                        }
                    };
                    self.record(prod_pow, &fresh)?;
                    fresh
                };
                product = Some(next);
            }

            remaining >>= 1;
            if remaining == 0 {
                break;
            }

            pow_a <<= 1;
            power = if self.completed.contains(&pow_a) {
                self.matrix_from_cache(pow_a)?
            } else {
                let squared = square(&power);
                self.counters.power += 1;
                debug!(exponent = pow_a, "power multiplication");
                self.record(pow_a, &squared)?;
                squared
            };
        }

        product
            .map(|m| m.into_cell(cell))
            .ok_or(FibError::EmptyProduct { exponent })
    }

    /// Validate a signed index, then compute.
    pub fn compute_signed(&mut self, n: i64) -> Result<BigUint, FibError> {
        let n = u64::try_from(n).map_err(|_| FibError::NegativeIndex(n))?;
        self.compute(n)
    }

    /// Compute every index in `range`, ascending. Stops at the first error.
    pub fn compute_range(&mut self, range: RangeInclusive<u64>) -> Result<Vec<BigUint>, FibError> {
        range.map(|i| self.compute(i)).collect()
    }

    /// Restore the value cache to `{0: 0, 1: 1, 2: 1}` and the completed
    /// set to `{1}`. Counters are left alone.
    pub fn reset_caches(&mut self) {
        self.values = BASE_VALUES
            .iter()
            .map(|&(index, value)| (index, BigUint::from(value)))
            .collect();
        self.completed = BASE_COMPLETED.iter().copied().collect();
        debug!("caches reset");
    }

    /// Zero both multiplication counters. Caches are left alone.
    pub fn reset_counters(&mut self) {
        self.counters = MultiplicationCounters::default();
        debug!("counters reset");
    }

    #[must_use]
    pub fn counters(&self) -> MultiplicationCounters {
        self.counters
    }

    #[must_use]
    pub fn options(&self) -> EngineOptions {
        self.options
    }

    /// Copy of the value cache, ordered by index.
    #[must_use]
    pub fn value_cache(&self) -> BTreeMap<u64, BigUint> {
        self.values
            .iter()
            .map(|(&index, value)| (index, value.clone()))
            .collect()
    }

    /// Copy of the completed-exponent set, ordered.
    #[must_use]
    pub fn completed_exponents(&self) -> BTreeSet<u64> {
        self.completed.iter().copied().collect()
    }

    #[must_use]
    pub fn snapshot(&self) -> CacheSnapshot {
        CacheSnapshot {
            values: self
                .values
                .iter()
                .map(|(&index, value)| (index, value.to_string()))
                .collect(),
            completed: self.completed_exponents().into_iter().collect(),
            counters: self.counters,
        }
    }

    /// Rebuild `Q^e` for a completed exponent from its cached triplet.
    fn matrix_from_cache(&self, e: u64) -> Result<FibMatrix, FibError> {
        let lookup = |index: u64| {
            self.values
                .get(&index)
                .cloned()
                .ok_or(FibError::MissingTriplet { exponent: e })
        };
        Ok(FibMatrix::from_triplet(
            lookup(e + 1)?,
            lookup(e)?,
            lookup(e - 1)?,
        ))
    }

    /// Cache the triplet of a freshly computed `Q^e` and mark `e` completed.
    fn record(&mut self, e: u64, m: &FibMatrix) -> Result<(), FibError> {
        if self.options.self_check && !m.is_fibonacci_consistent() {
            error!(exponent = e, next = %m.a, current = %m.b, previous = %m.d, "triplet check failed");
            return Err(FibError::InvariantViolation {
                exponent: e,
                next: m.a.clone(),
                current: m.b.clone(),
                previous: m.d.clone(),
            });
        }

        for (index, value) in [(e + 1, &m.a), (e, &m.b), (e - 1, &m.d)] {
            self.values.entry(index).or_insert_with(|| value.clone());
        }
        self.completed.insert(e);
        Ok(())
    }
}

impl Default for FibEngine {
    fn default() -> Self {
        Self::new()
    }
}
