//! Property-based tests for the memoized engine.
//!
//! Values are checked against a plain iterative reference that shares no
//! code with the matrix path.

use num_bigint::BigUint;
use proptest::prelude::*;

use fibmemo_core::{EngineOptions, FibEngine};

fn iterative(n: u64) -> BigUint {
    let (mut prev, mut cur) = (BigUint::ZERO, BigUint::from(1u32));
    for _ in 0..n {
        let next = &prev + &cur;
        prev = std::mem::replace(&mut cur, next);
    }
    prev
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// The engine agrees with the iterative reference.
    #[test]
    fn engine_matches_iterative(n in 0u64..3000) {
        let mut engine = FibEngine::new();
        prop_assert_eq!(engine.compute(n).unwrap(), iterative(n), "F({}) mismatch", n);
    }

    /// F(n) == F(n-1) + F(n-2), each value from the same warm engine.
    #[test]
    fn recurrence_holds(n in 2u64..5000) {
        let mut engine = FibEngine::new();
        let fn_val = engine.compute(n).unwrap();
        let fn1_val = engine.compute(n - 1).unwrap();
        let fn2_val = engine.compute(n - 2).unwrap();
        prop_assert_eq!(fn_val, fn1_val + fn2_val, "F({}) != F({}) + F({})", n, n - 1, n - 2);
    }

    /// A repeated query returns the same value and multiplies nothing.
    #[test]
    fn repeated_query_is_free(n in 0u64..100_000) {
        let mut engine = FibEngine::new();
        let first = engine.compute(n).unwrap();
        let counters = engine.counters();
        let second = engine.compute(n).unwrap();
        prop_assert_eq!(first, second);
        prop_assert_eq!(engine.counters(), counters);
    }

    /// Entries never disappear or change, whatever the query order.
    #[test]
    fn caches_grow_monotonically(queries in proptest::collection::vec(0u64..4000, 1..20)) {
        let mut engine = FibEngine::with_options(EngineOptions::checked());
        for n in queries {
            let values_before = engine.value_cache();
            let completed_before = engine.completed_exponents();
            engine.compute(n).unwrap();
            let values_after = engine.value_cache();
            for (index, value) in &values_before {
                prop_assert_eq!(values_after.get(index), Some(value));
            }
            prop_assert!(completed_before.is_subset(&engine.completed_exponents()));
        }
    }

    /// Every completed exponent has a consistent triplet in the value cache.
    #[test]
    fn completed_exponents_hold_triplets(queries in proptest::collection::vec(1u64..10_000, 1..12)) {
        let mut engine = FibEngine::new();
        for n in queries {
            engine.compute(n).unwrap();
        }
        let values = engine.value_cache();
        for e in engine.completed_exponents() {
            let next = values.get(&(e + 1));
            let cur = values.get(&e);
            let prev = values.get(&(e - 1));
            prop_assert!(next.is_some() && cur.is_some() && prev.is_some(), "triplet for {} missing", e);
            prop_assert_eq!(next.unwrap(), &(cur.unwrap() + prev.unwrap()));
        }
    }

    /// Answers do not depend on what the engine has seen before.
    #[test]
    fn warm_and_cold_engines_agree(
        warmup in proptest::collection::vec(0u64..2000, 0..10),
        n in 0u64..2000,
    ) {
        let mut warm = FibEngine::new();
        for w in warmup {
            warm.compute(w).unwrap();
        }
        let mut cold = FibEngine::new();
        prop_assert_eq!(warm.compute(n).unwrap(), cold.compute(n).unwrap());
    }
}
