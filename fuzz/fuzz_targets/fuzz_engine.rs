#![no_main]

use libfuzzer_sys::fuzz_target;

use fibmemo_core::{EngineOptions, FibEngine};

fuzz_target!(|data: &[u8]| {
    // Each pair of bytes is one query, capped at 20000 for speed
    let mut engine = FibEngine::with_options(EngineOptions::checked());
    for chunk in data.chunks_exact(2).take(32) {
        let n = u64::from(u16::from_le_bytes([chunk[0], chunk[1]])) % 20_000;
        let value = engine.compute(n).expect("engine should not fail on valid input");

        // Cross-check against a cold engine
        let cold = FibEngine::new().compute(n).expect("cold engine failed");
        assert_eq!(value, cold, "warm and cold engines disagree at n={n}");
    }
});
