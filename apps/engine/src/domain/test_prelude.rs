use std::env;

use proptest::prelude::ProptestConfig;

/// Case count from `PROPTEST_CASES`, low by default for fast runs.
pub fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(64);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
