//! Test scaffolding for `bidwhist-engine`.
//!
//! The engine's unit tests and every integration test binary install
//! logging from here through `ctor`.

pub mod test_logging;
