//! Fuzzing library for tracxn-mcp.
//!
//! Targets cover tool argument decoding, response normalization and the
//! diagnostic request rewrites.
//!
//! # Usage
//!
//! ```bash
//! cd crates/tracxn-fuzz
//! cargo +nightly fuzz run fuzz_normalize -- -max_total_time=60
//! ```

pub use tracxn_mcp::{normalize, query, tools};
