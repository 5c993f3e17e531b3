//! Fuzzing library for kegg-mcp.
//!
//! This crate provides fuzzing targets for the KEGG flat-file parsers,
//! identifier validation and tool input deserialization.
//!
//! # Usage
//!
//! ```bash
//! cd crates/kegg-fuzz
//! cargo +nightly fuzz run fuzz_flatfile_parse -- -max_total_time=60
//! ```

pub use kegg_mcp::{flatfile, models};
