//! Board module tests.
//!
//! - `views.rs` - per-piece view generation and its edge cases
//! - `proptest.rs` - property-based tests over random play
