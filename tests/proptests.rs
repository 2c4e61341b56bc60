//! Property-based tests for primeshare
//!
//! This test suite uses quickcheck to verify correctness across random inputs,
//! including random secrets, thresholds, and share selections.
//!
//! Run with: cargo test --test proptests

#[path = "proptests/codec.rs"]
mod codec;

#[path = "proptests/split_combine.rs"]
mod split_combine;
