//! Shamir's Secret Sharing over the prime field GF(2^1279 - 1)
//!
//! The core is [`sharing::split`] and [`sharing::combine`]; the `commands`,
//! `cli` and `wasm` modules are thin adapters around it.

#[cfg(feature = "cli")]
pub mod cli;
pub mod codec;
pub mod commands;
pub mod domain;
pub mod error;
pub mod field;
pub mod sharing;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use codec::EncodedShare;
pub use error::{Error, ParseShareError, Result};
pub use sharing::{combine, split, split_with_rng};
