//! Domain types for Shamir Secret Sharing
//!
//! This module contains validated newtypes and configuration for splitting:
//! - [`Threshold`] - Minimum shares required for reconstruction (1..=255)
//! - [`ShareCount`] - Total number of shares to create (1..=255)
//! - [`ShareIndex`] - Share x-coordinate (1..=`u32::MAX`)
//! - [`SplitConfig`] - Validated threshold and share count pair
//! - [`Share`] - One decoded point on the secret polynomial

mod config;
mod share;
mod share_count;
mod share_index;
mod threshold;

pub use config::SplitConfig;
pub use share::Share;
pub use share_count::ShareCount;
pub use share_index::ShareIndex;
pub use threshold::Threshold;
