use anyhow::{Context, Result, bail};
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use zeroize::Zeroizing;

use crate::domain::SplitConfig;
use crate::sharing;

/// Delimiter used when several shares travel as one string
pub const SHARE_DELIMITER: &str = ",";

/// Result of a split operation (for JSON serialization)
#[derive(Debug, Serialize, Deserialize)]
pub struct SplitReport {
    /// The generated shares, in index order
    pub shares: Vec<String>,
    /// Number of shares generated
    pub share_count: u8,
    /// Threshold required to reconstruct
    pub threshold: u8,
}

/// A recovered secret ready for display
#[derive(Debug, PartialEq)]
pub enum RenderedSecret {
    /// The secret is valid UTF-8
    Text(Zeroizing<String>),
    /// The secret is binary; this is its hex encoding
    Hex(Zeroizing<String>),
}

/// Split a text secret into encoded shares
///
/// # Errors
/// Returns an error if the secret does not fit in the field
pub fn split_secret(secret: &str, config: SplitConfig) -> Result<Vec<String>> {
    if *config.threshold() == 1 {
        warn!("threshold 1 gives every share the complete secret");
    }

    let shares = sharing::split_with_rng(secret.as_bytes(), config, &mut OsRng)
        .context("Failed to split secret")?;

    info!(
        share_count = shares.len(),
        threshold = *config.threshold(),
        "secret split"
    );
    Ok(shares.iter().map(ToString::to_string).collect())
}

/// Split a text secret and package the shares with their parameters
///
/// # Errors
/// Returns an error if splitting fails
pub fn split_report(secret: &str, config: SplitConfig) -> Result<SplitReport> {
    let shares = split_secret(secret, config)?;
    Ok(SplitReport {
        shares,
        share_count: *config.share_count(),
        threshold: *config.threshold(),
    })
}

/// Combine encoded shares to reconstruct the original secret bytes
///
/// Supplying fewer shares than the split threshold yields a wrong secret
/// without an error; see [`crate::sharing`].
///
/// # Errors
/// Returns an error if no shares are given or any share is invalid
pub fn combine_shares(share_strings: &[String]) -> Result<Zeroizing<Vec<u8>>> {
    if share_strings.is_empty() {
        bail!("No shares provided");
    }

    let secret = sharing::combine(share_strings).context("Failed to combine shares")?;
    info!(share_count = share_strings.len(), "secret combined");
    Ok(secret)
}

/// Join encoded shares into one comma-separated string
#[must_use]
pub fn join_shares(shares: &[String]) -> String {
    shares.join(SHARE_DELIMITER)
}

/// Split a comma- or newline-separated list of shares
///
/// Surrounding whitespace is trimmed and empty entries are skipped.
#[must_use]
pub fn parse_share_list(input: &str) -> Vec<String> {
    input
        .lines()
        .flat_map(|line| line.split(SHARE_DELIMITER))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Render recovered bytes as text when possible, hex otherwise
#[must_use]
pub fn render_secret(secret: &[u8]) -> RenderedSecret {
    match std::str::from_utf8(secret) {
        Ok(text) => RenderedSecret::Text(Zeroizing::new(text.to_string())),
        Err(_) => RenderedSecret::Hex(Zeroizing::new(hex::encode(secret))),
    }
}
