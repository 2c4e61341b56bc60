use clap::{Parser, Subcommand, ValueEnum};

use crate::domain::{ShareCount, Threshold};

fn parse_threshold(s: &str) -> Result<Threshold, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number between 1 and 255"))?;

    Threshold::new(value).map_err(|e| e.to_string())
}

fn parse_share_count(s: &str) -> Result<ShareCount, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a number between 1 and 255"))?;

    ShareCount::new(value).map_err(|e| e.to_string())
}

/// How `split` prints the generated shares
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One share per line
    Lines,
    /// All shares on one comma-separated line
    Comma,
    /// JSON object with the shares and split parameters
    Json,
}

#[derive(Parser)]
#[command(name = "primeshare")]
#[command(about = "Split secrets into Shamir shares over a 1279-bit prime field")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a secret read from stdin into shares
    Split {
        /// Number of shares to create
        #[arg(short, long, value_parser = parse_share_count)]
        shares: ShareCount,

        /// Threshold: minimum number of shares needed to reconstruct
        #[arg(short, long, value_parser = parse_threshold)]
        threshold: Threshold,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Lines)]
        format: OutputFormat,
    },
    /// Combine shares to reconstruct the original secret
    #[command(alias = "restore")]
    Combine {
        /// Comma-separated shares; read from stdin when omitted
        shares: Option<String>,
    },
}
