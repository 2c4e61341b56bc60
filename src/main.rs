use std::io::{self, BufRead};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

use primeshare::cli::{Cli, Commands, OutputFormat};
use primeshare::commands::{
    RenderedSecret, combine_shares, join_shares, parse_share_list, render_secret, split_report,
};
use primeshare::domain::SplitConfig;

/// Read a secret securely from stdin (hidden input when TTY available)
fn read_secret() -> Result<Zeroizing<String>> {
    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter secret:");
        let secret = Zeroizing::new(
            rpassword::read_password().context("Failed to read secret from stdin")?,
        );
        Ok(Zeroizing::new(secret.trim().to_string()))
    } else {
        // Non-interactive mode (piped input) - read directly from stdin
        let stdin = io::stdin();
        let mut handle = stdin.lock();
        let mut secret = Zeroizing::new(String::new());
        handle
            .read_line(&mut secret)
            .context("Failed to read secret from stdin")?;
        Ok(Zeroizing::new(secret.trim().to_string()))
    }
}

/// Read shares from stdin, one per line or comma-separated, until an empty
/// line or end of input
fn read_shares() -> Result<Vec<String>> {
    let mut shares = Vec::new();

    if atty::is(atty::Stream::Stdin) {
        eprintln!("Enter shares (one per line, empty line to finish):");

        loop {
            let line = Zeroizing::new(
                rpassword::read_password().context("Failed to read share from stdin")?,
            );
            if line.trim().is_empty() {
                break;
            }
            shares.extend(parse_share_list(&line));
        }
    } else {
        let stdin = io::stdin();
        let handle = stdin.lock();

        for line in handle.lines() {
            let line = Zeroizing::new(line.context("Failed to read line from stdin")?);
            if line.trim().is_empty() {
                break;
            }
            shares.extend(parse_share_list(&line));
        }
    }

    if shares.is_empty() {
        anyhow::bail!("No shares provided");
    }

    Ok(shares)
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Split {
            shares,
            threshold,
            format,
        } => {
            let config = SplitConfig::new(threshold, shares)?;
            let secret = read_secret()?;
            let report = split_report(&secret, config)?;

            match format {
                OutputFormat::Lines => {
                    for share in &report.shares {
                        println!("{share}");
                    }
                }
                OutputFormat::Comma => println!("{}", join_shares(&report.shares)),
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&report)
                        .context("Failed to serialize split report")?
                ),
            }
        }
        Commands::Combine { shares } => {
            let shares = match shares {
                Some(list) => parse_share_list(&list),
                None => read_shares()?,
            };
            let secret = combine_shares(&shares)?;

            match render_secret(&secret) {
                RenderedSecret::Text(text) => println!("{}", &*text),
                RenderedSecret::Hex(hex) => {
                    eprintln!("Restored data is not valid UTF-8; printing it as hex");
                    println!("{}", &*hex);
                }
            }
        }
    }

    Ok(())
}
