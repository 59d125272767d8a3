use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use wellgrid_core::consts::{DEFAULT_DEDUP_TOLERANCE, DEFAULT_FETCH_TIMEOUT_SECS};
use wellgrid_core::detection::{create_extractor, dedupe, DedupeConfig, ExtractorConfig};
use wellgrid_core::io::{decode, fetch_bytes};

use super::StrategyArg;

#[derive(Args)]
pub struct DetectArgs {
    /// Image path or http(s) URL
    pub source: String,

    /// Candidate extraction strategy
    #[arg(long, value_enum, default_value = "gradient")]
    pub strategy: StrategyArg,

    /// Duplicate tolerance in pixels
    #[arg(long, default_value_t = DEFAULT_DEDUP_TOLERANCE)]
    pub tolerance: f64,

    /// Print raw candidates without deduplication
    #[arg(long)]
    pub raw: bool,
}

pub fn run(args: &DetectArgs) -> Result<()> {
    let bytes = fetch_bytes(&args.source, Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS))
        .with_context(|| format!("Failed to read {}", args.source))?;
    let panel = decode(&bytes).with_context(|| format!("Failed to decode {}", args.source))?;

    let extractor = create_extractor(&args.strategy.apply(ExtractorConfig::default()));
    let raw = extractor.extract(&panel);
    let candidates = if args.raw {
        raw.clone()
    } else {
        dedupe(
            &raw,
            &DedupeConfig {
                tolerance: args.tolerance,
                ..Default::default()
            },
        )
    };

    println!("Image:      {}", args.source);
    println!("  Size:     {}", panel.size());
    println!("  Strategy: {}", extractor.name());
    println!("  Raw:      {}", raw.len());
    println!("  Unique:   {}", candidates.len());
    println!();
    println!("  {:>4}  {:>9}  {:>9}  {:>8}  {:>6}", "#", "x", "y", "radius", "conf");
    for (i, c) in candidates.iter().enumerate() {
        println!(
            "  {:>4}  {:>9.2}  {:>9.2}  {:>8.2}  {:>6.3}",
            i + 1,
            c.x,
            c.y,
            c.radius,
            c.confidence
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Cli {
        #[command(flatten)]
        args: DetectArgs,
    }

    #[test]
    fn test_tolerance_defaults_to_dedupe_default() {
        let cli = Cli::parse_from(["wellgrid", "panel.png"]);
        assert_eq!(cli.args.tolerance, DedupeConfig::default().tolerance);
        assert!(!cli.args.raw);
    }
}
