use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use wellgrid_core::pipeline::{CalibrationConfig, Manifest, ModelEntry};

#[derive(Args)]
pub struct ConfigArgs {
    /// Write the manifest to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

fn sample_model(id: &str, cols: usize, rows: usize) -> ModelEntry {
    ModelEntry {
        id: id.to_string(),
        source: format!("panels/{}.png", id.to_lowercase()),
        cols,
        rows,
    }
}

/// Print or save a full default manifest as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let manifest = Manifest {
        output_dir: Some(PathBuf::from("overlays")),
        config: CalibrationConfig::default(),
        models: vec![
            sample_model("PKP-2200-SI", 2, 2),
            sample_model("PKP-2300-SI", 3, 2),
            sample_model("PKP-2400-SI", 4, 2),
            sample_model("PKP-2500-SI", 5, 2),
            sample_model("PKP-2600-SI", 6, 2),
            sample_model("PKP-3500-SI", 5, 3),
        ],
    };
    let toml_str = toml::to_string_pretty(&manifest)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write manifest to {}", path.display()))?;
        println!("Default manifest saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
