use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use wellgrid_core::pipeline::{
    run_manifest, InsufficientPolicy, Manifest, PanelReport, PipelineStage, ProgressReporter,
};

use super::StrategyArg;
use crate::summary::{print_failure, print_manifest_summary, print_panel_report};

#[derive(Args)]
pub struct CalibrateArgs {
    /// Manifest file (TOML) listing the models to calibrate
    pub manifest: PathBuf,

    /// Directory for overlay images (overrides the manifest)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Candidate extraction strategy (overrides the manifest)
    #[arg(long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Fail models with too few candidates instead of using a fallback grid
    #[arg(long)]
    pub skip_insufficient: bool,

    /// Write all successful reports to this TOML file
    #[arg(long)]
    pub report: Option<PathBuf>,
}

struct BarReporter {
    bar: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_batch(&self, total_models: usize) {
        self.bar.set_length(total_models as u64);
    }

    fn stage(&self, id: &str, stage: PipelineStage) {
        self.bar.set_message(format!("{id}: {stage}"));
    }

    fn finish_model(&self, _id: &str, _ok: bool) {
        self.bar.inc(1);
    }
}

#[derive(Serialize)]
struct BatchReport<'a> {
    model: Vec<&'a PanelReport>,
}

pub fn run(args: &CalibrateArgs) -> Result<()> {
    let contents = std::fs::read_to_string(&args.manifest)
        .with_context(|| format!("Failed to read manifest {}", args.manifest.display()))?;
    let mut manifest: Manifest = toml::from_str(&contents).context("Invalid manifest")?;

    if let Some(dir) = &args.output_dir {
        manifest.output_dir = Some(dir.clone());
    }
    if let Some(strategy) = args.strategy {
        manifest.config.extractor = strategy.apply(manifest.config.extractor.clone());
    }
    if args.skip_insufficient {
        manifest.config.on_insufficient = InsufficientPolicy::Skip;
    }
    if manifest.models.is_empty() {
        bail!("Manifest {} lists no models", args.manifest.display());
    }

    print_manifest_summary(&manifest);

    let bar = ProgressBar::new(manifest.models.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("{msg:32} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let reporter = Arc::new(BarReporter { bar: bar.clone() });

    let outcomes = run_manifest(&manifest, reporter);
    bar.finish_with_message("Done");

    let mut reports = Vec::new();
    let mut failed = 0usize;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(report) => {
                print_panel_report(report);
                reports.push(report);
            }
            Err(e) => {
                print_failure(&outcome.id, e);
                failed += 1;
            }
        }
    }

    if let Some(path) = &args.report {
        let toml_str = toml::to_string_pretty(&BatchReport { model: reports })?;
        std::fs::write(path, toml_str)
            .with_context(|| format!("Failed to write report to {}", path.display()))?;
        println!("\nReport saved to {}", path.display());
    }

    if failed > 0 {
        bail!("{failed} of {} model(s) failed", outcomes.len());
    }
    Ok(())
}
