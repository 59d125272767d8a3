use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use rayon::prelude::*;
use tracing::{info, warn};

use crate::detection::{create_extractor, dedupe};
use crate::error::{Result, WellgridError};
use crate::frame::PanelImage;
use crate::grid::{fallback_grid, median_size_pct, normalize_all, resolve, GridSpec};
use crate::io::{decode, draw_overlay, fetch_bytes, persist};

use super::config::{CalibrationConfig, InsufficientPolicy, Manifest, ModelEntry};
use super::types::{ModelOutcome, NoOpReporter, PanelReport, PipelineStage, ProgressReporter, SlotSource};

/// Extract, deduplicate and resolve one panel into a full grid of slots.
///
/// A `GridNotResolvable` failure always falls back to a synthesized grid; an
/// `InsufficientCandidates` failure falls back or is returned depending on
/// `config.on_insufficient`. The fallback reason is kept in the report.
pub fn calibrate_panel(
    id: &str,
    panel: &PanelImage,
    spec: GridSpec,
    config: &CalibrationConfig,
) -> Result<PanelReport> {
    let size = panel.size();
    let extractor = create_extractor(&config.extractor);
    let raw = extractor.extract(panel);
    let candidates = dedupe(&raw, &config.dedupe);
    info!(
        id,
        strategy = extractor.name(),
        raw = raw.len(),
        unique = candidates.len(),
        "Candidates extracted"
    );

    let (slots, source, column_centers, row_centers) =
        match resolve(&candidates, spec, &config.resolver) {
            Ok(grid) => (
                grid.slots,
                SlotSource::Detected {
                    pool_size: grid.pool_size,
                },
                grid.column_centers,
                grid.row_centers,
            ),
            Err(e @ WellgridError::InsufficientCandidates { .. })
                if config.on_insufficient == InsufficientPolicy::Skip =>
            {
                warn!(id, error = %e, "Skipping model");
                return Err(e);
            }
            Err(
                e @ (WellgridError::InsufficientCandidates { .. }
                | WellgridError::GridNotResolvable { .. }),
            ) => {
                warn!(id, error = %e, "Using fallback grid");
                (
                    fallback_grid(size, spec, &config.fallback),
                    SlotSource::Fallback {
                        reason: e.to_string(),
                    },
                    Vec::new(),
                    Vec::new(),
                )
            }
            Err(e) => return Err(e),
        };

    let normalized = normalize_all(&slots, size);
    let median = median_size_pct(&slots, size.width);

    Ok(PanelReport {
        id: id.to_string(),
        size,
        raw_candidates: raw.len(),
        unique_candidates: candidates.len(),
        source,
        column_centers,
        row_centers,
        slots,
        normalized,
        median_size_pct: median,
        overlay_path: None,
        candidates,
    })
}

/// Fetch, decode and calibrate one manifest entry. With `output_dir`, the
/// overlay is written to `<output_dir>/<id lowercased>-slots.png`.
pub fn run_model(
    entry: &ModelEntry,
    config: &CalibrationConfig,
    output_dir: Option<&Path>,
) -> Result<PanelReport> {
    run_model_reported(entry, config, output_dir, &NoOpReporter)
}

fn run_model_reported(
    entry: &ModelEntry,
    config: &CalibrationConfig,
    output_dir: Option<&Path>,
    reporter: &dyn ProgressReporter,
) -> Result<PanelReport> {
    let spec = entry.grid()?;

    reporter.stage(&entry.id, PipelineStage::Fetching);
    let bytes = fetch_bytes(&entry.source, Duration::from_secs(config.fetch_timeout_secs))?;

    reporter.stage(&entry.id, PipelineStage::Decoding);
    let panel = decode(&bytes)?;
    info!(id = %entry.id, size = %panel.size(), grid = %spec, "Panel decoded");

    reporter.stage(&entry.id, PipelineStage::Calibrating);
    let mut report = calibrate_panel(&entry.id, &panel, spec, config)?;

    if let Some(dir) = output_dir {
        reporter.stage(&entry.id, PipelineStage::Rendering);
        let path = dir.join(entry.overlay_file_name());
        persist(&draw_overlay(&panel, &report.slots), &path)?;
        info!(id = %entry.id, path = %path.display(), "Overlay written");
        report.overlay_path = Some(path);
    }

    Ok(report)
}

/// Calibrate every model in the manifest in parallel.
///
/// Outcomes come back in manifest order; a failing model never stops the
/// others.
pub fn run_manifest(manifest: &Manifest, reporter: Arc<dyn ProgressReporter>) -> Vec<ModelOutcome> {
    reporter.begin_batch(manifest.models.len());
    let output_dir = manifest.output_dir.as_deref();

    manifest
        .models
        .par_iter()
        .map(|entry| {
            reporter.begin_model(&entry.id);
            let result = run_model_reported(entry, &manifest.config, output_dir, reporter.as_ref());
            if let Err(e) = &result {
                warn!(id = %entry.id, error = %e, "Model failed");
            }
            reporter.finish_model(&entry.id, result.is_ok());
            ModelOutcome {
                id: entry.id.clone(),
                result,
            }
        })
        .collect()
}
