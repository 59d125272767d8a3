use wellgrid_core::detection::{ContourConfig, ExtractorConfig, GradientConfig, ThresholdMethod};
use wellgrid_core::error::WellgridError;
use wellgrid_core::frame::ImageSize;
use wellgrid_core::grid::{GridSpec, ResolverConfig, RowBandConfig};
use wellgrid_core::pipeline::{
    CalibrationConfig, InsufficientPolicy, Manifest, ModelEntry, PipelineStage, SlotSource,
};

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

#[test]
fn test_extractor_config_display() {
    assert_eq!(format!("{}", ExtractorConfig::default()), "Gradient (3 passes)");
    let contour = ExtractorConfig::Contour(ContourConfig {
        threshold: ThresholdMethod::Otsu,
        ..Default::default()
    });
    assert_eq!(format!("{}", contour), "Contour (Otsu)");
}

#[test]
fn test_threshold_method_display() {
    assert_eq!(format!("{}", ThresholdMethod::Fixed(0.5)), "Fixed 0.500");
    assert_eq!(format!("{}", ThresholdMethod::Otsu), "Otsu");
}

#[test]
fn test_grid_spec_and_size_display() {
    assert_eq!(format!("{}", GridSpec::new(5, 3).unwrap()), "5x3");
    assert_eq!(format!("{}", ImageSize::new(640, 400)), "640x400");
}

#[test]
fn test_slot_source_display() {
    assert_eq!(
        format!("{}", SlotSource::Detected { pool_size: 7 }),
        "Detected (pool 7)"
    );
    let fallback = SlotSource::Fallback {
        reason: "no luck".to_string(),
    };
    assert_eq!(format!("{}", fallback), "Fallback: no luck");
    assert!(fallback.is_fallback());
}

#[test]
fn test_pipeline_stage_display() {
    assert_eq!(format!("{}", PipelineStage::Fetching), "Fetching image");
    assert_eq!(format!("{}", PipelineStage::Rendering), "Rendering overlay");
}

#[test]
fn test_model_entry_display_and_overlay_name() {
    let entry = ModelEntry {
        id: "PKP-3500-SI".to_string(),
        source: "panel.png".to_string(),
        cols: 5,
        rows: 3,
    };
    assert_eq!(format!("{}", entry), "PKP-3500-SI (5x3)");
    assert_eq!(entry.overlay_file_name(), "pkp-3500-si-slots.png");
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

#[test]
fn test_calibration_defaults() {
    let config = CalibrationConfig::default();
    assert!(matches!(config.extractor, ExtractorConfig::Gradient(_)));
    assert_eq!(config.dedupe.tolerance, 6.0);
    assert_eq!(config.resolver.pool_growth_factor, 3);
    assert_eq!(config.resolver.kmeans.attempts, 16);
    assert_eq!(config.resolver.kmeans.seed, 42);
    assert_eq!(config.fallback.x_span, [0.11, 0.89]);
    assert_eq!(config.fallback.y_span, [0.18, 0.76]);
    assert_eq!(config.on_insufficient, InsufficientPolicy::Fallback);
    assert_eq!(config.fetch_timeout_secs, 30);
}

#[test]
fn test_gradient_default_passes() {
    let config = GradientConfig::default();
    assert_eq!(config.passes.len(), 3);
    assert_eq!(config.passes[0].dp, 1.2);
    assert_eq!(config.passes[2].max_radius, 90.0);
}

#[test]
fn test_grid_spec_rejects_zero() {
    assert!(matches!(
        GridSpec::new(0, 3),
        Err(WellgridError::InvalidGridSpec { cols: 0, rows: 3 })
    ));
    assert!(GridSpec::new(3, 0).is_err());
    assert_eq!(GridSpec::new(3, 2).unwrap().expected(), 6);
}

// ---------------------------------------------------------------------------
// Serde
// ---------------------------------------------------------------------------

#[test]
fn test_manifest_from_minimal_json() {
    let json = r#"{
        "model": [
            { "id": "PKP-2200-SI", "source": "a.png", "cols": 2, "rows": 2 }
        ]
    }"#;
    let manifest: Manifest = serde_json::from_str(json).unwrap();
    assert_eq!(manifest.models.len(), 1);
    assert!(manifest.output_dir.is_none());
    assert_eq!(manifest.config.resolver.pool_growth_factor, 3);
    assert_eq!(manifest.models[0].grid().unwrap().expected(), 4);
}

#[test]
fn test_extractor_strategy_tag() {
    let json = r#"{ "strategy": "contour", "threshold": "otsu", "min_radius": 15.0 }"#;
    let config: ExtractorConfig = serde_json::from_str(json).unwrap();
    match config {
        ExtractorConfig::Contour(c) => {
            assert_eq!(c.threshold, ThresholdMethod::Otsu);
            assert_eq!(c.min_radius, 15.0);
            assert_eq!(c.element_size, 5);
        }
        other => panic!("expected contour, got {other:?}"),
    }
}

#[test]
fn test_calibration_config_round_trip() {
    let config = CalibrationConfig {
        extractor: ExtractorConfig::Contour(ContourConfig::default()),
        resolver: ResolverConfig {
            row_band: RowBandConfig {
                enabled: false,
                ..Default::default()
            },
            ..Default::default()
        },
        on_insufficient: InsufficientPolicy::Skip,
        ..Default::default()
    };
    let json = serde_json::to_string(&config).unwrap();
    assert!(json.contains(r#""on_insufficient":"skip""#));

    let back: CalibrationConfig = serde_json::from_str(&json).unwrap();
    assert!(matches!(back.extractor, ExtractorConfig::Contour(_)));
    assert!(!back.resolver.row_band.enabled);
    assert_eq!(back.resolver.row_band.min_px, 28.0);
    assert_eq!(back.on_insufficient, InsufficientPolicy::Skip);
}

#[test]
fn test_slot_source_serializes_with_kind_tag() {
    let json = serde_json::to_value(SlotSource::Detected { pool_size: 6 }).unwrap();
    assert_eq!(json["kind"], "detected");
    assert_eq!(json["pool_size"], 6);
}
