use console::Style;
use wellgrid_core::error::WellgridError;
use wellgrid_core::pipeline::{Manifest, PanelReport, SlotSource};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
    error: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
            error: Style::new().red().bold(),
        }
    }
}

const RULE: &str = "\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}\u{2550}";

pub fn print_manifest_summary(manifest: &Manifest) {
    let s = Styles::new();
    let config = &manifest.config;

    println!();
    println!("  {}", s.title.apply_to("Wellgrid Calibration"));
    println!("  {}", s.title.apply_to(RULE));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Models"),
        s.value.apply_to(manifest.models.len())
    );
    match &manifest.output_dir {
        Some(dir) => println!(
            "  {:<14}{}",
            s.label.apply_to("Overlays"),
            s.path.apply_to(dir.display())
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Overlays"),
            s.disabled.apply_to("disabled")
        ),
    }
    println!();

    println!("  {}", s.header.apply_to("Detection"));
    println!(
        "    {:<14}{}",
        s.label.apply_to("Strategy"),
        s.method.apply_to(&config.extractor)
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Dedupe"),
        s.value.apply_to(format!("{} px", config.dedupe.tolerance))
    );
    println!();

    println!("  {}", s.header.apply_to("Grid"));
    println!(
        "    {:<14}{}",
        s.label.apply_to("Pool growth"),
        s.value.apply_to(format!("x{}", config.resolver.pool_growth_factor))
    );
    let band = &config.resolver.row_band;
    if band.enabled {
        println!(
            "    {:<14}{}",
            s.label.apply_to("Row band"),
            s.value.apply_to(format!(
                "max({} px, {:.0}% of spacing)",
                band.min_px,
                band.spacing_fraction * 100.0
            ))
        );
    } else {
        println!(
            "    {:<14}{}",
            s.label.apply_to("Row band"),
            s.disabled.apply_to("disabled")
        );
    }
    println!(
        "    {:<14}{}",
        s.label.apply_to("Too few"),
        s.method.apply_to(config.on_insufficient)
    );
    println!();
}

pub fn print_panel_report(report: &PanelReport) {
    let s = Styles::new();

    println!();
    println!(
        "  {} {}",
        s.header.apply_to(&report.id),
        s.label.apply_to(format!(
            "{}, {} raw / {} unique candidates",
            report.size, report.raw_candidates, report.unique_candidates
        ))
    );
    match &report.source {
        SlotSource::Detected { .. } => println!("    {}", s.method.apply_to(&report.source)),
        SlotSource::Fallback { .. } => println!("    {}", s.disabled.apply_to(&report.source)),
    }

    for (i, n) in report.normalized.iter().enumerate() {
        println!(
            "    slot_{}: cx={:.4} cy={:.4} sizePct={:.3}",
            i + 1,
            n.cx,
            n.cy,
            n.size_pct
        );
    }
    if let Some(median) = report.median_size_pct {
        println!(
            "    {:<14}{}",
            s.label.apply_to("median"),
            s.value.apply_to(format!("sizePct={median:.3}"))
        );
    }
    if let Some(path) = &report.overlay_path {
        println!(
            "    {:<14}{}",
            s.label.apply_to("overlay"),
            s.path.apply_to(path.display())
        );
    }
}

pub fn print_failure(id: &str, err: &WellgridError) {
    let s = Styles::new();
    println!();
    println!(
        "  {} {}",
        s.header.apply_to(id),
        s.error.apply_to(format!("failed: {err}"))
    );
}
