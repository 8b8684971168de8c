//! Export command.

use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::path::Path;

use dsforge_core::export::{
    build_export_plan, ExportFormat, ExportOptions, Exporter, OrganizationMethod, StubExporter,
};

use super::Project;
use crate::output;

#[derive(Args)]
pub struct ExportArgs {
    /// Print the export plan as JSON instead of exporting
    #[arg(long)]
    pub plan: bool,

    /// Grouping: by-component, by-category or alphabetical
    #[arg(long)]
    pub organize: Option<String>,

    /// Output shape: components, frames or pages
    #[arg(long)]
    pub format: Option<String>,

    /// Gap between frames, in pixels
    #[arg(long)]
    pub spacing: Option<f64>,

    /// Also lay out dark-mode frames
    #[arg(long)]
    pub dark_mode: bool,

    /// Only the first variant of each component
    #[arg(long)]
    pub no_variants: bool,

    /// Only the first state of each variant
    #[arg(long)]
    pub no_states: bool,

    /// Include the type icon on each frame
    #[arg(long)]
    pub icons: bool,
}

/// Config defaults with command-line flags applied on top.
fn export_options(base: &ExportOptions, args: &ExportArgs) -> Result<ExportOptions> {
    let mut options = base.clone();
    if let Some(raw) = args.organize.as_deref() {
        options.organization_method = OrganizationMethod::from_str(raw)
            .ok_or_else(|| anyhow!("Unknown organization method: {}", raw))?;
    }
    if let Some(raw) = args.format.as_deref() {
        options.export_format =
            ExportFormat::from_str(raw).ok_or_else(|| anyhow!("Unknown export format: {}", raw))?;
    }
    if let Some(spacing) = args.spacing {
        options.frame_spacing = spacing;
    }
    options.include_dark_mode |= args.dark_mode;
    options.include_icons |= args.icons;
    if args.no_variants {
        options.include_variants = false;
    }
    if args.no_states {
        options.include_states = false;
    }
    Ok(options)
}

pub async fn execute(args: ExportArgs, project_dir: &Path) -> Result<()> {
    let project = Project::open(project_dir)?;
    let options = export_options(&project.config.export, &args)?;
    let components = &project.session.store().components;

    if args.plan {
        let plan = build_export_plan(components, &options);
        println!("{}", serde_json::to_string_pretty(&plan)?);
        return Ok(());
    }

    println!(
        "{} Exporting {} component(s)...",
        "→".blue().bold(),
        components.len()
    );
    output::print_plan_summary(&build_export_plan(components, &options));

    let exporter = StubExporter::new(project.config.export_delay());
    let report = exporter.export(components, &options).await?;

    println!();
    output::print_export_report(&report);
    Ok(())
}
