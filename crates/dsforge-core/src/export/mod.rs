//! Export of the design system to an external design tool.
//!
//! The only shipped exporter is a stub: it lays out the plan, waits a fixed
//! delay and reports success without calling anything external.

pub mod model;
pub mod plan;

pub use model::{
    ExportFormat, ExportFrame, ExportOptions, ExportPage, ExportPlan, ExportReport, ExportSection,
    FrameTheme, OrganizationMethod,
};
pub use plan::build_export_plan;

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};

use crate::component::model::DesignSystemComponent;
use crate::error::{DsError, DsResult};

/// Default delay of the stub exporter.
pub const DEFAULT_EXPORT_DELAY: Duration = Duration::from_millis(1500);

/// Sends a design system somewhere.
///
/// Dropping the returned future abandons the export; callers that must not
/// block (e.g. a closing dialog) can simply stop polling it.
#[async_trait]
pub trait Exporter: Send + Sync {
    async fn export(
        &self,
        components: &[DesignSystemComponent],
        options: &ExportOptions,
    ) -> DsResult<ExportReport>;
}

/// Exporter that always succeeds after `delay`.
#[derive(Debug, Clone)]
pub struct StubExporter {
    delay: Duration,
}

impl StubExporter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for StubExporter {
    fn default() -> Self {
        Self::new(DEFAULT_EXPORT_DELAY)
    }
}

#[async_trait]
impl Exporter for StubExporter {
    async fn export(
        &self,
        components: &[DesignSystemComponent],
        options: &ExportOptions,
    ) -> DsResult<ExportReport> {
        if components.is_empty() {
            return Err(DsError::validation("nothing to export: no components"));
        }
        if !options.frame_spacing.is_finite() || options.frame_spacing < 0.0 {
            return Err(DsError::Export(format!(
                "frame spacing must be a non-negative number, got {}",
                options.frame_spacing
            )));
        }

        let plan = build_export_plan(components, options);
        debug!(
            pages = plan.pages.len(),
            frames = plan.frame_count(),
            delay_ms = self.delay.as_millis() as u64,
            "Export plan ready, simulating upload"
        );

        tokio::time::sleep(self.delay).await;

        let report = ExportReport {
            components: components.len(),
            pages: plan.pages.len(),
            frames: plan.frame_count(),
            finished_at: Utc::now(),
        };
        info!(
            components = report.components,
            frames = report.frames,
            "Export finished"
        );
        Ok(report)
    }
}
