//! Export options and the export plan document.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::style::StyleRecord;

/// How components are grouped into pages/sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OrganizationMethod {
    ByComponent,
    ByCategory,
    Alphabetical,
}

impl OrganizationMethod {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "by-component" | "component" => Some(Self::ByComponent),
            "by-category" | "category" => Some(Self::ByCategory),
            "alphabetical" => Some(Self::Alphabetical),
            _ => None,
        }
    }
}

/// What the export produces on the design tool side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Components,
    Frames,
    Pages,
}

impl ExportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "components" => Some(Self::Components),
            "frames" => Some(Self::Frames),
            "pages" => Some(Self::Pages),
            _ => None,
        }
    }
}

/// Export configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExportOptions {
    pub include_variants: bool,
    pub include_states: bool,
    pub organization_method: OrganizationMethod,
    /// Gap between frames, in pixels.
    pub frame_spacing: f64,
    pub include_dark_mode: bool,
    pub include_documentation: bool,
    pub include_icons: bool,
    pub export_format: ExportFormat,
    /// Cosmetic: caption every frame with "<variant> / <state>".
    pub show_labels: bool,
    /// Cosmetic: round the corners of frame backgrounds.
    pub round_frame_corners: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            include_variants: true,
            include_states: true,
            organization_method: OrganizationMethod::ByComponent,
            frame_spacing: 40.0,
            include_dark_mode: false,
            include_documentation: true,
            include_icons: false,
            export_format: ExportFormat::Components,
            show_labels: true,
            round_frame_corners: true,
        }
    }
}

/// Light or dark rendition of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameTheme {
    Light,
    Dark,
}

/// One rendered (component, variant, state) on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportFrame {
    pub name: String,
    pub component_id: String,
    pub variant_id: String,
    pub state_id: String,
    pub theme: FrameTheme,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub corner_radius: f64,
    pub label: Option<String>,
    pub icon: Option<String>,
    pub style: StyleRecord,
}

/// A titled group of frames on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSection {
    pub title: String,
    pub documentation: Vec<String>,
    pub frames: Vec<ExportFrame>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportPage {
    pub name: String,
    pub sections: Vec<ExportSection>,
}

/// Everything an exporter would send to the design tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportPlan {
    pub format: ExportFormat,
    pub pages: Vec<ExportPage>,
}

impl ExportPlan {
    pub fn frame_count(&self) -> usize {
        self.pages
            .iter()
            .flat_map(|p| &p.sections)
            .map(|s| s.frames.len())
            .sum()
    }

    pub fn frames(&self) -> impl Iterator<Item = &ExportFrame> {
        self.pages
            .iter()
            .flat_map(|p| &p.sections)
            .flat_map(|s| &s.frames)
    }
}

/// Summary of a finished export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportReport {
    pub components: usize,
    pub pages: usize,
    pub frames: usize,
    pub finished_at: DateTime<Utc>,
}
