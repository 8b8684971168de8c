//! Project configuration (`.dsforge/config.toml`).

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DsError, DsResult};
use crate::export::ExportOptions;

/// Directory holding DSForge data inside a project.
pub const DATA_DIR: &str = ".dsforge";
pub const CONFIG_FILE: &str = "config.toml";
pub const SESSION_FILE: &str = "session.json";

/// Environment variable overriding `export_delay_ms`.
pub const EXPORT_DELAY_ENV: &str = "DSFORGE_EXPORT_DELAY_MS";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DsConfig {
    /// Undo steps kept in memory. 0 disables undo.
    pub history_limit: usize,
    /// Delay of the stub exporter.
    pub export_delay_ms: u64,
    /// Defaults for `dsforge export`.
    pub export: ExportOptions,
}

impl Default for DsConfig {
    fn default() -> Self {
        Self {
            history_limit: 50,
            export_delay_ms: 1500,
            export: ExportOptions::default(),
        }
    }
}

impl DsConfig {
    /// Parse a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> DsResult<Self> {
        toml::from_str(s).map_err(|e| DsError::Config(e.to_string()))
    }

    /// Load from a file; a missing file yields the defaults. Environment
    /// overrides are applied on top.
    pub fn load(path: &Path) -> DsResult<Self> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            Self::from_toml_str(&raw)?
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Self::default()
        };
        config.apply_env()?;
        Ok(config)
    }

    /// Load `<project>/.dsforge/config.toml`.
    pub fn load_for_project(project_dir: &Path) -> DsResult<Self> {
        Self::load(&config_path(project_dir))
    }

    pub fn to_toml_string(&self) -> DsResult<String> {
        toml::to_string_pretty(self).map_err(|e| DsError::Config(e.to_string()))
    }

    pub fn export_delay(&self) -> Duration {
        Duration::from_millis(self.export_delay_ms)
    }

    fn apply_env(&mut self) -> DsResult<()> {
        if let Ok(raw) = std::env::var(EXPORT_DELAY_ENV) {
            self.export_delay_ms = raw.trim().parse().map_err(|_| {
                DsError::Config(format!("{} must be an integer, got '{}'", EXPORT_DELAY_ENV, raw))
            })?;
            debug!(export_delay_ms = self.export_delay_ms, "Export delay overridden from environment");
        }
        Ok(())
    }
}

pub fn data_dir(project_dir: &Path) -> PathBuf {
    project_dir.join(DATA_DIR)
}

pub fn config_path(project_dir: &Path) -> PathBuf {
    data_dir(project_dir).join(CONFIG_FILE)
}

pub fn session_path(project_dir: &Path) -> PathBuf {
    data_dir(project_dir).join(SESSION_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::{ExportFormat, OrganizationMethod};

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = DsConfig::from_toml_str(
            r#"
            history_limit = 5

            [export]
            organizationMethod = "by-category"
            exportFormat = "pages"
            frameSpacing = 24.0
            "#,
        )
        .unwrap();

        assert_eq!(config.history_limit, 5);
        assert_eq!(config.export_delay_ms, 1500);
        assert_eq!(config.export.organization_method, OrganizationMethod::ByCategory);
        assert_eq!(config.export.export_format, ExportFormat::Pages);
        assert_eq!(config.export.frame_spacing, 24.0);
        assert!(config.export.include_variants);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = DsConfig::from_toml_str("history_limit = \"many\"").unwrap_err();
        assert!(matches!(err, DsError::Config(_)));
    }

    #[test]
    fn test_round_trip() {
        let config = DsConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(DsConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_paths() {
        let dir = Path::new("/tmp/project");
        assert_eq!(config_path(dir), PathBuf::from("/tmp/project/.dsforge/config.toml"));
        assert_eq!(session_path(dir), PathBuf::from("/tmp/project/.dsforge/session.json"));
    }
}
