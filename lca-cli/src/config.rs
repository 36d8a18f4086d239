//! Configuration file support for the report CLI.
//!
//! Loads optional `lca-report.toml` from the working directory (or the path
//! given with `--config`). Command-line flags override file values.

use std::path::{Path, PathBuf};

use lca_report::data::DIAGRAM_FILE;
use lca_report::{AssetStore, ChartAssets, Layout, ECHARTS_CDN};
use serde::Deserialize;
use tracing::{debug, warn};

/// Default config file name.
pub const CONFIG_FILE: &str = "lca-report.toml";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8501;

/// Root configuration structure
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub report: ReportSettings,
    pub server: ServerSettings,
}

/// What to render and where the diagram lives
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Navigation layout: "sidebar" or "tabs"
    pub layout: Layout,
    /// Directory holding the system boundary diagram
    pub asset_dir: PathBuf,
    /// Diagram file name
    pub diagram: String,
    /// Path or URL of the ECharts bundle; empty disables interactive charts
    pub echarts_path: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            layout: Layout::Sidebar,
            asset_dir: PathBuf::from("."),
            diagram: DIAGRAM_FILE.into(),
            echarts_path: ECHARTS_CDN.into(),
        }
    }
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub bind: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".into(),
            port: DEFAULT_PORT,
        }
    }
}

impl ReportConfig {
    /// Load config from `lca-report.toml` in the given directory.
    /// Returns default config if file doesn't exist or is invalid.
    pub fn load(dir: &Path) -> Self {
        Self::load_from_path(&dir.join(CONFIG_FILE))
    }

    /// Load config from a specific path.
    pub fn load_from_path(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Failed to parse {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Asset store for the configured diagram, referenced under `url_prefix`.
    pub fn asset_store(&self, url_prefix: &str) -> AssetStore {
        AssetStore::new(&self.report.asset_dir)
            .with_diagram(self.report.diagram.clone())
            .with_url_prefix(url_prefix)
    }

    /// Chart bundle location.
    pub fn chart_assets(&self) -> ChartAssets {
        ChartAssets {
            echarts_path: self.report.echarts_path.clone(),
        }
    }

    /// `bind:port` listen address.
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.bind, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = ReportConfig::default();
        assert_eq!(config.report.layout, Layout::Sidebar);
        assert_eq!(config.report.diagram, "picture1.png");
        assert_eq!(config.report.asset_dir, PathBuf::from("."));
        assert_eq!(config.report.echarts_path, ECHARTS_CDN);
        assert_eq!(config.listen_addr(), "127.0.0.1:8501");
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("temp dir");
        let config = ReportConfig::load(temp.path());
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_load_valid_config() {
        let temp = TempDir::new().expect("temp dir");
        let config_path = temp.path().join(CONFIG_FILE);
        let mut file = std::fs::File::create(&config_path).expect("create config");
        writeln!(
            file,
            r#"
[report]
layout = "tabs"
asset_dir = "static"
diagram = "boundary.png"
echarts_path = ""

[server]
bind = "0.0.0.0"
port = 9000
"#
        )
        .expect("write config");

        let config = ReportConfig::load(temp.path());
        assert_eq!(config.report.layout, Layout::Tabs);
        assert_eq!(config.report.asset_dir, PathBuf::from("static"));
        assert_eq!(config.report.diagram, "boundary.png");
        assert!(config.chart_assets().echarts_path.is_empty());
        assert_eq!(config.listen_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join(CONFIG_FILE), "[server]\nport = 8080\n")
            .expect("write config");

        let config = ReportConfig::load(temp.path());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.bind, "127.0.0.1");
        assert_eq!(config.report, ReportSettings::default());
    }

    #[test]
    fn test_invalid_config_returns_default() {
        let temp = TempDir::new().expect("temp dir");
        std::fs::write(temp.path().join(CONFIG_FILE), "[report]\nlayout = \"grid\"\n")
            .expect("write config");

        let config = ReportConfig::load(temp.path());
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_asset_store_uses_settings() {
        let mut config = ReportConfig::default();
        config.report.asset_dir = PathBuf::from("docs");
        config.report.diagram = "flow.svg".into();
        let store = config.asset_store("/assets/");
        assert_eq!(store.diagram_path(), PathBuf::from("docs").join("flow.svg"));
        assert_eq!(store.url_prefix, "/assets/");
    }
}
