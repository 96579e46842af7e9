//! Service configuration loaded from YAML.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use map_layers::RenderSettings;
use serde::{Deserialize, Serialize};
use station_ingest::{LoaderConfig, Source};
use tracing::{info, warn};

/// Top-level service configuration.
///
/// Rendering keys (`palette`, `fallback_color`, `map`, `legend`) sit at the
/// top level next to `source`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(flatten)]
    pub render: RenderSettings,
}

/// Where the station file lives and how to read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_path")]
    pub path: PathBuf,

    #[serde(flatten)]
    pub loader: LoaderConfig,
}

fn default_source_path() -> PathBuf {
    PathBuf::from("data/stations.csv")
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: default_source_path(),
            loader: LoaderConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file. A missing file yields defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            warn!(
                path = %path.display(),
                "Config file does not exist, using defaults"
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;

        info!(
            path = %path.display(),
            source = %config.source.path.display(),
            palette = config.render.palette.len(),
            "Loaded service config"
        );
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// The configured station source.
    pub fn station_source(&self) -> Source {
        Source::path(&self.source.path)
    }
}
