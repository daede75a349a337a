//! Configuration loading for scere.
//! Reads scere.toml from the current directory or the path in the
//! SCERE_CONFIG env var. Every field has a default so a missing file
//! yields a usable configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3002 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

/// Paths to the SQLite store and the static tables loaded at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_database")]
    pub database: PathBuf,
    #[serde(default = "default_segments")]
    pub segments: PathBuf,
    #[serde(default = "default_distances")]
    pub distances: PathBuf,
    #[serde(default = "default_go_terms")]
    pub go_terms: PathBuf,
    #[serde(default = "default_demo_genes")]
    pub demo_genes: PathBuf,
    #[serde(default = "default_demo_quantitative")]
    pub demo_quantitative: PathBuf,
}

fn default_database() -> PathBuf { "static/SCERE.db".into() }
fn default_segments() -> PathBuf { "static/segments.csv".into() }
fn default_distances() -> PathBuf { "static/3D_distances.csv".into() }
fn default_go_terms() -> PathBuf { "static/GO_terms.csv".into() }
fn default_demo_genes() -> PathBuf {
    "example_data/gene_list_example_UPC2_38_targets.csv".into()
}
fn default_demo_quantitative() -> PathBuf {
    "example_data/quantitative_variables_example.csv".into()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            segments: default_segments(),
            distances: default_distances(),
            go_terms: default_go_terms(),
            demo_genes: default_demo_genes(),
            demo_quantitative: default_demo_quantitative(),
        }
    }
}

/// Graphical parameters of the 2D genome layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Vertical space between chromosome lines in the 2D view.
    #[serde(default = "default_spacing")]
    pub chromosome_spacing: f64,
}

fn default_spacing() -> f64 { 6.0 }

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { chromosome_spacing: default_spacing() }
    }
}

impl Config {
    /// Load from the SCERE_CONFIG path, or ./scere.toml, falling back
    /// to defaults when neither exists.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var_os("SCERE_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("scere.toml"));
        if path.exists() {
            Self::from_path(&path)
        } else {
            Ok(Config::default())
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
