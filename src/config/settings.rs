//! Application settings
//!
//! Settings are loaded once at startup and passed into the components that
//! need them; there is no shared mutable configuration state.

use crate::utils::ConfigError;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Certificate scan settings
#[derive(Debug, Clone, Deserialize)]
pub struct ScanSettings {
    /// Directory holding exported certificate files
    #[serde(default = "default_cert_dir")]
    pub cert_dir: PathBuf,
    /// File extension to match, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Worker pool size; 1 selects the sequential driver
    #[serde(default = "default_parallel")]
    pub parallel: usize,
}

fn default_cert_dir() -> PathBuf {
    PathBuf::from("certs")
}

fn default_extension() -> String {
    "cer".to_string()
}

fn default_parallel() -> usize {
    10
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            cert_dir: default_cert_dir(),
            extension: default_extension(),
            parallel: default_parallel(),
        }
    }
}

/// Report output settings
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    #[serde(default = "default_csv_path")]
    pub csv_path: PathBuf,
    #[serde(default = "default_html_path")]
    pub html_path: PathBuf,
}

fn default_csv_path() -> PathBuf {
    PathBuf::from("reports/certificates.csv")
}

fn default_html_path() -> PathBuf {
    PathBuf::from("reports/certificates.html")
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            csv_path: default_csv_path(),
            html_path: default_html_path(),
        }
    }
}

/// Email notification settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailSettings {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: Vec<String>,
}

fn default_smtp_port() -> u16 {
    25
}

/// Application settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub scan: ScanSettings,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub email: EmailSettings,
}

impl Settings {
    /// Load settings from the default config file, falling back to defaults
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_path = Path::new("config/certwatch.toml");
        if config_path.exists() {
            Self::load_from_file(config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
    }
}
