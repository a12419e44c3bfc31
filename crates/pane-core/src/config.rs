//! Browser configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use pane_navigation::ZoomPolicy;

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Title of the browser window
    pub window_title: String,
    /// Loaded by the first tab and by tabs opened without a URL
    pub start_page_url: String,
    /// Directory offered by the save prompt
    pub download_dir: PathBuf,
    pub zoom: ZoomPolicy,
}

impl Config {
    pub fn new(download_dir: PathBuf) -> Self {
        Self {
            window_title: "Pane".to_string(),
            start_page_url: "https://www.google.com".to_string(),
            download_dir,
            zoom: ZoomPolicy::default(),
        }
    }

    /// Load a JSON config file; missing fields take their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;

        tracing::info!(path = %path.display(), "Loaded configuration");

        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.start_page_url.trim().is_empty() {
            return Err(CoreError::Config(
                "Start page URL cannot be empty".to_string(),
            ));
        }
        self.zoom.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        let download_dir = dirs::download_dir().unwrap_or_else(|| PathBuf::from("Downloads"));
        Self::new(download_dir)
    }
}
