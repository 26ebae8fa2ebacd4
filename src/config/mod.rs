use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Race metadata CSV read by `generate` and `fetch-images`
    pub csv_path: String,
    pub output_path: String,
    /// Best-effort diagnostic dump of the first parsed rows
    pub debug_path: String,
    pub image_dir: String,
    pub fetch_delay_ms: u64,
    pub fetch_timeout_secs: u64,
    /// Reference ordering used by `reorder`
    pub sorted_path: String,
    pub sorted_output_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_path: "RaceComplete.csv".to_string(),
            output_path: "races.js".to_string(),
            debug_path: "races_debug.json".to_string(),
            image_dir: "race_images".to_string(),
            fetch_delay_ms: 500,
            fetch_timeout_secs: 30,
            sorted_path: "RaceSorted.csv".to_string(),
            sorted_output_path: "RaceComplete_sorted.csv".to_string(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("racegen")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".racegen")
        }
    }

    /// Return the full path of the default config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("racegen.conf")
    }

    /// Load configuration from `path`, or return defaults if the file is absent
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("failed to read {}: {}", path.display(), e))
        })?;

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("failed to parse {}: {}", path.display(), e)))
    }

    /// Write the default configuration to `path`, creating parent folders.
    pub fn write_default(path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&Self::default())?;
        fs::write(path, yaml)?;
        Ok(())
    }
}
