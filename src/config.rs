use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::model::ReferenceLocation;

pub const CONFIG_FILE: &str = ".salat.toml";

/// Configuration for the salat prayer window tool
#[derive(Debug, Deserialize, JsonSchema)]
#[serde(default)]
#[schemars(deny_unknown_fields, title = "salat Configuration")]
pub struct Config {
    /// Default schedule file (JSON or TOML), relative to this config file
    pub schedule: Option<PathBuf>,
    /// Name of the selected reference location
    pub location: Option<String>,
    /// Show times on a 12-hour clock
    pub twelve_hour: bool,
    /// Reference locations used for nearest-location lookup
    pub locations: Vec<ReferenceLocation>,
    /// Directory of the file this config was read from
    #[serde(skip)]
    #[schemars(skip)]
    base_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schedule: None,
            location: None,
            twelve_hour: false,
            locations: default_locations(),
            base_dir: None,
        }
    }
}

impl Config {
    /// Load config from .salat.toml searching up from the given directory,
    /// then from the user config directory.
    pub fn load(start_dir: &Path) -> Result<Self> {
        match find_config_file(start_dir) {
            Some(path) => Self::from_file(&path),
            None => Ok(Config::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Configured schedule path, resolved against the config file's directory.
    pub fn schedule_path(&self) -> Option<PathBuf> {
        let path = self.schedule.as_ref()?;
        match &self.base_dir {
            Some(dir) if path.is_relative() => Some(dir.join(path)),
            _ => Some(path.clone()),
        }
    }

    /// The catalog entry named by `location`, matched case-insensitively.
    pub fn selected_location(&self) -> Option<&ReferenceLocation> {
        let name = self.location.as_deref()?;
        self.locations
            .iter()
            .find(|l| l.name.eq_ignore_ascii_case(name))
    }
}

/// Search for .salat.toml from start_dir upward, falling back to the user config.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut dir = start_dir.to_path_buf();
    loop {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !dir.pop() {
            break;
        }
    }
    user_config_file()
}

fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|d| d.join("salat").join("config.toml"))
        .filter(|p| p.is_file())
}

/// Divisional districts of Bangladesh.
pub fn default_locations() -> Vec<ReferenceLocation> {
    [
        ("Dhaka", 23.8103, 90.4125),
        ("Chittagong", 22.3569, 91.7832),
        ("Sylhet", 24.8949, 91.8687),
        ("Rajshahi", 24.3745, 88.6042),
        ("Khulna", 22.8456, 89.5403),
        ("Barisal", 22.7010, 90.3535),
        ("Rangpur", 25.7439, 89.2752),
        ("Mymensingh", 24.7471, 90.4203),
    ]
    .into_iter()
    .map(|(name, latitude, longitude)| ReferenceLocation {
        name: name.to_string(),
        latitude,
        longitude,
    })
    .collect()
}
