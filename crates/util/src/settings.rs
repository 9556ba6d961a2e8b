//! Settings file for the swatchgrid front ends.
//!
//! A small JSON document describing the palette to offer and how many
//! swatches each column holds:
//!
//! ```json
//! { "column_capacity": 3, "colors": ["red", "#00ff00", "rgb(0, 0, 255)"] }
//! ```
//!
//! The file lives in the standard configuration directory
//! (`~/.config/swatchgrid/settings.json` on most platforms) unless
//! `SWATCHGRID_SETTINGS_PATH` points elsewhere. Both keys are optional; a
//! missing file means built-in defaults. The store is read-only.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirs_next::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use swatchgrid_types::{ColumnCapacity, DEFAULT_PALETTE, PaletteError, Rgb};
use thiserror::Error;
use tracing::{debug, warn};

use crate::color_parsing::{ColorParseError, parse_color};

/// Environment variable allowing callers to override the settings file path.
pub const SETTINGS_PATH_ENV: &str = "SWATCHGRID_SETTINGS_PATH";

/// Default filename for the JSON payload.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Error surfaced when settings cannot be read or hold unusable values.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// I/O failure other than a missing file.
    #[error("settings I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("settings color #{index} is invalid: {source}")]
    Color {
        index: usize,
        #[source]
        source: ColorParseError,
    },
    #[error("settings column_capacity is invalid: {0}")]
    Capacity(#[from] PaletteError),
}

/// Raw values as stored on disk.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsPayload {
    pub column_capacity: Option<usize>,
    pub colors: Option<Vec<String>>,
}

/// Loaded settings plus the path they came from.
#[derive(Debug, Default, Clone)]
pub struct Settings {
    path: PathBuf,
    payload: SettingsPayload,
}

impl Settings {
    /// Loads from [`default_settings_path`].
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(default_settings_path())
    }

    /// Loads from an explicit path. A missing file yields defaults; a file
    /// that is not valid JSON is logged and treated as empty.
    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let payload = load_payload(&path)?;
        Ok(Self { path, payload })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn payload(&self) -> &SettingsPayload {
        &self.payload
    }

    /// Configured column capacity, or the built-in default.
    pub fn column_capacity(&self) -> Result<ColumnCapacity, SettingsError> {
        match self.payload.column_capacity {
            Some(raw) => Ok(ColumnCapacity::new(raw)?),
            None => Ok(ColumnCapacity::default()),
        }
    }

    /// Configured palette, or the built-in default palette.
    pub fn colors(&self) -> Result<Vec<Rgb>, SettingsError> {
        let Some(raw) = self.payload.colors.as_ref() else {
            return Ok(DEFAULT_PALETTE.to_vec());
        };
        raw.iter()
            .enumerate()
            .map(|(index, value)| parse_color(value).map_err(|source| SettingsError::Color { index, source }))
            .collect()
    }
}

/// Resolves the settings path, honoring [`SETTINGS_PATH_ENV`].
pub fn default_settings_path() -> PathBuf {
    if let Ok(path) = env::var(SETTINGS_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return expand_home(trimmed);
        }
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("swatchgrid")
        .join(SETTINGS_FILE_NAME)
}

fn expand_home(path: &str) -> PathBuf {
    let home = || home_dir().unwrap_or_else(|| PathBuf::from("~"));
    match path {
        "~" => home(),
        _ => match path.strip_prefix("~/").or_else(|| path.strip_prefix("~\\")) {
            Some(rest) => home().join(rest),
            None => PathBuf::from(path),
        },
    }
}

fn load_payload(path: &Path) -> Result<SettingsPayload, SettingsError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(payload) => {
                debug!(path = %path.display(), "loaded settings");
                Ok(payload)
            }
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse settings file; using defaults"
                );
                Ok(SettingsPayload::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(SettingsPayload::default()),
        Err(source) => Err(SettingsError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}
