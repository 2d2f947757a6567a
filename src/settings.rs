//! User settings.
//!
//! Stored as JSON at `<config dir>/order-forms/settings.json`. Every field has
//! a default, so a missing or partial file is fine; an unreadable file falls
//! back to the defaults with a warning.

use crate::constants::{APP_DIR_NAME, SETTINGS_FILE_NAME};
use crate::export::BundleOptions;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Directory holding the persisted state (platform data dir when unset)
    pub storage_dir: Option<PathBuf>,
    /// Directory exported archives are written to (current dir when unset)
    pub export_dir: Option<PathBuf>,
    pub export: BundleOptions,
    /// `tracing` filter directive used when `RUST_LOG` is not set
    pub log_filter: Option<String>,
}

/// `<config dir>/order-forms/settings.json`
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME))
}

impl Settings {
    /// Load from the default location.
    pub fn load() -> Self {
        match default_settings_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load from `path`; missing or invalid files yield the defaults.
    pub fn load_from(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                warn!("Failed to read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };
        serde_json::from_str(&content).unwrap_or_else(|e| {
            warn!("Invalid settings {}: {}", path.display(), e);
            Self::default()
        })
    }
}
