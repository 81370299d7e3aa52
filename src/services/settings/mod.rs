// Settings service module
// Loads view settings from a TOML file

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::ViewSettings;

pub struct SettingsService;

impl SettingsService {
    /// Load and validate view settings from a TOML file.
    ///
    /// Missing keys fall back to their defaults; invalid values fail the
    /// load rather than being clamped.
    pub fn load(path: &Path) -> Result<ViewSettings> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings: ViewSettings = toml::from_str(&raw)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))?;
        settings
            .validate()
            .map_err(|e| anyhow!(e))
            .with_context(|| format!("Invalid settings in {}", path.display()))?;
        Ok(settings)
    }

    /// Load settings from the platform config directory, falling back to
    /// defaults when no settings file exists.
    pub fn load_default() -> Result<ViewSettings> {
        if let Some(dirs) = ProjectDirs::from("", "", "day-calendar") {
            let path = dirs.config_dir().join("settings.toml");
            if path.exists() {
                log::info!("Loading settings from {}", path.display());
                return Self::load(&path);
            }
        }
        log::debug!("No settings file found, using defaults");
        Ok(ViewSettings::default())
    }
}
