use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::source::CatalogSource;

pub const DEFAULT_SETTINGS_FILE: &str = "catalog.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: String,
    pub title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: "data/course_data.json".into(),
            title: "RDS2.2".into(),
        }
    }
}

impl Settings {
    pub fn catalog_source(&self) -> CatalogSource {
        CatalogSource::parse(&self.source)
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings file: {0}")]
    Toml(#[from] toml::de::Error),
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    source: Option<String>,
    title: Option<String>,
}

/// Defaults, then the settings file (if readable), then environment.
pub fn load_settings(settings_file: Option<&Path>) -> Settings {
    load_settings_with(settings_file, |name| std::env::var(name).ok())
}

/// Same as [`load_settings`] with an explicit environment lookup.
pub fn load_settings_with(
    settings_file: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Settings {
    let mut settings = Settings::default();
    let path = settings_file.unwrap_or_else(|| Path::new(DEFAULT_SETTINGS_FILE));

    match fs::read_to_string(path) {
        Ok(raw) => {
            if let Err(err) = apply_file_overrides(&mut settings, &raw) {
                warn!(path = %path.display(), error = %err, "ignoring settings file");
            }
        }
        Err(err) if settings_file.is_some() => {
            warn!(path = %path.display(), error = %err, "settings file unreadable");
        }
        Err(_) => debug!(path = %path.display(), "no settings file"),
    }

    apply_env_overrides(&mut settings, lookup);
    settings
}

pub fn apply_file_overrides(settings: &mut Settings, raw: &str) -> Result<(), SettingsError> {
    let file_cfg: FileSettings = toml::from_str(raw)?;
    if let Some(v) = file_cfg.source {
        settings.source = v;
    }
    if let Some(v) = file_cfg.title {
        settings.title = v;
    }
    Ok(())
}

/// `APP__*` wins over the plain `CATALOG_*` name when both are set.
pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(v) = non_empty("CATALOG_SOURCE") {
        settings.source = v;
    }
    if let Some(v) = non_empty("APP__SOURCE") {
        settings.source = v;
    }

    if let Some(v) = non_empty("CATALOG_TITLE") {
        settings.title = v;
    }
    if let Some(v) = non_empty("APP__TITLE") {
        settings.title = v;
    }
}
