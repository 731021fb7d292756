use std::collections::HashSet;
use std::fs;
use std::path::Path;

use tracing::debug;

use super::{default_settings_path, Settings};
use crate::errors::AppError;

/// Parse settings from TOML text. `origin` is only used in error messages.
///
/// Seed friends must have distinct ids.
pub fn parse_settings(text: &str, origin: &Path) -> Result<Settings, AppError> {
    let settings: Settings = toml::from_str(text).map_err(|source| AppError::SettingsParse {
        path: origin.to_path_buf(),
        source,
    })?;
    let mut seen = HashSet::new();
    if let Some(dup) = settings.friends.iter().find(|f| !seen.insert(&f.id)) {
        return Err(AppError::DuplicateFriendId {
            path: origin.to_path_buf(),
            id: dup.id.clone(),
        });
    }
    Ok(settings)
}

/// Load settings.
///
/// An explicit `path` must exist. Without one the default location is
/// tried and a missing file yields `Settings::default()`.
pub fn load_settings(path: Option<&Path>) -> Result<Settings, AppError> {
    if let Some(p) = path {
        return read(p);
    }
    match default_settings_path() {
        Some(p) if p.exists() => read(&p),
        _ => {
            debug!("no settings file, using defaults");
            Ok(Settings::default())
        }
    }
}

fn read(path: &Path) -> Result<Settings, AppError> {
    let text = fs::read_to_string(path).map_err(|source| AppError::SettingsRead {
        path: path.to_path_buf(),
        source,
    })?;
    let settings = parse_settings(&text, path)?;
    debug!(path = %path.display(), friends = settings.friends.len(), "settings loaded");
    Ok(settings)
}
