// SPDX-License-Identifier: MPL-2.0
//! User preferences and default-locale resolution.
//!
//! Preferences live in a `settings.toml` file inside the application's base
//! directory, next to the `lang/` override directory.
//!
//! # Examples
//!
//! ```no_run
//! use lingua_lens::settings;
//!
//! let mut settings = settings::load().unwrap_or_default();
//! settings.language = Some("de-DE".to_string());
//! settings::save(&settings).expect("failed to save settings");
//! ```

use crate::error::Result;
use crate::locale::parse_tag;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use unic_langid::LanguageIdentifier;

const SETTINGS_FILE: &str = "settings.toml";

/// Application name used for directory naming.
const APP_NAME: &str = "LinguaLens";

/// Environment variable to override the base directory.
pub const ENV_CONFIG_DIR: &str = "LINGUA_LENS_CONFIG_DIR";

/// Tag used when no candidate from the resolution chain is available.
pub const DEFAULT_LANGUAGE_TAG: &str = "en-US";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Preferred locale tag, e.g. `"de-DE"`.
    pub language: Option<String>,
}

/// Returns the application's base directory, which holds `settings.toml` and
/// the `lang/` override directory.
///
/// # Resolution Order
///
/// 1. `LINGUA_LENS_CONFIG_DIR` environment variable (if set and non-empty)
/// 2. Platform config directory with the app name appended:
///    - Linux: `~/.config/LinguaLens/`
///    - macOS: `~/Library/Application Support/LinguaLens/`
///    - Windows: `C:\Users\<User>\AppData\Roaming\LinguaLens\`
///
/// Returns `None` if the platform directory cannot be determined.
pub fn base_dir() -> Option<PathBuf> {
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

fn default_settings_path() -> Option<PathBuf> {
    base_dir().map(|mut path| {
        path.push(SETTINGS_FILE);
        path
    })
}

/// Loads the settings file stored in `base_dir`, falling back to defaults
/// when none exists there yet.
pub fn load_from_dir(base_dir: &Path) -> Result<Settings> {
    let path = base_dir.join(SETTINGS_FILE);
    if path.exists() {
        return load_from_path(&path);
    }
    Ok(Settings::default())
}

pub fn load() -> Result<Settings> {
    match base_dir() {
        Some(dir) => load_from_dir(&dir),
        None => Ok(Settings::default()),
    }
}

pub fn save(settings: &Settings) -> Result<()> {
    if let Some(path) = default_settings_path() {
        return save_to_path(settings, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(settings)?;
    fs::write(path, content)?;
    Ok(())
}

/// Picks the default locale tag for a load.
///
/// Candidates are tried in order and the first one naming an available
/// locale wins; [`DEFAULT_LANGUAGE_TAG`] backstops the chain. The returned
/// tag is in normalized `xx-YY` form even when the candidate used
/// underscores.
pub fn resolve_default_tag(
    explicit: Option<&str>,
    settings: &Settings,
    available: &[LanguageIdentifier],
) -> String {
    // 1. Explicit override (CLI)
    if let Some(candidate) = explicit {
        if let Some(tag) = available_tag(candidate, available) {
            return tag;
        }
    }

    // 2. Settings file
    if let Some(candidate) = &settings.language {
        if let Some(tag) = available_tag(candidate, available) {
            return tag;
        }
    }

    // 3. OS locale
    if let Some(candidate) = sys_locale::get_locale() {
        if let Some(tag) = available_tag(&candidate, available) {
            return tag;
        }
    }

    DEFAULT_LANGUAGE_TAG.to_string()
}

fn available_tag(candidate: &str, available: &[LanguageIdentifier]) -> Option<String> {
    let locale = parse_tag(candidate).ok()?;
    available.contains(&locale).then(|| locale.to_string())
}
