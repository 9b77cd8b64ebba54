//! Optional user settings.
//!
//! Loaded once at startup from `<home>/.dirtitle/config.json`. The settings
//! file always lives under the home configuration directory, even when
//! override files resolve to the tmpfs location. Missing or malformed files
//! behave as defaults; settings never make the tool fail.

use std::env;
use std::path::Path;

use serde::Deserialize;

use crate::overrides::CONFIG_DIR_NAME;

/// Default breadcrumb separator.
///
/// Wider left-pointing glyphs render from a fallback font in common terminal
/// setups and make the tab title flash on redraw; `‹-` stays in the primary
/// font.
pub const DEFAULT_SEPARATOR: &str = " ‹- ";

/// Env override for the breadcrumb separator; wins over the settings file.
pub const SEPARATOR_ENV: &str = "DIRTITLE_SEP";

/// Settings file name under the home configuration directory.
pub const SETTINGS_FILE: &str = "config.json";

#[derive(Debug, Clone, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    separator: Option<String>,
    #[serde(default)]
    ignored_commands: Vec<String>,
}

/// Resolved settings, computed once at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Separator joining breadcrumb titles.
    pub separator: String,
    /// Extra first-token command names treated as overlay noise, on top of
    /// the built-in set.
    pub ignored_commands: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            ignored_commands: Vec::new(),
        }
    }
}

impl Settings {
    /// Loads settings for the given home directory and applies the env
    /// separator override.
    pub fn load(home_dir: &str) -> Self {
        let path = Path::new(home_dir).join(CONFIG_DIR_NAME).join(SETTINGS_FILE);
        let env_separator = env::var(SEPARATOR_ENV).ok();
        Self::resolve(read_settings_file(&path), env_separator)
    }

    /// Settings from explicit parts (tests, embedding).
    pub fn with_parts(separator: impl Into<String>, ignored_commands: Vec<String>) -> Self {
        Self {
            separator: separator.into(),
            ignored_commands,
        }
    }

    fn resolve(file: SettingsFile, env_separator: Option<String>) -> Self {
        let separator = env_separator
            .filter(|sep| !sep.is_empty())
            .or(file.separator)
            .unwrap_or_else(|| DEFAULT_SEPARATOR.to_string());
        Self {
            separator,
            ignored_commands: file.ignored_commands,
        }
    }
}

fn read_settings_file(path: &Path) -> SettingsFile {
    let Ok(content) = std::fs::read_to_string(path) else {
        return SettingsFile::default();
    };
    match serde_json::from_str(&content) {
        Ok(parsed) => parsed,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring malformed settings file");
            SettingsFile::default()
        }
    }
}
