//! Persisted user settings.
//!
//! A small JSON file of key-value pairs, loaded once at startup and merged
//! over [`Settings::default`] (missing keys keep their default, unknown keys
//! are ignored). Changes are saved immediately with an atomic write.
//!
//! The conversion engine never reads settings. The host turns them into a
//! [`ConversionConfig`] with [`Settings::to_config`] and injects that.

use crate::config::ConversionConfig;
use crate::error::Note2ClipError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name inside the config directory.
pub const SETTINGS_FILE: &str = "settings.json";

/// Every key accepted by [`Settings::get`] and [`Settings::set`].
pub const SETTING_KEYS: [&str; 4] = [
    "strip_metadata",
    "inline_styles",
    "style_block",
    "clipboard_command",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub strip_metadata: bool,
    pub inline_styles: bool,
    pub style_block: bool,
    /// Program and arguments that receive the HTML on stdin. `None` means
    /// auto-detect.
    pub clipboard_command: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        let config = ConversionConfig::default();
        Self {
            strip_metadata: config.strip_metadata,
            inline_styles: config.inline_styles,
            style_block: config.style_block,
            clipboard_command: None,
        }
    }
}

impl Settings {
    /// `$XDG_CONFIG_HOME/note2clip/settings.json`, falling back to
    /// `$HOME/.config/note2clip/settings.json`.
    pub fn default_path() -> Option<PathBuf> {
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("note2clip").join(SETTINGS_FILE))
    }

    /// Load settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, Note2ClipError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(Note2ClipError::SettingsRead {
                    path: path.to_path_buf(),
                    source: e,
                })
            }
        };
        serde_json::from_str(&text).map_err(|e| Note2ClipError::SettingsParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Write settings to `path` (temp file + rename), creating parent dirs.
    pub fn save(&self, path: &Path) -> Result<(), Note2ClipError> {
        let write_err = |e: std::io::Error| Note2ClipError::SettingsWrite {
            path: path.to_path_buf(),
            source: e,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| write_err(std::io::Error::other(e)))?;
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, json + "\n").map_err(write_err)?;
        std::fs::rename(&tmp_path, path).map_err(write_err)?;
        debug!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Read one setting as a string. Unset `clipboard_command` reads as `""`.
    pub fn get(&self, key: &str) -> Result<String, Note2ClipError> {
        Ok(match key {
            "strip_metadata" => self.strip_metadata.to_string(),
            "inline_styles" => self.inline_styles.to_string(),
            "style_block" => self.style_block.to_string(),
            "clipboard_command" => self.clipboard_command.clone().unwrap_or_default(),
            _ => return Err(unknown(key)),
        })
    }

    /// Update one setting from a string. Returns whether the value changed.
    ///
    /// Booleans accept `true/false`, `yes/no`, `on/off` and `1/0`. An empty
    /// `clipboard_command` resets it to auto-detect.
    pub fn set(&mut self, key: &str, value: &str) -> Result<bool, Note2ClipError> {
        let before = self.clone();
        match key {
            "strip_metadata" => self.strip_metadata = parse_bool(key, value)?,
            "inline_styles" => self.inline_styles = parse_bool(key, value)?,
            "style_block" => self.style_block = parse_bool(key, value)?,
            "clipboard_command" => {
                let trimmed = value.trim();
                self.clipboard_command = (!trimmed.is_empty()).then(|| trimmed.to_string());
            }
            _ => return Err(unknown(key)),
        }
        Ok(*self != before)
    }

    /// The conversion options these settings describe.
    pub fn to_config(&self) -> ConversionConfig {
        ConversionConfig::builder()
            .strip_metadata(self.strip_metadata)
            .inline_styles(self.inline_styles)
            .style_block(self.style_block)
            .build()
    }
}

fn unknown(key: &str) -> Note2ClipError {
    Note2ClipError::UnknownSetting {
        key: key.to_string(),
        known: SETTING_KEYS.join(", "),
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, Note2ClipError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(Note2ClipError::InvalidSettingValue {
            key: key.to_string(),
            value: value.to_string(),
            reason: "expected true or false".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let s = Settings::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_partial_file_merges_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, r#"{"style_block": false, "legacy_key": 1}"#).unwrap();
        let s = Settings::load(&path).unwrap();
        assert!(!s.style_block);
        assert!(s.inline_styles);
        assert!(s.strip_metadata);
        assert_eq!(s.clipboard_command, None);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            Settings::load(&path),
            Err(Note2ClipError::SettingsParse { .. })
        ));
    }

    #[test]
    fn test_unreadable_file_is_a_settings_error() {
        // A directory where the file should be fails to read with a non-NotFound error.
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(dir.path()).unwrap_err();
        assert!(matches!(err, Note2ClipError::SettingsRead { .. }), "got: {err}");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join(SETTINGS_FILE);
        let mut s = Settings::default();
        s.set("clipboard_command", "xclip -selection clipboard -t text/html")
            .unwrap();
        s.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), s);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_set_reports_change() {
        let mut s = Settings::default();
        assert!(s.set("inline_styles", "off").unwrap());
        assert!(!s.set("inline_styles", "false").unwrap());
        assert_eq!(s.get("inline_styles").unwrap(), "false");
    }

    #[test]
    fn test_set_rejects_bad_input() {
        let mut s = Settings::default();
        assert!(matches!(
            s.set("colour", "red"),
            Err(Note2ClipError::UnknownSetting { .. })
        ));
        assert!(matches!(
            s.set("style_block", "maybe"),
            Err(Note2ClipError::InvalidSettingValue { .. })
        ));
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_blank_clipboard_command_resets() {
        let mut s = Settings::default();
        s.set("clipboard_command", "wl-copy").unwrap();
        s.set("clipboard_command", "  ").unwrap();
        assert_eq!(s.clipboard_command, None);
        assert_eq!(s.get("clipboard_command").unwrap(), "");
    }

    #[test]
    fn test_to_config() {
        let mut s = Settings::default();
        s.set("strip_metadata", "no").unwrap();
        let c = s.to_config();
        assert!(!c.strip_metadata);
        assert!(c.inline_styles && c.style_block);
    }
}
