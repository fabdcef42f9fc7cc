//! Error types for the note2clip library.
//!
//! Two distinct error types reflect two distinct failure modes:
//!
//! * [`Note2ClipError`]: **Fatal**: the note cannot be converted or the
//!   surrounding I/O failed (missing date link, unreadable input, bad
//!   settings file). Returned as `Err(Note2ClipError)` from the top-level
//!   `convert*` functions.
//!
//! * [`ClipboardWriteError`]: **Boundary**: the HTML was produced but the
//!   OS clipboard refused it. The command handler catches this, raises a
//!   failure notice and reports [`crate::command::CopyOutcome::Failed`]
//!   instead of propagating it.
//!
//! Everything else (unknown section labels, stray brackets, odd emphasis)
//! degrades to literal passthrough text and never reaches this module.

use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors returned by the note2clip library.
#[derive(Debug, Error)]
pub enum Note2ClipError {
    // ── Conversion errors ─────────────────────────────────────────────────
    /// The note has no `[[YYYY-MM-DD` date link, so no title can be built.
    #[error("Invalid input format: no [[YYYY-MM-DD date link found in the note")]
    MissingDate,

    // ── Input errors ──────────────────────────────────────────────────────
    /// Input file was not found at the given path.
    #[error("Note file not found: '{path}'\nCheck the path exists and is readable.")]
    InputNotFound { path: PathBuf },

    /// Input exists but could not be read as UTF-8 text.
    #[error("Failed to read note from {origin}: {source}")]
    InputReadFailed {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    // ── Output errors ─────────────────────────────────────────────────────
    /// Could not create or write the output HTML file.
    #[error("Failed to write output file '{path}': {source}")]
    OutputWriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Settings errors ───────────────────────────────────────────────────
    /// The settings file exists but could not be read.
    #[error("Failed to read settings from '{path}': {source}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file exists but is not valid JSON for [`crate::Settings`].
    #[error("Settings file '{path}' is malformed: {source}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The settings file could not be written.
    #[error("Failed to save settings to '{path}': {source}")]
    SettingsWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `Settings::set` was called with a key that does not exist.
    #[error("Unknown setting '{key}'\nKnown settings: {known}")]
    UnknownSetting { key: String, known: String },

    /// `Settings::set` was given a value that does not parse for the key.
    #[error("Invalid value '{value}' for setting '{key}': {reason}")]
    InvalidSettingValue {
        key: String,
        value: String,
        reason: String,
    },
}

/// A failure delivering HTML to the clipboard.
#[derive(Debug, Error)]
pub enum ClipboardWriteError {
    /// No clipboard program is configured or detectable on this system.
    #[error("No clipboard program available.\nSet --clipboard-command or the `clipboard_command` setting.")]
    Unavailable,

    /// The clipboard program could not be started.
    #[error("Failed to start clipboard program '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the program's stdin or waiting on it failed.
    #[error("I/O error talking to clipboard program '{program}': {source}")]
    Io {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The program ran but exited unsuccessfully.
    #[error("Clipboard program '{program}' exited with {status}: {stderr}")]
    Exit {
        program: String,
        status: String,
        stderr: String,
    },
}
