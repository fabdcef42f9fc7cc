//! # note2clip
//!
//! Convert Markdown meeting notes to inline-styled HTML ready to paste into
//! rich-text targets such as mail clients and word processors.
//!
//! ## Pipeline Overview
//!
//! ```text
//! note text
//!  │
//!  ├─ 1. Input     file, stdin or an in-memory string
//!  ├─ 2. Strip     front-matter, label lines, title → "## 7. mars 2024"
//!  ├─ 3. Classify  split into list runs and single lines
//!  ├─ 4. Render    nested <ul>/<ol> trees and <p> lines with inline rules
//!  ├─ 5. Style     literal style="…" attributes plus an optional <style> block
//!  └─ 6. Deliver   clipboard program, HTML file, JSON or stdout
//! ```
//!
//! Steps 1–5 are plain synchronous string transforms. Only the clipboard
//! write in step 6 is asynchronous.
//!
//! ## Quick Start
//!
//! ```rust
//! use note2clip::{convert_document, ConversionConfig};
//!
//! let note = "---\ntags: fundur\n---\n# Fundur\nup: [[2024-03-07]]\n## Umræður\n- fjárhagsáætlun";
//! let output = convert_document(note, &ConversionConfig::default()).unwrap();
//! assert_eq!(output.meeting_date.as_deref(), Some("7. mars 2024"));
//! assert!(output.markdown.contains("**Umræður**"));
//! assert!(output.html.contains("Umræður:</strong>"));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `note2clip` binary (clap + anyhow + tracing-subscriber) |
//!
//! ```toml
//! note2clip = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod clipboard;
pub mod command;
pub mod config;
pub mod convert;
pub mod error;
pub mod notify;
pub mod output;
pub mod pipeline;
pub mod settings;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use clipboard::{ClipboardItem, ClipboardSink, CommandClipboard, SystemClipboard};
pub use command::{copy_note_to_clipboard, CopyOutcome};
pub use config::{ConversionConfig, ConversionConfigBuilder};
pub use convert::{assemble_html, convert, convert_document, convert_source, convert_to_file, write_html};
pub use error::{ClipboardWriteError, Note2ClipError};
pub use notify::{Notifier, SilentNotifier};
pub use output::{ConversionOutput, ConversionStats};
pub use pipeline::input::{resolve_input, FileSource, ResolvedInput, StdinSource, TextSource};
pub use settings::Settings;
