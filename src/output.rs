//! Result types returned by [`crate::convert::convert_document`].

use serde::{Deserialize, Serialize};

/// The full result of converting one note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionOutput {
    /// Styled HTML, the clipboard's `text/html` flavour.
    pub html: String,
    /// The note after metadata stripping, used as the plain-text fallback.
    pub markdown: String,
    /// Formatted meeting date (`7. mars 2024`), when metadata was stripped.
    pub meeting_date: Option<String>,
    pub stats: ConversionStats,
}

/// Counters gathered while assembling the HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Lines in the preprocessed Markdown.
    pub total_lines: usize,
    /// Maximal runs of list lines.
    pub list_runs: usize,
    /// Lines that belonged to a list run.
    pub list_lines: usize,
    /// Non-list lines, each wrapped in its own `<p>`.
    pub paragraphs: usize,
    /// Wall-clock time for the whole conversion, in microseconds.
    pub duration_us: u64,
}
