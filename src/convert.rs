//! Conversion entry points and the top-level HTML assembler.
//!
//! [`convert`] is the minimal API: note text in, styled HTML out.
//! [`convert_document`] takes a [`ConversionConfig`] and also returns the
//! preprocessed Markdown and stats; the clipboard command needs both.

use crate::config::ConversionConfig;
use crate::error::Note2ClipError;
use crate::output::{ConversionOutput, ConversionStats};
use crate::pipeline::classify::{split_blocks, Block};
use crate::pipeline::input::TextSource;
use crate::pipeline::{inline, lists, metadata, style};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

/// Convert a meeting note to styled HTML with the default configuration.
///
/// # Errors
/// Returns [`Note2ClipError::MissingDate`] when the note has no
/// `[[YYYY-MM-DD` link. No partial output is produced.
///
/// # Example
/// ```rust
/// let html = note2clip::convert("# Fundur\nup: [[2024-03-07]]\n- a").unwrap();
/// assert!(html.contains("7. mars 2024"));
/// ```
pub fn convert(document: impl AsRef<str>) -> Result<String, Note2ClipError> {
    convert_document(document, &ConversionConfig::default()).map(|out| out.html)
}

/// Convert a meeting note using `config`.
pub fn convert_document(
    document: impl AsRef<str>,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Note2ClipError> {
    let start = Instant::now();
    let document = document.as_ref();
    info!("Starting conversion: {} bytes", document.len());

    // ── Step 1: Strip metadata ───────────────────────────────────────────
    let (markdown, meeting_date) = if config.strip_metadata {
        let stripped = metadata::strip_metadata(document)?;
        debug!("Meeting date: {}", stripped.date);
        (stripped.markdown, Some(stripped.date.to_string()))
    } else {
        (document.to_string(), None)
    };

    // ── Step 2: Assemble list runs and paragraphs ────────────────────────
    let (mut html, mut stats) = assemble(&markdown);

    // ── Step 3: Styles ───────────────────────────────────────────────────
    if config.inline_styles {
        html = style::inject_inline_styles(&html);
    }
    if config.style_block {
        html = style::prepend_style_block(&html);
    }

    stats.duration_us = start.elapsed().as_micros() as u64;
    info!(
        "Conversion complete: {} lines, {} list runs, {} bytes of HTML",
        stats.total_lines,
        stats.list_runs,
        html.len()
    );

    Ok(ConversionOutput {
        html,
        markdown,
        meeting_date,
        stats,
    })
}

/// Read the note from `source`, then [`convert_document`].
pub fn convert_source<S: TextSource + ?Sized>(
    source: &S,
    config: &ConversionConfig,
) -> Result<ConversionOutput, Note2ClipError> {
    debug!("Reading note from {}", source.origin());
    let text = source.read_text()?;
    convert_document(text, config)
}

/// Convert a note and write the HTML directly to a file.
///
/// Uses atomic write (temp file + rename) to prevent partial files.
pub fn convert_to_file(
    document: impl AsRef<str>,
    output_path: impl AsRef<Path>,
    config: &ConversionConfig,
) -> Result<ConversionStats, Note2ClipError> {
    let output = convert_document(document, config)?;
    write_html(output_path, &output.html)?;
    Ok(output.stats)
}

/// Write finished HTML to `path` (temp file + rename), creating parent dirs.
pub fn write_html(path: impl AsRef<Path>, html: &str) -> Result<(), Note2ClipError> {
    let path = path.as_ref();
    let write_err = |e: std::io::Error| Note2ClipError::OutputWriteFailed {
        path: path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let tmp_path = path.with_extension("html.tmp");
    std::fs::write(&tmp_path, html).map_err(write_err)?;
    std::fs::rename(&tmp_path, path).map_err(write_err)?;
    debug!("Wrote {} bytes to {}", html.len(), path.display());
    Ok(())
}

/// Render preprocessed Markdown to the `<div><body>…</body></div>` fragment,
/// without styles.
pub fn assemble_html(markdown: &str) -> String {
    assemble(markdown).0
}

fn assemble(markdown: &str) -> (String, ConversionStats) {
    let mut html = String::from("<div>\n<body>\n");
    let mut stats = ConversionStats::default();

    for block in split_blocks(markdown) {
        match block {
            Block::List(run) => {
                stats.list_runs += 1;
                stats.list_lines += run.len();
                // No trailing newline: the next block continues on the same line.
                html.push_str(&lists::render_list(&run));
            }
            Block::Line(line) => {
                stats.paragraphs += 1;
                html.push_str("<p>");
                html.push_str(&inline::format_line(line));
                html.push_str("</p>\n");
            }
        }
    }

    html.push_str("</body>\n</div>\n");
    stats.total_lines = stats.list_lines + stats.paragraphs;
    debug!(
        "Assembled {} paragraphs and {} list runs",
        stats.paragraphs, stats.list_runs
    );
    (html, stats)
}
