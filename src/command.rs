//! The "copy meeting note to clipboard" command.
//!
//! Wires the collaborators together: read from a [`TextSource`], convert
//! with an injected [`ConversionConfig`], hand the result to a
//! [`ClipboardSink`] and report through a [`Notifier`].
//!
//! Conversion errors (a note without a date link) abort the command before
//! anything touches the clipboard. Clipboard errors are caught here, become a
//! failure notice and are not retried.

use crate::clipboard::{ClipboardItem, ClipboardSink};
use crate::config::ConversionConfig;
use crate::convert::convert_source;
use crate::error::Note2ClipError;
use crate::notify::Notifier;
use crate::output::ConversionOutput;
use crate::pipeline::input::TextSource;
use tracing::{info, warn};

/// How the clipboard write ended. The conversion output is returned either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied(ConversionOutput),
    Failed {
        output: ConversionOutput,
        message: String,
    },
}

impl CopyOutcome {
    pub fn output(&self) -> &ConversionOutput {
        match self {
            CopyOutcome::Copied(output) | CopyOutcome::Failed { output, .. } => output,
        }
    }

    pub fn is_copied(&self) -> bool {
        matches!(self, CopyOutcome::Copied(_))
    }
}

/// Convert the note from `source` and put it on the clipboard.
///
/// # Errors
/// Only conversion and input errors are returned; a failed clipboard write
/// is reported via `notifier` and [`CopyOutcome::Failed`].
pub async fn copy_note_to_clipboard<T, C>(
    source: &T,
    sink: &C,
    notifier: &dyn Notifier,
    config: &ConversionConfig,
) -> Result<CopyOutcome, Note2ClipError>
where
    T: TextSource + ?Sized,
    C: ClipboardSink,
{
    let output = convert_source(source, config)?;
    let item = ClipboardItem {
        html: output.html.clone(),
        plain_text: output.markdown.clone(),
    };

    match sink.write(&item).await {
        Ok(()) => {
            info!("Copied {} bytes of HTML to the clipboard", item.html.len());
            notifier.on_copy_success();
            Ok(CopyOutcome::Copied(output))
        }
        Err(e) => {
            warn!("Failed to copy: {}", e);
            notifier.on_copy_failure(&e);
            Ok(CopyOutcome::Failed {
                output,
                message: e.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClipboardWriteError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryClipboard {
        items: Mutex<Vec<ClipboardItem>>,
    }

    impl ClipboardSink for MemoryClipboard {
        async fn write(&self, item: &ClipboardItem) -> Result<(), ClipboardWriteError> {
            self.items.lock().unwrap().push(item.clone());
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl ClipboardSink for BrokenClipboard {
        async fn write(&self, _item: &ClipboardItem) -> Result<(), ClipboardWriteError> {
            Err(ClipboardWriteError::Unavailable)
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        events: Mutex<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn on_copy_success(&self) {
            self.events.lock().unwrap().push("success".into());
        }

        fn on_copy_failure(&self, error: &ClipboardWriteError) {
            self.events.lock().unwrap().push(format!("failure: {error}"));
        }
    }

    const NOTE: &str = "# Fundur\nup: [[2024-03-07]]\n- a";

    #[tokio::test]
    async fn test_copy_success() {
        let sink = MemoryClipboard::default();
        let notifier = RecordingNotifier::default();
        let outcome = copy_note_to_clipboard(NOTE, &sink, &notifier, &ConversionConfig::default())
            .await
            .unwrap();

        assert!(outcome.is_copied());
        let items = sink.items.lock().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].html, outcome.output().html);
        assert_eq!(items[0].plain_text, "## 7. mars 2024\n\n- a");
        assert_eq!(*notifier.events.lock().unwrap(), vec!["success".to_string()]);
    }

    #[tokio::test]
    async fn test_copy_failure_is_a_notice_not_an_error() {
        let notifier = RecordingNotifier::default();
        let outcome =
            copy_note_to_clipboard(NOTE, &BrokenClipboard, &notifier, &ConversionConfig::default())
                .await
                .unwrap();

        match &outcome {
            CopyOutcome::Failed { message, .. } => assert!(message.contains("No clipboard program")),
            other => panic!("expected failure, got {other:?}"),
        }
        let events = notifier.events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert!(events[0].starts_with("failure:"));
    }

    #[tokio::test]
    async fn test_missing_date_aborts_before_clipboard() {
        let sink = MemoryClipboard::default();
        let notifier = RecordingNotifier::default();
        let err = copy_note_to_clipboard("# Fundur\n- a", &sink, &notifier, &ConversionConfig::default())
            .await
            .unwrap_err();

        assert!(matches!(err, Note2ClipError::MissingDate));
        assert!(sink.items.lock().unwrap().is_empty());
        assert!(notifier.events.lock().unwrap().is_empty());
    }
}
