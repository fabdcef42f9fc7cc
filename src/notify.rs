//! User notifications for the copy command.
//!
//! Inject a [`Notifier`] into [`crate::command::copy_note_to_clipboard`] to
//! tell the user how the clipboard write went. Success and failure are
//! separate callbacks so a host can render them differently (a toast, a
//! coloured terminal line, a status-bar message).
//!
//! # Example
//!
//! ```rust
//! use note2clip::{ClipboardWriteError, Notifier};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//!
//! struct CountingNotifier {
//!     failures: AtomicUsize,
//! }
//!
//! impl Notifier for CountingNotifier {
//!     fn on_copy_failure(&self, error: &ClipboardWriteError) {
//!         self.failures.fetch_add(1, Ordering::SeqCst);
//!         eprintln!("{}: {error}", note2clip::notify::COPY_FAILURE_MESSAGE);
//!     }
//! }
//! ```

use crate::error::ClipboardWriteError;

/// Shown after a successful clipboard write.
pub const COPY_SUCCESS_MESSAGE: &str = "Meeting note copied to clipboard!";

/// Shown after a failed clipboard write.
pub const COPY_FAILURE_MESSAGE: &str = "Error copying meeting note to clipboard.";

/// Receives the outcome of a clipboard write.
///
/// Both methods have no-op defaults so implementors only override what they
/// show. Implementations must be `Send + Sync`.
pub trait Notifier: Send + Sync {
    /// The note is on the clipboard.
    fn on_copy_success(&self) {}

    /// The clipboard write failed; the document was not modified.
    fn on_copy_failure(&self, error: &ClipboardWriteError) {
        let _ = error;
    }
}

/// Discards every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {}
