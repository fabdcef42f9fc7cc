//! Clipboard sinks: where the finished HTML goes.
//!
//! The engine never touches the OS clipboard. A [`ClipboardSink`] receives a
//! [`ClipboardItem`] (HTML plus a plain-text fallback) and reports success
//! or a [`ClipboardWriteError`]. Writing is the one asynchronous step of the
//! whole command.
//!
//! [`CommandClipboard`] pipes the HTML into an external program such as
//! `wl-copy --type text/html`; [`SystemClipboard`] picks one at startup.

use crate::error::ClipboardWriteError;
use std::future::Future;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// One clipboard write: both flavours of the same note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardItem {
    /// `text/html` flavour.
    pub html: String,
    /// `text/plain` flavour for targets that cannot take HTML.
    pub plain_text: String,
}

/// Accepts a [`ClipboardItem`] and delivers it to a clipboard.
pub trait ClipboardSink: Send + Sync {
    fn write(
        &self,
        item: &ClipboardItem,
    ) -> impl Future<Output = Result<(), ClipboardWriteError>> + Send;
}

/// Runs `program args…` and writes the HTML flavour to its stdin.
///
/// Command-line clipboard tools take a single flavour per invocation, so the
/// plain-text fallback is not delivered through this sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    pub fn new(program: impl Into<String>, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Split a whitespace-separated command line (`xclip -selection clipboard -t text/html`).
    /// Returns `None` for a blank string.
    pub fn from_command_line(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace();
        let program = parts.next()?;
        Some(Self::new(program, parts))
    }

    /// Find an installed HTML-capable clipboard program.
    ///
    /// macOS uses `pbcopy`. Wayland sessions prefer `wl-copy`; otherwise
    /// `xclip` is tried.
    pub fn detect() -> Option<Self> {
        if cfg!(target_os = "macos") && which::which("pbcopy").is_ok() {
            return Some(Self::new("pbcopy", Vec::<String>::new()));
        }
        let wayland = std::env::var_os("WAYLAND_DISPLAY").is_some();
        if wayland && which::which("wl-copy").is_ok() {
            return Some(Self::new("wl-copy", ["--type", "text/html"]));
        }
        if which::which("xclip").is_ok() {
            return Some(Self::new("xclip", ["-selection", "clipboard", "-t", "text/html"]));
        }
        None
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl ClipboardSink for CommandClipboard {
    async fn write(&self, item: &ClipboardItem) -> Result<(), ClipboardWriteError> {
        debug!("Piping {} bytes of HTML into {}", item.html.len(), self.program);
        let io_err = |e: std::io::Error| ClipboardWriteError::Io {
            program: self.program.clone(),
            source: e,
        };

        let mut child = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| ClipboardWriteError::Spawn {
                program: self.program.clone(),
                source: e,
            })?;

        // Stdin is fed while stderr is drained; a failed exit outranks a broken pipe.
        let stdin = child.stdin.take();
        let html = item.html.as_bytes();
        let feed = async move {
            if let Some(mut stdin) = stdin {
                stdin.write_all(html).await?;
                stdin.shutdown().await?;
            }
            Ok::<(), std::io::Error>(())
        };
        let (fed, output) = tokio::join!(feed, child.wait_with_output());

        let output = output.map_err(io_err)?;
        if !output.status.success() {
            return Err(ClipboardWriteError::Exit {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        fed.map_err(io_err)
    }
}

/// The system clipboard as seen from a terminal: an explicit command if one
/// is configured, else whatever [`CommandClipboard::detect`] finds.
#[derive(Debug, Clone)]
pub struct SystemClipboard {
    command: Option<CommandClipboard>,
}

impl SystemClipboard {
    pub fn new(command_line: Option<&str>) -> Self {
        let command = match command_line {
            Some(line) => CommandClipboard::from_command_line(line),
            None => CommandClipboard::detect(),
        };
        Self { command }
    }

    pub fn command(&self) -> Option<&CommandClipboard> {
        self.command.as_ref()
    }
}

impl ClipboardSink for SystemClipboard {
    async fn write(&self, item: &ClipboardItem) -> Result<(), ClipboardWriteError> {
        match &self.command {
            Some(command) => command.write(item).await,
            None => Err(ClipboardWriteError::Unavailable),
        }
    }
}
