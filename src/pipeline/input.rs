//! Input resolution: where the note text comes from.
//!
//! The engine only ever sees one `String`. [`TextSource`] is the seam the
//! host plugs into: an editor buffer, a file on disk or stdin. Reading is
//! done up front and in full; nothing is streamed.

use crate::error::Note2ClipError;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Supplies the current document's full text on demand.
pub trait TextSource {
    /// Short description used in logs and error messages.
    fn origin(&self) -> String;

    fn read_text(&self) -> Result<String, Note2ClipError>;
}

impl TextSource for str {
    fn origin(&self) -> String {
        "<memory>".to_string()
    }

    fn read_text(&self) -> Result<String, Note2ClipError> {
        Ok(self.to_string())
    }
}

impl TextSource for String {
    fn origin(&self) -> String {
        self.as_str().origin()
    }

    fn read_text(&self) -> Result<String, Note2ClipError> {
        Ok(self.clone())
    }
}

/// A note stored in a UTF-8 file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TextSource for FileSource {
    fn origin(&self) -> String {
        self.path.display().to_string()
    }

    fn read_text(&self) -> Result<String, Note2ClipError> {
        if !self.path.exists() {
            return Err(Note2ClipError::InputNotFound {
                path: self.path.clone(),
            });
        }
        let text =
            std::fs::read_to_string(&self.path).map_err(|e| Note2ClipError::InputReadFailed {
                origin: self.origin(),
                source: e,
            })?;
        debug!("Read {} bytes from {}", text.len(), self.path.display());
        Ok(text)
    }
}

/// The process's standard input, read to EOF.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl TextSource for StdinSource {
    fn origin(&self) -> String {
        "<stdin>".to_string()
    }

    fn read_text(&self) -> Result<String, Note2ClipError> {
        let mut text = String::new();
        std::io::stdin()
            .lock()
            .read_to_string(&mut text)
            .map_err(|e| Note2ClipError::InputReadFailed {
                origin: self.origin(),
                source: e,
            })?;
        debug!("Read {} bytes from stdin", text.len());
        Ok(text)
    }
}

/// A user-supplied input argument, resolved to a concrete source.
#[derive(Debug, Clone)]
pub enum ResolvedInput {
    File(FileSource),
    Stdin(StdinSource),
}

impl TextSource for ResolvedInput {
    fn origin(&self) -> String {
        match self {
            ResolvedInput::File(f) => f.origin(),
            ResolvedInput::Stdin(s) => s.origin(),
        }
    }

    fn read_text(&self) -> Result<String, Note2ClipError> {
        match self {
            ResolvedInput::File(f) => f.read_text(),
            ResolvedInput::Stdin(s) => s.read_text(),
        }
    }
}

/// `-` means stdin; anything else is a file path.
pub fn resolve_input(input: &str) -> ResolvedInput {
    if input == "-" {
        ResolvedInput::Stdin(StdinSource)
    } else {
        ResolvedInput::File(FileSource::new(input))
    }
}
