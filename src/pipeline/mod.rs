//! Pipeline stages for note-to-HTML conversion.
//!
//! Each submodule implements exactly one transformation step and is a pure
//! function of its input, so each is tested on its own.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ metadata ──▶ classify ──▶ lists / inline ──▶ style
//! (text)    (+ date)     (runs)       (HTML blocks)      (inline CSS)
//! ```
//!
//! 1. [`input`]   : obtain the note text from a string, file or stdin
//! 2. [`metadata`]: drop front-matter and label lines; the title becomes a
//!    [`date`] heading and section headings become bold labels
//! 3. [`classify`]: split lines into list runs and other lines
//! 4. [`lists`]   : nest each list run into `<ul>`/`<ol>`; item text goes
//!    through [`inline`] like every other line
//! 5. [`style`]   : inline `style` attributes plus the optional `<style>` block
//!
//! The assembler that joins stages 3–4 lives in [`crate::convert`].

pub mod classify;
pub mod date;
pub mod inline;
pub mod input;
pub mod lists;
pub mod metadata;
pub mod style;
