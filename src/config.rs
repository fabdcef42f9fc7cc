//! Configuration types for note-to-HTML conversion.
//!
//! All conversion behaviour is controlled through [`ConversionConfig`], built
//! via its [`ConversionConfigBuilder`]. The config is a plain value: the CLI
//! derives it from [`crate::Settings`] plus flags and hands it to the command
//! handler, so no stage ever reads process-wide state.

use serde::{Deserialize, Serialize};

/// Configuration for a note-to-HTML conversion.
///
/// Built via [`ConversionConfig::builder()`] or using
/// [`ConversionConfig::default()`].
///
/// # Example
/// ```rust
/// use note2clip::ConversionConfig;
///
/// let config = ConversionConfig::builder()
///     .style_block(false)
///     .build();
/// assert!(config.inline_styles);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Run the metadata & date stripper before rendering. Default: true.
    ///
    /// When disabled the note is rendered as-is: front-matter stays, the
    /// title is not replaced and no `[[YYYY-MM-DD` link is required.
    pub strip_metadata: bool,

    /// Rewrite bare opening tags into tags with a literal `style` attribute.
    /// Default: true.
    ///
    /// This is the part rich-text paste targets actually honour; most of them
    /// drop `<style>` elements on paste.
    pub inline_styles: bool,

    /// Prepend the `<style type="text/css">` block. Default: true.
    ///
    /// Only a visual fallback for targets that keep `<style>`, and handy when
    /// opening the output in a browser.
    pub style_block: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            strip_metadata: true,
            inline_styles: true,
            style_block: true,
        }
    }
}

impl ConversionConfig {
    /// Create a new builder for `ConversionConfig`.
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`ConversionConfig`].
#[derive(Debug)]
pub struct ConversionConfigBuilder {
    config: ConversionConfig,
}

impl ConversionConfigBuilder {
    pub fn strip_metadata(mut self, v: bool) -> Self {
        self.config.strip_metadata = v;
        self
    }

    pub fn inline_styles(mut self, v: bool) -> Self {
        self.config.inline_styles = v;
        self
    }

    pub fn style_block(mut self, v: bool) -> Self {
        self.config.style_block = v;
        self
    }

    /// Finish building. Every combination of flags is valid.
    pub fn build(self) -> ConversionConfig {
        self.config
    }
}
