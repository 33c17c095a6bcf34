//! The product assembled by the builders.
//!
//! A [`Document`] keeps two independent, ordered lists: the visible content
//! fragments and the footnote bodies. Builders decide how each fragment is
//! decorated; the document only stores and renders them.

use std::fmt;

/// Separator line emitted between the content and the footnote block.
pub const FOOTNOTE_SEPARATOR: &str = "--- ВИНОСКИ ---";

/// Ordered collection of content fragments and footnotes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document {
    parts: Vec<String>,
    footnotes: Vec<String>,
}

impl Document {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a content fragment.
    pub fn add_part(&mut self, part: impl Into<String>) {
        self.parts.push(part.into());
    }

    /// Appends a footnote body. Its number is its 1-based position.
    pub fn add_footnote(&mut self, note: impl Into<String>) {
        self.footnotes.push(note.into());
    }

    /// Returns the content fragments in insertion order.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    /// Returns the footnote bodies in insertion order.
    pub fn footnotes(&self) -> &[String] {
        &self.footnotes
    }

    /// Returns `true` when neither content nor footnotes were added.
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty() && self.footnotes.is_empty()
    }

    /// Renders the document as text.
    ///
    /// Each content fragment is written on its own line. When at least one
    /// footnote exists the content is followed by a blank line, the
    /// [`FOOTNOTE_SEPARATOR`] and one `[i] text` line per footnote.
    pub fn render(&self) -> String {
        let mut output = String::new();

        for part in &self.parts {
            output.push_str(part);
            output.push('\n');
        }

        if !self.footnotes.is_empty() {
            output.push('\n');
            output.push_str(FOOTNOTE_SEPARATOR);
            output.push('\n');
            for (index, note) in self.footnotes.iter().enumerate() {
                output.push_str(&format!("[{}] {}\n", index + 1, note));
            }
        }

        output
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
