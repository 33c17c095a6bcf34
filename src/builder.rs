//! Step-wise document construction.
//!
//! [`DocumentBuilder`] is the capability shared by every flavor. A flavor
//! only decides how headings, sections and footnotes are decorated; each one
//! owns exactly one in-progress [`Document`] and hands it over on
//! [`DocumentBuilder::get_document`].

use std::fmt;
use std::mem;
use std::str::FromStr;

use log::{debug, trace};

use crate::document::Document;

/// Operations available to clients and to the director.
pub trait DocumentBuilder {
    /// Appends a decorated heading.
    fn add_heading(&mut self, text: &str);

    /// Appends a decorated section body.
    fn add_section(&mut self, text: &str);

    /// Appends a footnote marker to the content and the footnote body to the
    /// footnote list.
    fn add_footnote(&mut self, text: &str);

    /// Returns the built document and starts over with an empty one.
    fn get_document(&mut self) -> Document;
}

fn take_document(document: &mut Document, flavor: Flavor) -> Document {
    let result = mem::take(document);
    debug!(
        "{} builder handed over document with {} parts and {} footnotes",
        flavor,
        result.parts().len(),
        result.footnotes().len()
    );
    result
}

/// Builder producing HTML-like fragments.
#[derive(Debug, Default)]
pub struct HtmlDocumentBuilder {
    document: Document,
}

impl HtmlDocumentBuilder {
    /// Marker inserted into the content wherever a footnote is referenced.
    pub const FOOTNOTE_MARKER: &'static str = "<sup><small>[See footnote]</small></sup>";

    /// Creates a builder holding an empty document.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentBuilder for HtmlDocumentBuilder {
    fn add_heading(&mut self, text: &str) {
        trace!("html heading: {text}");
        self.document.add_part(format!("<h1>{text}</h1>"));
    }

    fn add_section(&mut self, text: &str) {
        trace!("html section: {text}");
        self.document.add_part(format!("<p>{text}</p>"));
    }

    fn add_footnote(&mut self, text: &str) {
        trace!("html footnote: {text}");
        self.document.add_part(Self::FOOTNOTE_MARKER);
        self.document.add_footnote(format!("<small>{text}</small>"));
    }

    fn get_document(&mut self) -> Document {
        take_document(&mut self.document, Flavor::Html)
    }
}

/// Builder producing Markdown with numbered footnote references.
#[derive(Debug, Default)]
pub struct MarkdownDocumentBuilder {
    document: Document,
}

impl MarkdownDocumentBuilder {
    /// Creates a builder holding an empty document.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentBuilder for MarkdownDocumentBuilder {
    fn add_heading(&mut self, text: &str) {
        trace!("markdown heading: {text}");
        self.document.add_part(format!("# {text}"));
    }

    fn add_section(&mut self, text: &str) {
        trace!("markdown section: {text}");
        self.document.add_part(text);
    }

    fn add_footnote(&mut self, text: &str) {
        trace!("markdown footnote: {text}");
        let number = self.document.footnotes().len() + 1;
        self.document.add_part(format!("[^{number}]"));
        self.document.add_footnote(text);
    }

    fn get_document(&mut self) -> Document {
        take_document(&mut self.document, Flavor::Markdown)
    }
}

/// Builder producing undecorated text with uppercase headings.
#[derive(Debug, Default)]
pub struct PlainTextDocumentBuilder {
    document: Document,
}

impl PlainTextDocumentBuilder {
    /// Creates a builder holding an empty document.
    pub fn new() -> Self {
        Self::default()
    }
}

impl DocumentBuilder for PlainTextDocumentBuilder {
    fn add_heading(&mut self, text: &str) {
        trace!("plain heading: {text}");
        self.document.add_part(text.to_uppercase());
    }

    fn add_section(&mut self, text: &str) {
        trace!("plain section: {text}");
        self.document.add_part(text);
    }

    fn add_footnote(&mut self, text: &str) {
        trace!("plain footnote: {text}");
        let number = self.document.footnotes().len() + 1;
        self.document.add_part(format!("[{number}]"));
        self.document.add_footnote(text);
    }

    fn get_document(&mut self) -> Document {
        take_document(&mut self.document, Flavor::PlainText)
    }
}

/// Names the available builder flavors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Flavor {
    /// [`HtmlDocumentBuilder`].
    #[default]
    Html,
    /// [`MarkdownDocumentBuilder`].
    Markdown,
    /// [`PlainTextDocumentBuilder`].
    PlainText,
}

impl Flavor {
    /// All flavors in declaration order.
    pub const ALL: [Flavor; 3] = [Flavor::Html, Flavor::Markdown, Flavor::PlainText];

    /// Canonical name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Self::Html => "html",
            Self::Markdown => "markdown",
            Self::PlainText => "plain",
        }
    }

    /// Creates a fresh builder of this flavor.
    pub fn builder(self) -> Box<dyn DocumentBuilder> {
        match self {
            Self::Html => Box::new(HtmlDocumentBuilder::new()),
            Self::Markdown => Box::new(MarkdownDocumentBuilder::new()),
            Self::PlainText => Box::new(PlainTextDocumentBuilder::new()),
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a flavor name is not recognised.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseFlavorError {
    input: String,
}

impl ParseFlavorError {
    /// Returns the rejected input.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseFlavorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = Flavor::ALL
            .iter()
            .map(|flavor| flavor.name())
            .collect::<Vec<_>>()
            .join(", ");
        write!(
            f,
            "Unknown document flavor '{}' (expected one of: {})",
            self.input, names
        )
    }
}

impl std::error::Error for ParseFlavorError {}

impl FromStr for Flavor {
    type Err = ParseFlavorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "markdown" | "md" => Ok(Self::Markdown),
            "plain" | "text" | "txt" => Ok(Self::PlainText),
            _ => Err(ParseFlavorError {
                input: s.to_owned(),
            }),
        }
    }
}
