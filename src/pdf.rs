//! PDF export of built documents.
//!
//! Every content fragment becomes one paragraph. The footnote block follows
//! the same layout rules as [`Document::render`]: it is only emitted when at
//! least one footnote exists and the entries are numbered from 1.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use genpdf::elements::{Break, Paragraph};
use genpdf::style::Effect;
use genpdf::{Element, SimplePageDecorator};
use log::debug;

use crate::document::{Document, FOOTNOTE_SEPARATOR};
use crate::fonts;

const PAGE_MARGIN_MM: i32 = 15;

/// Errors that can occur while exporting a document as PDF.
#[derive(Debug)]
pub enum ExportError {
    /// No usable font family could be loaded.
    Fonts(genpdf::error::Error),
    /// The PDF layout or serialization failed.
    Render(genpdf::error::Error),
    /// The rendered bytes could not be written.
    Io(io::Error),
}

impl From<io::Error> for ExportError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fonts(_) => write!(f, "Failed to load fonts for PDF export"),
            Self::Render(_) => write!(f, "Failed to render PDF"),
            Self::Io(_) => write!(f, "Failed to write PDF file"),
        }
    }
}

impl std::error::Error for ExportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Fonts(err) | Self::Render(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

/// Lays out `document` as a PDF titled `title` and returns its bytes.
pub fn render_pdf(document: &Document, title: &str) -> Result<Vec<u8>, ExportError> {
    let family = fonts::default_font_family().map_err(ExportError::Fonts)?;

    let mut pdf = genpdf::Document::new(family);
    pdf.set_title(title);

    let mut decorator = SimplePageDecorator::new();
    decorator.set_margins(PAGE_MARGIN_MM);
    pdf.set_page_decorator(decorator);

    for part in document.parts() {
        pdf.push(Paragraph::new(part.as_str()));
    }

    if !document.footnotes().is_empty() {
        pdf.push(Break::new(1));
        pdf.push(Paragraph::new(FOOTNOTE_SEPARATOR).styled(Effect::Bold));
        for (index, note) in document.footnotes().iter().enumerate() {
            pdf.push(Paragraph::new(format!("[{}] {}", index + 1, note)));
        }
    }

    let mut bytes = Vec::new();
    pdf.render(&mut bytes).map_err(ExportError::Render)?;
    debug!("rendered '{}' to {} PDF bytes", title, bytes.len());
    Ok(bytes)
}

/// Renders `document` and writes the PDF to `path`.
pub fn write_pdf(
    document: &Document,
    title: &str,
    path: impl AsRef<Path>,
) -> Result<usize, ExportError> {
    let bytes = render_pdf(document, title)?;
    fs::write(path, &bytes)?;
    Ok(bytes.len())
}
