//! Core entry point for the doc_builder crate.
//!
//! Documents are assembled through a [`builder::DocumentBuilder`], optionally
//! driven by a [`director::DocumentDirector`], and rendered as text or
//! exported as PDF.

pub mod builder;
pub mod demos;
pub mod director;
pub mod document;
pub mod fonts;
pub mod pdf;

pub use builder::{
    DocumentBuilder, Flavor, HtmlDocumentBuilder, MarkdownDocumentBuilder, ParseFlavorError,
    PlainTextDocumentBuilder,
};
pub use director::DocumentDirector;
pub use document::{Document, FOOTNOTE_SEPARATOR};
pub use pdf::ExportError;
