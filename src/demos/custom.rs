use crate::builder::DocumentBuilder;
use crate::document::Document;

/// Builds a small document by driving the builder directly, without a director.
pub fn build(builder: &mut dyn DocumentBuilder) -> Document {
    builder.add_heading("Мій власний документ");
    builder.add_section("Довільний текст секції.");
    builder.add_footnote("Примітка автора.");
    builder.get_document()
}
