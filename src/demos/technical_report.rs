use crate::builder::DocumentBuilder;
use crate::director::DocumentDirector;
use crate::document::Document;

/// Lets the director build the technical report and retrieves it.
pub fn build(builder: &mut dyn DocumentBuilder) -> Document {
    DocumentDirector::new().construct_technical_report(builder);
    builder.get_document()
}
