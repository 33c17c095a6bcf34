//! Fixed construction sequences driven through any [`DocumentBuilder`].

use log::debug;

use crate::builder::DocumentBuilder;

/// Issues predefined builder call sequences.
///
/// The director holds no state; the caller retrieves the result from the
/// builder once a sequence has run.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentDirector;

impl DocumentDirector {
    /// Creates a director.
    pub fn new() -> Self {
        Self
    }

    /// Builds the technical report template: a titled introduction with one
    /// footnote, an architecture section and a conclusion.
    pub fn construct_technical_report(&self, builder: &mut dyn DocumentBuilder) {
        debug!("constructing technical report");
        builder.add_heading("Технічний звіт");
        builder.add_section("Це вступна секція технічного документа.");
        builder.add_footnote("Дані взяті з відкритих джерел.");
        builder.add_section("Опис основної архітектури системи.");
        builder.add_heading("Висновок");
        builder.add_section("Система працює стабільно.");
    }
}
