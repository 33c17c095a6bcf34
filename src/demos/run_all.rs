use std::io::{self, Write};

use super::{custom, technical_report};
use crate::builder::Flavor;

/// Writes the technical report followed by the custom document.
///
/// Both documents come from the same builder, so the second one starts from
/// the empty state left behind by the first retrieval.
pub fn run(flavor: Flavor, out: &mut impl Write) -> io::Result<()> {
    let mut builder = flavor.builder();

    writeln!(out, "Generating Document...")?;
    let report = technical_report::build(builder.as_mut());
    writeln!(out, "{report}")?;

    writeln!(out, "\nGenerating Custom Document...")?;
    let custom = custom::build(builder.as_mut());
    writeln!(out, "{custom}")?;

    Ok(())
}
