//! Font discovery for the PDF export.
//!
//! The Roboto family is looked up first in `$DOC_BUILDER_FONTS_DIR`, then in
//! `assets/fonts` next to the running executable and finally in
//! `assets/fonts` under this crate. When none of those holds the complete
//! family, the DejaVu Sans family from the system font directory is used.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use genpdf::error::{Error, ErrorKind};
use genpdf::fonts::{self, FontData, FontFamily};
use log::{debug, warn};

/// Name of the preferred font family.
pub const DEFAULT_FONT_FAMILY_NAME: &str = "Roboto";

/// Environment variable overriding the font search directory.
pub const FONTS_DIR_ENV: &str = "DOC_BUILDER_FONTS_DIR";

const FONT_FILES: &[&str] = &[
    "Roboto-Regular.ttf",
    "Roboto-Bold.ttf",
    "Roboto-Italic.ttf",
    "Roboto-BoldItalic.ttf",
];

const SYSTEM_FALLBACK_FAMILY_NAME: &str = "DejaVu Sans";

const SYSTEM_FALLBACK_DIRS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/dejavu",
    "/usr/share/fonts/TTF",
];

/// Files of the fallback family, in regular/bold/italic/bold-italic order.
const SYSTEM_FALLBACK_FILES: [&str; 4] = [
    "DejaVuSans.ttf",
    "DejaVuSans-Bold.ttf",
    "DejaVuSans-Oblique.ttf",
    "DejaVuSans-BoldOblique.ttf",
];

fn push_unique(candidates: &mut Vec<PathBuf>, candidate: PathBuf) {
    if !candidates.contains(&candidate) {
        candidates.push(candidate);
    }
}

fn font_directory_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(path) = env::var_os(FONTS_DIR_ENV) {
        if !path.is_empty() {
            candidates.push(PathBuf::from(path));
        }
    }

    if let Some(bin_dir) = env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
    {
        push_unique(&mut candidates, bin_dir.join("assets/fonts"));
    }

    push_unique(
        &mut candidates,
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts"),
    );

    candidates
}

fn has_all_files(directory: &Path, files: &[&str]) -> bool {
    files.iter().all(|name| directory.join(name).is_file())
}

fn not_found(message: String) -> Error {
    Error::new(
        message,
        io::Error::new(io::ErrorKind::NotFound, "font files not found"),
    )
}

fn resolve_font_directory() -> Result<PathBuf, Error> {
    let candidates = font_directory_candidates();

    if let Some(found) = candidates
        .iter()
        .find(|candidate| has_all_files(candidate, FONT_FILES))
    {
        debug!("using fonts from {}", found.display());
        return Ok(found.clone());
    }

    let checked = candidates
        .iter()
        .map(|candidate| candidate.display().to_string())
        .collect::<Vec<_>>()
        .join(", ");
    Err(not_found(format!(
        "Unable to locate the {} font family. Checked: {}. Set {} to a directory containing {}.",
        DEFAULT_FONT_FAMILY_NAME,
        checked,
        FONTS_DIR_ENV,
        FONT_FILES.join(", ")
    )))
}

fn system_fallback_font_family() -> Result<FontFamily<FontData>, Error> {
    let directory = SYSTEM_FALLBACK_DIRS
        .iter()
        .map(Path::new)
        .find(|dir| has_all_files(dir, &SYSTEM_FALLBACK_FILES))
        .ok_or_else(|| {
            not_found(format!(
                "{} not found in any of: {}",
                SYSTEM_FALLBACK_FAMILY_NAME,
                SYSTEM_FALLBACK_DIRS.join(", ")
            ))
        })?;

    let [regular, bold, italic, bold_italic] =
        SYSTEM_FALLBACK_FILES.map(|file| directory.join(file));
    Ok(FontFamily {
        regular: FontData::load(&regular, None)?,
        bold: FontData::load(&bold, None)?,
        italic: FontData::load(&italic, None)?,
        bold_italic: FontData::load(&bold_italic, None)?,
    })
}

fn fonts_missing(err: &Error) -> bool {
    matches!(
        err.kind(),
        ErrorKind::IoError(io_err) if io_err.kind() == io::ErrorKind::NotFound
    )
}

/// Loads the Roboto family, falling back to the system DejaVu Sans family
/// when Roboto cannot be found.
pub fn default_font_family() -> Result<FontFamily<FontData>, Error> {
    let primary = resolve_font_directory()
        .and_then(|directory| fonts::from_files(&directory, DEFAULT_FONT_FAMILY_NAME, None));

    match primary {
        Ok(family) => Ok(family),
        Err(err) if fonts_missing(&err) => match system_fallback_font_family() {
            Ok(family) => {
                warn!(
                    "{} unavailable ({}); falling back to '{}'.",
                    DEFAULT_FONT_FAMILY_NAME, err, SYSTEM_FALLBACK_FAMILY_NAME
                );
                Ok(family)
            }
            Err(fallback_err) => {
                warn!(
                    "{} unavailable ({}); system fallback failed: {}",
                    DEFAULT_FONT_FAMILY_NAME, err, fallback_err
                );
                Err(err)
            }
        },
        Err(err) => Err(err),
    }
}

/// Indicates whether [`default_font_family`] can find a usable family.
pub fn default_fonts_available() -> bool {
    resolve_font_directory().is_ok()
        || SYSTEM_FALLBACK_DIRS
            .iter()
            .any(|dir| has_all_files(Path::new(dir), &SYSTEM_FALLBACK_FILES))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_assets_are_always_a_candidate() {
        let expected = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets/fonts");
        assert!(font_directory_candidates().contains(&expected));
    }

    #[test]
    fn missing_directory_has_no_files() {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("does-not-exist");
        assert!(!has_all_files(&dir, FONT_FILES));
    }

    #[test]
    fn not_found_errors_count_as_missing_fonts() {
        assert!(fonts_missing(&not_found("gone".to_owned())));
    }
}
