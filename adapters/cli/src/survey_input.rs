//! Survey code file loading for the maze-atlas binary.

use anyhow::{bail, Context, Result};
use maze_atlas_core::SurveyCode;

/// Parses the survey file contents: integers separated by commas and/or
/// whitespace.
pub(crate) fn parse_codes(contents: &str) -> Result<Vec<SurveyCode>> {
    contents
        .split(|character: char| character == ',' || character.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .map(SurveyCode::new)
                .with_context(|| format!("survey file contains a non-numeric code '{token}'"))
        })
        .collect()
}

/// Extracts the window of codes the configured grid requires.
///
/// The survey may be embedded inside a larger program image; `offset`
/// skips its preamble and codes beyond the window are ignored. A window
/// shorter than `expected` is returned as-is so the survey's own
/// validation reports the mismatch.
pub(crate) fn extract_window(
    codes: Vec<SurveyCode>,
    offset: usize,
    expected: usize,
) -> Result<Vec<SurveyCode>> {
    if offset > codes.len() {
        bail!(
            "survey offset {offset} exceeds the {} codes present in the file",
            codes.len()
        );
    }

    Ok(codes.into_iter().skip(offset).take(expected).collect())
}
