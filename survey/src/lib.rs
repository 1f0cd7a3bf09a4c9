#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative storage for the sampled maze survey.
//!
//! The survey is constructed once from externally sourced codes, validated
//! at that boundary, and never mutated afterwards. Systems read it through
//! the [`query`] functions and respond exclusively with freshly built
//! grids.

use std::{error::Error, fmt};

use maze_atlas_core::{GridSize, SurveyCode};

/// Validated, immutable sampled input covering one maze.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Survey {
    codes: Vec<SurveyCode>,
    size: GridSize,
}

impl Survey {
    /// Builds a survey after checking that the code count covers the
    /// configured grid.
    ///
    /// The survey samples the maze at half vertical resolution, so a
    /// `columns` x `rows` map requires exactly
    /// `columns * ceil(rows / 2)` codes. Any other count means the data
    /// does not describe a maze of the expected dimensions, and no
    /// reconstruction must be attempted from it.
    pub fn new(codes: Vec<SurveyCode>, size: GridSize) -> Result<Self, SurveyError> {
        let expected = size.expected_code_count();
        if codes.len() != expected {
            return Err(SurveyError::CodeCountMismatch {
                expected,
                actual: codes.len(),
                size,
            });
        }

        Ok(Self { codes, size })
    }
}

/// Errors raised while constructing a survey.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SurveyError {
    /// The supplied code sequence does not cover the configured grid.
    CodeCountMismatch {
        /// Number of codes the grid requires.
        expected: usize,
        /// Number of codes actually supplied.
        actual: usize,
        /// Dimensions the codes were checked against.
        size: GridSize,
    },
}

impl fmt::Display for SurveyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CodeCountMismatch {
                expected,
                actual,
                size,
            } => {
                write!(
                    f,
                    "survey supplied {actual} codes but a {}x{} map requires {expected}",
                    size.columns(),
                    size.rows()
                )
            }
        }
    }
}

impl Error for SurveyError {}

/// Read-only access to the survey for systems.
pub mod query {
    use super::Survey;
    use maze_atlas_core::{GridSize, SurveyCode};

    /// Codes captured by the survey in row-major order.
    #[must_use]
    pub fn codes(survey: &Survey) -> &[SurveyCode] {
        &survey.codes
    }

    /// Dimensions of the map the survey covers.
    #[must_use]
    pub fn size(survey: &Survey) -> GridSize {
        survey.size
    }

    /// Number of sampled rows the survey contains.
    #[must_use]
    pub fn survey_rows(survey: &Survey) -> u32 {
        survey.size.survey_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::{query, Survey, SurveyError};
    use maze_atlas_core::{GridSize, SurveyCode};

    fn codes(values: &[i64]) -> Vec<SurveyCode> {
        values.iter().copied().map(SurveyCode::new).collect()
    }

    #[test]
    fn survey_accepts_an_exactly_covering_code_sequence() {
        let size = GridSize::new(3, 3);
        let survey = Survey::new(codes(&[1, 40, 2, 50, 3, 60]), size).expect("covering codes");

        assert_eq!(query::size(&survey), size);
        assert_eq!(query::survey_rows(&survey), 2);
        assert_eq!(query::codes(&survey).len(), 6);
        assert_eq!(query::codes(&survey)[1], SurveyCode::new(40));
    }

    #[test]
    fn survey_rejects_a_truncated_code_sequence() {
        let size = GridSize::new(3, 3);
        let error = Survey::new(codes(&[1, 40, 2, 50, 3]), size).expect_err("short codes");

        assert_eq!(
            error,
            SurveyError::CodeCountMismatch {
                expected: 6,
                actual: 5,
                size,
            }
        );
    }

    #[test]
    fn survey_rejects_a_surplus_code_sequence() {
        let size = GridSize::new(2, 3);
        let error = Survey::new(codes(&[1, 2, 3, 4, 5]), size).expect_err("long codes");

        assert!(matches!(
            error,
            SurveyError::CodeCountMismatch {
                expected: 4,
                actual: 5,
                ..
            }
        ));
    }

    #[test]
    fn empty_survey_of_an_empty_grid_is_valid() {
        let survey = Survey::new(Vec::new(), GridSize::new(0, 0)).expect("degenerate survey");

        assert!(query::codes(&survey).is_empty());
    }

    #[test]
    fn mismatch_error_names_both_counts() {
        let error = Survey::new(Vec::new(), GridSize::new(39, 39)).expect_err("empty codes");

        assert_eq!(
            error.to_string(),
            "survey supplied 0 codes but a 39x39 map requires 780"
        );
    }
}
