#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure sample decoding system for Maze Atlas.

use maze_atlas_core::{FloorThreshold, SurveyGrid};
use maze_atlas_survey::{query, Survey};

/// Decodes the survey's flat code sequence into the half-resolution
/// survey grid.
///
/// Each code is classified against `threshold` and the resulting cells are
/// chunked into rows as wide as the configured map. The survey's
/// construction-time invariant guarantees the chunks divide evenly, one
/// survey row per pair of map rows.
#[must_use]
pub fn decode(survey: &Survey, threshold: FloorThreshold) -> SurveyGrid {
    let size = query::size(survey);
    let cells = query::codes(survey)
        .iter()
        .map(|&code| threshold.classify(code))
        .collect();

    SurveyGrid::new(size.columns(), cells)
}
