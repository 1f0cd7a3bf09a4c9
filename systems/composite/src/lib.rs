#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure compositing system for Maze Atlas.
//!
//! Two pieces live here: the doubling expansion that presents the
//! half-resolution survey grid at full map height, and the compositor that
//! lays the parity grid over it to produce the final map.

use maze_atlas_core::{Cell, CellCoord, MapCell, MazeGrid, ParityGrid, Provenance, SurveyGrid};

/// Survey row backing the provided 0-based map row.
///
/// Each survey row spans a pair of map rows, so consecutive map rows share
/// a backing row. With an odd map height the last map row reuses the same
/// survey row as the one above it.
#[must_use]
pub const fn raw_row_index(map_row: u32) -> u32 {
    map_row / 2
}

/// Read-only view presenting the half-resolution survey grid at full map
/// height.
///
/// The view never copies or mutates the underlying grid; every lookup maps
/// the requested map row through [`raw_row_index`].
#[derive(Clone, Copy, Debug)]
pub struct DoubledView<'a> {
    survey: &'a SurveyGrid,
    rows: u32,
}

impl<'a> DoubledView<'a> {
    /// Creates a view over the provided survey grid spanning `rows` map
    /// rows.
    #[must_use]
    pub const fn new(survey: &'a SurveyGrid, rows: u32) -> Self {
        Self { survey, rows }
    }

    /// Number of map rows the view spans.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns contained in the view.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.survey.columns()
    }

    /// Sampled cell backing the provided map coordinate.
    ///
    /// Returns `None` when the coordinate lies outside the view or the
    /// survey grid does not cover the mapped row.
    #[must_use]
    pub fn cell(&self, cell: CellCoord) -> Option<Cell> {
        if cell.row() >= self.rows {
            return None;
        }

        self.survey
            .cell(CellCoord::new(cell.column(), raw_row_index(cell.row())))
    }

    /// Materializes the view into a standalone grid.
    ///
    /// Diagnostic use only; reconstruction always reads through the view.
    #[must_use]
    pub fn to_survey_grid(&self) -> SurveyGrid {
        let mut cells = Vec::new();
        for row in 0..self.rows {
            for column in 0..self.columns() {
                if let Some(cell) = self.cell(CellCoord::new(column, row)) {
                    cells.push(cell);
                }
            }
        }

        SurveyGrid::new(self.columns(), cells)
    }
}

/// Composites the parity grid over the doubled survey view.
///
/// A determined parity cell always wins; undetermined cells fall back to
/// the sampled value behind the same coordinate. The result is fully
/// resolved, with each cell tagged by its provenance.
///
/// Returns `None` when the doubled view does not cover a coordinate the
/// parity rules leave undetermined, which means the survey and the grid
/// dimensions disagree.
#[must_use]
pub fn composite(parity: &ParityGrid, doubled: &DoubledView<'_>) -> Option<MazeGrid> {
    let columns = parity.columns();
    let rows = parity.rows();

    let mut cells = Vec::with_capacity(columns as usize * rows as usize);
    for row in 0..rows {
        for column in 0..columns {
            let coord = CellCoord::new(column, row);
            let cell = match parity.resolved(coord) {
                Some(kind) => MapCell {
                    kind,
                    provenance: Provenance::Inferred,
                },
                None => MapCell {
                    kind: doubled.cell(coord)?,
                    provenance: Provenance::Sampled,
                },
            };
            cells.push(cell);
        }
    }

    Some(MazeGrid::new(columns, cells))
}
