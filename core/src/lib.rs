#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Maze Atlas pipeline.
//!
//! This crate defines the vocabulary that connects the survey store, the
//! pure reconstruction systems, and the presentation adapters: cell kinds,
//! coordinates and dimensions, survey codes, parity classes, and the dense
//! grid containers the pipeline produces. Systems consume immutable borrows
//! of these values and respond exclusively with freshly built grids.
//!
//! The survey's source machine addresses cells with 1-based coordinates.
//! Every type in this crate follows the usual 0-based convention instead,
//! so a 1-based odd ordinate corresponds to a 0-based even index; see
//! [`ParityClass`] for where that translation matters.

use serde::{Deserialize, Serialize};

/// Kind of a fully determined maze cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// A cell known to be passable.
    Floor,
    /// A cell known to be impassable.
    Wall,
}

/// Location of a single grid cell expressed as column and row coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellCoord {
    column: u32,
    row: u32,
}

impl CellCoord {
    /// Creates a new grid cell coordinate.
    #[must_use]
    pub const fn new(column: u32, row: u32) -> Self {
        Self { column, row }
    }

    /// Zero-based column index of the cell.
    #[must_use]
    pub const fn column(&self) -> u32 {
        self.column
    }

    /// Zero-based row index of the cell.
    #[must_use]
    pub const fn row(&self) -> u32 {
        self.row
    }
}

/// Dimensions of the reconstructed map measured in whole cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridSize {
    columns: u32,
    rows: u32,
}

impl GridSize {
    /// Creates a new grid size descriptor.
    #[must_use]
    pub const fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }

    /// Number of columns contained in the map.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows contained in the map.
    #[must_use]
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of sampled rows covering the map.
    ///
    /// Each survey row spans two map rows; a map with an odd row count
    /// still needs the trailing half-covered survey row.
    #[must_use]
    pub const fn survey_rows(&self) -> u32 {
        self.rows / 2 + self.rows % 2
    }

    /// Number of codes a well-formed survey of this map must contain.
    #[must_use]
    pub const fn expected_code_count(&self) -> usize {
        self.columns as usize * self.survey_rows() as usize
    }

    /// Total number of cells in the reconstructed map.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

/// Integer cell code captured by the survey probe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurveyCode(i64);

impl SurveyCode {
    /// Creates a new survey code with the provided sampled value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Retrieves the sampled value of the code.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

/// Threshold separating floor codes from wall codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FloorThreshold(i64);

impl FloorThreshold {
    /// Creates a new classification threshold.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Retrieves the numeric threshold value.
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }

    /// Classifies a survey code: codes strictly below the threshold are
    /// floor, codes at or above it are wall.
    #[must_use]
    pub const fn classify(&self, code: SurveyCode) -> Cell {
        if code.get() < self.0 {
            Cell::Floor
        } else {
            Cell::Wall
        }
    }
}

/// Parity classification of a map coordinate.
///
/// Stated in the survey's 1-based terms: both ordinates odd marks an
/// interior cell the probe actually visited, both even marks a structural
/// corner, and mixed parity marks a boundary cell that only the sampled
/// data can resolve. In this crate's 0-based coordinates the interior
/// therefore sits at even/even indices and the corners at odd/odd.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParityClass {
    /// Visited cell, known floor without consulting the sample.
    Interior,
    /// Cell between two interiors, resolved from the sampled data.
    Boundary,
    /// Structural corner, inferred wall without consulting the sample.
    Corner,
}

impl ParityClass {
    /// Classifies the provided coordinate.
    #[must_use]
    pub const fn of(cell: CellCoord) -> Self {
        match (cell.column() % 2 == 0, cell.row() % 2 == 0) {
            (true, true) => Self::Interior,
            (false, false) => Self::Corner,
            _ => Self::Boundary,
        }
    }
}

/// Origin of a composited cell value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Provenance {
    /// The value was inferred from coordinate parity alone.
    Inferred,
    /// The value was decoded from the sampled survey data.
    Sampled,
}

/// Single fully resolved cell of the composite map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MapCell {
    /// Resolved kind of the cell.
    pub kind: Cell,
    /// Where the resolved value came from.
    pub provenance: Provenance,
}

/// Half-resolution grid of decoded survey cells stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurveyGrid {
    columns: u32,
    cells: Vec<Cell>,
}

impl SurveyGrid {
    /// Creates a new survey grid backed by the provided row-major cells.
    #[must_use]
    pub fn new(columns: u32, cells: Vec<Cell>) -> Self {
        Self { columns, cells }
    }

    /// Number of columns contained in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of complete rows contained in the grid.
    #[must_use]
    pub fn rows(&self) -> u32 {
        row_count(self.columns, self.cells.len())
    }

    /// Returns the decoded cell at the provided coordinate, if it lies
    /// within the grid.
    #[must_use]
    pub fn cell(&self, cell: CellCoord) -> Option<Cell> {
        dense_index(self.columns, self.cells.len(), cell).map(|index| self.cells[index])
    }

    /// Iterator over the grid's rows as dense slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.columns.max(1) as usize)
    }
}

/// Full-resolution grid of parity-inferred cells.
///
/// `None` marks a coordinate the parity rules leave undetermined; the
/// sentinel never reaches the composite map.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParityGrid {
    columns: u32,
    cells: Vec<Option<Cell>>,
}

impl ParityGrid {
    /// Creates a new parity grid backed by the provided row-major cells.
    #[must_use]
    pub fn new(columns: u32, cells: Vec<Option<Cell>>) -> Self {
        Self { columns, cells }
    }

    /// Number of columns contained in the grid.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of complete rows contained in the grid.
    #[must_use]
    pub fn rows(&self) -> u32 {
        row_count(self.columns, self.cells.len())
    }

    /// Returns the determined cell at the provided coordinate.
    ///
    /// `None` is returned both for undetermined cells and for coordinates
    /// outside the grid.
    #[must_use]
    pub fn resolved(&self, cell: CellCoord) -> Option<Cell> {
        dense_index(self.columns, self.cells.len(), cell).and_then(|index| self.cells[index])
    }

    /// Dense parity cells stored in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[Option<Cell>] {
        &self.cells
    }

    /// Iterator over the grid's rows as dense slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Option<Cell>]> {
        self.cells.chunks(self.columns.max(1) as usize)
    }
}

/// Fully resolved composite map.
///
/// Every cell carries a determined kind; the parity grid's undetermined
/// sentinel is unrepresentable here.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MazeGrid {
    columns: u32,
    cells: Vec<MapCell>,
}

impl MazeGrid {
    /// Creates a new composite map backed by the provided row-major cells.
    #[must_use]
    pub fn new(columns: u32, cells: Vec<MapCell>) -> Self {
        Self { columns, cells }
    }

    /// Number of columns contained in the map.
    #[must_use]
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of complete rows contained in the map.
    #[must_use]
    pub fn rows(&self) -> u32 {
        row_count(self.columns, self.cells.len())
    }

    /// Returns the resolved cell at the provided coordinate, if it lies
    /// within the map.
    #[must_use]
    pub fn cell(&self, cell: CellCoord) -> Option<MapCell> {
        dense_index(self.columns, self.cells.len(), cell).map(|index| self.cells[index])
    }

    /// Iterator over the map's rows as dense slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[MapCell]> {
        self.cells.chunks(self.columns.max(1) as usize)
    }
}

fn row_count(columns: u32, cell_count: usize) -> u32 {
    if columns == 0 {
        return 0;
    }

    u32::try_from(cell_count / columns as usize).unwrap_or(u32::MAX)
}

fn dense_index(columns: u32, cell_count: usize, cell: CellCoord) -> Option<usize> {
    if cell.column() >= columns {
        return None;
    }

    let column = usize::try_from(cell.column()).ok()?;
    let row = usize::try_from(cell.row()).ok()?;
    let width = usize::try_from(columns).ok()?;
    let index = row.checked_mul(width)?.checked_add(column)?;

    if index < cell_count {
        Some(index)
    } else {
        None
    }
}
