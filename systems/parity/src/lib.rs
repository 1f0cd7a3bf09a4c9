#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure parity synthesis system for Maze Atlas.
//!
//! The parity grid depends on the map dimensions alone, never on sampled
//! data: the surveyed maze is built on a lattice where every visited cell
//! sits at 1-based odd/odd coordinates and every corner between four cells
//! is solid. Two marker grids capture those two facts separately and are
//! merged into the full parity grid.

use maze_atlas_core::{Cell, CellCoord, GridSize, ParityClass, ParityGrid};

/// Marks every interior coordinate as known floor and leaves the rest
/// undetermined.
#[must_use]
pub fn interior_floors(size: GridSize) -> ParityGrid {
    grid_from_rule(size, |class| match class {
        ParityClass::Interior => Some(Cell::Floor),
        _ => None,
    })
}

/// Marks every corner coordinate as inferred wall and leaves the rest
/// undetermined.
#[must_use]
pub fn corner_walls(size: GridSize) -> ParityGrid {
    grid_from_rule(size, |class| match class {
        ParityClass::Corner => Some(Cell::Wall),
        _ => None,
    })
}

/// Merges two parity marker grids, preferring cells `primary` determines.
///
/// Both grids must cover the same dimensions; coordinates beyond the
/// shorter grid stay undetermined.
#[must_use]
pub fn merge(primary: &ParityGrid, secondary: &ParityGrid) -> ParityGrid {
    let cells = primary
        .cells()
        .iter()
        .zip(secondary.cells())
        .map(|(first, second)| first.or(*second))
        .collect();

    ParityGrid::new(primary.columns(), cells)
}

/// Synthesizes the full parity grid for the provided dimensions.
///
/// Interior cells come out as floor, corners as wall, and boundary cells
/// stay undetermined for the compositor to resolve from the sample.
#[must_use]
pub fn synthesize(size: GridSize) -> ParityGrid {
    merge(&interior_floors(size), &corner_walls(size))
}

fn grid_from_rule<F>(size: GridSize, rule: F) -> ParityGrid
where
    F: Fn(ParityClass) -> Option<Cell>,
{
    let mut cells = Vec::with_capacity(size.cell_count());
    for row in 0..size.rows() {
        for column in 0..size.columns() {
            cells.push(rule(ParityClass::of(CellCoord::new(column, row))));
        }
    }

    ParityGrid::new(size.columns(), cells)
}
