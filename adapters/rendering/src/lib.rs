#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Terminal presentation contracts for Maze Atlas.
//!
//! This crate turns grids into strings and nothing else: no terminal I/O,
//! no process-wide toggles. The styling policy is an explicit
//! [`ColorMode`] parameter resolved into a [`Palette`] of escape-code
//! prefixes, so plain rendering falls out of the same code path with empty
//! prefixes.

use std::{error::Error, fmt};

use maze_atlas_core::{Cell, MazeGrid, ParityGrid, Provenance, SurveyGrid};

const ANSI_RED: &str = "\x1b[31m";
const ANSI_GREEN: &str = "\x1b[32m";
const ANSI_RESET: &str = "\x1b[0m";

/// Glyphs used when rendering grids as text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MapStyle {
    floor: char,
    wall: char,
    placeholder: char,
}

impl MapStyle {
    /// Default glyph for floor cells.
    pub const DEFAULT_FLOOR: char = '.';

    /// Default glyph for wall cells.
    pub const DEFAULT_WALL: char = '#';

    /// Default glyph for undetermined cells in diagnostic output.
    pub const DEFAULT_PLACEHOLDER: char = '?';

    /// Creates a style after checking that the glyphs are mutually
    /// distinct.
    ///
    /// Returns an error when any two glyphs coincide, since the rendered
    /// map would be unreadable.
    pub fn new(floor: char, wall: char, placeholder: char) -> Result<Self, RenderingError> {
        if floor == wall || floor == placeholder || wall == placeholder {
            return Err(RenderingError::IndistinctGlyphs {
                floor,
                wall,
                placeholder,
            });
        }

        Ok(Self {
            floor,
            wall,
            placeholder,
        })
    }

    /// Glyph used for floor cells.
    #[must_use]
    pub const fn floor(&self) -> char {
        self.floor
    }

    /// Glyph used for wall cells.
    #[must_use]
    pub const fn wall(&self) -> char {
        self.wall
    }

    /// Glyph used for undetermined cells in diagnostic output.
    #[must_use]
    pub const fn placeholder(&self) -> char {
        self.placeholder
    }

    /// Glyph for the provided cell kind.
    #[must_use]
    pub const fn glyph(&self, cell: Cell) -> char {
        match cell {
            Cell::Floor => self.floor,
            Cell::Wall => self.wall,
        }
    }
}

impl Default for MapStyle {
    fn default() -> Self {
        Self {
            floor: Self::DEFAULT_FLOOR,
            wall: Self::DEFAULT_WALL,
            placeholder: Self::DEFAULT_PLACEHOLDER,
        }
    }
}

/// ANSI styling policy applied while rendering.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColorMode {
    /// No escape codes; every prefix is empty.
    Plain,
    /// Inferred floors render green, inferred walls red, samples reset.
    Ansi,
}

/// Escape-code prefixes resolved from a [`ColorMode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    inferred_floor: &'static str,
    inferred_wall: &'static str,
    reset: &'static str,
}

impl Palette {
    /// Resolves the palette for the provided mode.
    #[must_use]
    pub const fn for_mode(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Plain => Self {
                inferred_floor: "",
                inferred_wall: "",
                reset: "",
            },
            ColorMode::Ansi => Self {
                inferred_floor: ANSI_GREEN,
                inferred_wall: ANSI_RED,
                reset: ANSI_RESET,
            },
        }
    }

    /// Prefix emitted before a parity-inferred cell.
    #[must_use]
    pub const fn inferred(&self, cell: Cell) -> &'static str {
        match cell {
            Cell::Floor => self.inferred_floor,
            Cell::Wall => self.inferred_wall,
        }
    }

    /// Prefix emitted before a sampled cell, and appended after each row.
    #[must_use]
    pub const fn reset(&self) -> &'static str {
        self.reset
    }
}

/// Renders the composite map as newline-joined rows.
///
/// Parity-inferred cells are styled through the palette; sampled cells
/// render with the reset prefix so the surveyed structure stays visually
/// distinct from the inferred lattice.
#[must_use]
pub fn render_map(map: &MazeGrid, style: &MapStyle, mode: ColorMode) -> String {
    let palette = Palette::for_mode(mode);
    let lines: Vec<String> = map
        .iter_rows()
        .map(|row| {
            let mut line = String::new();
            for cell in row {
                let prefix = match cell.provenance {
                    Provenance::Inferred => palette.inferred(cell.kind),
                    Provenance::Sampled => palette.reset(),
                };
                line.push_str(prefix);
                line.push(style.glyph(cell.kind));
            }
            line.push_str(palette.reset());
            line
        })
        .collect();

    lines.join("\n")
}

/// Renders a half-resolution survey grid. Diagnostic output, never
/// styled.
#[must_use]
pub fn render_survey(grid: &SurveyGrid, style: &MapStyle) -> String {
    let lines: Vec<String> = grid
        .iter_rows()
        .map(|row| row.iter().map(|&cell| style.glyph(cell)).collect())
        .collect();

    lines.join("\n")
}

/// Renders a parity grid with the placeholder glyph standing in for
/// undetermined cells. Diagnostic output.
#[must_use]
pub fn render_parity(grid: &ParityGrid, style: &MapStyle, mode: ColorMode) -> String {
    let palette = Palette::for_mode(mode);
    let lines: Vec<String> = grid
        .iter_rows()
        .map(|row| {
            let mut line = String::new();
            for cell in row {
                match cell {
                    Some(kind) => {
                        line.push_str(palette.inferred(*kind));
                        line.push(style.glyph(*kind));
                    }
                    None => {
                        line.push_str(palette.reset());
                        line.push(style.placeholder());
                    }
                }
            }
            line.push_str(palette.reset());
            line
        })
        .collect();

    lines.join("\n")
}

/// Errors that can occur when constructing rendering descriptors.
#[derive(Debug, PartialEq, Eq)]
pub enum RenderingError {
    /// The floor, wall and placeholder glyphs must be mutually distinct.
    IndistinctGlyphs {
        /// Requested floor glyph.
        floor: char,
        /// Requested wall glyph.
        wall: char,
        /// Requested placeholder glyph.
        placeholder: char,
    },
}

impl fmt::Display for RenderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndistinctGlyphs {
                floor,
                wall,
                placeholder,
            } => {
                write!(
                    f,
                    "map glyphs must be distinct (floor '{floor}', wall '{wall}', placeholder '{placeholder}')"
                )
            }
        }
    }
}

impl Error for RenderingError {}
