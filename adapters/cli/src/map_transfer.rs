#![allow(clippy::missing_errors_doc)]

use std::{error::Error, fmt};

use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use maze_atlas_core::{Cell, CellCoord, MazeGrid};
use serde::{Deserialize, Serialize};

const SNAPSHOT_DOMAIN: &str = "mazemap";
const SNAPSHOT_VERSION: &str = "v1";

/// Identifier prefix emitted before the encoded snapshot payload.
pub(crate) const SNAPSHOT_HEADER: &str = "mazemap:v1";
/// Delimiter used to separate the prefix, grid dimensions and payload.
const FIELD_DELIMITER: char = ':';

/// Snapshot of a reconstructed map suitable for single-line transfer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct MapSnapshot {
    /// Number of map columns covered by the snapshot.
    pub columns: u32,
    /// Number of map rows covered by the snapshot.
    pub rows: u32,
    /// Resolved cells in row-major rows.
    pub cells: Vec<Vec<Cell>>,
}

impl MapSnapshot {
    /// Captures a snapshot of the provided composite map.
    #[must_use]
    pub(crate) fn capture(map: &MazeGrid) -> Self {
        let cells = map
            .iter_rows()
            .map(|row| row.iter().map(|cell| cell.kind).collect())
            .collect();

        Self {
            columns: map.columns(),
            rows: map.rows(),
            cells,
        }
    }

    /// Encodes the snapshot into a single-line string suitable for
    /// clipboard transfer.
    #[must_use]
    pub(crate) fn encode(&self) -> String {
        let payload = SerializablePayload {
            cells: self.cells.clone(),
        };
        let json = serde_json::to_vec(&payload).expect("map snapshot serialization never fails");
        let encoded = STANDARD_NO_PAD.encode(json);
        format!("{SNAPSHOT_HEADER}:{}x{}:{encoded}", self.columns, self.rows)
    }

    /// Decodes a snapshot from the provided string representation.
    pub(crate) fn decode(value: &str) -> Result<Self, MapTransferError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(MapTransferError::EmptyPayload);
        }

        let mut parts = trimmed.split(FIELD_DELIMITER);
        let domain = parts.next().ok_or(MapTransferError::MissingPrefix)?;
        let version = parts.next().ok_or(MapTransferError::MissingVersion)?;
        let dimensions = parts.next().ok_or(MapTransferError::MissingDimensions)?;
        let payload = parts.next().ok_or(MapTransferError::MissingPayload)?;

        if domain != SNAPSHOT_DOMAIN {
            return Err(MapTransferError::InvalidPrefix(domain.to_owned()));
        }
        if version != SNAPSHOT_VERSION {
            return Err(MapTransferError::UnsupportedVersion(version.to_owned()));
        }

        let (columns, rows) = parse_dimensions(dimensions)?;
        let bytes = STANDARD_NO_PAD
            .decode(payload.as_bytes())
            .map_err(MapTransferError::InvalidEncoding)?;
        let decoded: SerializablePayload =
            serde_json::from_slice(&bytes).map_err(MapTransferError::InvalidPayload)?;

        let row_count = decoded.cells.len();
        let widths_match = decoded
            .cells
            .iter()
            .all(|row| row.len() == columns as usize);
        if row_count != rows as usize || !widths_match {
            return Err(MapTransferError::GeometryMismatch { columns, rows });
        }

        Ok(Self {
            columns,
            rows,
            cells: decoded.cells,
        })
    }

    /// Reports whether the snapshot's cells match the provided map.
    ///
    /// Provenance is presentation metadata and is ignored; only the
    /// resolved kinds are compared.
    #[must_use]
    pub(crate) fn matches(&self, map: &MazeGrid) -> bool {
        if self.columns != map.columns() || self.rows != map.rows() {
            return false;
        }

        for (row_index, row) in self.cells.iter().enumerate() {
            for (column_index, &kind) in row.iter().enumerate() {
                let coord = CellCoord::new(column_index as u32, row_index as u32);
                if map.cell(coord).map(|cell| cell.kind) != Some(kind) {
                    return false;
                }
            }
        }

        true
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializablePayload {
    cells: Vec<Vec<Cell>>,
}

/// Errors that can occur while decoding map transfer strings.
#[derive(Debug)]
pub(crate) enum MapTransferError {
    /// The provided string was empty or contained only whitespace.
    EmptyPayload,
    /// The prefix segment was missing from the encoded snapshot.
    MissingPrefix,
    /// The encoded snapshot did not contain a version segment.
    MissingVersion,
    /// The encoded snapshot did not include grid dimensions.
    MissingDimensions,
    /// The encoded snapshot did not include the payload segment.
    MissingPayload,
    /// The encoded snapshot used an unexpected prefix segment.
    InvalidPrefix(String),
    /// The encoded snapshot used an unsupported version identifier.
    UnsupportedVersion(String),
    /// The grid dimensions could not be parsed from the encoded snapshot.
    InvalidDimensions(String),
    /// The base64 payload could not be decoded.
    InvalidEncoding(base64::DecodeError),
    /// The decoded payload could not be deserialised.
    InvalidPayload(serde_json::Error),
    /// The decoded rows do not match the dimensions in the header.
    GeometryMismatch {
        /// Column count announced by the header.
        columns: u32,
        /// Row count announced by the header.
        rows: u32,
    },
}

impl fmt::Display for MapTransferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPayload => write!(f, "snapshot payload was empty"),
            Self::MissingPrefix => write!(f, "map snapshot is missing the prefix"),
            Self::MissingVersion => write!(f, "map snapshot is missing the version"),
            Self::MissingDimensions => write!(f, "map snapshot is missing the grid dimensions"),
            Self::MissingPayload => write!(f, "map snapshot is missing the payload"),
            Self::InvalidPrefix(prefix) => {
                write!(f, "snapshot prefix '{prefix}' is not supported")
            }
            Self::UnsupportedVersion(version) => {
                write!(f, "snapshot version '{version}' is not supported")
            }
            Self::InvalidDimensions(dimensions) => {
                write!(f, "could not parse grid dimensions '{dimensions}'")
            }
            Self::InvalidEncoding(error) => {
                write!(f, "could not decode snapshot payload: {error}")
            }
            Self::InvalidPayload(error) => {
                write!(f, "could not parse snapshot payload: {error}")
            }
            Self::GeometryMismatch { columns, rows } => {
                write!(
                    f,
                    "snapshot payload does not describe a {columns}x{rows} map"
                )
            }
        }
    }
}

impl Error for MapTransferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidEncoding(error) => Some(error),
            Self::InvalidPayload(error) => Some(error),
            _ => None,
        }
    }
}

fn parse_dimensions(dimensions: &str) -> Result<(u32, u32), MapTransferError> {
    let (columns, rows) = dimensions
        .split_once(['x', 'X'])
        .ok_or_else(|| MapTransferError::InvalidDimensions(dimensions.to_owned()))?;

    let columns = columns
        .trim()
        .parse::<u32>()
        .map_err(|_| MapTransferError::InvalidDimensions(dimensions.to_owned()))?;
    let rows = rows
        .trim()
        .parse::<u32>()
        .map_err(|_| MapTransferError::InvalidDimensions(dimensions.to_owned()))?;

    if columns == 0 || rows == 0 {
        return Err(MapTransferError::InvalidDimensions(dimensions.to_owned()));
    }

    Ok((columns, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use maze_atlas_core::{MapCell, Provenance};

    fn checkerboard_map() -> MazeGrid {
        let cell = |kind, provenance| MapCell { kind, provenance };
        MazeGrid::new(
            2,
            vec![
                cell(Cell::Floor, Provenance::Inferred),
                cell(Cell::Wall, Provenance::Sampled),
                cell(Cell::Wall, Provenance::Sampled),
                cell(Cell::Floor, Provenance::Inferred),
            ],
        )
    }

    #[test]
    fn round_trip_through_the_transfer_string() {
        let map = checkerboard_map();
        let snapshot = MapSnapshot::capture(&map);

        let encoded = snapshot.encode();
        assert!(encoded.starts_with(&format!("{SNAPSHOT_HEADER}:2x2:")));

        let decoded = MapSnapshot::decode(&encoded).expect("snapshot decodes");
        assert_eq!(snapshot, decoded);
        assert!(decoded.matches(&map));
    }

    #[test]
    fn matches_ignores_provenance_but_not_kind() {
        let map = checkerboard_map();
        let mut snapshot = MapSnapshot::capture(&map);
        snapshot.cells[0][0] = Cell::Wall;

        assert!(!snapshot.matches(&map));
    }

    #[test]
    fn decode_rejects_foreign_prefixes() {
        let error = MapSnapshot::decode("maze:v1:2x2:e30").expect_err("foreign prefix");

        assert!(matches!(error, MapTransferError::InvalidPrefix(prefix) if prefix == "maze"));
    }

    #[test]
    fn decode_rejects_future_versions() {
        let error = MapSnapshot::decode("mazemap:v2:2x2:e30").expect_err("future version");

        assert!(matches!(
            error,
            MapTransferError::UnsupportedVersion(version) if version == "v2"
        ));
    }

    #[test]
    fn decode_rejects_payloads_that_disagree_with_the_header() {
        let encoded = MapSnapshot::capture(&checkerboard_map()).encode();
        let tampered = encoded.replace(":2x2:", ":2x3:");

        let error = MapSnapshot::decode(&tampered).expect_err("tampered dimensions");

        assert!(matches!(
            error,
            MapTransferError::GeometryMismatch { columns: 2, rows: 3 }
        ));
    }

    #[test]
    fn decode_rejects_empty_strings() {
        assert!(matches!(
            MapSnapshot::decode("  "),
            Err(MapTransferError::EmptyPayload)
        ));
    }
}
