//! TOML configuration manifest for the maze-atlas binary.
//!
//! The manifest carries the reconstruction parameters tied to one survey
//! instance. Every field except the version is optional; omitted fields
//! fall back to the shipped 39x39 survey's values.

use std::{fs, path::Path};

use anyhow::{bail, Context, Result};
use maze_atlas_core::{FloorThreshold, GridSize};
use serde::Deserialize;

const SUPPORTED_MANIFEST_VERSION: u32 = 1;

const DEFAULT_COLUMNS: u32 = 39;
const DEFAULT_ROWS: u32 = 39;
const DEFAULT_FLOOR_THRESHOLD: i64 = 37;
const DEFAULT_OFFSET: usize = 0;

/// Reconstruction parameters resolved from the manifest and flag
/// overrides.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct AtlasConfig {
    /// Number of map columns.
    pub columns: u32,
    /// Number of map rows.
    pub rows: u32,
    /// Threshold separating floor codes from wall codes.
    pub floor_threshold: i64,
    /// Number of leading codes skipped before the survey window.
    pub offset: usize,
}

impl AtlasConfig {
    /// Dimensions of the configured map.
    pub(crate) fn size(&self) -> GridSize {
        GridSize::new(self.columns, self.rows)
    }

    /// Classification threshold for the configured survey.
    pub(crate) fn threshold(&self) -> FloorThreshold {
        FloorThreshold::new(self.floor_threshold)
    }
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            floor_threshold: DEFAULT_FLOOR_THRESHOLD,
            offset: DEFAULT_OFFSET,
        }
    }
}

#[derive(Debug, Deserialize)]
struct Manifest {
    version: u32,
    columns: Option<u32>,
    rows: Option<u32>,
    floor_threshold: Option<i64>,
    offset: Option<usize>,
}

/// Loads the manifest located at the provided path.
pub(crate) fn load_manifest(path: &Path) -> Result<AtlasConfig> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read survey manifest {}", path.display()))?;

    parse_manifest(&contents)
}

fn parse_manifest(contents: &str) -> Result<AtlasConfig> {
    let manifest: Manifest =
        toml::from_str(contents).context("failed to parse survey manifest toml contents")?;
    if manifest.version != SUPPORTED_MANIFEST_VERSION {
        bail!(
            "unsupported survey manifest version {}; expected {}",
            manifest.version,
            SUPPORTED_MANIFEST_VERSION
        );
    }

    let defaults = AtlasConfig::default();
    Ok(AtlasConfig {
        columns: manifest.columns.unwrap_or(defaults.columns),
        rows: manifest.rows.unwrap_or(defaults.rows),
        floor_threshold: manifest.floor_threshold.unwrap_or(defaults.floor_threshold),
        offset: manifest.offset.unwrap_or(defaults.offset),
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_manifest, AtlasConfig};

    #[test]
    fn minimal_manifest_falls_back_to_the_shipped_survey() {
        let config = parse_manifest("version = 1\n").expect("minimal manifest parses");

        assert_eq!(config, AtlasConfig::default());
        assert_eq!(config.columns, 39);
        assert_eq!(config.rows, 39);
        assert_eq!(config.floor_threshold, 37);
        assert_eq!(config.offset, 0);
    }

    #[test]
    fn full_manifest_overrides_every_parameter() {
        let contents = "\
version = 1
columns = 21
rows = 17
floor_threshold = 50
offset = 252
";

        let config = parse_manifest(contents).expect("full manifest parses");

        assert_eq!(
            config,
            AtlasConfig {
                columns: 21,
                rows: 17,
                floor_threshold: 50,
                offset: 252,
            }
        );
    }

    #[test]
    fn unsupported_manifest_versions_are_rejected() {
        let error = parse_manifest("version = 2\n").expect_err("future version must be rejected");

        assert!(error.to_string().contains("unsupported survey manifest version 2"));
    }

    #[test]
    fn malformed_manifests_are_rejected() {
        assert!(parse_manifest("version = \"one\"").is_err());
        assert!(parse_manifest("columns = 10\n").is_err());
    }
}
