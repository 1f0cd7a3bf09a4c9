#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that reconstructs and prints the surveyed maze
//! map.

mod config;
mod map_transfer;
mod survey_input;

use std::{fs, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use maze_atlas_core::{ParityGrid, SurveyGrid};
use maze_atlas_rendering::{render_map, render_parity, render_survey, ColorMode, MapStyle};
use maze_atlas_survey::{query, Survey};
use maze_atlas_system_composite::{composite, DoubledView};
use maze_atlas_system_decode::decode;
use maze_atlas_system_parity::{corner_walls, interior_floors, synthesize};

use crate::config::AtlasConfig;
use crate::map_transfer::MapSnapshot;

/// Command-line arguments accepted by the maze-atlas binary.
#[derive(Debug, Parser)]
#[command(
    name = "maze-atlas",
    about = "Reconstructs a maze map from a half-resolution survey"
)]
struct Args {
    /// Path to the survey code file.
    input: PathBuf,

    /// TOML manifest with grid dimensions, threshold and offset.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Overrides the number of map columns.
    #[arg(long)]
    columns: Option<u32>,

    /// Overrides the number of map rows.
    #[arg(long)]
    rows: Option<u32>,

    /// Overrides the floor classification threshold.
    #[arg(long)]
    threshold: Option<i64>,

    /// Overrides the number of leading codes skipped before the survey
    /// window.
    #[arg(long)]
    offset: Option<usize>,

    /// Disables ANSI color styling.
    #[arg(long)]
    plain: bool,

    /// Prints the decoded codes and every intermediate grid before the
    /// map.
    #[arg(long)]
    debug: bool,

    /// Prints the map as a single-line transfer snapshot instead of
    /// rendering it.
    #[arg(long)]
    export: bool,

    /// Verifies the reconstructed map against the provided transfer
    /// snapshot.
    #[arg(long, value_name = "SNAPSHOT")]
    check: Option<String>,
}

/// Entry point for the maze-atlas command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();
    let config = resolve_config(&args)?;

    let contents = fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read survey file {}", args.input.display()))?;
    let codes = survey_input::parse_codes(&contents)?;
    let window =
        survey_input::extract_window(codes, config.offset, config.size().expected_code_count())?;
    let survey = Survey::new(window, config.size())?;

    let survey_grid = decode(&survey, config.threshold());
    let parity = synthesize(config.size());
    let doubled = DoubledView::new(&survey_grid, config.size().rows());
    let map = composite(&parity, &doubled)
        .context("survey does not cover the configured grid")?;

    if let Some(snapshot) = &args.check {
        let expected = MapSnapshot::decode(snapshot)?;
        if !expected.matches(&map) {
            bail!("reconstructed map does not match the provided snapshot");
        }
        println!(
            "snapshot matches the reconstructed {}x{} map",
            map.columns(),
            map.rows()
        );
        return Ok(());
    }

    if args.export {
        println!("{}", MapSnapshot::capture(&map).encode());
        return Ok(());
    }

    let style = MapStyle::default();
    let mode = if args.plain {
        ColorMode::Plain
    } else {
        ColorMode::Ansi
    };

    if args.debug {
        print_intermediates(&survey, &survey_grid, &doubled, &parity, &style, mode);
    }
    println!("{}", render_map(&map, &style, mode));

    Ok(())
}

fn resolve_config(args: &Args) -> Result<AtlasConfig> {
    let mut config = match &args.config {
        Some(path) => config::load_manifest(path)?,
        None => AtlasConfig::default(),
    };

    if let Some(columns) = args.columns {
        config.columns = columns;
    }
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(threshold) = args.threshold {
        config.floor_threshold = threshold;
    }
    if let Some(offset) = args.offset {
        config.offset = offset;
    }

    Ok(config)
}

fn print_intermediates(
    survey: &Survey,
    survey_grid: &SurveyGrid,
    doubled: &DoubledView<'_>,
    parity: &ParityGrid,
    style: &MapStyle,
    mode: ColorMode,
) {
    let size = query::size(survey);
    let codes: Vec<String> = query::codes(survey)
        .iter()
        .map(|code| code.get().to_string())
        .collect();

    println!("codes:");
    println!("{}", codes.join(","));
    println!("survey:");
    println!("{}", render_survey(survey_grid, style));
    println!("doubled:");
    println!("{}", render_survey(&doubled.to_survey_grid(), style));
    println!("interior floors:");
    println!("{}", render_parity(&interior_floors(size), style, mode));
    println!("corner walls:");
    println!("{}", render_parity(&corner_walls(size), style, mode));
    println!("parity:");
    println!("{}", render_parity(parity, style, mode));
    println!("map:");
}
