use maze_atlas_core::{
    Cell, CellCoord, GridSize, MapCell, ParityClass, Provenance, SurveyGrid,
};
use maze_atlas_system_composite::{composite, raw_row_index, DoubledView};
use maze_atlas_system_parity::synthesize;

fn two_row_survey_grid() -> SurveyGrid {
    SurveyGrid::new(
        3,
        vec![
            Cell::Floor,
            Cell::Wall,
            Cell::Floor,
            Cell::Wall,
            Cell::Floor,
            Cell::Wall,
        ],
    )
}

#[test]
fn raw_row_index_pairs_consecutive_map_rows() {
    assert_eq!(raw_row_index(0), 0);
    assert_eq!(raw_row_index(1), 0);
    assert_eq!(raw_row_index(2), 1);
    assert_eq!(raw_row_index(3), 1);
    assert_eq!(raw_row_index(38), 19);
}

#[test]
fn odd_map_heights_reuse_the_last_survey_row() {
    // Rows 2 and 3 share survey row 1; a height of 3 stops after the first.
    assert_eq!(raw_row_index(2), raw_row_index(3));
}

#[test]
fn doubled_view_maps_rows_through_the_index_function() {
    let survey = two_row_survey_grid();
    let doubled = DoubledView::new(&survey, 3);

    assert_eq!(doubled.columns(), 3);
    assert_eq!(doubled.rows(), 3);
    assert_eq!(doubled.cell(CellCoord::new(0, 0)), Some(Cell::Floor));
    assert_eq!(doubled.cell(CellCoord::new(0, 1)), Some(Cell::Floor));
    assert_eq!(doubled.cell(CellCoord::new(0, 2)), Some(Cell::Wall));
    assert_eq!(doubled.cell(CellCoord::new(1, 2)), Some(Cell::Floor));
}

#[test]
fn doubled_view_rejects_coordinates_outside_its_span() {
    let survey = two_row_survey_grid();
    let doubled = DoubledView::new(&survey, 3);

    assert_eq!(doubled.cell(CellCoord::new(0, 3)), None);
    assert_eq!(doubled.cell(CellCoord::new(3, 0)), None);
}

#[test]
fn doubled_view_materializes_for_diagnostics() {
    let survey = two_row_survey_grid();
    let doubled = DoubledView::new(&survey, 4);

    let materialized = doubled.to_survey_grid();
    let rows: Vec<&[Cell]> = materialized.iter_rows().collect();

    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0], rows[1]);
    assert_eq!(rows[2], rows[3]);
    assert_eq!(rows[0], &[Cell::Floor, Cell::Wall, Cell::Floor]);
    assert_eq!(rows[2], &[Cell::Wall, Cell::Floor, Cell::Wall]);
}

#[test]
fn composite_resolves_the_three_by_three_scenario() {
    let survey = SurveyGrid::new(
        3,
        vec![
            Cell::Floor,
            Cell::Wall,
            Cell::Floor,
            Cell::Wall,
            Cell::Floor,
            Cell::Wall,
        ],
    );
    let size = GridSize::new(3, 3);
    let parity = synthesize(size);
    let doubled = DoubledView::new(&survey, size.rows());

    let map = composite(&parity, &doubled).expect("covering survey composites");

    let inferred = |kind| MapCell {
        kind,
        provenance: Provenance::Inferred,
    };
    let sampled = |kind| MapCell {
        kind,
        provenance: Provenance::Sampled,
    };

    let rows: Vec<&[MapCell]> = map.iter_rows().collect();
    assert_eq!(
        rows[0],
        &[
            inferred(Cell::Floor),
            sampled(Cell::Wall),
            inferred(Cell::Floor),
        ]
    );
    assert_eq!(
        rows[1],
        &[
            sampled(Cell::Floor),
            inferred(Cell::Wall),
            sampled(Cell::Floor),
        ]
    );
    assert_eq!(
        rows[2],
        &[
            inferred(Cell::Floor),
            sampled(Cell::Floor),
            inferred(Cell::Floor),
        ]
    );
}

#[test]
fn composite_samples_exactly_the_boundary_class() {
    let survey = two_row_survey_grid();
    let size = GridSize::new(3, 4);
    let parity = synthesize(size);
    let doubled = DoubledView::new(&survey, size.rows());

    let map = composite(&parity, &doubled).expect("covering survey composites");

    for row in 0..size.rows() {
        for column in 0..size.columns() {
            let coord = CellCoord::new(column, row);
            let cell = map.cell(coord).expect("composite map is fully resolved");
            let expected = match ParityClass::of(coord) {
                ParityClass::Boundary => Provenance::Sampled,
                _ => Provenance::Inferred,
            };

            assert_eq!(cell.provenance, expected, "coordinate {coord:?}");
        }
    }
}

#[test]
fn composite_fails_when_the_survey_does_not_cover_the_grid() {
    let survey = SurveyGrid::new(3, vec![Cell::Floor, Cell::Wall, Cell::Floor]);
    let size = GridSize::new(3, 4);
    let parity = synthesize(size);
    let doubled = DoubledView::new(&survey, size.rows());

    // Map rows 2 and 3 need survey row 1, which the grid lacks.
    assert_eq!(composite(&parity, &doubled), None);
}
