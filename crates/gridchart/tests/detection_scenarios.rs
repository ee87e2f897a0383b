//! End-to-end detection on small hand-built grids

use gridchart::prelude::*;
use gridchart::{locate, LogicalOp};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn points(values: &[f64]) -> Vec<(usize, CellValue)> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| (i + 1, CellValue::Number(v)))
        .collect()
}

fn tick_labels(result: &ConversionResult) -> Vec<CellValue> {
    result
        .ticks
        .xaxis
        .ticks
        .iter()
        .map(|(_, label)| label.clone())
        .collect()
}

/// Title cell, month header row, named series rows
#[test]
fn test_titled_grid_with_named_rows() {
    let grid = Grid::from_rows(vec![
        vec![
            CellValue::from("Title"),
            CellValue::from("Jan"),
            CellValue::from("Feb"),
            CellValue::from("Mar"),
        ],
        vec![
            CellValue::from("Sales"),
            CellValue::from(10),
            CellValue::from(20),
            CellValue::from(15),
        ],
        vec![
            CellValue::from("Costs"),
            CellValue::from(5),
            CellValue::from(8),
            CellValue::from(7),
        ],
    ]);

    let detection = detect(&grid, &ConvertOptions::default());
    assert_eq!(detection.position.top, 1);
    assert_eq!(detection.position.left, 1);
    assert_eq!(detection.direction, Direction::ByRow);

    let result = convert(&grid);
    assert_eq!(result.data.len(), 2);
    assert_eq!(result.data[0].label, CellValue::from("Sales"));
    assert_eq!(result.data[0].data, points(&[10.0, 20.0, 15.0]));
    assert_eq!(result.data[1].label, CellValue::from("Costs"));
    assert_eq!(result.data[1].data, points(&[5.0, 8.0, 7.0]));
    assert_eq!(
        result.ticks.xaxis.ticks,
        vec![
            (1, CellValue::from("Jan")),
            (2, CellValue::from("Feb")),
            (3, CellValue::from("Mar")),
        ]
    );
}

/// Category column down the left, one series per column
#[test]
fn test_named_columns_are_series() {
    let grid = Grid::from_rows(vec![
        vec!["Month", "Sales", "Costs"],
        vec!["Jan", "10", "5"],
        vec!["Feb", "20", "8"],
        vec!["Mar", "15", "7"],
    ]);

    let result = convert(&grid);
    let labels: Vec<_> = result.data.iter().map(|s| s.label.clone()).collect();
    assert_eq!(labels, vec![CellValue::from("Sales"), CellValue::from("Costs")]);
    assert_eq!(result.data[0].data, points(&[10.0, 20.0, 15.0]));
    assert_eq!(
        tick_labels(&result),
        vec![
            CellValue::from("Jan"),
            CellValue::from("Feb"),
            CellValue::from("Mar"),
        ]
    );
}

#[test]
fn test_all_numeric_grid_uses_index_ticks() {
    let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);

    let detection = detect(&grid, &ConvertOptions::default());
    assert_eq!(detection.position.top, 0);
    assert_eq!(detection.position.left, 0);

    let result = convert(&grid);
    assert_eq!(
        result.ticks.xaxis.ticks,
        vec![
            (1, CellValue::from(1)),
            (2, CellValue::from(2)),
            (3, CellValue::from(3)),
        ]
    );
}

#[test]
fn test_single_row_grid() {
    let grid = Grid::from_rows(vec![vec!["Sales", "10", "20"]]);
    let detection = detect(&grid, &ConvertOptions::default());
    assert_eq!(detection.position.top, 0);
    assert_eq!(detection.position.left, 1);
    assert_eq!(detection.direction, Direction::ByColumn);

    let result = convert(&grid);
    let labels: Vec<_> = result.data.iter().map(|s| s.label.clone()).collect();
    assert_eq!(labels, vec![CellValue::from("10"), CellValue::from("20")]);
    assert_eq!(result.data[0].data, points(&[10.0]));
    assert_eq!(result.data[1].data, points(&[20.0]));
    assert_eq!(result.ticks.xaxis.ticks, vec![(1, CellValue::from("Sales"))]);
}

#[test]
fn test_leading_blank_rows_are_skipped() {
    let grid = Grid::from_rows(vec![
        vec![],
        vec![],
        vec!["Title", "A", "B"],
        vec!["x", "1", "2"],
        vec!["y", "3", "5"],
        vec!["z", "4", "9"],
        vec!["w", "6", "7"],
    ]);

    let detection = detect(&grid, &ConvertOptions::default());
    assert_eq!(detection.position.top, 3);
    assert_eq!(detection.position.left, 1);
    assert_eq!(detection.direction, Direction::ByRow);

    let result = convert(&grid);
    let labels: Vec<_> = result.data.iter().map(|s| s.label.clone()).collect();
    assert_eq!(
        labels,
        vec![
            CellValue::from("x"),
            CellValue::from("y"),
            CellValue::from("z"),
            CellValue::from("w"),
        ]
    );
    assert_eq!(result.data[0].data, points(&[1.0, 2.0]));
    assert_eq!(
        result.ticks.xaxis.ticks,
        vec![(1, CellValue::from("A")), (2, CellValue::from("B"))]
    );
}

#[test]
fn test_infinity_text_stays_raw() {
    let grid = Grid::from_rows(vec![
        vec!["Title", "A", "B"],
        vec!["Sales", "inf", "3"],
        vec!["Costs", "4", "5"],
    ]);

    let result = convert(&grid);
    let values: Vec<&CellValue> = result
        .data
        .iter()
        .flat_map(|s| s.data.iter().map(|(_, v)| v))
        .collect();
    assert!(values.contains(&&CellValue::from("inf")));
    assert!(values
        .iter()
        .all(|v| v.as_number().map_or(true, f64::is_finite)));
}

#[test]
fn test_single_column_grid() {
    let grid = Grid::from_rows(vec![vec!["Sales"], vec!["10"], vec!["20"]]);
    let detection = detect(&grid, &ConvertOptions::default());
    assert_eq!(detection.position.left, 0);
}

#[test]
fn test_jagged_grid_treats_missing_cells_as_absent() {
    let grid = Grid::from_rows(vec![
        vec!["", "North", "South"],
        vec!["Q1", "10", "3"],
        vec!["Q2", "12"],
        vec!["Q3", "9", "4"],
        vec!["Q4", "15", "2"],
    ]);

    let detection = detect(&grid, &ConvertOptions::default());
    assert_eq!(detection.position.top, 1);
    assert_eq!(detection.position.left, 1);
    assert_eq!(detection.direction, Direction::ByColumn);

    let result = convert(&grid);
    let south = &result.data[1];
    assert_eq!(south.label, CellValue::from("South"));
    assert_eq!(south.data[1], (2, CellValue::Empty));
    assert!(south
        .data
        .iter()
        .all(|(_, v)| *v != CellValue::Number(0.0)));
}

#[test]
fn test_unknown_operator_is_rejected() {
    let err = "nor".parse::<LogicalOp>().unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
}

#[cfg(feature = "serde")]
#[test]
fn test_result_serializes_for_renderer() {
    let grid = Grid::from_rows(vec![
        vec!["Title", "Jan", "Feb"],
        vec!["Sales", "10", "20"],
        vec!["Costs", "5", "8"],
    ]);
    let json = serde_json::to_value(convert(&grid)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "data": [
                {"label": "Sales", "data": [[1, 10], [2, 20]]},
                {"label": "Costs", "data": [[1, 5], [2, 8]]},
            ],
            "ticks": {"xaxis": {"ticks": [[1, "Jan"], [2, "Feb"]]}},
        })
    );
}

#[cfg(feature = "serde")]
#[test]
fn test_infinity_text_serializes_as_string() {
    let grid = Grid::from_rows(vec![vec!["Sales", "inf", "3"], vec!["Costs", "4", "5"]]);
    let json = serde_json::to_string(&convert(&grid)).unwrap();
    assert!(json.contains(r#""inf""#));
    assert!(!json.contains("null"));
}

fn cell() -> impl Strategy<Value = CellValue> {
    prop_oneof![
        Just(CellValue::Empty),
        "[a-z]{1,4}".prop_map(CellValue::from),
        (0i32..100).prop_map(CellValue::from),
    ]
}

fn jagged_grid() -> impl Strategy<Value = Grid> {
    proptest::collection::vec(proptest::collection::vec(cell(), 1..6), 1..6).prop_map(Grid::from)
}

proptest! {
    #[test]
    fn prop_position_within_bounds(grid in jagged_grid()) {
        let p = locate(&grid);
        prop_assert!(p.top <= p.bottom && p.bottom <= grid.height());
        prop_assert!(p.left <= p.right && p.right <= grid.width());
    }

    #[test]
    fn prop_series_count_follows_orientation(grid in jagged_grid()) {
        let detection = detect(&grid, &ConvertOptions::default());
        let result = convert(&grid);
        let p = detection.position;
        let expected = match detection.direction {
            Direction::ByColumn => grid.row_len(p.top).saturating_sub(p.left),
            Direction::ByRow => grid.height() - p.top,
        };
        prop_assert_eq!(result.data.len(), expected);
    }

    #[test]
    fn prop_tick_indices_are_contiguous_from_one(grid in jagged_grid()) {
        let result = convert(&grid);
        for (i, (index, _)) in result.ticks.xaxis.ticks.iter().enumerate() {
            prop_assert_eq!(*index, i + 1);
        }
        for series in &result.data {
            for (i, (index, _)) in series.data.iter().enumerate() {
                prop_assert_eq!(*index, i + 1);
            }
        }
    }
}
