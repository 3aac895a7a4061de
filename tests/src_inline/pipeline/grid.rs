use std::num::NonZeroUsize;

use super::{DisplayGrid, build_grid};

fn w(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

#[test]
fn test_build_grid_example() {
    let grid = build_grid(&["a", "b", "c"], w(2));
    assert_eq!(
        grid.rows,
        vec![
            vec!["A".to_string(), "B".to_string()],
            vec!["C".to_string(), String::new()],
        ]
    );
    assert_eq!(grid.width, 2);
}

#[test]
fn test_build_grid_empty_has_no_rows() {
    let grid = build_grid::<&str>(&[], w(8));
    assert!(grid.rows.is_empty());
    assert_eq!(grid, DisplayGrid::empty(w(8)));
}

#[test]
fn test_build_grid_row_count_and_width() {
    let names: Vec<String> = (0..29).map(|i| format!("gene{i}")).collect();
    for width in [1usize, 3, 8, 12, 29, 40] {
        let grid = build_grid(&names, w(width));
        assert_eq!(grid.rows.len(), names.len().div_ceil(width));
        assert!(grid.rows.iter().all(|row| row.len() == width));
    }
}

#[test]
fn test_build_grid_row_major_order_and_padding() {
    let names = ["esr1", "pgr", "ar", "nr3c1", "nr3c2"];
    let grid = build_grid(&names, w(4));
    let flat: Vec<&str> = grid.rows.iter().flatten().map(|s| s.as_str()).collect();
    assert_eq!(flat, vec!["ESR1", "PGR", "AR", "NR3C1", "NR3C2", "", "", ""]);
    assert_eq!(grid.filled(), 5);
}

#[test]
fn test_build_grid_exact_multiple_has_no_padding() {
    let grid = build_grid(&["a", "b", "c", "d"], w(2));
    assert_eq!(grid.rows.len(), 2);
    assert!(grid.rows.iter().flatten().all(|c| !c.is_empty()));
}
