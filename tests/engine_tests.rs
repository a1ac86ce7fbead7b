//! Move engine integration tests on the default 10x10, 10-block board.

use block_shift::analysis::{component_count, component_size, marked_cells};
use block_shift::core::{BoardConfig, BoardError, Cell, ErrorKind, Grid, Relocation};
use block_shift::rules::MoveEngine;

fn row_line(row: usize) -> Grid {
    Grid::with_marked(10, (0..10).map(|c| Cell::new(row, c)))
}

fn rows_from(grid: &Grid) -> Vec<Vec<i64>> {
    grid.to_rows()
        .into_iter()
        .map(|r| r.into_iter().map(i64::from).collect())
        .collect()
}

// =============================================================================
// Validation Scenarios
// =============================================================================

#[test]
fn test_straight_line_is_valid() {
    let engine = MoveEngine::default();
    assert_eq!(engine.validate(&row_line(0)), Ok(()));
}

#[test]
fn test_nine_blocks_wrong_count() {
    let engine = MoveEngine::default();
    let grid = Grid::with_marked(10, (0..9).map(|c| Cell::new(0, c)));
    assert_eq!(
        engine.validate(&grid),
        Err(BoardError::WrongBlockCount { expected: 10, found: 9 })
    );
}

#[test]
fn test_eleven_blocks_wrong_count() {
    let engine = MoveEngine::default();
    let mut grid = row_line(0);
    grid.set(Cell::new(1, 0), true);
    assert_eq!(engine.validate(&grid).unwrap_err().kind(), ErrorKind::WrongBlockCount);
}

#[test]
fn test_two_islands_disconnected() {
    let engine = MoveEngine::default();
    let grid = Grid::with_marked(
        10,
        (0..5).map(|c| Cell::new(0, c)).chain((0..5).map(|c| Cell::new(5, c))),
    );
    assert_eq!(
        engine.validate(&grid),
        Err(BoardError::Disconnected { expected: 10, reachable: 5, islands: 2 })
    );
}

#[test]
fn test_diagonal_touch_is_disconnected() {
    let engine = MoveEngine::default();
    // Two runs of five that only meet corner to corner.
    let grid = Grid::with_marked(
        10,
        (0..5).map(|c| Cell::new(0, c)).chain((5..10).map(|c| Cell::new(1, c))),
    );
    assert_eq!(engine.validate(&grid).unwrap_err().kind(), ErrorKind::Disconnected);
}

#[test]
fn test_malformed_rows() {
    let engine = MoveEngine::default();

    let mut rows = rows_from(&row_line(0));
    rows[3][3] = 2;
    assert_eq!(engine.validate_rows(&rows).unwrap_err().kind(), ErrorKind::MalformedShape);

    let mut rows = rows_from(&row_line(0));
    rows.pop();
    assert_eq!(engine.validate_rows(&rows).unwrap_err().kind(), ErrorKind::MalformedShape);

    let mut rows = rows_from(&row_line(0));
    rows[9].push(0);
    assert_eq!(engine.validate_rows(&rows).unwrap_err().kind(), ErrorKind::MalformedShape);
}

#[test]
fn test_wrong_dimension_square() {
    let engine = MoveEngine::default();
    let grid = Grid::with_marked(11, (0..10).map(|c| Cell::new(0, c)));
    assert_eq!(engine.validate(&grid).unwrap_err().kind(), ErrorKind::MalformedShape);
}

#[test]
fn test_validate_is_idempotent() {
    let engine = MoveEngine::default();
    let grid = row_line(4);
    let snapshot = grid.clone();
    assert_eq!(engine.validate(&grid), Ok(()));
    assert_eq!(engine.validate(&grid), Ok(()));
    assert_eq!(grid, snapshot);
}

#[test]
fn test_json_payload() {
    let engine = MoveEngine::default();
    let json = serde_json::to_string(&row_line(2)).unwrap();
    let grid: Grid = serde_json::from_str(&json).unwrap();
    assert!(engine.validate(&grid).is_ok());

    let moves = engine.enumerate_moves(&grid);
    let out = serde_json::to_value(&moves).unwrap();
    assert_eq!(out.as_array().map(Vec::len), Some(2));
}

// =============================================================================
// Move Enumeration
// =============================================================================

#[test]
fn test_line_only_endpoints_move() {
    let engine = MoveEngine::default();
    let grid = row_line(0);
    let moves = engine.enumerate_moves(&grid);

    let sources: Vec<_> = moves.sources().collect();
    assert_eq!(sources, vec![Cell::new(0, 0), Cell::new(0, 9)]);

    // (0, 0) can land under any of the nine remaining blocks.
    let left = moves.get(Cell::new(0, 0)).unwrap();
    assert_eq!(left.to, (1..10).map(|c| Cell::new(1, c)).collect::<Vec<_>>());

    let right = moves.get(Cell::new(0, 9)).unwrap();
    assert_eq!(right.to, (0..9).map(|c| Cell::new(1, c)).collect::<Vec<_>>());
}

#[test]
fn test_line_in_middle_row() {
    let engine = MoveEngine::default();
    let moves = engine.enumerate_moves(&row_line(5));

    let left = moves.get(Cell::new(5, 0)).unwrap();
    // Above and below the nine remaining blocks.
    assert_eq!(left.to.len(), 18);
    assert!(left.allows(Cell::new(4, 1)));
    assert!(left.allows(Cell::new(6, 9)));
    assert!(!left.allows(Cell::new(4, 0)));
}

#[test]
fn test_articulation_cell_never_moves() {
    // A "T": the junction (2, 4) splits the shape in three.
    let engine = MoveEngine::default();
    let mut cells: Vec<Cell> = (1..8).map(|c| Cell::new(2, c)).collect();
    cells.extend([Cell::new(3, 4), Cell::new(4, 4), Cell::new(5, 4)]);
    let grid = Grid::with_marked(10, cells);
    assert!(engine.validate(&grid).is_ok());

    let moves = engine.enumerate_moves(&grid);
    assert!(moves.get(Cell::new(2, 4)).is_none());
    assert!(engine.is_articulation(&grid, Cell::new(2, 4)));

    let articulation = engine.articulation_cells(&grid);
    for cell in &articulation {
        assert!(moves.get(*cell).is_none());
    }
    let sources: Vec<_> = moves.sources().collect();
    assert_eq!(sources, vec![Cell::new(2, 1), Cell::new(2, 7), Cell::new(5, 4)]);
}

#[test]
fn test_square_block_every_cell_moves() {
    // 2x5 rectangle: no articulation cells at all.
    let engine = MoveEngine::default();
    let grid = Grid::with_marked(
        10,
        (0..2).flat_map(|r| (3..8).map(move |c| Cell::new(r + 4, c))),
    );
    assert!(engine.validate(&grid).is_ok());
    assert!(engine.articulation_cells(&grid).is_empty());
    assert_eq!(engine.enumerate_moves(&grid).len(), 10);
}

#[test]
fn test_every_relocation_keeps_grid_valid() {
    let engine = MoveEngine::default();
    let grid = row_line(0);
    for relocation in engine.enumerate_moves(&grid).relocations() {
        let next = engine.apply(&grid, relocation).unwrap();
        assert_eq!(marked_cells(&next).len(), 10);
        assert_eq!(component_count(&next), 1);
    }
}

#[test]
fn test_unlisted_relocation_is_illegal() {
    let engine = MoveEngine::default();
    let grid = row_line(0);
    let r = Relocation::new(Cell::new(0, 0), Cell::new(1, 0));
    assert!(!engine.enumerate_moves(&grid).contains(r));
    assert_eq!(engine.apply(&grid, r).unwrap_err().kind(), ErrorKind::IllegalMove);
}

#[test]
fn test_enumeration_does_not_mutate() {
    let engine = MoveEngine::default();
    let grid = row_line(3);
    let snapshot = grid.clone();
    let _ = engine.enumerate_moves(&grid);
    assert_eq!(grid, snapshot);
    assert_eq!(component_size(&grid, Some(Cell::new(3, 0))), 10);
}

#[test]
fn test_parallel_evaluation() {
    let engine = MoveEngine::default();
    let grids: Vec<Grid> = (0..10).map(row_line).collect();

    let handles: Vec<_> = grids
        .iter()
        .cloned()
        .map(|grid| std::thread::spawn(move || engine.enumerate_moves(&grid).len()))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}

// =============================================================================
// Other Configurations
// =============================================================================

#[test]
fn test_freeform_board() {
    let engine = MoveEngine::new(BoardConfig::freeform());
    let mut grid = Grid::empty(50);
    grid.set(Cell::new(10, 10), true);
    grid.set(Cell::new(40, 2), true);

    assert!(engine.validate(&grid).is_ok());
    assert!(engine.enumerate_moves(&grid).is_empty());
    assert_eq!(engine.validate(&row_line(0)).unwrap_err().kind(), ErrorKind::MalformedShape);
}
