//! Turn loop tests: selectors, reply parsing, and re-validation.

use block_shift::boards::{BoardBuilder, Shape};
use block_shift::core::{BoardConfig, BoardError, Cell, ErrorKind, Grid, MoveSet, Relocation};
use block_shift::rules::MoveEngine;
use block_shift::turn::{
    play_turn, FirstMoveSelector, MoveSelector, RandomSelector, ReplyError, SelectorError,
    TextSelector, TurnError,
};

fn fenced(grid: &Grid) -> String {
    format!(
        "Here is my move.\n```json\n{}\n```",
        serde_json::to_string(grid).unwrap()
    )
}

// =============================================================================
// Long Runs
// =============================================================================

#[test]
fn test_random_walk_stays_valid() {
    let builder = BoardBuilder::new().shape(Shape::Random);
    let engine = MoveEngine::new(builder.config());
    let mut grid = builder.build(7);
    let mut selector = RandomSelector::new(99);

    for _ in 0..200 {
        let outcome = play_turn(&engine, &grid, &mut selector).unwrap();
        let relocation = outcome.relocation.expect("random selector moves one block");
        assert!(outcome.moves.contains(relocation));
        grid = outcome.grid;
    }
    assert!(engine.validate(&grid).is_ok());
}

#[test]
fn test_random_walk_deterministic() {
    let run = |seed| {
        let engine = MoveEngine::default();
        let mut grid = BoardBuilder::new().build(0);
        let mut selector = RandomSelector::new(seed);
        for _ in 0..25 {
            grid = play_turn(&engine, &grid, &mut selector).unwrap().grid;
        }
        grid
    };
    assert_eq!(run(3), run(3));
}

#[test]
fn test_first_move_walk() {
    let engine = MoveEngine::default();
    let mut grid = BoardBuilder::new().build(0);
    for _ in 0..20 {
        grid = play_turn(&engine, &grid, &mut FirstMoveSelector).unwrap().grid;
    }
    assert!(engine.validate(&grid).is_ok());
}

// =============================================================================
// Text Generator Replies
// =============================================================================

#[test]
fn test_text_reply_accepted() {
    let engine = MoveEngine::default();
    let grid = BoardBuilder::new().build(0);

    let mut selector = TextSelector::new(|g: &Grid, moves: &MoveSet| {
        let r = moves.relocations().last().ok_or("no moves")?;
        Ok(fenced(&g.relocated(r.from, r.to)))
    });

    let outcome = play_turn(&engine, &grid, &mut selector).unwrap();
    let r = outcome.relocation.unwrap();
    assert_eq!(r.from, Cell::new(0, 9));
    assert!(outcome.moves.contains(r));
}

#[test]
fn test_text_reply_breaking_shape_is_rejected() {
    let engine = MoveEngine::default();
    let grid = BoardBuilder::new().build(0);

    // Moves an interior block away: the line splits.
    let mut selector = TextSelector::new(|g: &Grid, _: &MoveSet| {
        Ok(fenced(&g.relocated(Cell::new(0, 4), Cell::new(9, 9))))
    });

    match play_turn(&engine, &grid, &mut selector) {
        Err(TurnError::RejectedCandidate(err)) => assert_eq!(err.kind(), ErrorKind::Disconnected),
        other => panic!("expected rejection, got {:?}", other),
    }
}

#[test]
fn test_text_reply_dropping_block_is_rejected() {
    let engine = MoveEngine::default();
    let grid = BoardBuilder::new().build(0);

    let mut selector = TextSelector::new(|g: &Grid, _: &MoveSet| {
        let mut next = g.clone();
        next.set(Cell::new(0, 0), false);
        Ok(fenced(&next))
    });

    let err = play_turn(&engine, &grid, &mut selector).unwrap_err();
    assert!(matches!(
        err,
        TurnError::RejectedCandidate(BoardError::WrongBlockCount { expected: 10, found: 9 })
    ));
}

#[test]
fn test_text_reply_wrong_size_is_rejected() {
    let engine = MoveEngine::default();
    let grid = BoardBuilder::new().build(0);
    let mut selector = TextSelector::new(|_: &Grid, _: &MoveSet| Ok("[[1, 1], [1, 1]]".to_string()));

    let err = play_turn(&engine, &grid, &mut selector).unwrap_err();
    assert!(matches!(
        err,
        TurnError::RejectedCandidate(BoardError::MalformedShape { .. })
    ));
}

#[test]
fn test_text_reply_with_bracketed_prose() {
    let engine = MoveEngine::default();
    let grid = BoardBuilder::new().build(0);
    let next = grid.relocated(Cell::new(0, 0), Cell::new(1, 1));
    let reply = format!(
        "I moved the block at [0, 0] to [1, 1]. New grid: {}",
        serde_json::to_string(&next).unwrap()
    );
    let mut selector = TextSelector::new(move |_: &Grid, _: &MoveSet| Ok(reply.clone()));

    let outcome = play_turn(&engine, &grid, &mut selector).unwrap();
    assert_eq!(outcome.grid, next);
    assert_eq!(outcome.relocation, Some(Relocation::new(Cell::new(0, 0), Cell::new(1, 1))));
}

#[test]
fn test_text_reply_unparseable() {
    let engine = MoveEngine::default();
    let grid = BoardBuilder::new().build(0);
    let mut selector =
        TextSelector::new(|_: &Grid, _: &MoveSet| Ok("I'd move the left block down.".to_string()));

    let err = play_turn(&engine, &grid, &mut selector).unwrap_err();
    assert!(matches!(
        err,
        TurnError::Selector(SelectorError::Unparseable(ReplyError::NoGrid))
    ));
}

#[test]
fn test_generator_failure_is_distinguishable() {
    let engine = MoveEngine::default();
    let grid = BoardBuilder::new().build(0);
    let mut selector = TextSelector::new(|_: &Grid, _: &MoveSet| Err("timed out".to_string()));

    let err = play_turn(&engine, &grid, &mut selector).unwrap_err();
    assert!(matches!(err, TurnError::Selector(SelectorError::Unavailable(_))));
    assert_eq!(err.to_string(), "selector unavailable: timed out");
}

// =============================================================================
// Freeform Mode
// =============================================================================

struct AddMarks(Vec<Cell>);

impl MoveSelector for AddMarks {
    fn select(&mut self, grid: &Grid, moves: &MoveSet) -> Result<Grid, SelectorError> {
        assert!(moves.is_empty());
        let mut next = grid.clone();
        for &cell in &self.0 {
            next.set(cell, true);
        }
        Ok(next)
    }
}

#[test]
fn test_freeform_turn_adds_marks() {
    let engine = MoveEngine::new(BoardConfig::freeform());
    let grid = Grid::with_marked(50, [Cell::new(25, 25)]);

    let outcome = play_turn(
        &engine,
        &grid,
        &mut AddMarks(vec![Cell::new(0, 0), Cell::new(49, 49)]),
    )
    .unwrap();
    assert_eq!(outcome.grid.marked_count(), 3);
    assert!(outcome.moves.is_empty());
}

#[test]
fn test_freeform_turn_too_many_marks() {
    let engine = MoveEngine::new(BoardConfig::freeform());
    let grid = Grid::empty(50);
    let cells = (0..4).map(|c| Cell::new(0, c)).collect();

    let err = play_turn(&engine, &grid, &mut AddMarks(cells)).unwrap_err();
    assert!(matches!(
        err,
        TurnError::RejectedCandidate(BoardError::TooManyAdditions { added: 4, max: 3 })
    ));
}
