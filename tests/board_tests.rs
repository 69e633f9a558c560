//! Board tests: footprints, collision and row clearing through the facade.

use blockfall::core::{shape_mask, Board};
use blockfall::types::{CellState, PieceKind, Rotation};

fn column_heights(board: &Board) -> Vec<usize> {
    (0..board.width() as i16)
        .map(|x| {
            (0..board.height() as i16)
                .find(|&y| board.get(x, y) == Some(CellState::Fixed))
                .map(|y| board.height() as usize - y as usize)
                .unwrap_or(0)
        })
        .collect()
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(10, 20);
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 20);
    assert_eq!(board.count(CellState::Empty), 200);
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, 20), None);
    assert_eq!(board.get(9, 19), Some(CellState::Empty));
}

#[test]
fn test_stamp_then_collide_is_reflexive() {
    for kind in PieceKind::ALL {
        for rotation in Rotation::ALL {
            let mask = shape_mask(kind, rotation);
            let mut board = Board::new(10, 20);
            board.stamp_footprint(mask, 3, 5, CellState::Fixed);
            assert!(
                board.has_collision(mask, 3, 5),
                "{kind:?} {rotation:?} should collide with its own fixed cells"
            );

            let mut board = Board::new(10, 20);
            board.stamp_footprint(mask, 3, 5, CellState::Falling);
            assert!(
                !board.has_collision(mask, 3, 5),
                "{kind:?} {rotation:?} must not collide with falling cells"
            );
        }
    }
}

#[test]
fn test_erase_only_touches_falling_cells() {
    let mask = shape_mask(PieceKind::O, Rotation::North);
    let mut board = Board::new(10, 20);
    board.stamp_footprint(mask, 0, 0, CellState::Falling);
    board.set(1, 1, CellState::Fixed);

    board.erase_footprint(mask, 0, 0);
    assert_eq!(board.count(CellState::Falling), 0);
    assert_eq!(board.get(1, 1), Some(CellState::Fixed));
    assert_eq!(board.count(CellState::Fixed), 1);
}

#[test]
fn test_clear_full_rows_without_full_rows_is_noop() {
    let mut board = Board::from_rows(10, 20, &["#.#.#.#.#.", "#########."]);
    let before = board.clone();
    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board, before);
    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_clear_single_row_shifts_rows_above() {
    let mut board = Board::from_rows(
        10,
        20,
        &[
            "#.........", // 16
            ".#........", // 17
            "##########", // 18
            "..#.......", // 19
        ],
    );
    let cleared = board.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[18]);

    assert_eq!(
        board,
        Board::from_rows(10, 20, &["#.........", ".#........", "..#......."])
    );
    assert!(board.row(0).unwrap().iter().all(|c| c.is_empty()));
}

#[test]
fn test_clear_two_adjacent_rows_drops_stack_by_two() {
    let mut board = Board::from_rows(
        10,
        20,
        &[
            "..#.......",
            ".##.......",
            "##########",
            "##########",
            "#.#.#.#.#.",
        ],
    );
    let before = column_heights(&board);
    assert_eq!(board.clear_full_rows().len(), 2);
    let after = column_heights(&board);

    assert_eq!(before.iter().max(), Some(&5));
    assert_eq!(after.iter().max(), Some(&3));
    for x in [0, 1, 2, 4, 6, 8] {
        assert_eq!(after[x], before[x] - 2, "column {x}");
    }
    assert_eq!(board.count(CellState::Fixed), 3 + 5);
}

#[test]
fn test_falling_cells_never_complete_a_row() {
    let mut board = Board::from_rows(10, 20, &["######****"]);
    assert!(!board.is_row_full(19));
    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board.count(CellState::Falling), 4);
}
