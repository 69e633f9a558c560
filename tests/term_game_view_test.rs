use blockfall::core::{Board, GameEngine, ScriptedSpawner};
use blockfall::term::{encode_diff_into, encode_full_into, AnchorY, GameView, Viewport, MENU};
use blockfall::types::{CellState, GameAction, PieceKind, Rotation};

fn o_game_on(board: Board) -> GameEngine<ScriptedSpawner> {
    GameEngine::with_spawner(board, ScriptedSpawner::repeat(PieceKind::O, Rotation::North))
}

fn o_game() -> GameEngine<ScriptedSpawner> {
    o_game_on(Board::new(10, 20))
}

#[test]
fn term_view_renders_border_corners() {
    let snap = o_game().snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let fb = view.render(&snap, Viewport::new(22, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_cells_two_chars_wide() {
    let mut board = Board::new(10, 20);
    board.set(0, 19, CellState::Fixed);
    let game = o_game_on(board);
    let fb = GameView::default().render(&game.snapshot(), Viewport::new(22, 22));

    // Inside border: (1,1) origin.
    assert_eq!(fb.get(1, 20).unwrap().ch, '█');
    assert_eq!(fb.get(2, 20).unwrap().ch, '█');
    assert_eq!(fb.get(3, 20).unwrap().ch, '·');

    // The spawned O covers board columns 0..=1 of rows 0..=1.
    for x in 1..=4 {
        assert_eq!(fb.get(x, 1).unwrap().ch, '█');
        assert_eq!(fb.get(x, 2).unwrap().ch, '█');
    }
    assert_ne!(fb.get(1, 1).unwrap().style.fg, fb.get(1, 20).unwrap().style.fg);
}

#[test]
fn term_view_draws_menu_when_wide_enough() {
    let snap = o_game().snapshot();
    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(60, 22));

    let text: Vec<String> = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    for line in MENU.iter().filter(|l| !l.is_empty()) {
        assert!(
            text.iter().any(|row| row.contains(line)),
            "menu line {line:?} missing"
        );
    }
}

#[test]
fn term_view_skips_menu_when_narrow() {
    let snap = o_game().snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 22));
    let all: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(!all.contains("BLOCKFALL"));
}

#[test]
fn term_view_shows_game_over_overlay() {
    let mut board = Board::new(10, 20);
    board.set(0, 2, CellState::Fixed);
    let mut game = o_game_on(board);
    game.tick();
    assert!(game.is_game_over());

    let fb = GameView::default().render(&game.snapshot(), Viewport::new(22, 22));
    let all: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
    assert!(all.contains("GAME OVER"));
}

#[test]
fn term_diff_after_one_move_is_small() {
    let view = GameView::default();
    let vp = Viewport::new(60, 24);
    let mut game = o_game();
    let before = view.render(&game.snapshot(), vp);
    game.handle_input(GameAction::MoveRight);
    let after = view.render(&game.snapshot(), vp);

    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();
    let mut full = Vec::new();
    encode_full_into(&after, &mut full).unwrap();
    assert!(!diff.is_empty());
    assert!(diff.len() * 4 < full.len());
}
