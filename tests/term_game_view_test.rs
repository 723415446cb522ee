use term_tetris::core::{GameSnapshot, GameState, SequenceRng};
use term_tetris::term::{GameView, CONFIRM_TEXT, GAME_OVER_TEXT};
use term_tetris::types::{GameAction, GameStatus, PieceKind};

fn o_game() -> GameState<SequenceRng> {
    GameState::new(SequenceRng::repeat(PieceKind::O))
}

#[test]
fn term_view_frame_has_no_top_border() {
    let snap = o_game().snapshot();
    let fb = GameView::default().render(&snap);

    assert_eq!(fb.get(0, 0).unwrap().ch, '|');
    assert_eq!(fb.get(21, 0).unwrap().ch, '|');
    assert_eq!(fb.get(0, 20).unwrap().ch, '+');
    assert_eq!(fb.get(21, 20).unwrap().ch, '+');
    for x in 1..21 {
        assert_eq!(fb.get(x, 20).unwrap().ch, '-');
    }
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameSnapshot::default();
    snap.board[19][0] = PieceKind::I.index() as u8 + 1;

    let fb = GameView::default().render(&snap);

    // Inside the left border each cell is 2 chars wide.
    assert_eq!(fb.get(1, 19).unwrap().ch, '█');
    assert_eq!(fb.get(2, 19).unwrap().ch, '█');
    assert_eq!(fb.get(3, 19).unwrap().ch, '·');
}

#[test]
fn term_view_overlays_active_piece() {
    let snap = o_game().snapshot();
    let fb = GameView::default().render(&snap);

    // O at (3, 0) covers board cols 4..=5 in rows 0..=1.
    for y in 0..2 {
        let row = fb.row_text(y);
        let cells: String = row.chars().skip(1).take(20).collect();
        assert_eq!(cells, format!("{}{}{}", "··".repeat(4), "█".repeat(4), "··".repeat(4)));
    }
    assert!(fb.row_text(2).chars().skip(1).take(20).all(|c| c == '·'));
}

#[test]
fn term_view_side_panel_shows_score_and_lines() {
    let mut snap = o_game().snapshot();
    snap.score = 1200;
    snap.lines = 12;

    let fb = GameView::default().render(&snap);

    assert!(fb.row_text(0).contains("SCORE"));
    assert!(fb.row_text(1).contains("1200"));
    assert!(fb.row_text(3).contains("LINES"));
    assert!(fb.row_text(4).contains("12"));
    assert!(fb.to_text().contains("q    quit"));
}

#[test]
fn term_view_game_over_shows_message_and_hides_piece() {
    let mut game = o_game();
    for _ in 0..10 {
        game.tick(Some(GameAction::HardDrop));
    }
    let snap = game.snapshot();
    assert_eq!(snap.status, GameStatus::GameOver);

    let fb = GameView::default().render(&snap);
    let text = fb.to_text();
    assert!(text.contains(GAME_OVER_TEXT));
    assert!(text.contains(CONFIRM_TEXT));

    // Only the locked stack is drawn: every O cell came from the board grid.
    let blocks = text.chars().filter(|&c| c == '█').count();
    assert_eq!(blocks, game.board().occupied_count() * 2);
}

#[test]
fn term_view_reuses_framebuffer() {
    let view = GameView::default();
    let mut game = o_game();
    let mut fb = view.render(&game.snapshot());

    game.tick(None);
    view.render_into(&game.snapshot(), &mut fb);

    assert_eq!((fb.width(), fb.height()), view.frame_size());
    assert!(fb.row_text(0).chars().skip(1).take(20).all(|c| c == '·'));
    assert!(fb.row_text(1).contains('█'));
}
