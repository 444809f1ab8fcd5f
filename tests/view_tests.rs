//! View tests - framebuffer output for real game states

use tui_2048::core::{Board, GameState};
use tui_2048::term::{FrameBuffer, GameView, ServerInfoView, Viewport};
use tui_2048::types::Direction;

fn screen_text(fb: &FrameBuffer) -> String {
    let mut out = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            out.push(fb.get(x, y).map(|c| c.ch).unwrap_or(' '));
        }
        out.push('\n');
    }
    out
}

#[test]
fn test_mid_game_frame_shows_tiles_and_score() {
    let board = Board::from_rows([
        [2, 2, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 0, 0],
        [0, 0, 128, 0],
    ]);
    let mut state = GameState::with_board(board, 9);
    state.apply_move(Direction::Left);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(&state.snapshot(), None, Viewport::new(80, 24), &mut fb);

    let text = screen_text(&fb);
    assert!(text.contains("Score: 4"), "score missing:\n{}", text);
    assert!(text.contains("128"), "merged board tile missing:\n{}", text);
    assert!(text.contains('4'), "merged tile missing:\n{}", text);
}

#[test]
fn test_game_over_frame_has_banner_and_board() {
    let board = Board::from_rows([
        [2, 4, 2, 4],
        [4, 2, 4, 2],
        [2, 4, 2, 4],
        [4, 2, 4, 2],
    ]);
    let mut state = GameState::with_board(board, 9);
    state.apply_move(Direction::Up);
    assert!(state.is_game_over());

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(&state.snapshot(), None, Viewport::new(80, 24), &mut fb);

    let text = screen_text(&fb);
    assert!(text.contains("GAME OVER"), "banner missing:\n{}", text);
}

#[test]
fn test_server_address_renders_in_panel() {
    let state = GameState::new(1);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let info = ServerInfoView {
        host: "127.0.0.1",
        port: 54543,
    };
    view.render_into(&state.snapshot(), Some(&info), Viewport::new(80, 24), &mut fb);

    let text = screen_text(&fb);
    assert!(text.contains("IP: 127.0.0.1"), "host missing:\n{}", text);
    assert!(text.contains("Port: 54543"), "port missing:\n{}", text);
}

#[test]
fn test_tiny_viewport_does_not_panic() {
    let state = GameState::new(1);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    view.render_into(&state.snapshot(), None, Viewport::new(10, 5), &mut fb);
    assert_eq!(fb.width(), 10);
    assert_eq!(fb.height(), 5);
}
