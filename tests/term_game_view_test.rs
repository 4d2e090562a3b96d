//! GameView rendering tests via the facade crate

use tetrix::core::{GameSnapshot, GameState};
use tetrix::term::{encode_diff_into, FrameBuffer, GameView, Rgb, Viewport};
use tetrix::types::{Command, BOARD_HEIGHT};

fn glyph_at(fb: &FrameBuffer, x: u16, y: u16) -> char {
    fb.get(x, y).map(|g| g.ch).unwrap_or(' ')
}

#[test]
fn test_active_piece_and_ghost_are_drawn() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let state = GameState::new(21);
    let snap = state.snapshot();
    let fb = view.render(&snap, vp);
    let rect = view.board_rect(vp);

    let active = snap.active.unwrap();
    let ghost_y = snap.ghost_y.unwrap();
    assert!(ghost_y > active.y);

    for (dx, dy) in active.matrix.occupied() {
        let col = rect.x + 1 + (active.x + dx) as u16 * view.cell_w();
        let solid = fb.get(col, rect.y + 1 + (active.y + dy) as u16).unwrap();
        let ghost = fb.get(col, rect.y + 1 + (ghost_y + dy) as u16).unwrap();
        assert_eq!(solid.ch, '█');
        assert_eq!(solid.style.fg, Rgb::of_piece(active.kind));
        assert_eq!(ghost.ch, '░');
        assert!(ghost.style.dim);
    }
}

#[test]
fn test_locked_piece_after_hard_drop() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut state = GameState::new(4);
    let kind = state.active().kind;
    state.apply(Command::HardDrop);
    let fb = view.render(&state.snapshot(), vp);
    let rect = view.board_rect(vp);

    let bottom = rect.y + BOARD_HEIGHT as u16;
    let solid = (0..rect.w)
        .filter_map(|dx| fb.get(rect.x + dx, bottom))
        .filter(|g| g.ch == '█' && g.style.fg == Rgb::of_piece(kind))
        .count();
    assert!(solid >= 2, "bottom row should hold part of the locked piece");
}

#[test]
fn test_border_corners() {
    let view = GameView::default();
    let vp = Viewport::new(60, 30);
    let fb = view.render(&GameSnapshot::default(), vp);
    let r = view.board_rect(vp);
    assert_eq!(glyph_at(&fb, r.x, r.y), '┌');
    assert_eq!(glyph_at(&fb, r.x + r.w - 1, r.y), '┐');
    assert_eq!(glyph_at(&fb, r.x, r.y + r.h - 1), '└');
    assert_eq!(glyph_at(&fb, r.x + r.w - 1, r.y + r.h - 1), '┘');
}

#[test]
fn test_score_is_printed() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut snap = GameSnapshot::default();
    snap.score = 12345;
    snap.best = 99999;
    let fb = view.render(&snap, vp);
    let text: String = (0..fb.height()).map(|y| fb.row_text(y) + "\n").collect();
    assert!(text.contains("12345"));
    assert!(text.contains("99999"));
}

#[test]
fn test_render_into_reuses_buffer_and_diffs_small() {
    let view = GameView::default();
    let vp = Viewport::new(80, 24);
    let mut state = GameState::new(6);

    let mut a = FrameBuffer::new(1, 1);
    view.render_into(&state.snapshot(), vp, &mut a);
    assert_eq!((a.width(), a.height()), (80, 24));

    state.apply(Command::MoveRight);
    let b = view.render(&state.snapshot(), vp);

    let mut same = Vec::new();
    encode_diff_into(&a, &a, &mut same).unwrap();
    let mut moved = Vec::new();
    encode_diff_into(&a, &b, &mut moved).unwrap();
    assert!(moved.len() > same.len());
}
