//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested.

use crate::core::{ActiveSnapshot, GameSnapshot};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const PLAY_BG: Rgb = Rgb::new(17, 24, 39);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const NEXT_BOX: u16 = 4;

const HELP_LINES: [&str; 9] = [
    "CONTROLS",
    "",
    "<- ->   move",
    "down    soft drop",
    "up z    rotate",
    "space   hard drop",
    "p       pause",
    "r       restart",
    "q       quit",
];
const HELP_FOOTER: &str = "any key to start";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Where the board frame landed in the last render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRect {
    pub x: u16,
    pub y: u16,
    pub w: u16,
    pub h: u16,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    show_help: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 roughly squares cells on typical terminal fonts.
        Self::new(2)
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            show_help: false,
        }
    }

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    /// Toggle the first-run controls overlay.
    pub fn set_help(&mut self, show: bool) {
        self.show_help = show;
    }

    /// Board frame placement for a viewport (border included).
    pub fn board_rect(&self, viewport: Viewport) -> BoardRect {
        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 + 2;
        let panel_w = NEXT_BOX * self.cell_w + 4;
        BoardRect {
            x: viewport.width.saturating_sub(w + panel_w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    /// Render one frame into an existing framebuffer, reusing its allocation.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Glyph::default());

        let rect = self.board_rect(viewport);
        let border = Style::plain(Rgb::new(148, 163, 184), SCREEN_BG);
        draw_box(fb, rect.x, rect.y, rect.w, rect.h, border);

        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                match snap.cell(x, y) {
                    Some(kind) => self.draw_block(fb, rect, x, y, kind, false),
                    None => self.draw_empty(fb, rect, x, y),
                }
            }
        }

        if let Some(active) = snap.active {
            if let Some(ghost_y) = snap.ghost_y {
                self.draw_piece(fb, rect, &ActiveSnapshot { y: ghost_y, ..active }, true);
            }
            self.draw_piece(fb, rect, &active, false);
        }

        self.draw_panel(fb, snap, viewport, rect);

        if self.show_help {
            self.draw_help(fb, rect);
        } else if snap.paused {
            draw_banner(fb, rect, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_piece(&self, fb: &mut FrameBuffer, rect: BoardRect, piece: &ActiveSnapshot, ghost: bool) {
        for (dx, dy) in piece.matrix.occupied() {
            let x = piece.x + dx;
            let y = piece.y + dy;
            if (0..BOARD_WIDTH as i8).contains(&x) && (0..BOARD_HEIGHT as i8).contains(&y) {
                self.draw_block(fb, rect, x, y, piece.kind, ghost);
            }
        }
    }

    fn draw_block(&self, fb: &mut FrameBuffer, rect: BoardRect, x: i8, y: i8, kind: PieceKind, ghost: bool) {
        let base = Style::plain(Rgb::of_piece(kind), PLAY_BG);
        let (ch, style) = if ghost {
            ('░', base.dim())
        } else {
            ('█', base.bold())
        };
        let px = rect.x + 1 + x as u16 * self.cell_w;
        let py = rect.y + 1 + y as u16;
        fb.fill_rect(px, py, self.cell_w, 1, ch, style);
    }

    fn draw_empty(&self, fb: &mut FrameBuffer, rect: BoardRect, x: i8, y: i8) {
        let style = Style::plain(Rgb::new(55, 65, 81), PLAY_BG).dim();
        let px = rect.x + 1 + x as u16 * self.cell_w;
        let py = rect.y + 1 + y as u16;
        fb.fill_rect(px, py, self.cell_w, 1, ' ', style);
        fb.put_char(px, py, '·', style);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, rect: BoardRect) {
        let x = rect.x + rect.w + 2;
        if x >= viewport.width {
            return;
        }

        let label = Style::default().bold();
        let value = Style::default();
        let mut y = rect.y;

        fb.put_str(x, y, "NEXT", label);
        y += 1;
        let box_w = NEXT_BOX * self.cell_w + 2;
        draw_box(fb, x, y, box_w, NEXT_BOX + 2, Style::plain(Rgb::new(148, 163, 184), SCREEN_BG));
        fb.fill_rect(x + 1, y + 1, box_w - 2, NEXT_BOX, ' ', Style::plain(value.fg, PLAY_BG));
        if let Some(next) = snap.next {
            // Center the matrix inside the 4x4 box.
            let ox = (NEXT_BOX - next.matrix.cols() as u16) / 2;
            let oy = (NEXT_BOX - next.matrix.rows() as u16) / 2;
            let style = Style::plain(Rgb::of_piece(next.kind), PLAY_BG).bold();
            for (dx, dy) in next.matrix.occupied() {
                let px = x + 1 + (ox + dx as u16) * self.cell_w;
                let py = y + 1 + oy + dy as u16;
                fb.fill_rect(px, py, self.cell_w, 1, '█', style);
            }
        }
        y += NEXT_BOX + 3;

        for (name, v) in [
            ("SCORE", snap.score),
            ("LEVEL", snap.level),
            ("LINES", snap.lines),
            ("BEST", snap.best),
        ] {
            fb.put_str(x, y, name, label);
            fb.put_u32(x, y + 1, v, value);
            y += 3;
        }
    }

    fn draw_help(&self, fb: &mut FrameBuffer, rect: BoardRect) {
        let inner_w = rect.w.saturating_sub(2);
        let h = HELP_LINES.len() as u16 + 4;
        let top = rect.y + rect.h.saturating_sub(h) / 2;
        let style = Style::plain(Rgb::new(241, 245, 249), Rgb::new(30, 41, 59));

        fb.fill_rect(rect.x + 1, top, inner_w, h, ' ', style);
        for (i, line) in HELP_LINES.iter().enumerate() {
            let line_style = if i == 0 { style.bold() } else { style };
            fb.put_str(rect.x + 2, top + 1 + i as u16, line, line_style);
        }
        fb.put_str(rect.x + 2, top + h - 2, HELP_FOOTER, style.dim());
    }
}

fn draw_box(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
    if w < 2 || h < 2 {
        return;
    }
    let (r, b) = (x + w - 1, y + h - 1);
    fb.put_char(x, y, '┌', style);
    fb.put_char(r, y, '┐', style);
    fb.put_char(x, b, '└', style);
    fb.put_char(r, b, '┘', style);
    for cx in x + 1..r {
        fb.put_char(cx, y, '─', style);
        fb.put_char(cx, b, '─', style);
    }
    for cy in y + 1..b {
        fb.put_char(x, cy, '│', style);
        fb.put_char(r, cy, '│', style);
    }
}

fn draw_banner(fb: &mut FrameBuffer, rect: BoardRect, text: &str) {
    let w = text.chars().count() as u16;
    let x = rect.x + rect.w.saturating_sub(w) / 2;
    let y = rect.y + rect.h / 2;
    fb.put_str(x, y, text, Style::plain(Rgb::new(255, 255, 255), SCREEN_BG).bold());
}
