//! GameView: maps a core [`Snapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Snapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, EMPTY};

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

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Block colours by cell tag. Tags past the end wrap around.
const PALETTE: [Rgb; 7] = [
    Rgb::new(80, 220, 220),
    Rgb::new(240, 220, 80),
    Rgb::new(200, 120, 220),
    Rgb::new(100, 220, 120),
    Rgb::new(220, 80, 80),
    Rgb::new(80, 120, 220),
    Rgb::new(255, 165, 0),
];

/// Colour used for a non-empty board cell.
pub fn tag_color(tag: u8) -> Rgb {
    let i = (tag.max(1) - 1) as usize % PALETTE.len();
    PALETTE[i]
}

/// A lightweight terminal renderer for the board and its counters.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when
    /// the terminal size changes.
    pub fn render_into(&self, snap: &Snapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let board_px_w = (snap.cols as u16).saturating_mul(self.cell_w);
        let board_px_h = (snap.rows as u16).saturating_mul(self.cell_h);
        let frame_w = board_px_w.saturating_add(2);
        let frame_h = board_px_h.saturating_add(2);

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let bg = CellStyle::new(Rgb::new(80, 80, 90), PLAY_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..snap.rows {
            for (col, &tag) in snap.row(row).iter().enumerate() {
                if tag == EMPTY {
                    self.draw_empty_cell(fb, start_x, start_y, col as u16, row as u16);
                } else {
                    self.draw_block(fb, start_x, start_y, col as u16, row as u16, tag);
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.paused {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 0, "PAUSED");
        } else if snap.game_over() {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 0, "GAME OVER");
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 2, "PRESS R");
        } else if snap.phase == Phase::Idle {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, 0, "PRESS R");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &Snapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16, tag: u8) {
        let style = CellStyle::new(tag_color(tag), PLAY_BG).bold();
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    #[allow(clippy::too_many_arguments)]
    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &Snapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 8 {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "TIME", label);
        y = y.saturating_add(1);
        put_elapsed(fb, panel_x, y, snap.elapsed_secs, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.lines, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "PIECES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.pieces_spawned, value);
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        line: u16,
        text: &str,
    ) {
        let y = start_y.saturating_add(frame_h / 2).saturating_add(line);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
        fb.put_str(x, y, text, style);
    }
}

/// `mm:ss` without going through a `String`.
fn put_elapsed(fb: &mut FrameBuffer, x: u16, y: u16, secs: u32, style: CellStyle) {
    let minutes = secs / 60;
    let seconds = secs % 60;
    let mut cx = x;
    if minutes < 10 {
        fb.put_char(cx, y, '0', style);
        cx = cx.saturating_add(1);
    }
    cx = cx.saturating_add(fb.put_u32(cx, y, minutes, style));
    fb.put_char(cx, y, ':', style);
    cx = cx.saturating_add(1);
    if seconds < 10 {
        fb.put_char(cx, y, '0', style);
        cx = cx.saturating_add(1);
    }
    fb.put_u32(cx, y, seconds, style);
}
