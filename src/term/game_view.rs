//! GameView: projects a `GameState` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested. The grid's y axis counts up
//! from the floor; the view flips it so pieces visually fall downward.

use crate::core::game_state::GameState;
use crate::term::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

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

/// Renders the playfield, score panel, and overlays.
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
    /// Field cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

// The original renders every block with the same cyan glow; keep that
// palette, with a brighter tone for the falling piece.
const SETTLED: Rgb = Rgb::new(0, 206, 209);
const FALLING: Rgb = Rgb::new(73, 226, 226);
const FIELD_BG: Rgb = Rgb::new(10, 20, 25);

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render the current game state into a fresh framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let field_w = (GRID_WIDTH as u16) * self.cell_w;
        let field_h = (GRID_HEIGHT as u16) * self.cell_h;
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let field = CellStyle {
            fg: Rgb::new(60, 80, 85),
            bg: FIELD_BG,
            bold: false,
        };
        let border = CellStyle {
            fg: Rgb::new(0, 160, 165),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, field_w, field_h, ' ', field);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Settled cells.
        for y in 0..GRID_HEIGHT {
            for x in 0..GRID_WIDTH {
                if state.grid().get(x, y).unwrap_or(0) != 0 {
                    self.draw_block(&mut fb, start_x, start_y, x, y, SETTLED, false);
                } else {
                    self.draw_cell(&mut fb, start_x, start_y, x, y, '·', field);
                }
            }
        }

        // The falling piece. Cells above the top edge are simply not drawn.
        if let Some(player) = state.player() {
            for (row, col, _) in player.shape.occupied_cells() {
                let x = player.x + col;
                let y = player.y + row;
                if x >= 0 && x < GRID_WIDTH && y >= 0 && y < GRID_HEIGHT {
                    self.draw_block(&mut fb, start_x, start_y, x, y, FALLING, true);
                }
            }
        }

        self.draw_side_panel(&mut fb, state, viewport, start_x, start_y, frame_w);

        if state.game_over() {
            self.draw_game_over(&mut fb, state, start_x, start_y, frame_w, frame_h);
        }

        fb
    }

    /// Map a grid cell to its top-left terminal coordinate. Row 0 is the
    /// floor, so it lands at the bottom of the frame.
    fn cell_origin(&self, start_x: u16, start_y: u16, x: i16, y: i16) -> (u16, u16) {
        let screen_row = (GRID_HEIGHT - 1 - y) as u16;
        let px = start_x + 1 + (x as u16) * self.cell_w;
        let py = start_y + 1 + screen_row * self.cell_h;
        (px, py)
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i16,
        y: i16,
        ch: char,
        style: CellStyle,
    ) {
        let (px, py) = self.cell_origin(start_x, start_y, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_block(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: i16,
        y: i16,
        fg: Rgb,
        bold: bool,
    ) {
        let style = CellStyle {
            fg,
            bg: FIELD_BG,
            bold,
        };
        self.draw_cell(fb, start_x, start_y, x, y, '█', style);
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

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let value = CellStyle {
            fg: FALLING,
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        let hint = CellStyle {
            fg: Rgb::new(120, 120, 120),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", state.score()), value);
        y = y.saturating_add(2);

        for line in ["←/→ move", "↑ drop", "↓ rotate", "r restart", "q quit"] {
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };

        let mid_y = start_y.saturating_add(frame_h / 2);
        let lines = [
            "GAME OVER".to_string(),
            format!("final score {}", state.score()),
            "press r to restart".to_string(),
        ];
        for (i, line) in lines.iter().enumerate() {
            let text_w = line.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            fb.put_str(x, mid_y.saturating_add(i as u16), line, style);
        }
    }
}
