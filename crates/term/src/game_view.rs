//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The layout mirrors a small desktop window: the 4x4 tile board on the
//! left, a control panel on the right with the (permanently disabled)
//! Undo/Redo/Continue controls, the score block, and the control socket
//! address. Game over drops a modal banner over the board; the board
//! underneath keeps rendering unchanged.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::GRID_SIZE;

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

/// Control-socket details shown in the side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerInfoView<'a> {
    pub host: &'a str,
    pub port: u16,
}

/// A lightweight terminal renderer for the 2048 board and panel.
pub struct GameView {
    /// Tile width in terminal columns.
    cell_w: u16,
    /// Tile height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 8x3 keeps tiles roughly square on typical glyph aspect ratios
        // and fits six-digit values.
        Self {
            cell_w: 8,
            cell_h: 3,
        }
    }
}

const PANEL_W: u16 = 22;
const PANEL_GAP: u16 = 2;

// The original window palette: olive checkerboard tiles on a darker olive
// frame, with orange-red tile values.
const TILE_LIGHT: Rgb = Rgb::new(192, 255, 62);
const TILE_DARK: Rgb = Rgb::new(179, 238, 58);
const FRAME_BG: Rgb = Rgb::new(105, 139, 34);
const VALUE_FG: Rgb = Rgb::new(255, 69, 0);

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    fn board_frame_size(&self) -> (u16, u16) {
        (
            (GRID_SIZE as u16) * self.cell_w + 2,
            (GRID_SIZE as u16) * self.cell_h + 2,
        )
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// Callers can reuse the framebuffer across frames; it is resized to
    /// the viewport and fully overwritten.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        server: Option<&ServerInfoView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.board_frame_size();
        let total_w = frame_w + PANEL_GAP + PANEL_W;

        let start_x = viewport.width.saturating_sub(total_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_board(snap, fb, start_x, start_y);
        self.draw_panel(snap, server, fb, start_x + frame_w + PANEL_GAP, start_y);

        if snap.game_over {
            self.draw_game_over(fb, start_x, start_y, frame_w, frame_h);
        }
    }

    fn draw_board(&self, snap: &GameSnapshot, fb: &mut FrameBuffer, start_x: u16, start_y: u16) {
        let (frame_w, frame_h) = self.board_frame_size();
        let frame = CellStyle {
            fg: Rgb::new(230, 230, 230),
            bg: FRAME_BG,
            bold: false,
            dim: false,
        };

        fb.fill_rect(start_x, start_y, frame_w, frame_h, ' ', frame);

        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                let tile_x = start_x + 1 + (x as u16) * self.cell_w;
                let tile_y = start_y + 1 + (y as u16) * self.cell_h;

                let bg = if (x + y) % 2 == 0 { TILE_LIGHT } else { TILE_DARK };
                let tile = CellStyle {
                    fg: VALUE_FG,
                    bg,
                    bold: true,
                    dim: false,
                };

                fb.fill_rect(tile_x, tile_y, self.cell_w, self.cell_h, ' ', tile);

                let value = snap.board[y][x];
                if value != 0 {
                    fb.put_str_centered(
                        tile_x,
                        tile_y + self.cell_h / 2,
                        self.cell_w,
                        &value.to_string(),
                        tile,
                    );
                }
            }
        }
    }

    fn draw_panel(
        &self,
        snap: &GameSnapshot,
        server: Option<&ServerInfoView>,
        fb: &mut FrameBuffer,
        panel_x: u16,
        panel_y: u16,
    ) {
        let heading = CellStyle {
            bold: true,
            ..CellStyle::default()
        };
        let normal = CellStyle::default();
        let disabled = CellStyle {
            fg: Rgb::new(140, 140, 140),
            dim: true,
            ..CellStyle::default()
        };

        let mut y = panel_y;

        fb.put_str(panel_x, y, "Operation", heading);
        y += 1;
        fb.put_str(panel_x + 1, y, "[Undo]  [Redo]", disabled);
        y += 1;
        fb.put_str(panel_x + 1, y, "[Continue]", disabled);
        y += 1;
        fb.put_str(panel_x + 1, y, "[Q]uit", normal);
        y += 2;

        fb.put_str(panel_x, y, "Game Data", heading);
        y += 1;
        fb.put_str(panel_x + 1, y, &format!("Score: {}", snap.score), normal);
        y += 1;
        fb.put_str(panel_x + 1, y, "HI: 0", disabled);
        y += 1;
        fb.put_str(panel_x + 1, y, "Move: 0", disabled);
        y += 2;

        if let Some(server) = server {
            fb.put_str(panel_x, y, "Server", heading);
            y += 1;
            fb.put_str(panel_x + 1, y, &format!("IP: {}", server.host), normal);
            y += 1;
            fb.put_str(panel_x + 1, y, &format!("Port: {}", server.port), normal);
        }
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        board_x: u16,
        board_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let banner = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(178, 34, 34),
            bold: true,
            dim: false,
        };

        let box_w = 18.min(frame_w);
        let box_h = 3;
        let box_x = board_x + frame_w.saturating_sub(box_w) / 2;
        let box_y = board_y + frame_h.saturating_sub(box_h) / 2;

        fb.fill_rect(box_x, box_y, box_w, box_h, ' ', banner);
        fb.put_str_centered(box_x, box_y + 1, box_w, "GAME OVER", banner);
    }
}
