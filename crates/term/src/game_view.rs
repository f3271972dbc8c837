//! GameView: lays out the game page into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! ```text
//!                                          Petra 0x8f3a…c01d  [x]
//!              SNAKE NEON RETRO
//!
//!                  Score: 3
//!     ┌────────────────────────────────────────┐
//!     │                                        │
//!     │            ██                          │
//!     │            ██████                      │
//!     └────────────────────────────────────────┘
//!
//!              [ Enter ]  Restart Game
//! ```

use crate::canvas::Canvas;
use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, SNAKE_COLOR};

/// Shown instead of the start control while no wallet is connected.
pub const CONNECT_PROMPT: &str = "Connect your Aptos wallet to play";

const TITLE: &str = "SNAKE NEON RETRO";
const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Label of the start/restart control for a phase.
pub fn control_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "Start Game",
        Phase::Running => "eat!",
        Phase::GameOver => "Restart Game",
    }
}

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

/// What the wallet selector in the top-right corner shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WalletBadge {
    /// `Some(label)` while connected, e.g. `"Petra 0x8f3a…c01d"`.
    pub connected: Option<String>,
}

impl WalletBadge {
    pub fn connected(label: impl Into<String>) -> Self {
        Self {
            connected: Some(label.into()),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Page renderer for the Snake game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
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

    /// Size of the bordered canvas frame in terminal cells.
    pub fn frame_size(&self, canvas: &Canvas) -> (u16, u16) {
        (
            canvas.cols() * self.cell_w + 2,
            canvas.rows() * self.cell_h + 2,
        )
    }

    /// Render the page into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is resized to the
    /// viewport and fully redrawn.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        canvas: &Canvas,
        wallet: &WalletBadge,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let neon = CellStyle::new(SNAKE_COLOR, BLACK);
        let (frame_w, frame_h) = self.frame_size(canvas);

        // Drawn first so the page wins on narrow terminals.
        self.draw_wallet_badge(fb, wallet, viewport, neon);

        // Title, blank, score, frame, blank, control.
        let page_h = 3 + frame_h + 2;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(page_h) / 2,
            AnchorY::Top => 0,
        };
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let frame_y = top + 3;

        self.put_centered(fb, start_x, frame_w, top, TITLE, neon.bold());

        let score = format!("Score: {}", snap.score);
        self.put_centered(fb, start_x, frame_w, top + 2, &score, neon);

        self.draw_border(fb, start_x, frame_y, frame_w, frame_h, neon);
        self.draw_canvas(fb, canvas, start_x + 1, frame_y + 1);

        if snap.game_over() {
            let overlay = CellStyle::new(Rgb::new(255, 255, 255), BLACK).bold();
            let mid_y = frame_y + frame_h / 2;
            self.put_centered(fb, start_x, frame_w, mid_y, "GAME OVER", overlay);
        }

        let control_y = frame_y + frame_h + 1;
        if wallet.is_connected() {
            let button = format!("[ Enter ]  {}", control_label(snap.phase));
            let style = CellStyle::new(BLACK, SNAKE_COLOR).bold();
            self.put_centered(fb, start_x, frame_w, control_y, &button, style);
        } else {
            self.put_centered(fb, start_x, frame_w, control_y, CONNECT_PROMPT, neon);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(
        &self,
        snap: &GameSnapshot,
        canvas: &Canvas,
        wallet: &WalletBadge,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, canvas, wallet, viewport, &mut fb);
        fb
    }

    fn draw_canvas(&self, fb: &mut FrameBuffer, canvas: &Canvas, origin_x: u16, origin_y: u16) {
        for row in 0..canvas.rows() {
            for col in 0..canvas.cols() {
                let (ch, style) = match canvas.cell(col, row) {
                    Some(paint) => {
                        let style = CellStyle::new(paint.color, BLACK);
                        ('█', if paint.glow > 0 { style.bold() } else { style })
                    }
                    None => match canvas.halo(col, row) {
                        Some(tint) => (' ', CellStyle::new(tint, tint)),
                        None => (' ', CellStyle::new(BLACK, BLACK)),
                    },
                };
                fb.fill_rect(
                    origin_x + col * self.cell_w,
                    origin_y + row * self.cell_h,
                    self.cell_w,
                    self.cell_h,
                    ch,
                    style,
                );
            }
        }
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

    fn draw_wallet_badge(
        &self,
        fb: &mut FrameBuffer,
        wallet: &WalletBadge,
        viewport: Viewport,
        style: CellStyle,
    ) {
        let text = match &wallet.connected {
            Some(label) => format!("{label}  [x]"),
            None => "Connect Wallet  [c]".to_string(),
        };
        let w = text.chars().count() as u16;
        let x = viewport.width.saturating_sub(w + 1);
        fb.put_str(x, 0, &text, style.dim());
    }

    fn put_centered(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        span: u16,
        y: u16,
        text: &str,
        style: CellStyle,
    ) {
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(span.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_labels_follow_phase() {
        assert_eq!(control_label(Phase::Idle), "Start Game");
        assert_eq!(control_label(Phase::Running), "eat!");
        assert_eq!(control_label(Phase::GameOver), "Restart Game");
    }

    #[test]
    fn frame_size_uses_cell_aspect() {
        let canvas = Canvas::new(400, 400, 20);
        assert_eq!(GameView::default().frame_size(&canvas), (42, 22));
        assert_eq!(GameView::new(1, 1).frame_size(&canvas), (22, 22));
    }
}
