//! Terminal "page renderer" module.
//!
//! A small, game-oriented rendering layer: the game draws into a pixel
//! [`Canvas`], [`GameView`] lays out the page (title, score, canvas frame,
//! start control, wallet badge) into a [`FrameBuffer`], and
//! [`TerminalRenderer`] flushes framebuffers to the terminal, redrawing only
//! changed runs.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep layout pure (no I/O) so it can be unit-tested
//! - Map each 20px grid cell to a 2x1 block of terminal cells

pub mod canvas;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use neon_snake_core as core;
pub use neon_snake_types as types;

pub use canvas::Canvas;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{control_label, AnchorY, GameView, Viewport, WalletBadge, CONNECT_PROMPT};
pub use renderer::{encode_frame_into, TerminalRenderer};
