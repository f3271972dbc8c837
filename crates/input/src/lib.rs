//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s, wallet
//! selector commands and the quit chord. Only the four arrow keys steer the
//! snake.

pub mod map;

pub use neon_snake_types as types;

pub use map::{handle_key_event, should_quit, wallet_command, WalletCommand};
