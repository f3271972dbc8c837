//! Key mapping from terminal events to game actions.

use crate::types::{GameAction, Turn};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Wallet selector commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletCommand {
    Connect,
    Disconnect,
}

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        // Steering
        KeyCode::Up => Some(GameAction::Turn(Turn::Up)),
        KeyCode::Down => Some(GameAction::Turn(Turn::Down)),
        KeyCode::Left => Some(GameAction::Turn(Turn::Left)),
        KeyCode::Right => Some(GameAction::Turn(Turn::Right)),

        // Start / restart button
        KeyCode::Enter | KeyCode::Char(' ') => Some(GameAction::StartOrRestart),

        _ => None,
    }
}

/// Map keyboard input to wallet selector commands.
pub fn wallet_command(key: KeyEvent) -> Option<WalletCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('C') => Some(WalletCommand::Connect),
        KeyCode::Char('x') | KeyCode::Char('X') => Some(WalletCommand::Disconnect),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
