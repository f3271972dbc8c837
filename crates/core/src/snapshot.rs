use crate::types::{Direction, Phase, Segment};

/// Copyable view of everything a UI needs to show about a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub phase: Phase,
    pub score: u32,
    pub length: u32,
    pub head: Segment,
    pub food: Segment,
    pub direction: Direction,
}

impl GameSnapshot {
    pub fn game_over(&self) -> bool {
        self.phase.is_game_over()
    }

    pub fn game_running(&self) -> bool {
        self.phase.is_running()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            score: 0,
            length: 1,
            head: crate::types::ORIGIN,
            food: crate::types::INITIAL_FOOD,
            direction: Direction::NONE,
        }
    }
}
