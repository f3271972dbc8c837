use neon_snake_core::Collision;

/// Lifecycle notifications emitted by [`crate::GameLoop`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A run began from Idle.
    Started { episode_id: u32 },
    /// A run began after a game over.
    Restarted { episode_id: u32 },
    /// The snake ate; `score` and `length` are post-growth.
    FoodEaten { score: u32, length: u32 },
    /// The run ended. The step timer has already been released.
    GameOver {
        score: u32,
        length: u32,
        collision: Collision,
    },
    /// The loop was torn down while the timer was armed.
    Stopped,
}

/// Result of a start/restart request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started,
    Restarted,
    Ignored(IgnoreReason),
}

/// Why a start/restart request did nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    WalletDisconnected,
    AlreadyRunning,
}

impl IgnoreReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            IgnoreReason::WalletDisconnected => "wallet not connected",
            IgnoreReason::AlreadyRunning => "already running",
        }
    }
}
