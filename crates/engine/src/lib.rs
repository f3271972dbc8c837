//! Game loop engine - the single owner of the game's lifecycle
//!
//! [`GameLoop`] owns the [`GameState`](neon_snake_core::GameState) and the
//! step timer. It is the only place that starts or stops the timer, and it
//! reports every lifecycle transition as a [`GameEvent`] on an optional
//! `std::sync::mpsc` channel.
//!
//! ```text
//!            start (wallet connected)
//!   Idle ─────────────────────────────► Running ◄──┐ tick
//!                                        │   └──────┘
//!                             collision  ▼
//!                                     GameOver ──► Running (restart)
//! ```
//!
//! The loop is single-threaded and clock-agnostic: callers pass `Instant`s
//! in, which keeps it deterministic under test.

pub mod event;
pub mod game_loop;
pub mod timer;

pub use neon_snake_core as core;
pub use neon_snake_types as types;

pub use event::{GameEvent, IgnoreReason, StartOutcome};
pub use game_loop::GameLoop;
pub use timer::IntervalTimer;
