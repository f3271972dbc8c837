//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the Snake rules and state management. It has **zero
//! dependencies** on the terminal, the wallet gate, or wall-clock time, which
//! makes it:
//!
//! - **Deterministic**: Same seed produces identical food placements
//! - **Testable**: Every rule can be driven one step at a time
//! - **Portable**: Renders through the [`DrawSurface`] trait, so any 2D target works
//!
//! # Module Structure
//!
//! - [`config`]: Playfield geometry, tick interval and food policy, with validation
//! - [`food`]: Random grid-aligned food placement
//! - [`game_state`]: Snake body, heading, food, score and phase; step / turn / render
//! - [`rng`]: Small LCG used for food placement
//! - [`snapshot`]: Copyable view of the observable state for UIs
//! - [`surface`]: The drawing primitives a render target must provide
//!
//! # Game Rules
//!
//! - Starting places a single segment at the origin heading right, with score 0
//! - Each step moves the head one grid cell along the heading
//! - Leaving the playfield or hitting any body segment ends the game
//! - Eating food adds one point and one segment, then relocates the food
//! - Turning onto the axis the snake already travels on is ignored
//!
//! # Example
//!
//! ```
//! use neon_snake_core::{GameState, StepOutcome};
//! use neon_snake_types::{Segment, Turn};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//! game.set_food(Segment::new(0, 0));
//!
//! assert_eq!(game.step(), StepOutcome::Moved);
//! assert_eq!(game.head(), Segment::new(220, 200));
//!
//! // Reversal is refused while moving horizontally.
//! assert!(!game.turn(Turn::Left));
//! assert!(game.turn(Turn::Up));
//! ```

pub mod config;
pub mod food;
pub mod game_state;
pub mod rng;
pub mod snapshot;
pub mod surface;

pub use neon_snake_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, FoodPolicy, GameConfig};
pub use food::place_food;
pub use game_state::{Collision, GameState, StepOutcome};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;
pub use surface::{DrawSurface, Paint, Rect};
