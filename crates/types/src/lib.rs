//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Playfield Geometry
//!
//! The playfield is a fixed-size pixel canvas divided into square grid cells.
//! All positions are stored in **pixel units**, always aligned to the grid:
//!
//! - **Width / Height**: 400 x 400 px
//! - **Grid size**: 20 px (20 x 20 cells)
//! - **Spawn origin**: (200, 200)
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 100 | Fixed interval between snake steps |
//! | `IDLE_POLL_MS` | 250 | Input poll interval while no tick is scheduled |
//!
//! # Examples
//!
//! ```
//! use neon_snake_types::{Direction, Segment, Turn, GRID_SIZE};
//!
//! let head = Segment::new(200, 200);
//! let next = head.advanced(Direction::RIGHT, GRID_SIZE);
//! assert_eq!(next, Segment::new(220, 200));
//! assert_eq!(Turn::Up.direction(), Direction::UP);
//! ```

/// Playfield width in pixels
pub const PLAYFIELD_WIDTH: i32 = 400;

/// Playfield height in pixels
pub const PLAYFIELD_HEIGHT: i32 = 400;

/// Side length of one grid cell in pixels
pub const GRID_SIZE: i32 = 20;

/// Fixed step interval in milliseconds
pub const TICK_MS: u32 = 100;

/// Input poll interval used while the step timer is disarmed
pub const IDLE_POLL_MS: u32 = 250;

/// Spawn position of the snake head (pixels)
pub const ORIGIN: Segment = Segment { x: 200, y: 200 };

/// Food position before the first game starts (pixels)
pub const INITIAL_FOOD: Segment = Segment { x: 100, y: 100 };

/// Shadow blur applied to every drawn square
pub const GLOW_BLUR: u8 = 15;

/// Gap between adjacent squares (squares are `GRID_SIZE - CELL_GAP` wide)
pub const CELL_GAP: i32 = 2;

/// Food colour (`#ff00ff`)
pub const FOOD_COLOR: Rgb = Rgb::new(0xff, 0x00, 0xff);

/// Snake body colour (`#00ffcc`)
pub const SNAKE_COLOR: Rgb = Rgb::new(0x00, 0xff, 0xcc);


/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Scale every channel by `num / den` (saturating).
    pub const fn scaled(self, num: u16, den: u16) -> Self {
        let den = if den == 0 { 1 } else { den };
        Self {
            r: scale_channel(self.r, num, den),
            g: scale_channel(self.g, num, den),
            b: scale_channel(self.b, num, den),
        }
    }
}

const fn scale_channel(c: u8, num: u16, den: u16) -> u8 {
    let v = (c as u32) * (num as u32) / (den as u32);
    if v > 255 {
        255
    } else {
        v as u8
    }
}

/// A grid-aligned cell in pixel units
///
/// The snake is an ordered sequence of segments (head first); food is a
/// single segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    pub x: i32,
    pub y: i32,
}

impl Segment {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Segment moved one cell along `direction`
    pub const fn advanced(self, direction: Direction, grid_size: i32) -> Self {
        Self {
            x: self.x + direction.x * grid_size,
            y: self.y + direction.y * grid_size,
        }
    }

    /// Position in grid units `(column, row)`
    pub const fn grid_cell(self, grid_size: i32) -> (i32, i32) {
        (self.x.div_euclid(grid_size), self.y.div_euclid(grid_size))
    }
}

/// Unit heading vector
///
/// Only five values are ever produced: still, right, left, down and up
/// (screen coordinates, so `y = 1` points down).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub x: i32,
    pub y: i32,
}

impl Direction {
    pub const NONE: Direction = Direction { x: 0, y: 0 };
    pub const RIGHT: Direction = Direction { x: 1, y: 0 };
    pub const LEFT: Direction = Direction { x: -1, y: 0 };
    pub const DOWN: Direction = Direction { x: 0, y: 1 };
    pub const UP: Direction = Direction { x: 0, y: -1 };

    /// Lowercase name, `"none"` for the still vector
    pub fn as_str(&self) -> &'static str {
        match (self.x, self.y) {
            (1, 0) => "right",
            (-1, 0) => "left",
            (0, 1) => "down",
            (0, -1) => "up",
            _ => "none",
        }
    }
}

/// A requested turn, produced by one of the four arrow keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Turn {
    Up,
    Down,
    Left,
    Right,
}

impl Turn {
    pub fn direction(&self) -> Direction {
        match self {
            Turn::Up => Direction::UP,
            Turn::Down => Direction::DOWN,
            Turn::Left => Direction::LEFT,
            Turn::Right => Direction::RIGHT,
        }
    }

    /// Whether this turn changes the vertical axis
    pub fn is_vertical(&self) -> bool {
        matches!(self, Turn::Up | Turn::Down)
    }
}

/// Game actions that can be applied to the game loop
///
/// These actions are produced by keyboard input and consumed by the loop
/// controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Change heading (subject to the reversal guard)
    Turn(Turn),
    /// Start a new run, or restart after game over
    StartOrRestart,
}

/// Lifecycle phase of one game
///
/// - **Idle**: nothing started yet
/// - **Running**: the step timer is armed and input is accepted
/// - **GameOver**: the last run ended in a collision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Idle,
    Running,
    GameOver,
}

impl Phase {
    pub fn is_running(&self) -> bool {
        *self == Phase::Running
    }

    pub fn is_game_over(&self) -> bool {
        *self == Phase::GameOver
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Running => "running",
            Phase::GameOver => "game_over",
        }
    }
}
