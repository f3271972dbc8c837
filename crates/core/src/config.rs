//! Game configuration: playfield geometry, tick interval and food policy.

use thiserror::Error;

use crate::types::{Segment, GRID_SIZE, ORIGIN, PLAYFIELD_HEIGHT, PLAYFIELD_WIDTH, TICK_MS};

/// Where relocated food may land.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FoodPolicy {
    /// Any grid cell, including cells covered by the snake.
    #[default]
    Anywhere,
    /// Only cells not covered by the snake (falls back to `Anywhere` when the
    /// snake covers the whole playfield).
    AvoidSnake,
}

impl FoodPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FoodPolicy::Anywhere => "anywhere",
            FoodPolicy::AvoidSnake => "avoid-snake",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("grid size must be positive, got {0}")]
    InvalidGridSize(i32),
    #[error("playfield {width}x{height} is not a positive multiple of grid size {grid_size}")]
    MisalignedPlayfield {
        width: i32,
        height: i32,
        grid_size: i32,
    },
    #[error("origin ({x}, {y}) must be grid-aligned and inside the playfield")]
    InvalidOrigin { x: i32, y: i32 },
    #[error("tick interval must be at least 1ms")]
    ZeroTick,
}

/// Complete game configuration.
///
/// `Default` is the classic 400x400 px field with 20 px cells stepping every
/// 100ms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub grid_size: i32,
    pub tick_ms: u32,
    pub origin: Segment,
    pub food_policy: FoodPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            grid_size: GRID_SIZE,
            tick_ms: TICK_MS,
            origin: ORIGIN,
            food_policy: FoodPolicy::Anywhere,
        }
    }
}

impl GameConfig {
    pub fn with_tick_ms(mut self, tick_ms: u32) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    pub fn with_food_policy(mut self, food_policy: FoodPolicy) -> Self {
        self.food_policy = food_policy;
        self
    }

    /// Number of grid columns.
    pub fn cols(&self) -> i32 {
        self.width / self.grid_size
    }

    /// Number of grid rows.
    pub fn rows(&self) -> i32 {
        self.height / self.grid_size
    }

    /// Whether a pixel position lies inside `[0, width) x [0, height)`.
    pub fn contains(&self, cell: Segment) -> bool {
        cell.x >= 0 && cell.x < self.width && cell.y >= 0 && cell.y < self.height
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size <= 0 {
            return Err(ConfigError::InvalidGridSize(self.grid_size));
        }
        if self.width <= 0
            || self.height <= 0
            || self.width % self.grid_size != 0
            || self.height % self.grid_size != 0
        {
            return Err(ConfigError::MisalignedPlayfield {
                width: self.width,
                height: self.height,
                grid_size: self.grid_size,
            });
        }
        let o = self.origin;
        if !self.contains(o) || o.x % self.grid_size != 0 || o.y % self.grid_size != 0 {
            return Err(ConfigError::InvalidOrigin { x: o.x, y: o.y });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTick);
        }
        Ok(())
    }
}
