//! Food placement.

use std::collections::VecDeque;

use crate::config::{FoodPolicy, GameConfig};
use crate::rng::SimpleRng;
use crate::types::Segment;

/// Pick a new grid-aligned food cell inside the playfield.
///
/// The column is drawn before the row. With [`FoodPolicy::AvoidSnake`] the
/// draw is over free cells only, in row-major order.
pub fn place_food(rng: &mut SimpleRng, config: &GameConfig, snake: &VecDeque<Segment>) -> Segment {
    let cols = config.cols().max(1) as u32;
    let rows = config.rows().max(1) as u32;

    if config.food_policy == FoodPolicy::AvoidSnake {
        let total = cols * rows;
        let occupied = (0..total)
            .filter(|&i| snake.contains(&cell_at(config, cols, i)))
            .count() as u32;
        let free = total - occupied;
        if free > 0 {
            let mut pick = rng.next_range(free);
            for i in 0..total {
                let cell = cell_at(config, cols, i);
                if snake.contains(&cell) {
                    continue;
                }
                if pick == 0 {
                    return cell;
                }
                pick -= 1;
            }
        }
    }

    let col = rng.next_range(cols) as i32;
    let row = rng.next_range(rows) as i32;
    Segment::new(col * config.grid_size, row * config.grid_size)
}

fn cell_at(config: &GameConfig, cols: u32, index: u32) -> Segment {
    let col = (index % cols) as i32;
    let row = (index / cols) as i32;
    Segment::new(col * config.grid_size, row * config.grid_size)
}
