//! Game state module - manages the complete state of one Snake run
//!
//! This module ties together the snake body, heading, food, score and
//! lifecycle phase. All mutation goes through [`GameState::start`],
//! [`GameState::turn`] and [`GameState::step`]; rendering reads the state and
//! draws into any [`DrawSurface`].

use std::collections::VecDeque;

use crate::config::{ConfigError, GameConfig};
use crate::food::place_food;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::surface::{DrawSurface, Paint, Rect};
use crate::types::*;

/// What ended a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collision {
    /// The new head left the playfield.
    Wall,
    /// The new head hit a body segment.
    Body,
}

impl Collision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collision::Wall => "wall",
            Collision::Body => "body",
        }
    }
}

/// Result of a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The game is not running; nothing changed.
    Halted,
    /// The snake moved without eating.
    Moved,
    /// The snake ate and grew; carries the new score.
    Ate { score: u32 },
    /// The step collided and the game is now over.
    Collided(Collision),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    /// Head first, tail last.
    snake: VecDeque<Segment>,
    food: Segment,
    direction: Direction,
    score: u32,
    phase: Phase,
    /// Monotonic run id (increments on every start).
    episode_id: u32,
    /// Successful steps in the current run.
    steps: u32,
    rng: SimpleRng,
}

impl GameState {
    /// Create an idle game with the default configuration
    pub fn new(seed: u32) -> Self {
        Self::build(GameConfig::default(), seed)
    }

    /// Create an idle game with a custom configuration
    pub fn with_config(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, seed))
    }

    fn build(config: GameConfig, seed: u32) -> Self {
        let mut snake = VecDeque::with_capacity((config.cols() * config.rows()) as usize + 1);
        snake.push_back(config.origin);
        Self {
            config,
            snake,
            food: INITIAL_FOOD,
            direction: Direction::NONE,
            score: 0,
            phase: Phase::Idle,
            episode_id: 0,
            steps: 0,
            rng: SimpleRng::new(seed),
        }
    }

    /// Begin a fresh run, discarding the previous one.
    ///
    /// Valid from any phase; gating (wallet, "already running") is the loop
    /// controller's job.
    pub fn start(&mut self) {
        self.snake.clear();
        self.snake.push_back(self.config.origin);
        self.direction = Direction::RIGHT;
        self.score = 0;
        self.steps = 0;
        self.phase = Phase::Running;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.food = place_food(&mut self.rng, &self.config, &self.snake);
    }

    /// Apply an arrow-key turn.
    ///
    /// Ignored unless running. A vertical turn is accepted only while the
    /// snake is not moving vertically, a horizontal one only while it is not
    /// moving horizontally. Returns whether the heading changed.
    pub fn turn(&mut self, turn: Turn) -> bool {
        if !self.phase.is_running() {
            return false;
        }
        let allowed = if turn.is_vertical() {
            self.direction.y == 0
        } else {
            self.direction.x == 0
        };
        if !allowed {
            return false;
        }
        let next = turn.direction();
        let changed = next != self.direction;
        self.direction = next;
        changed
    }

    /// Advance the snake by one grid cell.
    pub fn step(&mut self) -> StepOutcome {
        if !self.phase.is_running() {
            return StepOutcome::Halted;
        }

        let new_head = self.head().advanced(self.direction, self.config.grid_size);

        if let Some(collision) = self.check_collision(new_head) {
            self.phase = Phase::GameOver;
            return StepOutcome::Collided(collision);
        }

        self.snake.push_front(new_head);
        self.steps += 1;

        if new_head == self.food {
            self.score += 1;
            self.food = place_food(&mut self.rng, &self.config, &self.snake);
            StepOutcome::Ate { score: self.score }
        } else {
            self.snake.pop_back();
            StepOutcome::Moved
        }
    }

    /// Check a prospective head against the walls and the pre-move body.
    ///
    /// The tail cell counts even though it would be vacated by this step.
    pub fn check_collision(&self, head: Segment) -> Option<Collision> {
        if !self.config.contains(head) {
            return Some(Collision::Wall);
        }
        if self.snake.contains(&head) {
            return Some(Collision::Body);
        }
        None
    }

    /// Draw the current frame: clear, then food, then every body segment.
    pub fn render<S: DrawSurface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        surface.fill_rect(self.cell_rect(self.food), Paint::neon(FOOD_COLOR));
        for &segment in &self.snake {
            surface.fill_rect(self.cell_rect(segment), Paint::neon(SNAKE_COLOR));
        }
    }

    fn cell_rect(&self, cell: Segment) -> Rect {
        let side = self.config.grid_size - CELL_GAP;
        Rect::new(cell.x, cell.y, side, side)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            score: self.score,
            length: self.snake.len() as u32,
            head: self.head(),
            food: self.food,
            direction: self.direction,
        }
    }

    /// Replace the body (head first) and heading.
    ///
    /// Intended for scripted scenarios and tests; does not change the phase.
    pub fn set_snake(&mut self, body: impl IntoIterator<Item = Segment>, direction: Direction) {
        self.snake.clear();
        self.snake.extend(body);
        if self.snake.is_empty() {
            self.snake.push_back(self.config.origin);
        }
        self.direction = direction;
    }

    /// Move the food to `cell`. Intended for scripted scenarios and tests.
    pub fn set_food(&mut self, cell: Segment) {
        self.food = cell;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn running(&self) -> bool {
        self.phase.is_running()
    }

    pub fn game_over(&self) -> bool {
        self.phase.is_game_over()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Segment {
        self.food
    }

    pub fn head(&self) -> Segment {
        self.snake.front().copied().unwrap_or(self.config.origin)
    }

    pub fn snake(&self) -> &VecDeque<Segment> {
        &self.snake
    }

    pub fn length(&self) -> usize {
        self.snake.len()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        clears: usize,
        rects: Vec<(Rect, Paint)>,
    }

    impl DrawSurface for Recorder {
        fn clear(&mut self) {
            self.clears += 1;
            self.rects.clear();
        }

        fn fill_rect(&mut self, rect: Rect, paint: Paint) {
            self.rects.push((rect, paint));
        }
    }

    fn running_game() -> GameState {
        let mut state = GameState::new(12345);
        state.start();
        // Park the food far from the snake's path.
        state.set_food(Segment::new(0, 0));
        state
    }

    #[test]
    fn test_new_game_is_idle() {
        let state = GameState::new(1);
        assert_eq!(state.phase(), Phase::Idle);
        assert_eq!(state.snake().iter().copied().collect::<Vec<_>>(), vec![ORIGIN]);
        assert_eq!(state.food(), INITIAL_FOOD);
        assert_eq!(state.direction(), Direction::NONE);
        assert_eq!(state.score(), 0);
    }

    #[test]
    fn test_start_resets_run() {
        let mut state = GameState::new(1);
        state.start();
        assert!(state.running());
        assert_eq!(state.head(), Segment::new(200, 200));
        assert_eq!(state.length(), 1);
        assert_eq!(state.direction(), Direction::RIGHT);
        assert_eq!(state.score(), 0);
        assert_eq!(state.episode_id(), 1);
        assert!(state.config().contains(state.food()));
    }

    #[test]
    fn test_step_moves_head_and_drops_tail() {
        let mut state = running_game();
        assert_eq!(state.step(), StepOutcome::Moved);
        assert_eq!(
            state.snake().iter().copied().collect::<Vec<_>>(),
            vec![Segment::new(220, 200)]
        );
        assert_eq!(state.steps(), 1);
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut state = running_game();
        state.set_food(Segment::new(220, 200));
        assert_eq!(state.step(), StepOutcome::Ate { score: 1 });
        assert_eq!(state.score(), 1);
        assert_eq!(
            state.snake().iter().copied().collect::<Vec<_>>(),
            vec![Segment::new(220, 200), Segment::new(200, 200)]
        );
    }

    #[test]
    fn test_wall_collision_ends_game() {
        let mut state = running_game();
        state.set_snake([Segment::new(0, 200)], Direction::LEFT);
        assert_eq!(state.step(), StepOutcome::Collided(Collision::Wall));
        assert!(state.game_over());
        assert!(!state.running());
        // Body untouched on collision.
        assert_eq!(state.head(), Segment::new(0, 200));
    }

    #[test]
    fn test_body_collision_includes_tail() {
        let mut state = running_game();
        // A 2x2 loop: moving up from (220,220) lands on the tail (220,200).
        state.set_snake(
            [
                Segment::new(220, 220),
                Segment::new(200, 220),
                Segment::new(200, 200),
                Segment::new(220, 200),
            ],
            Direction::UP,
        );
        assert_eq!(state.step(), StepOutcome::Collided(Collision::Body));
        assert!(state.game_over());
    }

    #[test]
    fn test_step_after_game_over_is_halted() {
        let mut state = running_game();
        state.set_snake([Segment::new(380, 0)], Direction::RIGHT);
        state.step();
        assert_eq!(state.step(), StepOutcome::Halted);
        assert_eq!(state.steps(), 0);
    }

    #[test]
    fn test_turn_reversal_guard() {
        let mut state = running_game();
        assert!(!state.turn(Turn::Left));
        assert_eq!(state.direction(), Direction::RIGHT);
        assert!(!state.turn(Turn::Right));

        assert!(state.turn(Turn::Down));
        assert!(!state.turn(Turn::Up));
        assert_eq!(state.direction(), Direction::DOWN);
    }

    #[test]
    fn test_turns_within_one_tick_apply_in_order() {
        let mut state = running_game();
        assert!(state.turn(Turn::Up));
        assert!(state.turn(Turn::Left));
        assert_eq!(state.direction(), Direction::LEFT);
    }

    #[test]
    fn test_turn_ignored_when_not_running() {
        let mut state = GameState::new(1);
        assert!(!state.turn(Turn::Up));
        assert_eq!(state.direction(), Direction::NONE);
    }

    #[test]
    fn test_render_draws_food_then_body() {
        let mut state = running_game();
        state.set_snake([Segment::new(220, 200), Segment::new(200, 200)], Direction::RIGHT);

        let mut surface = Recorder::default();
        state.render(&mut surface);

        assert_eq!(surface.clears, 1);
        assert_eq!(
            surface.rects,
            vec![
                (Rect::new(0, 0, 18, 18), Paint::neon(FOOD_COLOR)),
                (Rect::new(220, 200, 18, 18), Paint::neon(SNAKE_COLOR)),
                (Rect::new(200, 200, 18, 18), Paint::neon(SNAKE_COLOR)),
            ]
        );
        assert_eq!(surface.rects[0].1.glow, 15);
    }

    #[test]
    fn test_restart_discards_previous_run() {
        let mut state = running_game();
        state.set_food(Segment::new(220, 200));
        state.step();
        state.set_snake([Segment::new(380, 0)], Direction::RIGHT);
        state.step();
        assert!(state.game_over());

        state.start();
        assert!(state.running());
        assert_eq!(state.score(), 0);
        assert_eq!(state.length(), 1);
        assert_eq!(state.episode_id(), 2);
    }

    #[test]
    fn test_with_config_validates() {
        let bad = GameConfig::default().with_tick_ms(0);
        assert_eq!(
            GameState::with_config(bad, 1).unwrap_err(),
            ConfigError::ZeroTick
        );
    }
}
