//! The loop controller: owns game state and the step timer.

use std::sync::mpsc::Sender;
use std::time::{Duration, Instant};

use neon_snake_core::{DrawSurface, GameSnapshot, GameState, StepOutcome};
use neon_snake_types::{GameAction, Phase, Turn};
use neon_snake_wallet::WalletStatus;

use crate::event::{GameEvent, IgnoreReason, StartOutcome};
use crate::timer::IntervalTimer;

pub struct GameLoop {
    state: GameState,
    timer: IntervalTimer,
    events: Option<Sender<GameEvent>>,
}

impl GameLoop {
    /// Wrap `state`; the timer period comes from its configuration.
    pub fn new(state: GameState) -> Self {
        let timer = IntervalTimer::from_millis(state.config().tick_ms);
        Self {
            state,
            timer,
            events: None,
        }
    }

    /// Report lifecycle transitions on `tx`.
    pub fn with_events(mut self, tx: Sender<GameEvent>) -> Self {
        self.events = Some(tx);
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn timer_armed(&self) -> bool {
        self.timer.is_armed()
    }

    /// Handle the start/restart control.
    ///
    /// Idle -> Running and GameOver -> Running, only while `wallet` is
    /// connected. A request while already running is ignored.
    pub fn request_start<W: WalletStatus + ?Sized>(
        &mut self,
        now: Instant,
        wallet: &W,
    ) -> StartOutcome {
        if !wallet.is_connected() {
            tracing::debug!("start ignored: wallet not connected");
            return StartOutcome::Ignored(IgnoreReason::WalletDisconnected);
        }

        let from = self.state.phase();
        let outcome = match from {
            Phase::Running => {
                tracing::debug!("start ignored: already running");
                return StartOutcome::Ignored(IgnoreReason::AlreadyRunning);
            }
            Phase::Idle => StartOutcome::Started,
            Phase::GameOver => StartOutcome::Restarted,
        };

        self.state.start();
        self.timer.release();
        self.timer.arm(now);

        let episode_id = self.state.episode_id();
        tracing::info!(
            episode_id,
            from = from.as_str(),
            food_x = self.state.food().x,
            food_y = self.state.food().y,
            "game started"
        );
        self.emit(match outcome {
            StartOutcome::Restarted => GameEvent::Restarted { episode_id },
            _ => GameEvent::Started { episode_id },
        });
        outcome
    }

    /// Forward an arrow-key turn. Ignored unless running.
    pub fn turn(&mut self, turn: Turn) -> bool {
        let changed = self.state.turn(turn);
        if changed {
            tracing::trace!(heading = self.state.direction().as_str(), "turned");
        }
        changed
    }

    /// Dispatch a mapped key action.
    ///
    /// Returns the start outcome for start/restart, `None` for turns.
    pub fn apply_action<W: WalletStatus + ?Sized>(
        &mut self,
        action: GameAction,
        now: Instant,
        wallet: &W,
    ) -> Option<StartOutcome> {
        match action {
            GameAction::Turn(turn) => {
                self.turn(turn);
                None
            }
            GameAction::StartOrRestart => Some(self.request_start(now, wallet)),
        }
    }

    /// Run the step if the timer is due, then redraw `surface`.
    ///
    /// A colliding step releases the timer and draws nothing. Returns the
    /// step outcome when a step ran.
    pub fn poll<S: DrawSurface + ?Sized>(
        &mut self,
        now: Instant,
        surface: &mut S,
    ) -> Option<StepOutcome> {
        if !self.timer.fire(now) {
            return None;
        }
        Some(self.tick(surface))
    }

    /// Run one step immediately, independent of the timer schedule.
    pub fn tick<S: DrawSurface + ?Sized>(&mut self, surface: &mut S) -> StepOutcome {
        let outcome = self.state.step();
        match outcome {
            StepOutcome::Halted => {
                self.timer.release();
            }
            StepOutcome::Collided(collision) => {
                self.timer.release();
                let score = self.state.score();
                let length = self.state.length() as u32;
                tracing::info!(
                    score,
                    length,
                    steps = self.state.steps(),
                    collision = collision.as_str(),
                    "game over"
                );
                self.emit(GameEvent::GameOver {
                    score,
                    length,
                    collision,
                });
            }
            StepOutcome::Ate { score } => {
                let length = self.state.length() as u32;
                tracing::debug!(score, length, "food eaten");
                self.emit(GameEvent::FoodEaten { score, length });
                self.state.render(surface);
            }
            StepOutcome::Moved => {
                self.state.render(surface);
            }
        }
        outcome
    }

    /// Time until the next step, `None` while no step is scheduled.
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }

    /// Release the timer (teardown). Safe to call more than once.
    pub fn shutdown(&mut self) {
        if self.timer.release() {
            tracing::debug!("step timer released on shutdown");
            self.emit(GameEvent::Stopped);
        }
    }

    /// Mutable access to the state for scripted scenarios and tests.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    fn emit(&self, event: GameEvent) {
        if let Some(tx) = &self.events {
            // A dropped receiver only means nobody is listening.
            let _ = tx.send(event);
        }
    }
}

impl Drop for GameLoop {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neon_snake_core::{Collision, Paint, Rect};
    use neon_snake_types::{Direction, Segment};
    use std::sync::mpsc;

    #[derive(Default)]
    struct CountingSurface {
        clears: usize,
        fills: usize,
    }

    impl DrawSurface for CountingSurface {
        fn clear(&mut self) {
            self.clears += 1;
        }

        fn fill_rect(&mut self, _rect: Rect, _paint: Paint) {
            self.fills += 1;
        }
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn start_requires_connected_wallet() {
        let mut game = GameLoop::new(GameState::new(1));
        let now = Instant::now();
        assert_eq!(
            game.request_start(now, &false),
            StartOutcome::Ignored(IgnoreReason::WalletDisconnected)
        );
        assert_eq!(game.phase(), Phase::Idle);
        assert!(!game.timer_armed());

        assert_eq!(game.request_start(now, &true), StartOutcome::Started);
        assert_eq!(game.phase(), Phase::Running);
        assert!(game.timer_armed());
    }

    #[test]
    fn start_while_running_is_ignored() {
        let mut game = GameLoop::new(GameState::new(1));
        let now = Instant::now();
        game.request_start(now, &true);
        assert_eq!(
            game.request_start(now, &true),
            StartOutcome::Ignored(IgnoreReason::AlreadyRunning)
        );
        assert_eq!(game.state().episode_id(), 1);
    }

    #[test]
    fn poll_steps_only_when_due() {
        let mut game = GameLoop::new(GameState::new(1));
        let t0 = Instant::now();
        game.request_start(t0, &true);
        game.state_mut().set_food(Segment::new(0, 0));

        let mut surface = CountingSurface::default();
        assert_eq!(game.poll(t0 + ms(50), &mut surface), None);
        assert_eq!(surface.clears, 0);

        assert_eq!(game.poll(t0 + ms(100), &mut surface), Some(StepOutcome::Moved));
        assert_eq!(game.state().head(), Segment::new(220, 200));
        assert_eq!(surface.clears, 1);
        assert_eq!(surface.fills, 2);
    }

    #[test]
    fn collision_releases_timer_and_skips_draw() {
        let (tx, rx) = mpsc::channel();
        let mut game = GameLoop::new(GameState::new(1)).with_events(tx);
        let t0 = Instant::now();
        game.request_start(t0, &true);
        game.state_mut()
            .set_snake([Segment::new(0, 200)], Direction::LEFT);

        let mut surface = CountingSurface::default();
        assert_eq!(
            game.poll(t0 + ms(100), &mut surface),
            Some(StepOutcome::Collided(Collision::Wall))
        );
        assert!(!game.timer_armed());
        assert_eq!(surface.clears, 0);
        assert_eq!(game.time_until_tick(t0 + ms(100)), None);

        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                GameEvent::Started { episode_id: 1 },
                GameEvent::GameOver {
                    score: 0,
                    length: 1,
                    collision: Collision::Wall
                },
            ]
        );
    }

    #[test]
    fn restart_after_game_over_rearms() {
        let (tx, rx) = mpsc::channel();
        let mut game = GameLoop::new(GameState::new(1)).with_events(tx);
        let t0 = Instant::now();
        game.request_start(t0, &true);
        game.state_mut()
            .set_snake([Segment::new(380, 0)], Direction::RIGHT);
        let mut surface = CountingSurface::default();
        game.poll(t0 + ms(100), &mut surface);
        assert_eq!(game.phase(), Phase::GameOver);

        let t1 = t0 + ms(500);
        assert_eq!(game.request_start(t1, &true), StartOutcome::Restarted);
        assert!(game.timer_armed());
        assert_eq!(game.time_until_tick(t1), Some(ms(100)));
        assert_eq!(rx.try_iter().last(), Some(GameEvent::Restarted { episode_id: 2 }));
    }

    #[test]
    fn shutdown_emits_stopped_once() {
        let (tx, rx) = mpsc::channel();
        let mut game = GameLoop::new(GameState::new(1)).with_events(tx);
        game.request_start(Instant::now(), &true);
        game.shutdown();
        game.shutdown();
        drop(game);

        let stopped = rx
            .try_iter()
            .filter(|e| *e == GameEvent::Stopped)
            .count();
        assert_eq!(stopped, 1);
    }

    #[test]
    fn drop_releases_armed_timer() {
        let (tx, rx) = mpsc::channel();
        {
            let mut game = GameLoop::new(GameState::new(1)).with_events(tx);
            game.request_start(Instant::now(), &true);
        }
        assert_eq!(rx.try_iter().last(), Some(GameEvent::Stopped));
    }

    #[test]
    fn apply_action_routes_turns_and_starts() {
        let mut game = GameLoop::new(GameState::new(1));
        let now = Instant::now();

        assert_eq!(
            game.apply_action(GameAction::Turn(Turn::Up), now, &true),
            None
        );
        assert_eq!(game.state().direction(), Direction::NONE);

        assert_eq!(
            game.apply_action(GameAction::StartOrRestart, now, &true),
            Some(StartOutcome::Started)
        );
        game.apply_action(GameAction::Turn(Turn::Up), now, &true);
        assert_eq!(game.state().direction(), Direction::UP);
    }
}
