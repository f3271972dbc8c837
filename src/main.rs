//! Terminal Neon Snake runner (default binary).
//!
//! Uses crossterm for input and a framebuffer-based page renderer. Play is
//! gated on a connected wallet; the wallet is never used for anything else.

mod cli;
mod logging;

use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use neon_snake::core::GameState;
use neon_snake::engine::{GameEvent, GameLoop, StartOutcome};
use neon_snake::input::{handle_key_event, should_quit, wallet_command, WalletCommand};
use neon_snake::term::{Canvas, FrameBuffer, GameView, TerminalRenderer, Viewport, WalletBadge};
use neon_snake::types::IDLE_POLL_MS;
use neon_snake::wallet::WalletSession;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.log_path.as_deref())?;

    let config = cli.game_config()?;
    let seed = cli.seed();
    let wallet = WalletSession::auto_connect(cli.wallet_config()?);
    let state = GameState::with_config(config, seed)?;
    tracing::info!(seed, tick_ms = config.tick_ms, food = config.food_policy.as_str(), "neon-snake starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, state, wallet);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, state: GameState, mut wallet: WalletSession) -> Result<()> {
    let (event_tx, event_rx) = mpsc::channel();
    let mut game = GameLoop::new(state).with_events(event_tx);
    let mut canvas = Canvas::for_config(game.state().config());
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let idle_poll = Duration::from_millis(IDLE_POLL_MS as u64);
    let mut games_played = 0u32;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let badge = wallet_badge(&wallet);
        view.render_into(&game.snapshot(), &canvas, &badge, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next step.
        let timeout = game
            .time_until_tick(Instant::now())
            .unwrap_or(idle_poll);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        break;
                    }

                    if let Some(action) = handle_key_event(key) {
                        if let Some(StartOutcome::Ignored(reason)) =
                            game.apply_action(action, Instant::now(), &wallet)
                        {
                            tracing::debug!(reason = reason.as_str(), "start request ignored");
                        }
                    }

                    match wallet_command(key) {
                        Some(WalletCommand::Connect) => {
                            if let Err(e) = wallet.connect() {
                                tracing::warn!(error = %e, "wallet connect failed");
                            }
                        }
                        Some(WalletCommand::Disconnect) => {
                            wallet.disconnect();
                        }
                        None => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Step.
        game.poll(Instant::now(), &mut canvas);

        for event in event_rx.try_iter() {
            if let GameEvent::GameOver { score, .. } = event {
                games_played += 1;
                tracing::info!(score, games_played, "run finished");
            }
        }
    }

    game.shutdown();
    Ok(())
}

fn wallet_badge(wallet: &WalletSession) -> WalletBadge {
    match wallet.connected() {
        Some(w) => WalletBadge::connected(format!("{} {}", w.wallet, w.short_address())),
        None => WalletBadge::default(),
    }
}
