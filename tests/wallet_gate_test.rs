//! Wallet configuration loading and the play gate it controls.

use std::time::Instant;

use neon_snake::core::GameState;
use neon_snake::engine::{GameLoop, IgnoreReason, StartOutcome};
use neon_snake::wallet::{Network, WalletConfig, WalletError, WalletSession, WalletStatus};

fn temp_config(name: &str, body: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!(
        "neon-snake-{}-{}.json",
        name,
        std::process::id()
    ));
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn config_file_drives_auto_connect() {
    let path = temp_config(
        "auto",
        r#"{ "network": "mainnet", "opt_in_wallets": ["Petra", "Martian"], "account": "0x8f3a0000c01d" }"#,
    );
    let config = WalletConfig::load(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(config.network, Network::Mainnet);
    assert!(config.auto_connect);

    let session = WalletSession::auto_connect(config);
    let connected = session.connected().unwrap();
    assert_eq!(connected.wallet, "Petra");
    assert_eq!(connected.short_address(), "0x8f3a…c01d");
}

#[test]
fn auto_connect_can_be_disabled() {
    let config = WalletConfig::from_json(r#"{ "auto_connect": false, "account": "0xabc" }"#).unwrap();
    let session = WalletSession::auto_connect(config);
    assert!(!session.is_connected());
}

#[test]
fn missing_file_reports_path() {
    let err = WalletConfig::load("/definitely/not/here/wallet.json").unwrap_err();
    assert!(matches!(err, WalletError::Read { .. }));
    assert!(err.to_string().contains("/definitely/not/here/wallet.json"));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let path = temp_config("bad", "{ network: ");
    let err = WalletConfig::load(&path).unwrap_err();
    std::fs::remove_file(&path).ok();
    assert!(matches!(err, WalletError::Parse(_)));
}

#[test]
fn config_round_trips_through_json() {
    let config = WalletConfig::default().with_account(Some("0x1".to_string()));
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(WalletConfig::from_json(&json).unwrap(), config);
}

#[test]
fn gate_follows_connect_and_disconnect() {
    let mut wallet = WalletSession::new(WalletConfig::default().with_account(Some("0xfeed".into())));
    let mut game = GameLoop::new(GameState::new(9));
    let now = Instant::now();

    assert_eq!(
        game.request_start(now, &wallet),
        StartOutcome::Ignored(IgnoreReason::WalletDisconnected)
    );

    wallet.connect().unwrap();
    assert_eq!(game.request_start(now, &wallet), StartOutcome::Started);

    // Force game over, then disconnect: restart is gated again.
    game.state_mut()
        .set_snake([neon_snake::types::Segment::new(0, 0)], neon_snake::types::Direction::UP);
    let mut canvas = neon_snake::term::Canvas::for_config(game.state().config());
    game.tick(&mut canvas);
    assert!(wallet.disconnect());
    assert_eq!(
        game.request_start(now, &wallet),
        StartOutcome::Ignored(IgnoreReason::WalletDisconnected)
    );
    assert!(game.state().game_over());
}

#[test]
fn connect_without_account_fails() {
    let mut wallet = WalletSession::new(WalletConfig::default());
    let err = wallet.connect().unwrap_err();
    assert!(matches!(err, WalletError::NoAccount { .. }));
    assert!(!wallet.is_connected());
}
