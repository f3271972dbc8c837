//! Command-line and environment configuration.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use neon_snake::core::{FoodPolicy, GameConfig};
use neon_snake::wallet::WalletConfig;

#[derive(Parser, Debug)]
#[command(name = "neon-snake")]
#[command(version, about = "Wallet-gated neon Snake for the terminal")]
pub struct Cli {
    /// Seed for food placement (defaults to the clock)
    #[arg(long, env = "SNAKE_SEED")]
    pub seed: Option<u32>,

    /// Milliseconds between snake steps
    #[arg(long, env = "SNAKE_TICK_MS", default_value_t = neon_snake::types::TICK_MS)]
    pub tick_ms: u32,

    /// Where relocated food may appear
    #[arg(long, value_enum, default_value_t = FoodArg::Anywhere)]
    pub food: FoodArg,

    /// JSON wallet provider config (network, opt_in_wallets, auto_connect, account)
    #[arg(long, env = "SNAKE_WALLET_CONFIG")]
    pub wallet_config: Option<PathBuf>,

    /// Wallet account address; overrides the config file
    #[arg(long, env = "SNAKE_WALLET_ACCOUNT")]
    pub account: Option<String>,

    /// Write logs to this file (the terminal is busy drawing the game)
    #[arg(long, env = "SNAKE_LOG_PATH")]
    pub log_path: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FoodArg {
    /// Any cell, even one under the snake
    Anywhere,
    /// Only cells the snake does not cover
    AvoidSnake,
}

impl From<FoodArg> for FoodPolicy {
    fn from(value: FoodArg) -> Self {
        match value {
            FoodArg::Anywhere => FoodPolicy::Anywhere,
            FoodArg::AvoidSnake => FoodPolicy::AvoidSnake,
        }
    }
}

impl Cli {
    pub fn game_config(&self) -> Result<GameConfig> {
        let config = GameConfig::default()
            .with_tick_ms(self.tick_ms)
            .with_food_policy(self.food.into());
        config.validate().context("invalid game configuration")?;
        Ok(config)
    }

    pub fn wallet_config(&self) -> Result<WalletConfig> {
        let config = match &self.wallet_config {
            Some(path) => WalletConfig::load(path)
                .with_context(|| format!("loading wallet config {}", path.display()))?,
            None => WalletConfig::default(),
        };
        Ok(config.with_account(self.account.clone()))
    }

    pub fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}
