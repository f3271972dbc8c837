//! Wallet provider configuration.
//!
//! Loaded from a JSON file such as:
//!
//! ```json
//! {
//!   "network": "testnet",
//!   "opt_in_wallets": ["Petra"],
//!   "auto_connect": true,
//!   "account": "0x8f3a...c01d"
//! }
//! ```
//!
//! Every field is optional; missing fields take the defaults below.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::session::WalletError;

/// Network the provider is configured for. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    #[default]
    Testnet,
    Devnet,
    Local,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
            Network::Devnet => "devnet",
            Network::Local => "local",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    pub network: Network,
    /// Wallets offered by the selector, in preference order.
    pub opt_in_wallets: Vec<String>,
    /// Connect on start-up when an account is available.
    pub auto_connect: bool,
    /// Address the wallet exposes once connected.
    pub account: Option<String>,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            network: Network::Testnet,
            opt_in_wallets: vec!["Petra".to_string()],
            auto_connect: true,
            account: None,
        }
    }
}

impl WalletConfig {
    pub fn from_json(s: &str) -> Result<Self, WalletError> {
        serde_json::from_str(s).map_err(WalletError::Parse)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, WalletError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| WalletError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&raw)
    }

    /// Override the account (e.g. from the command line). Blank values clear it.
    pub fn with_account(mut self, account: Option<String>) -> Self {
        if let Some(a) = account {
            let a = a.trim().to_string();
            self.account = if a.is_empty() { None } else { Some(a) };
        }
        self
    }

    /// Name shown for a connected wallet.
    pub fn preferred_wallet(&self) -> &str {
        self.opt_in_wallets
            .first()
            .map(String::as_str)
            .unwrap_or("Wallet")
    }
}
