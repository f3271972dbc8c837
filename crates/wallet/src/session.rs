//! Wallet session: the connect / disconnect state behind the gate.

use thiserror::Error;

use crate::config::WalletConfig;
use crate::WalletStatus;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("failed to read wallet config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid wallet config: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("no account configured for {wallet}")]
    NoAccount { wallet: String },
}

/// A connected wallet as shown by the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectedWallet {
    pub wallet: String,
    pub address: String,
}

impl ConnectedWallet {
    /// Address shortened to `0x1234…abcd` for display.
    pub fn short_address(&self) -> String {
        let a = &self.address;
        let chars: Vec<char> = a.chars().collect();
        if chars.len() <= 12 {
            return a.clone();
        }
        let head: String = chars[..6].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}…{tail}")
    }
}

#[derive(Debug, Clone)]
pub struct WalletSession {
    config: WalletConfig,
    connected: Option<ConnectedWallet>,
}

impl WalletSession {
    pub fn new(config: WalletConfig) -> Self {
        Self {
            config,
            connected: None,
        }
    }

    /// Create a session and connect immediately when `auto_connect` is set.
    ///
    /// Failures are logged and leave the session disconnected.
    pub fn auto_connect(config: WalletConfig) -> Self {
        let mut session = Self::new(config);
        if session.config.auto_connect && session.config.account.is_some() {
            if let Err(e) = session.connect() {
                tracing::warn!(error = %e, "wallet auto-connect failed");
            }
        }
        session
    }

    /// Connect the preferred wallet with the configured account.
    pub fn connect(&mut self) -> Result<&ConnectedWallet, WalletError> {
        let wallet = self.config.preferred_wallet().to_string();
        let Some(address) = self.config.account.clone() else {
            return Err(WalletError::NoAccount { wallet });
        };
        tracing::info!(
            wallet = %wallet,
            network = self.config.network.as_str(),
            "wallet connected"
        );
        let connected = self.connected.insert(ConnectedWallet { wallet, address });
        Ok(&*connected)
    }

    /// Returns whether a wallet was connected.
    pub fn disconnect(&mut self) -> bool {
        let was = self.connected.take();
        if let Some(w) = &was {
            tracing::info!(wallet = %w.wallet, "wallet disconnected");
        }
        was.is_some()
    }

    pub fn connected(&self) -> Option<&ConnectedWallet> {
        self.connected.as_ref()
    }

    pub fn config(&self) -> &WalletConfig {
        &self.config
    }
}

impl WalletStatus for WalletSession {
    fn is_connected(&self) -> bool {
        self.connected.is_some()
    }
}
