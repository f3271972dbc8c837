//! Wallet gate module - decides whether play is allowed
//!
//! The game never talks to a chain. A wallet connection is only a UI gate:
//! the start/restart control is offered while a wallet is connected and
//! replaced by a "connect your wallet" prompt otherwise.
//!
//! # Module Structure
//!
//! - [`config`]: Provider settings (network, opt-in wallets, auto-connect,
//!   account) loaded from a JSON file
//! - [`session`]: Connect / disconnect state exposed through [`WalletStatus`]
//!
//! # Example
//!
//! ```
//! use neon_snake_wallet::{WalletConfig, WalletSession, WalletStatus};
//!
//! let config = WalletConfig {
//!     account: Some("0x1".to_string()),
//!     ..WalletConfig::default()
//! };
//! let mut session = WalletSession::new(config);
//! assert!(!session.is_connected());
//!
//! session.connect().unwrap();
//! assert!(session.is_connected());
//! ```

pub mod config;
pub mod session;

pub use config::{Network, WalletConfig};
pub use session::{ConnectedWallet, WalletError, WalletSession};

/// Read-only view of the wallet connection, consumed by the game loop.
pub trait WalletStatus {
    fn is_connected(&self) -> bool;
}

impl WalletStatus for bool {
    fn is_connected(&self) -> bool {
        *self
    }
}

impl<W: WalletStatus + ?Sized> WalletStatus for &W {
    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }
}
