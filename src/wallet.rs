//! Wallet connection handshake.
//!
//! The wallet is an externally injected, address-yielding provider. Its
//! connection state is entirely independent of the session: connecting
//! never authenticates anything, and the session manager clears the
//! connection on logout purely for UX consistency.

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Provider error code meaning the user rejected the connection request.
pub const USER_REJECTED_CODE: i64 = 4001;

/// Failure reported by the injected provider itself.
#[derive(Debug, Clone, Error)]
#[error("provider failure {code}: {message}")]
pub struct ProviderFailure {
    pub code: i64,
    pub message: String,
}

/// Failure of the wallet connection handshake.
#[derive(Debug, Error)]
pub enum WalletError {
    /// No provider is injected into this environment.
    #[error("no wallet provider is installed")]
    ProviderAbsent,

    /// The user rejected the connection request.
    #[error("connection request rejected by the user")]
    UserRejected,

    /// The provider failed for any other reason.
    #[error("wallet provider error: {0}")]
    Provider(String),
}

/// An injected address-yielding provider.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Ask the provider for the user's accounts, prompting if necessary.
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderFailure>;
}

/// Performs the connection handshake against an optionally present
/// provider.
#[derive(Clone)]
pub struct WalletConnector {
    provider: Option<Arc<dyn WalletProvider>>,
}

impl WalletConnector {
    /// A connector over whatever provider the environment injected
    /// (`None` when absent).
    pub fn new(provider: Option<Arc<dyn WalletProvider>>) -> Self {
        Self { provider }
    }

    /// Run the handshake and return the active address.
    ///
    /// Fails immediately with [`WalletError::ProviderAbsent`] when no
    /// provider is injected; there is no retry.
    pub async fn connect(&self) -> Result<String, WalletError> {
        let provider = self.provider.as_ref().ok_or(WalletError::ProviderAbsent)?;

        let accounts = provider.request_accounts().await.map_err(|failure| {
            if failure.code == USER_REJECTED_CODE {
                WalletError::UserRejected
            } else {
                WalletError::Provider(failure.message)
            }
        })?;

        accounts
            .into_iter()
            .next()
            .ok_or_else(|| WalletError::Provider("provider returned no accounts".into()))
    }
}

/// The single active wallet address, if any.
///
/// Never persisted; destroyed by explicit disconnect or process restart.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletConnection {
    address: Option<String>,
}

impl WalletConnection {
    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    /// Record the address returned by a successful handshake.
    pub fn set(&mut self, address: impl Into<String>) {
        self.address = Some(address.into());
    }

    /// Clear the connection locally. Provider-level permission is not
    /// revoked.
    pub fn disconnect(&mut self) {
        self.address = None;
    }
}
