//! Rust client SDK for the land registry service.
//!
//! Implements the client-side session and orchestration layer: the
//! authentication-token lifecycle, route-level access control, per-form
//! reference-data snapshots, the wallet-connection handshake, and the
//! form orchestrators that submit mutations against the remote API.
//!
//! # Example
//!
//! ```rust,no_run
//! use land_registry_client::{
//!     forms::LoginForm, ClientConfig, FileTokenStore, HttpRegistry, Route, SessionManager,
//! };
//!
//! # async fn example() {
//! let api = HttpRegistry::new(ClientConfig::default());
//! let mut session = SessionManager::new(FileTokenStore::new("/var/lib/registry-client"));
//!
//! // Process start: adopt a persisted, unexpired token if one exists.
//! session.restore();
//!
//! if !session.is_logged_in() {
//!     let mut login = LoginForm::new();
//!     login.email = "staff@example.com".into();
//!     login.password = "secret1".into();
//!     login.submit(&api, &mut session).await;
//! }
//!
//! // Navigation goes wherever the guard says it may.
//! match land_registry_client::resolve(session.state(), Route::Root) {
//!     Route::Dashboard => { /* render the dashboard */ }
//!     _ => { /* back to the login view */ }
//! }
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod forms;
pub mod reference;
pub mod routes;
pub mod session;
pub mod store;
pub mod token;
pub mod types;
pub mod wallet;

// Re-export the main types
pub use api::{HttpRegistry, MockRegistry, RegistryApi};
pub use config::{ClientConfig, Mode};
pub use error::{RegistryError, Result};
pub use reference::{Kinds, ReferenceSnapshot};
pub use routes::{resolve, Route};
pub use session::{SessionManager, SessionState};
pub use store::{FileTokenStore, MemoryTokenStore, TokenStore};
pub use token::{decode, Claims, DecodeError, UserClaims};
pub use types::*;
pub use wallet::{WalletConnection, WalletConnector, WalletError, WalletProvider};
