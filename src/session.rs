//! Session state machine.
//!
//! One owner for the whole process: the manager holds the current state,
//! the raw token, the persisted copy (through [`TokenStore`]), and the
//! wallet connection slot cleared by the logout cascade. All mutation goes
//! through `&mut self`, which is the crate's single-writer discipline.

use tracing::{debug, warn};

use crate::store::TokenStore;
use crate::token::{self, unix_now, Claims};
use crate::wallet::WalletConnection;

/// The client's belief about whether a user is authenticated.
///
/// Invariant: `LoggedIn` holds claims iff a token is present that decoded
/// successfully and was unexpired at the last check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    LoggedOut,
    LoggedIn(Claims),
}

/// Owns the session lifecycle: acquisition, restore-at-start, expiry
/// enforcement, persistence, and cascading logout.
pub struct SessionManager<S: TokenStore> {
    state: SessionState,
    token: Option<String>,
    store: S,
    wallet: WalletConnection,
}

impl<S: TokenStore> SessionManager<S> {
    /// A logged-out manager. The store is not touched until
    /// [`restore`](Self::restore) or [`set_token`](Self::set_token).
    pub fn new(store: S) -> Self {
        Self {
            state: SessionState::LoggedOut,
            token: None,
            store,
            wallet: WalletConnection::default(),
        }
    }

    /// The process-start check: adopt a persisted token when it decodes
    /// and is still unexpired, otherwise run the logout cascade.
    ///
    /// This is the ONLY place expiry is enforced. A token that expires
    /// mid-session stays trusted client-side until the next restore;
    /// server calls made with it are rejected remotely.
    pub fn restore(&mut self) {
        self.restore_at(unix_now());
    }

    fn restore_at(&mut self, now: u64) {
        let stored = match self.store.load() {
            Ok(stored) => stored,
            Err(err) => {
                warn!(error = %err, "token store unreadable, treating token as absent");
                None
            }
        };

        let Some(raw) = stored else {
            return;
        };

        match token::decode(&raw) {
            Ok(claims) if !claims.is_expired(now) => {
                self.token = Some(raw);
                self.state = SessionState::LoggedIn(claims);
            }
            Ok(_) => {
                debug!("persisted token already expired");
                self.logout();
            }
            Err(err) => {
                warn!(error = %err, "persisted token failed to decode");
                self.logout();
            }
        }
    }

    /// Adopt a freshly received token: decode, persist, enter `LoggedIn`.
    ///
    /// A decode failure runs the logout cascade silently: the caller
    /// gets no error beyond the resulting `LoggedOut` state. Expiry is
    /// not checked here (see [`restore`](Self::restore)).
    pub fn set_token(&mut self, raw: &str) {
        match token::decode(raw) {
            Ok(claims) => {
                if let Err(err) = self.store.save(raw) {
                    warn!(error = %err, "failed to persist token");
                }
                self.token = Some(raw.to_string());
                self.state = SessionState::LoggedIn(claims);
            }
            Err(err) => {
                warn!(error = %err, "received token failed to decode");
                self.logout();
            }
        }
    }

    /// The logout cascade: evict the persisted token, clear claims and
    /// the raw token, clear the wallet connection. Idempotent.
    pub fn logout(&mut self) {
        if let Err(err) = self.store.clear() {
            warn!(error = %err, "failed to evict persisted token");
        }
        self.token = None;
        self.state = SessionState::LoggedOut;
        self.wallet.disconnect();
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self.state, SessionState::LoggedIn(_))
    }

    /// Claims of the current session, when logged in.
    pub fn claims(&self) -> Option<&Claims> {
        match &self.state {
            SessionState::LoggedIn(claims) => Some(claims),
            SessionState::LoggedOut => None,
        }
    }

    /// The raw token backing the current session.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn wallet(&self) -> &WalletConnection {
        &self.wallet
    }

    /// Record a successfully connected wallet address.
    pub fn set_wallet(&mut self, address: impl Into<String>) {
        self.wallet.set(address);
    }

    /// Clear the wallet connection without touching the session.
    pub fn disconnect_wallet(&mut self) {
        self.wallet.disconnect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryTokenStore;
    use crate::token::UserClaims;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn make_token(exp: u64) -> String {
        let claims = Claims {
            user: UserClaims {
                id: "u1".into(),
                email: "a@b.com".into(),
            },
            iat: None,
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"server-side-secret"),
        )
        .unwrap()
    }

    fn assert_invariant<S: TokenStore>(session: &SessionManager<S>) {
        // claims present <=> token present
        assert_eq!(session.claims().is_some(), session.token().is_some());
    }

    #[test]
    fn starts_logged_out() {
        let session = SessionManager::new(MemoryTokenStore::new());
        assert_eq!(*session.state(), SessionState::LoggedOut);
        assert_invariant(&session);
    }

    #[test]
    fn set_token_logs_in_and_persists() {
        let store = MemoryTokenStore::new();
        let observer = store.clone();
        let mut session = SessionManager::new(store);

        let token = make_token(unix_now() + 3600);
        session.set_token(&token);

        assert!(session.is_logged_in());
        assert_eq!(session.claims().unwrap().user.email, "a@b.com");
        assert_eq!(observer.load().unwrap(), Some(token));
        assert_invariant(&session);
    }

    #[test]
    fn undecodable_token_cascades_to_logout() {
        let store = MemoryTokenStore::with_token("leftover");
        let observer = store.clone();
        let mut session = SessionManager::new(store);

        session.set_token("garbage");

        assert_eq!(*session.state(), SessionState::LoggedOut);
        // The cascade also evicts whatever was persisted.
        assert_eq!(observer.load().unwrap(), None);
        assert_invariant(&session);
    }

    #[test]
    fn restore_adopts_a_valid_persisted_token() {
        let token = make_token(unix_now() + 3600);
        let mut session = SessionManager::new(MemoryTokenStore::with_token(&token));

        session.restore();

        assert!(session.is_logged_in());
        assert_eq!(session.token(), Some(token.as_str()));
        assert_invariant(&session);
    }

    #[test]
    fn restore_rejects_an_expired_token() {
        let store = MemoryTokenStore::with_token(make_token(1_000));
        let observer = store.clone();
        let mut session = SessionManager::new(store);

        session.restore_at(2_000);

        assert_eq!(*session.state(), SessionState::LoggedOut);
        assert_eq!(observer.load().unwrap(), None);
        assert_invariant(&session);
    }

    #[test]
    fn restore_rejects_a_corrupt_token() {
        let store = MemoryTokenStore::with_token("corrupt");
        let observer = store.clone();
        let mut session = SessionManager::new(store);

        session.restore();

        assert_eq!(*session.state(), SessionState::LoggedOut);
        assert_eq!(observer.load().unwrap(), None);
    }

    #[test]
    fn restore_with_empty_store_stays_logged_out() {
        let mut session = SessionManager::new(MemoryTokenStore::new());
        session.restore();
        assert_eq!(*session.state(), SessionState::LoggedOut);
    }

    #[test]
    fn expiry_is_not_checked_mid_session() {
        // A token that is already expired still logs in through set_token;
        // only restore() enforces expiry.
        let mut session = SessionManager::new(MemoryTokenStore::new());
        session.set_token(&make_token(1_000));
        assert!(session.is_logged_in());
    }

    #[test]
    fn logout_is_idempotent() {
        let store = MemoryTokenStore::new();
        let observer = store.clone();
        let mut session = SessionManager::new(store);
        session.set_token(&make_token(unix_now() + 3600));

        session.logout();
        let after_once = session.state().clone();
        session.logout();

        assert_eq!(*session.state(), after_once);
        assert_eq!(*session.state(), SessionState::LoggedOut);
        assert_eq!(observer.load().unwrap(), None);
        assert_invariant(&session);
    }

    #[test]
    fn logout_clears_the_wallet_connection() {
        let mut session = SessionManager::new(MemoryTokenStore::new());
        session.set_token(&make_token(unix_now() + 3600));
        session.set_wallet("0xabc");
        assert!(session.wallet().is_connected());

        session.logout();

        assert!(!session.wallet().is_connected());
    }

    #[test]
    fn wallet_disconnect_leaves_the_session_alone() {
        let mut session = SessionManager::new(MemoryTokenStore::new());
        session.set_token(&make_token(unix_now() + 3600));
        session.set_wallet("0xabc");

        session.disconnect_wallet();

        assert!(session.is_logged_in());
        assert!(!session.wallet().is_connected());
    }
}
