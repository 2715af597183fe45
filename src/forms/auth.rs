//! Login and account-registration flows.

use crate::api::RegistryApi;
use crate::forms::FormMessage;
use crate::session::SessionManager;
use crate::store::TokenStore;

/// Login form; a successful submission hands the acquired token to the
/// session manager.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    error: Option<String>,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the credentials. On success the session manager decodes and
    /// persists the token (entering `LoggedIn` unless the token is
    /// malformed); on failure the server's `msg` or a generic fallback is
    /// kept for display.
    pub async fn submit<S: TokenStore>(
        &mut self,
        api: &dyn RegistryApi,
        session: &mut SessionManager<S>,
    ) {
        self.error = None;
        match api.login(&self.email, &self.password).await {
            Ok(token) => session.set_token(&token),
            Err(err) => {
                self.error = Some(
                    err.server_message()
                        .unwrap_or("Failed to login. Please try again.")
                        .to_string(),
                );
            }
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Staff account registration form.
#[derive(Debug, Default)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    message: Option<FormMessage>,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn submit(&mut self, api: &dyn RegistryApi) {
        self.message = None;
        match api.signup(&self.email, &self.password).await {
            Ok(msg) => self.message = Some(FormMessage::success(msg)),
            Err(err) => {
                self.message = Some(FormMessage::error(
                    err.server_message()
                        .unwrap_or("Failed to register. Please try again."),
                ));
            }
        }
    }

    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }
}
