//! Form orchestrators.
//!
//! Every mutating form follows the same contract: validate required
//! fields locally (no network on failure), submit once, surface the
//! server's message on success, and on failure surface the server's
//! structured message when present, else a per-action fallback. No
//! automatic retry.

pub mod auth;
pub mod land;
pub mod owner;
pub mod records;
pub mod transfer;

pub use auth::{LoginForm, SignupForm};
pub use land::RegisterLandForm;
pub use owner::RegisterOwnerForm;
pub use records::RecordLookup;
pub use transfer::TransferForm;

/// Validation message shared by the register-owner and register-land
/// forms.
pub const REQUIRED_FIELDS: &str = "All fields are required.";

/// Severity of a form message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

/// A message surfaced next to a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl FormMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == MessageKind::Success
    }
}
