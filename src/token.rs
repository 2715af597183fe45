//! Token codec: local, unverified claim extraction.
//!
//! The client decodes tokens purely to drive UX (who is logged in, when the
//! session lapses). Signatures are deliberately NOT verified here: every
//! authorization decision is re-validated server-side on each call, so a
//! forged token buys nothing beyond a broken-looking UI.

use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Malformed or unparseable token.
#[derive(Debug, Error)]
#[error("malformed token: {0}")]
pub struct DecodeError(String);

/// Claim set embedded in an authentication token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Identity payload for the authenticated user.
    pub user: UserClaims,
    /// Issued-at (Unix seconds). Not all issuers set it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
    /// Expiry instant (Unix seconds).
    pub exp: u64,
}

/// User identity carried inside the token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaims {
    pub id: String,
    pub email: String,
}

impl Claims {
    /// Whether the token's expiry has already passed at `now`
    /// (Unix seconds). A token expiring exactly at `now` is still valid.
    pub fn is_expired(&self, now: u64) -> bool {
        self.exp < now
    }
}

/// Extract the claim set from a token without verifying its signature.
///
/// Pure and deterministic: no network, no side effects, never panics.
/// Expiry is NOT checked here; that is the session manager's concern.
pub fn decode(token: &str) -> Result<Claims, DecodeError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;

    jsonwebtoken::decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|err| DecodeError(err.to_string()))
}

/// Current Unix time in seconds.
pub(crate) fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn make_token(exp: u64) -> String {
        let claims = Claims {
            user: UserClaims {
                id: "u1".into(),
                email: "a@b.com".into(),
            },
            iat: Some(exp.saturating_sub(3600)),
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"server-side-secret"),
        )
        .unwrap()
    }

    #[test]
    fn decodes_claims_without_the_signing_key() {
        let claims = decode(&make_token(1_900_000_000)).unwrap();
        assert_eq!(claims.user.email, "a@b.com");
        assert_eq!(claims.exp, 1_900_000_000);
    }

    #[test]
    fn decodes_expired_tokens() {
        // Expiry enforcement is the session manager's job, not the codec's.
        let claims = decode(&make_token(1)).unwrap();
        assert!(claims.is_expired(unix_now()));
    }

    #[test]
    fn rejects_garbage() {
        assert!(decode("not-a-token").is_err());
        assert!(decode("").is_err());
        assert!(decode("a.b.c").is_err());
    }

    #[test]
    fn rejects_tokens_without_an_expiry() {
        // Payload {"user":{"id":"u1","email":"a@b.com"}} with no exp claim.
        let token = encode(
            &Header::default(),
            &serde_json::json!({"user": {"id": "u1", "email": "a@b.com"}}),
            &EncodingKey::from_secret(b"server-side-secret"),
        )
        .unwrap();
        assert!(decode(&token).is_err());
    }

    #[test]
    fn expiry_boundary_is_inclusive() {
        let claims = decode(&make_token(1_000)).unwrap();
        assert!(!claims.is_expired(1_000));
        assert!(claims.is_expired(1_001));
    }
}
