//! HTTP implementation of [`RegistryApi`] over reqwest.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::ClientConfig;
use crate::error::{RegistryError, Result};
use crate::types::{Land, LandRecord, NewLand, NewOwner, Owner};

use super::traits::RegistryApi;

/// Client for the registry REST API.
pub struct HttpRegistry {
    config: ClientConfig,
    client: Client,
}

impl HttpRegistry {
    /// Build a client for the given configuration.
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .expect("failed to build HTTP client");
        Self { config, client }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    async fn handle_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T> {
        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(RegistryError::Server {
                status,
                message: structured_message(&body),
            });
        }
        Ok(response.json().await?)
    }
}

/// Pull the server's structured message out of an error body.
///
/// Registry endpoints report errors in a `message` field, auth endpoints
/// in `msg`; anything else (HTML error pages, empty bodies) yields `None`.
fn structured_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "msg"]
        .iter()
        .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        .map(str::to_string)
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    token: String,
}

#[derive(Deserialize)]
struct AuthMessage {
    msg: String,
}

#[derive(Deserialize)]
struct RegistryMessage {
    message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TransferRequest<'a> {
    land_id: &'a str,
    new_owner_id: &'a str,
}

#[async_trait]
impl RegistryApi for HttpRegistry {
    async fn login(&self, email: &str, password: &str) -> Result<String> {
        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(&Credentials { email, password })
            .send()
            .await?;
        let body: LoginResponse = Self::handle_response(response).await?;
        Ok(body.token)
    }

    async fn signup(&self, email: &str, password: &str) -> Result<String> {
        let response = self
            .client
            .post(self.url("/auth/register"))
            .json(&Credentials { email, password })
            .send()
            .await?;
        let body: AuthMessage = Self::handle_response(response).await?;
        Ok(body.msg)
    }

    async fn owners(&self) -> Result<Vec<Owner>> {
        let response = self.client.get(self.url("/getOwners")).send().await?;
        Self::handle_response(response).await
    }

    async fn lands(&self) -> Result<Vec<Land>> {
        let response = self.client.get(self.url("/getLands")).send().await?;
        Self::handle_response(response).await
    }

    async fn register_owner(&self, owner: &NewOwner) -> Result<String> {
        let response = self
            .client
            .post(self.url("/registerOwner"))
            .json(owner)
            .send()
            .await?;
        let body: RegistryMessage = Self::handle_response(response).await?;
        Ok(body.message)
    }

    async fn register_land(&self, land: &NewLand) -> Result<String> {
        let response = self
            .client
            .post(self.url("/registerLand"))
            .json(land)
            .send()
            .await?;
        let body: RegistryMessage = Self::handle_response(response).await?;
        Ok(body.message)
    }

    async fn transfer_ownership(&self, land_id: &str, new_owner_id: &str) -> Result<String> {
        let response = self
            .client
            .put(self.url("/transferOwnership"))
            .json(&TransferRequest {
                land_id,
                new_owner_id,
            })
            .send()
            .await?;
        let body: RegistryMessage = Self::handle_response(response).await?;
        Ok(body.message)
    }

    async fn land_record(&self, land_id: &str) -> Result<LandRecord> {
        let url = format!(
            "{}/getLandRecord/{}",
            self.config.base_url,
            urlencoding::encode(land_id)
        );
        let response = self.client.get(&url).send().await?;
        Self::handle_response(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_message_prefers_message_over_msg() {
        assert_eq!(
            structured_message(r#"{"message":"Land not found"}"#),
            Some("Land not found".to_string())
        );
        assert_eq!(
            structured_message(r#"{"msg":"Invalid credentials"}"#),
            Some("Invalid credentials".to_string())
        );
        assert_eq!(
            structured_message(r#"{"message":"a","msg":"b"}"#),
            Some("a".to_string())
        );
    }

    #[test]
    fn structured_message_tolerates_unstructured_bodies() {
        assert_eq!(structured_message(""), None);
        assert_eq!(structured_message("<html>502</html>"), None);
        assert_eq!(structured_message(r#"{"error":"nope"}"#), None);
        assert_eq!(structured_message(r#"{"message":42}"#), None);
    }

    #[test]
    fn urls_join_base_and_path() {
        let registry = HttpRegistry::new(ClientConfig::with_base_url("http://localhost:5001/api"));
        assert_eq!(
            registry.url("/auth/login"),
            "http://localhost:5001/api/auth/login"
        );
    }
}
