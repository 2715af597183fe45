//! Scripted registry for testing orchestration code.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::error::{RegistryError, Result};
use crate::types::{Land, LandRecord, NewLand, NewOwner, Owner};

use super::traits::RegistryApi;

/// Registry endpoints, for call-count assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Login,
    Signup,
    Owners,
    Lands,
    RegisterOwner,
    RegisterLand,
    Transfer,
    Record,
}

const ENDPOINT_COUNT: usize = 8;

/// Mock registry with scripted per-endpoint responses.
///
/// Endpoints left unscripted fail with a server error, whose status and
/// structured message are configurable. Call counts are tracked per
/// endpoint so tests can assert that validation short-circuits before any
/// network activity.
pub struct MockRegistry {
    token: Option<String>,
    signup_msg: Option<String>,
    owners: Option<Vec<Owner>>,
    lands: Option<Vec<Land>>,
    register_owner_msg: Option<String>,
    register_land_msg: Option<String>,
    transfer_msg: Option<String>,
    record: Option<LandRecord>,
    failure_status: u16,
    failure_message: Option<String>,
    calls: [AtomicU32; ENDPOINT_COUNT],
}

impl MockRegistry {
    /// A mock where every endpoint fails with a bare 500.
    pub fn new() -> Self {
        Self {
            token: None,
            signup_msg: None,
            owners: None,
            lands: None,
            register_owner_msg: None,
            register_land_msg: None,
            transfer_msg: None,
            record: None,
            failure_status: 500,
            failure_message: None,
            calls: Default::default(),
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_signup_message(mut self, msg: impl Into<String>) -> Self {
        self.signup_msg = Some(msg.into());
        self
    }

    pub fn with_owners(mut self, owners: Vec<Owner>) -> Self {
        self.owners = Some(owners);
        self
    }

    pub fn with_lands(mut self, lands: Vec<Land>) -> Self {
        self.lands = Some(lands);
        self
    }

    pub fn with_register_owner_message(mut self, message: impl Into<String>) -> Self {
        self.register_owner_msg = Some(message.into());
        self
    }

    pub fn with_register_land_message(mut self, message: impl Into<String>) -> Self {
        self.register_land_msg = Some(message.into());
        self
    }

    pub fn with_transfer_message(mut self, message: impl Into<String>) -> Self {
        self.transfer_msg = Some(message.into());
        self
    }

    pub fn with_record(mut self, record: LandRecord) -> Self {
        self.record = Some(record);
        self
    }

    /// Status used for unscripted endpoints (default 500).
    pub fn with_failure_status(mut self, status: u16) -> Self {
        self.failure_status = status;
        self
    }

    /// Structured message carried by unscripted-endpoint failures.
    pub fn with_failure_message(mut self, message: impl Into<String>) -> Self {
        self.failure_message = Some(message.into());
        self
    }

    /// How many times an endpoint was called.
    pub fn calls(&self, endpoint: Endpoint) -> u32 {
        self.calls[endpoint as usize].load(Ordering::SeqCst)
    }

    fn record_call(&self, endpoint: Endpoint) {
        self.calls[endpoint as usize].fetch_add(1, Ordering::SeqCst);
    }

    fn failure(&self) -> RegistryError {
        RegistryError::Server {
            status: self.failure_status,
            message: self.failure_message.clone(),
        }
    }

    fn scripted<T: Clone>(&self, endpoint: Endpoint, slot: &Option<T>) -> Result<T> {
        self.record_call(endpoint);
        slot.clone().ok_or_else(|| self.failure())
    }
}

impl Default for MockRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegistryApi for MockRegistry {
    async fn login(&self, _email: &str, _password: &str) -> Result<String> {
        self.scripted(Endpoint::Login, &self.token)
    }

    async fn signup(&self, _email: &str, _password: &str) -> Result<String> {
        self.scripted(Endpoint::Signup, &self.signup_msg)
    }

    async fn owners(&self) -> Result<Vec<Owner>> {
        self.scripted(Endpoint::Owners, &self.owners)
    }

    async fn lands(&self) -> Result<Vec<Land>> {
        self.scripted(Endpoint::Lands, &self.lands)
    }

    async fn register_owner(&self, _owner: &NewOwner) -> Result<String> {
        self.scripted(Endpoint::RegisterOwner, &self.register_owner_msg)
    }

    async fn register_land(&self, _land: &NewLand) -> Result<String> {
        self.scripted(Endpoint::RegisterLand, &self.register_land_msg)
    }

    async fn transfer_ownership(&self, _land_id: &str, _new_owner_id: &str) -> Result<String> {
        self.scripted(Endpoint::Transfer, &self.transfer_msg)
    }

    async fn land_record(&self, _land_id: &str) -> Result<LandRecord> {
        self.scripted(Endpoint::Record, &self.record)
    }
}
