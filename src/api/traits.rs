//! The remote registry service, as seen by this client.

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Land, LandRecord, NewLand, NewOwner, Owner};

/// Remote registry operations.
///
/// Mutating endpoints return the server's human-readable message, which
/// forms surface verbatim on success.
#[async_trait]
pub trait RegistryApi: Send + Sync {
    /// `POST /auth/login`; returns the raw authentication token.
    async fn login(&self, email: &str, password: &str) -> Result<String>;

    /// `POST /auth/register`; creates a staff account.
    async fn signup(&self, email: &str, password: &str) -> Result<String>;

    /// `GET /getOwners`.
    async fn owners(&self) -> Result<Vec<Owner>>;

    /// `GET /getLands`.
    async fn lands(&self) -> Result<Vec<Land>>;

    /// `POST /registerOwner`.
    async fn register_owner(&self, owner: &NewOwner) -> Result<String>;

    /// `POST /registerLand`.
    async fn register_land(&self, land: &NewLand) -> Result<String>;

    /// `PUT /transferOwnership`.
    async fn transfer_ownership(&self, land_id: &str, new_owner_id: &str) -> Result<String>;

    /// `GET /getLandRecord/{id}`.
    async fn land_record(&self, land_id: &str) -> Result<LandRecord>;
}
