//! Domain types shared across the client.
//!
//! Wire format: the service speaks camelCase JSON with Mongo-style `_id`
//! identifiers; the renames below keep the Rust side snake_case.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered owner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub contact: String,
    pub email: String,
    /// Government-issued proof of identity (Aadhaar / passport).
    pub proof_id: String,
}

/// A registered land parcel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Land {
    /// Server-assigned identifier.
    #[serde(rename = "_id")]
    pub id: String,
    pub location: String,
    /// Free-form size description, e.g. "2 Acres".
    pub area: String,
    /// Market value; non-negative.
    pub market_value: f64,
    pub property_type: String,
    pub survey_number: String,
    /// References [`Owner::id`].
    pub current_owner_id: String,
}

/// Input for registering a new owner.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOwner {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub proof_id: String,
}

/// Input for registering a new land parcel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLand {
    pub location: String,
    pub area: String,
    pub market_value: f64,
    pub property_type: String,
    pub survey_number: String,
    pub current_owner_id: String,
}

/// A land record with its denormalized current owner and full transfer
/// history, as returned by `GET /getLandRecord/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandRecord {
    pub location: String,
    pub survey_number: String,
    pub area: String,
    pub market_value: f64,
    pub current_owner: Owner,
    /// Ordered, append-only transfer history.
    pub ownership_history: Vec<OwnershipEntry>,
}

/// One entry in a land's transfer history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnershipEntry {
    /// The owner the parcel was held by at transfer time.
    pub owner: Owner,
    pub transfer_date: DateTime<Utc>,
}
