//! Transfer-ownership form.

use crate::api::RegistryApi;
use crate::forms::FormMessage;
use crate::reference::{Kinds, ReferenceSnapshot};
use crate::types::{Land, Owner};

/// Orchestrates an ownership transfer. Mounting fetches both listings
/// concurrently; the selectors tolerate a torn snapshot.
#[derive(Debug, Default)]
pub struct TransferForm {
    /// Selected land; empty means unselected.
    pub land_id: String,
    /// Selected new owner; empty means unselected.
    pub new_owner_id: String,
    snapshot: ReferenceSnapshot,
    message: Option<FormMessage>,
}

impl TransferForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch both selector listings. The reads are concurrent and settle
    /// independently.
    pub async fn mount(&mut self, api: &dyn RegistryApi) {
        self.snapshot = ReferenceSnapshot::fetch(api, Kinds::ALL).await;
    }

    pub fn lands(&self) -> &[Land] {
        &self.snapshot.lands
    }

    pub fn owners(&self) -> &[Owner] {
        &self.snapshot.owners
    }

    /// Submit the transfer. Both selections are required; on success the
    /// selectors reset to unselected.
    pub async fn submit(&mut self, api: &dyn RegistryApi) {
        if self.land_id.is_empty() || self.new_owner_id.is_empty() {
            self.message = Some(FormMessage::error(
                "Please select both land and a new owner.",
            ));
            return;
        }

        match api
            .transfer_ownership(&self.land_id, &self.new_owner_id)
            .await
        {
            Ok(message) => {
                self.land_id.clear();
                self.new_owner_id.clear();
                self.message = Some(FormMessage::success(message));
            }
            Err(err) => {
                self.message = Some(FormMessage::error(
                    err.server_message()
                        .unwrap_or("Failed to transfer ownership."),
                ));
            }
        }
    }

    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }
}
