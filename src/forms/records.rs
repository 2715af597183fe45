//! Land record lookup.

use crate::api::RegistryApi;
use crate::forms::FormMessage;
use crate::reference::{Kinds, ReferenceSnapshot};
use crate::types::{Land, LandRecord};

/// Looks up a land record with its denormalized current owner and
/// ordered transfer history.
#[derive(Debug, Default)]
pub struct RecordLookup {
    /// Selected land; empty means unselected.
    pub land_id: String,
    snapshot: ReferenceSnapshot,
    record: Option<LandRecord>,
    message: Option<FormMessage>,
}

impl RecordLookup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the land listing the selector is populated from.
    pub async fn mount(&mut self, api: &dyn RegistryApi) {
        self.snapshot = ReferenceSnapshot::fetch(api, Kinds::LANDS).await;
    }

    pub fn lands(&self) -> &[Land] {
        &self.snapshot.lands
    }

    /// Run the lookup. A missing selection is a local validation error,
    /// not a network call; otherwise any previous result is cleared
    /// before the single read.
    pub async fn search(&mut self, api: &dyn RegistryApi) {
        if self.land_id.is_empty() {
            self.message = Some(FormMessage::error(
                "Please select a land to view its record.",
            ));
            return;
        }

        self.message = None;
        self.record = None;

        match api.land_record(&self.land_id).await {
            Ok(record) => self.record = Some(record),
            Err(err) => {
                self.message = Some(FormMessage::error(
                    err.server_message().unwrap_or("Failed to fetch record."),
                ));
            }
        }
    }

    pub fn record(&self) -> Option<&LandRecord> {
        self.record.as_ref()
    }

    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }
}
