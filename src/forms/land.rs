//! Register-land form.

use crate::api::RegistryApi;
use crate::forms::{FormMessage, REQUIRED_FIELDS};
use crate::reference::{Kinds, ReferenceSnapshot};
use crate::types::{NewLand, Owner};

/// Orchestrates land registration. Mounting fetches the owner listing
/// for the current-owner selector.
#[derive(Debug, Default)]
pub struct RegisterLandForm {
    pub location: String,
    pub area: String,
    /// Raw market-value input; parsed at submit time.
    pub market_value: String,
    pub property_type: String,
    pub survey_number: String,
    pub current_owner_id: String,
    snapshot: ReferenceSnapshot,
    message: Option<FormMessage>,
}

impl RegisterLandForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the owner listing this form's selector is populated from.
    pub async fn mount(&mut self, api: &dyn RegistryApi) {
        self.snapshot = ReferenceSnapshot::fetch(api, Kinds::OWNERS).await;
    }

    /// Owners available in the current-owner selector.
    pub fn owners(&self) -> &[Owner] {
        &self.snapshot.owners
    }

    /// Submit the form. Empty fields or an unparseable market value
    /// short-circuit with a validation message and no network call.
    pub async fn submit(&mut self, api: &dyn RegistryApi) {
        let required = [
            &self.location,
            &self.area,
            &self.market_value,
            &self.property_type,
            &self.survey_number,
            &self.current_owner_id,
        ];
        if required.iter().any(|field| field.is_empty()) {
            self.message = Some(FormMessage::error(REQUIRED_FIELDS));
            return;
        }

        let market_value = match self.market_value.trim().parse::<f64>() {
            Ok(value) if value >= 0.0 => value,
            _ => {
                self.message = Some(FormMessage::error(
                    "Market value must be a non-negative number.",
                ));
                return;
            }
        };

        let land = NewLand {
            location: self.location.clone(),
            area: self.area.clone(),
            market_value,
            property_type: self.property_type.clone(),
            survey_number: self.survey_number.clone(),
            current_owner_id: self.current_owner_id.clone(),
        };

        match api.register_land(&land).await {
            Ok(message) => {
                self.clear_inputs();
                self.message = Some(FormMessage::success(message));
            }
            Err(err) => {
                self.message = Some(FormMessage::error(
                    err.server_message().unwrap_or("Failed to register land."),
                ));
            }
        }
    }

    fn clear_inputs(&mut self) {
        self.location.clear();
        self.area.clear();
        self.market_value.clear();
        self.property_type.clear();
        self.survey_number.clear();
        self.current_owner_id.clear();
    }

    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }
}
