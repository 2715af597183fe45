//! Register-owner form.

use crate::api::RegistryApi;
use crate::forms::{FormMessage, REQUIRED_FIELDS};
use crate::types::NewOwner;

/// Orchestrates owner registration: validate, submit once, surface the
/// outcome.
#[derive(Debug, Default)]
pub struct RegisterOwnerForm {
    pub name: String,
    pub contact: String,
    pub email: String,
    pub proof_id: String,
    message: Option<FormMessage>,
}

impl RegisterOwnerForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit the form. An empty required field short-circuits with a
    /// validation message and no network call.
    pub async fn submit(&mut self, api: &dyn RegistryApi) {
        let required = [&self.name, &self.contact, &self.email, &self.proof_id];
        if required.iter().any(|field| field.is_empty()) {
            self.message = Some(FormMessage::error(REQUIRED_FIELDS));
            return;
        }

        let owner = NewOwner {
            name: self.name.clone(),
            contact: self.contact.clone(),
            email: self.email.clone(),
            proof_id: self.proof_id.clone(),
        };

        match api.register_owner(&owner).await {
            Ok(message) => {
                self.clear_inputs();
                self.message = Some(FormMessage::success(message));
            }
            Err(err) => {
                self.message = Some(FormMessage::error(
                    err.server_message().unwrap_or("Failed to register owner."),
                ));
            }
        }
    }

    fn clear_inputs(&mut self) {
        self.name.clear();
        self.contact.clear();
        self.email.clear();
        self.proof_id.clear();
    }

    pub fn message(&self) -> Option<&FormMessage> {
        self.message.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Endpoint, MockRegistry};

    fn filled_form() -> RegisterOwnerForm {
        let mut form = RegisterOwnerForm::new();
        form.name = "Asha Verma".into();
        form.contact = "9876543210".into();
        form.email = "asha@example.com".into();
        form.proof_id = "AADH-4411".into();
        form
    }

    #[tokio::test]
    async fn empty_field_blocks_the_network_call() {
        let api = MockRegistry::new().with_register_owner_message("Owner registered");
        let mut form = filled_form();
        form.contact.clear();

        form.submit(&api).await;

        assert_eq!(api.calls(Endpoint::RegisterOwner), 0);
        let message = form.message().unwrap();
        assert!(!message.is_success());
        assert_eq!(message.text, REQUIRED_FIELDS);
    }

    #[tokio::test]
    async fn success_clears_inputs_and_shows_the_server_message() {
        let api = MockRegistry::new().with_register_owner_message("Owner registered");
        let mut form = filled_form();

        form.submit(&api).await;

        assert_eq!(api.calls(Endpoint::RegisterOwner), 1);
        assert!(form.name.is_empty());
        assert!(form.proof_id.is_empty());
        let message = form.message().unwrap();
        assert!(message.is_success());
        assert_eq!(message.text, "Owner registered");
    }

    #[tokio::test]
    async fn failure_keeps_inputs_and_surfaces_the_structured_message() {
        let api = MockRegistry::new()
            .with_failure_status(409)
            .with_failure_message("Owner already exists");
        let mut form = filled_form();

        form.submit(&api).await;

        assert_eq!(form.name, "Asha Verma");
        assert_eq!(form.message().unwrap().text, "Owner already exists");
    }

    #[tokio::test]
    async fn failure_without_a_structured_message_falls_back() {
        let api = MockRegistry::new();
        let mut form = filled_form();

        form.submit(&api).await;

        assert_eq!(form.message().unwrap().text, "Failed to register owner.");
    }
}
