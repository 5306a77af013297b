use serde_json::Value;

use crate::{
    client::Client,
    config::Config,
    error::ZyraError,
    types::automations::{
        AutomationRun, EmailAutomation, EmailAutomationDraft, EmailAutomationPatch, TriggerRequest,
    },
    types::common::{Envelope, ListQuery, Paginated},
};

/// API resource for the `/automations/email` endpoints
pub struct Automations<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Automations<'c, C> {
    /// Creates a new Automations resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Create an email automation
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn create(
        &self,
        draft: EmailAutomationDraft,
    ) -> Result<Envelope<EmailAutomation>, ZyraError> {
        self.client.post("/automations/email", draft).await
    }

    /// List email automations, paginated
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn list(
        &self,
        query: ListQuery,
    ) -> Result<Envelope<Paginated<EmailAutomation>>, ZyraError> {
        self.client.get_with_query("/automations/email", &query).await
    }

    /// Update an email automation
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn update(
        &self,
        id: &str,
        patch: EmailAutomationPatch,
    ) -> Result<Envelope<Value>, ZyraError> {
        self.client.put(&format!("/automations/email/{id}"), patch).await
    }

    /// Delete an email automation
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn delete(&self, id: &str) -> Result<Envelope<Value>, ZyraError> {
        self.client.delete(&format!("/automations/email/{id}")).await
    }

    /// Manually trigger an email automation
    ///
    /// The optional payload is handed to the triggered run as opaque data.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn trigger(
        &self,
        id: &str,
        trigger_payload: Option<Value>,
    ) -> Result<Envelope<AutomationRun>, ZyraError> {
        self.client
            .post(
                &format!("/automations/email/{id}/trigger"),
                TriggerRequest { trigger_payload },
            )
            .await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the email automations API resource
    #[must_use]
    pub const fn automations(&self) -> Automations<'_, C> {
        Automations::new(self)
    }
}
