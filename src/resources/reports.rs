use bytes::Bytes;

use crate::{
    client::Client,
    config::Config,
    error::ZyraError,
    types::common::Envelope,
    types::reports::{Report, ReportDraft, ReportRun},
};

/// API resource for the `/reports` endpoints
pub struct Reports<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Reports<'c, C> {
    /// Creates a new Reports resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Create a report definition
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn create(&self, draft: ReportDraft) -> Result<Envelope<Report>, ZyraError> {
        self.client.post("/reports", draft).await
    }

    /// List all report definitions
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn list(&self) -> Result<Envelope<Vec<Report>>, ZyraError> {
        self.client.get("/reports").await
    }

    /// Trigger a report run
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn run(&self, id: &str) -> Result<Envelope<ReportRun>, ZyraError> {
        self.client.post_empty(&format!("/reports/{id}/run")).await
    }

    /// Download the output of a finished report run
    ///
    /// Returns the raw response body; no JSON decoding is applied.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn download(&self, run_id: &str) -> Result<Bytes, ZyraError> {
        self.client.get_bytes(&format!("/reports/download/{run_id}")).await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the reports API resource
    #[must_use]
    pub const fn reports(&self) -> Reports<'_, C> {
        Reports::new(self)
    }
}
