use crate::{
    client::Client,
    config::Config,
    error::ZyraError,
    types::common::Envelope,
    types::integrations::{
        ConnectionTestRequest, ConnectionTestResult, IntegrationStatus,
        VerificationConfirmRequest, VerificationConfirmed, VerificationRequest,
        VerificationStarted,
    },
};

/// API resource for the `/integrations` endpoints
pub struct Integrations<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Integrations<'c, C> {
    /// Creates a new Integrations resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Fetch the health summary for all integrations
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn status(&self) -> Result<Envelope<IntegrationStatus>, ZyraError> {
        self.client.get("/integrations/status").await
    }

    /// Start verification of a third-party account
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn request_verification(
        &self,
        req: VerificationRequest,
    ) -> Result<Envelope<VerificationStarted>, ZyraError> {
        self.client.post("/integrations/verify", req).await
    }

    /// Confirm a verification token
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn confirm_verification(
        &self,
        token: impl Into<String> + Send,
    ) -> Result<Envelope<VerificationConfirmed>, ZyraError> {
        self.client
            .post(
                "/integrations/verify/confirm",
                VerificationConfirmRequest {
                    token: token.into(),
                },
            )
            .await
    }

    /// Test an integration connection
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn test_connection(
        &self,
        req: ConnectionTestRequest,
    ) -> Result<Envelope<ConnectionTestResult>, ZyraError> {
        self.client.post("/integrations/test-connection", req).await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the integrations API resource
    #[must_use]
    pub const fn integrations(&self) -> Integrations<'_, C> {
        Integrations::new(self)
    }
}
