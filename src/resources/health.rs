use crate::{
    client::Client, config::Config, error::ZyraError, types::common::Envelope,
    types::health::ServiceHealth,
};

/// API resource for the `/health` endpoint
pub struct Health<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Health<'c, C> {
    /// Creates a new Health resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Check service liveness and uptime
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn check(&self) -> Result<Envelope<ServiceHealth>, ZyraError> {
        self.client.get("/health").await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the health API resource
    #[must_use]
    pub const fn health(&self) -> Health<'_, C> {
        Health::new(self)
    }
}
