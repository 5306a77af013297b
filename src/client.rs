use bytes::Bytes;
use reqwest::Method;
use serde::{Serialize, de::DeserializeOwned};

use crate::{config::Config, error::ZyraError};

/// Zyra API client
///
/// The client is generic over a [`Config`] implementation that provides
/// authentication and API configuration. It holds no state between calls
/// beyond the transport configuration captured at construction.
#[derive(Debug, Clone)]
pub struct Client<C: Config> {
    http: reqwest::Client,
    config: C,
}

impl Client<crate::config::ZyraConfig> {
    /// Creates a new client with default configuration
    ///
    /// Uses environment variables for authentication:
    /// - `ZYRA_API_KEY` for bearer token authentication
    /// - `ZYRA_BASE_URL` for custom API base URL
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(crate::config::ZyraConfig::new())
    }
}

impl<C: Config + Default> Default for Client<C> {
    fn default() -> Self {
        Self::with_config(C::default())
    }
}

impl<C: Config> Client<C> {
    /// Creates a new client with the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the reqwest client cannot be built.
    #[must_use]
    pub fn with_config(config: C) -> Self {
        Self {
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(5))
                .timeout(config.timeout())
                .build()
                .expect("reqwest client"),
            config,
        }
    }

    /// Replaces the HTTP client with a custom one
    ///
    /// Useful for setting proxies or other transport configuration beyond
    /// what [`Config`] covers.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Returns a reference to the client's configuration
    #[must_use]
    pub const fn config(&self) -> &C {
        &self.config
    }

    // Validates auth and builds the shared request scaffold. Every endpoint
    // method funnels through here, so a missing credential never reaches the
    // network.
    fn request(&self, method: Method, path: &str) -> Result<reqwest::RequestBuilder, ZyraError> {
        self.config.validate_auth()?;
        Ok(self
            .http
            .request(method, self.config.url(path))
            .headers(self.config.headers()?)
            .query(&self.config.query()))
    }

    pub(crate) async fn get<O: DeserializeOwned>(&self, path: &str) -> Result<O, ZyraError> {
        let rb = self.request(Method::GET, path)?;
        self.execute(rb).await
    }

    pub(crate) async fn get_with_query<Q, O>(&self, path: &str, query: &Q) -> Result<O, ZyraError>
    where
        Q: Serialize + Sync + ?Sized,
        O: DeserializeOwned,
    {
        let rb = self.request(Method::GET, path)?.query(query);
        self.execute(rb).await
    }

    pub(crate) async fn get_bytes(&self, path: &str) -> Result<Bytes, ZyraError> {
        let rb = self.request(Method::GET, path)?;
        self.execute_raw(rb).await
    }

    pub(crate) async fn post<I, O>(&self, path: &str, body: I) -> Result<O, ZyraError>
    where
        I: Serialize + Send + Sync,
        O: DeserializeOwned,
    {
        let rb = self.request(Method::POST, path)?.json(&body);
        self.execute(rb).await
    }

    pub(crate) async fn post_empty<O: DeserializeOwned>(&self, path: &str) -> Result<O, ZyraError> {
        let rb = self.request(Method::POST, path)?;
        self.execute(rb).await
    }

    pub(crate) async fn put<I, O>(&self, path: &str, body: I) -> Result<O, ZyraError>
    where
        I: Serialize + Send + Sync,
        O: DeserializeOwned,
    {
        let rb = self.request(Method::PUT, path)?.json(&body);
        self.execute(rb).await
    }

    pub(crate) async fn delete<O: DeserializeOwned>(&self, path: &str) -> Result<O, ZyraError> {
        let rb = self.request(Method::DELETE, path)?;
        self.execute(rb).await
    }

    async fn execute<O: DeserializeOwned>(
        &self,
        rb: reqwest::RequestBuilder,
    ) -> Result<O, ZyraError> {
        let bytes = self.execute_raw(rb).await?;
        let resp: O =
            serde_json::from_slice(&bytes).map_err(|e| crate::error::map_deser(&e, &bytes))?;
        Ok(resp)
    }

    // Single round trip, no retries. Non-2xx statuses are normalized into
    // ZyraError::Api here and nowhere else.
    async fn execute_raw(&self, rb: reqwest::RequestBuilder) -> Result<Bytes, ZyraError> {
        let request = rb.build()?;
        tracing::debug!(method = %request.method(), url = %request.url(), "zyra request");

        let response = self.http.execute(request).await.map_err(ZyraError::Reqwest)?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(ZyraError::Reqwest)?;

        if status.is_success() {
            return Ok(bytes);
        }

        tracing::warn!(status = status.as_u16(), "zyra request failed");
        Err(crate::error::deserialize_api_error(status, &bytes))
    }
}
