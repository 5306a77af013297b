use crate::{
    client::Client,
    config::Config,
    error::ZyraError,
    types::ai::{
        AiAnalysis, AnalyzeRequest, CvRequest, GeneratedCv, GeneratedPersona,
        GeneratedSocialContent, PersonaRequest, SocialContentRequest,
    },
    types::common::Envelope,
};

/// API resource for the `/ai` endpoints
pub struct Ai<'c, C: Config> {
    client: &'c Client<C>,
}

impl<'c, C: Config> Ai<'c, C> {
    /// Creates a new Ai resource
    #[must_use]
    pub const fn new(client: &'c Client<C>) -> Self {
        Self { client }
    }

    /// Request analysis of a piece of content
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn analyze(&self, req: AnalyzeRequest) -> Result<Envelope<AiAnalysis>, ZyraError> {
        self.client.post("/ai/analyze", req).await
    }

    /// Fetch an analysis result by id
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn analysis(&self, id: &str) -> Result<Envelope<AiAnalysis>, ZyraError> {
        self.client.get(&format!("/ai/analysis/{id}")).await
    }

    /// Generate a CV document
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn generate_cv(&self, req: CvRequest) -> Result<Envelope<GeneratedCv>, ZyraError> {
        self.client.post("/ai/generate/cv", req).await
    }

    /// Generate a social media post
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn generate_social(
        &self,
        req: SocialContentRequest,
    ) -> Result<Envelope<GeneratedSocialContent>, ZyraError> {
        self.client.post("/ai/generate/social", req).await
    }

    /// Generate an audience persona
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API returns an error.
    pub async fn generate_persona(
        &self,
        req: PersonaRequest,
    ) -> Result<Envelope<GeneratedPersona>, ZyraError> {
        self.client.post("/ai/generate/persona", req).await
    }
}

impl<C: Config> crate::Client<C> {
    /// Returns the AI API resource
    #[must_use]
    pub const fn ai(&self) -> Ai<'_, C> {
        Ai::new(self)
    }
}
