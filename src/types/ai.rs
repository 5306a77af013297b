//! Types for the AI analysis and generation endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An AI analysis record as represented by the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysis {
    /// Server-assigned identifier
    pub id: String,
    /// Kind of content that was analyzed
    pub source_type: String,
    /// Identifier of the analyzed resource
    #[serde(default)]
    pub source_id: Option<String>,
    /// Analyzed content payload
    pub payload: Value,
    /// Model that produced the result
    pub model_used: String,
    /// Model parameters used for the run
    #[serde(default)]
    pub params: Option<Value>,
    /// Analysis result, absent while the run is in progress
    #[serde(default)]
    pub result: Option<Value>,
    /// Confidence score for the result
    #[serde(default)]
    pub confidence: Option<f64>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /ai/analyze`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    /// Kind of content to analyze
    pub source_type: String,
    /// Identifier of the resource to analyze
    pub source_id: String,
    /// Model options (model name, temperature, ...), server-defined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Value>,
}

impl AnalyzeRequest {
    /// Creates an analysis request for the given resource
    #[must_use]
    pub fn new(source_type: impl Into<String>, source_id: impl Into<String>) -> Self {
        Self {
            source_type: source_type.into(),
            source_id: source_id.into(),
            options: None,
        }
    }

    /// Sets the model options
    #[must_use]
    pub fn with_options(mut self, options: Value) -> Self {
        self.options = Some(options);
        self
    }
}

/// Request body for `POST /ai/generate/cv`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CvRequest {
    /// Personal details block
    pub personal_info: Value,
    /// Work experience entries
    pub experience: Vec<Value>,
    /// Education entries
    pub education: Vec<Value>,
    /// Skill names
    pub skills: Vec<String>,
    /// Document template name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl CvRequest {
    /// Creates a CV generation request
    #[must_use]
    pub const fn new(
        personal_info: Value,
        experience: Vec<Value>,
        education: Vec<Value>,
        skills: Vec<String>,
    ) -> Self {
        Self {
            personal_info,
            experience,
            education,
            skills,
            template: None,
        }
    }

    /// Sets the document template
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }
}

/// Generated CV document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedCv {
    /// Plain-text document content
    pub content: String,
    /// HTML rendering of the document
    pub html: String,
    /// Tokens consumed by generation
    pub tokens: u64,
    /// Generation cost in dollars
    pub cost: f64,
}

/// Request body for `POST /ai/generate/social`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SocialContentRequest {
    /// Target platform (e.g. `twitter`)
    pub platform: String,
    /// Post topic
    pub topic: String,
    /// Desired tone
    pub tone: String,
    /// Audience description
    pub target_audience: String,
    /// Whether to include hashtags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_hashtags: Option<bool>,
    /// Whether to include a call to action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_call_to_action: Option<bool>,
}

impl SocialContentRequest {
    /// Creates a social content generation request
    #[must_use]
    pub fn new(
        platform: impl Into<String>,
        topic: impl Into<String>,
        tone: impl Into<String>,
        target_audience: impl Into<String>,
    ) -> Self {
        Self {
            platform: platform.into(),
            topic: topic.into(),
            tone: tone.into(),
            target_audience: target_audience.into(),
            include_hashtags: None,
            include_call_to_action: None,
        }
    }

    /// Sets whether hashtags are included
    #[must_use]
    pub const fn with_hashtags(mut self, include: bool) -> Self {
        self.include_hashtags = Some(include);
        self
    }

    /// Sets whether a call to action is included
    #[must_use]
    pub const fn with_call_to_action(mut self, include: bool) -> Self {
        self.include_call_to_action = Some(include);
        self
    }
}

/// Generated social media post
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSocialContent {
    /// Post text
    pub content: String,
    /// Predicted engagement score
    pub engagement_score: f64,
    /// Suggested hashtags
    pub hashtags: Vec<String>,
    /// Tokens consumed by generation
    pub tokens: u64,
    /// Generation cost in dollars
    pub cost: f64,
}

/// Request body for `POST /ai/generate/persona`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonaRequest {
    /// Data source to derive the persona from
    pub data_source: String,
    /// Number of records to sample
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_size: Option<u32>,
    /// Selection criteria, server-defined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub criteria: Option<Value>,
}

impl PersonaRequest {
    /// Creates a persona generation request for the given data source
    #[must_use]
    pub fn new(data_source: impl Into<String>) -> Self {
        Self {
            data_source: data_source.into(),
            sample_size: None,
            criteria: None,
        }
    }

    /// Sets the sample size
    #[must_use]
    pub const fn with_sample_size(mut self, sample_size: u32) -> Self {
        self.sample_size = Some(sample_size);
        self
    }

    /// Sets the selection criteria
    #[must_use]
    pub fn with_criteria(mut self, criteria: Value) -> Self {
        self.criteria = Some(criteria);
        self
    }
}

/// Generated audience persona
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratedPersona {
    /// Persona description, server-defined shape
    pub persona: Value,
    /// Tokens consumed by generation
    pub tokens: u64,
    /// Generation cost in dollars
    pub cost: f64,
}
