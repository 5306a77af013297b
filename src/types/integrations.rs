//! Types for the integration verification endpoints

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Health summary for the account's third-party integrations
///
/// Each channel carries a server-defined status descriptor.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct IntegrationStatus {
    /// Email channel status
    #[serde(default)]
    pub email: Value,
    /// SMS channel status
    #[serde(default)]
    pub sms: Value,
    /// Social channel status
    #[serde(default)]
    pub social: Value,
    /// Payment channel status
    #[serde(default)]
    pub payment: Value,
}

/// Request body for `POST /integrations/verify`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerificationRequest {
    /// Integration provider (e.g. `facebook_page`)
    pub provider: String,
    /// Account or resource identifier at the provider
    pub identifier: String,
    /// Verification delivery method (e.g. `email`)
    pub method: String,
}

impl VerificationRequest {
    /// Creates a verification request
    #[must_use]
    pub fn new(
        provider: impl Into<String>,
        identifier: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self {
            provider: provider.into(),
            identifier: identifier.into(),
            method: method.into(),
        }
    }
}

/// Acknowledgement returned when verification is started
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationStarted {
    /// Identifier of the pending verification
    pub verification_id: String,
    /// Instructions for completing verification
    pub message: String,
}

/// Request body for `POST /integrations/verify/confirm`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerificationConfirmRequest {
    /// Token the user received through the chosen method
    pub token: String,
}

/// Result of confirming a verification token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VerificationConfirmed {
    /// Kind of account that was verified
    pub account_type: String,
    /// Identifier that was verified
    pub identifier: String,
    /// Whether verification succeeded
    pub verified: bool,
}

/// Request body for `POST /integrations/test-connection`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConnectionTestRequest {
    /// Integration kind to test (e.g. `email`)
    #[serde(rename = "type")]
    pub kind: String,
    /// Connection configuration, server-defined
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Value>,
}

impl ConnectionTestRequest {
    /// Creates a connection test for the given integration kind
    #[must_use]
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            config: None,
        }
    }

    /// Sets the connection configuration
    #[must_use]
    pub fn with_config(mut self, config: Value) -> Self {
        self.config = Some(config);
        self
    }
}

/// Result of a connection test
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionTestResult {
    /// Whether the connection succeeded
    pub connected: bool,
    /// Explanation of the outcome
    pub message: String,
}
