//! Types for the email automation endpoints
//!
//! Trigger, condition, action, schedule and settings descriptors are
//! server-defined shapes; the client carries them as opaque
//! [`serde_json::Value`]s.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An email automation as represented by the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmailAutomation {
    /// Server-assigned identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Trigger descriptors
    pub triggers: Value,
    /// Condition descriptors
    pub conditions: Value,
    /// Action descriptors
    pub actions: Value,
    /// Schedule descriptor
    #[serde(default)]
    pub schedule: Option<Value>,
    /// Delivery settings descriptor
    #[serde(default)]
    pub settings: Option<Value>,
    /// Whether the automation is currently active
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Payload for creating an email automation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmailAutomationDraft {
    /// Display name
    pub name: String,
    /// Free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Trigger descriptors
    pub triggers: Value,
    /// Condition descriptors
    pub conditions: Value,
    /// Action descriptors
    pub actions: Value,
    /// Schedule descriptor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Value>,
    /// Delivery settings descriptor, passed through to the server unread
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
    /// Whether the automation starts active
    pub is_active: bool,
}

impl EmailAutomationDraft {
    /// Creates an active draft with the given name and descriptors
    #[must_use]
    pub fn new(name: impl Into<String>, triggers: Value, conditions: Value, actions: Value) -> Self {
        Self {
            name: name.into(),
            description: None,
            triggers,
            conditions,
            actions,
            schedule: None,
            settings: None,
            is_active: true,
        }
    }

    /// Sets the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the schedule descriptor
    #[must_use]
    pub fn with_schedule(mut self, schedule: Value) -> Self {
        self.schedule = Some(schedule);
        self
    }

    /// Sets the settings descriptor
    #[must_use]
    pub fn with_settings(mut self, settings: Value) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Sets whether the automation starts active
    #[must_use]
    pub const fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }
}

/// Partial update for an email automation
///
/// Absent fields are omitted from the request body and left unchanged
/// server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmailAutomationPatch {
    /// New display name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New trigger descriptors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub triggers: Option<Value>,
    /// New condition descriptors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Value>,
    /// New action descriptors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Value>,
    /// New schedule descriptor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Value>,
    /// New settings descriptor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
    /// New active flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl EmailAutomationPatch {
    /// Creates an empty patch
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the description
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the active flag
    #[must_use]
    pub const fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = Some(is_active);
        self
    }
}

/// Body for the manual trigger endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TriggerRequest {
    /// Opaque payload handed to the triggered run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_payload: Option<Value>,
}

/// Run handle returned when an automation is triggered
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AutomationRun {
    /// Identifier of the started run
    pub run_id: String,
}
