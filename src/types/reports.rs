//! Types for the report endpoints
//!
//! Report query descriptors and settings are server-defined shapes carried as
//! opaque [`serde_json::Value`]s.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How a report is produced
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ReportType {
    /// Runs on the configured frequency
    Scheduled,
    /// Runs only when triggered
    AdHoc,
}

/// Schedule frequency for scheduled reports
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportFrequency {
    /// Every day
    Daily,
    /// Every week
    Weekly,
    /// Every month
    Monthly,
}

/// A report definition as represented by the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// Server-assigned identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// How the report is produced
    #[serde(rename = "type")]
    pub kind: ReportType,
    /// Schedule frequency, present for scheduled reports
    #[serde(default)]
    pub frequency: Option<ReportFrequency>,
    /// Query descriptor
    pub query: Value,
    /// When the report last ran
    #[serde(default)]
    pub last_run_at: Option<DateTime<Utc>>,
    /// Recipient descriptors
    #[serde(default)]
    pub recipients: Option<Vec<Value>>,
    /// Output settings descriptor
    pub settings: Value,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a report definition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportDraft {
    /// Display name
    pub name: String,
    /// How the report is produced
    #[serde(rename = "type")]
    pub kind: ReportType,
    /// Schedule frequency, required for scheduled reports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequency: Option<ReportFrequency>,
    /// Query descriptor
    pub query: Value,
    /// Recipient descriptors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipients: Option<Vec<Value>>,
    /// Output settings descriptor
    pub settings: Value,
}

impl ReportDraft {
    /// Creates a draft with the given name, kind and query
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ReportType, query: Value) -> Self {
        Self {
            name: name.into(),
            kind,
            frequency: None,
            query,
            recipients: None,
            settings: Value::Null,
        }
    }

    /// Sets the schedule frequency
    #[must_use]
    pub const fn with_frequency(mut self, frequency: ReportFrequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Sets the recipient descriptors
    #[must_use]
    pub fn with_recipients(mut self, recipients: Vec<Value>) -> Self {
        self.recipients = Some(recipients);
        self
    }

    /// Sets the output settings descriptor
    #[must_use]
    pub fn with_settings(mut self, settings: Value) -> Self {
        self.settings = settings;
        self
    }
}

/// Run handle returned when a report run is triggered
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportRun {
    /// Identifier of the started run, used for download
    pub run_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn report_type_wire_values() {
        assert_eq!(
            serde_json::to_string(&ReportType::Scheduled).unwrap(),
            r#""scheduled""#
        );
        assert_eq!(
            serde_json::to_string(&ReportType::AdHoc).unwrap(),
            r#""ad-hoc""#
        );
        let t: ReportType = serde_json::from_str(r#""ad-hoc""#).unwrap();
        assert_eq!(t, ReportType::AdHoc);
    }

    #[test]
    fn draft_serializes_kind_as_type() {
        let draft = ReportDraft::new(
            "Monthly Sales Report",
            ReportType::Scheduled,
            json!({"type": "sql", "sql": "SELECT 1"}),
        )
        .with_frequency(ReportFrequency::Monthly)
        .with_recipients(vec![json!({"email": "manager@company.com"})])
        .with_settings(json!({"format": "pdf"}));

        let v = serde_json::to_value(&draft).unwrap();
        assert_eq!(v["type"], "scheduled");
        assert_eq!(v["frequency"], "monthly");
        assert_eq!(v["settings"]["format"], "pdf");
        assert!(v.get("id").is_none());
    }

    #[test]
    fn report_parses_without_last_run() {
        let v = json!({
            "id": "r1",
            "name": "Monthly Sales Report",
            "type": "scheduled",
            "frequency": "monthly",
            "query": {"type": "sql"},
            "settings": {"format": "pdf"},
            "createdAt": "2025-06-01T12:00:00Z"
        });
        let r: Report = serde_json::from_value(v).unwrap();
        assert_eq!(r.kind, ReportType::Scheduled);
        assert!(r.last_run_at.is_none());
        assert!(r.recipients.is_none());
    }
}
