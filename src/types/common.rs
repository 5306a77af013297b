//! Shared types used across Zyra API endpoints

use serde::{Deserialize, Serialize};

/// The uniform response wrapper returned by every JSON endpoint
///
/// The server reports the outcome in `success`; when `true`, `data` carries
/// the endpoint's payload, and when `false`, `message` or `error` explains
/// why. The client returns the envelope verbatim and never reinterprets it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Envelope<T> {
    /// Whether the server processed the request successfully
    pub success: bool,
    /// Endpoint payload, present on success for data-bearing endpoints
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Informational message from the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Error description from the server
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Pagination parameters for list endpoints
///
/// Serializes to `?page=&limit=` query parameters. Defaults to the first
/// page of ten items.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page number
    pub page: u32,
    /// Items per page
    pub limit: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self { page: 1, limit: 10 }
    }
}

impl ListQuery {
    /// Creates a query for the first page of ten items
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page number
    #[must_use]
    pub const fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the page size
    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }
}

/// Pagination block the server attaches to list payloads
///
/// Fields are optional because the server only includes what applies.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Current page number
    #[serde(default)]
    pub page: Option<u32>,
    /// Items per page
    #[serde(default)]
    pub limit: Option<u32>,
    /// Total item count
    #[serde(default)]
    pub total: Option<u64>,
    /// Total page count
    #[serde(default)]
    pub total_pages: Option<u32>,
}

/// Paginated list payload carried in an [`Envelope`]'s `data`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Paginated<T> {
    /// Items on this page
    pub data: Vec<T>,
    /// Server pagination block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn envelope_success_with_data() {
        let v = json!({"success": true, "data": {"id": "a1"}, "message": "created"});
        let env: Envelope<serde_json::Value> = serde_json::from_value(v).unwrap();
        assert!(env.success);
        assert_eq!(env.data.unwrap()["id"], "a1");
        assert_eq!(env.message.as_deref(), Some("created"));
        assert!(env.error.is_none());
    }

    #[test]
    fn envelope_failure_without_data() {
        let v = json!({"success": false, "error": "not found"});
        let env: Envelope<serde_json::Value> = serde_json::from_value(v).unwrap();
        assert!(!env.success);
        assert!(env.data.is_none());
        assert_eq!(env.error.as_deref(), Some("not found"));
    }

    #[test]
    fn envelope_skips_absent_fields_on_serialize() {
        let env = Envelope::<serde_json::Value> {
            success: true,
            data: None,
            message: None,
            error: None,
        };
        let s = serde_json::to_string(&env).unwrap();
        assert_eq!(s, r#"{"success":true}"#);
    }

    #[test]
    fn list_query_defaults() {
        let q = ListQuery::new();
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 10);

        let q = ListQuery::new().with_page(3).with_limit(25);
        assert_eq!(q.page, 3);
        assert_eq!(q.limit, 25);
    }

    #[test]
    fn paginated_parses_with_and_without_block() {
        let v = json!({
            "data": [{"x": 1}],
            "pagination": {"page": 1, "limit": 10, "total": 42, "totalPages": 5}
        });
        let p: Paginated<serde_json::Value> = serde_json::from_value(v).unwrap();
        assert_eq!(p.data.len(), 1);
        assert_eq!(p.pagination.unwrap().total, Some(42));

        let v = json!({"data": []});
        let p: Paginated<serde_json::Value> = serde_json::from_value(v).unwrap();
        assert!(p.pagination.is_none());
    }
}
