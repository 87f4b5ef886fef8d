//! API Response types
//!
//! Envelopes used by the workshop backend

use serde::{Deserialize, Serialize};

/// Single-resource response
///
/// ```json
/// {
///     "log_id": "2b1f...",
///     "status": true,
///     "message": "Success",
///     "data": { ... }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiResponse<T> {
    /// Request trace ID assigned by the backend
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_id: Option<String>,
    /// HTTP-like status code echoed in the body (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// `true` for 200/201 responses
    #[serde(default)]
    pub status: bool,
    /// Human-readable message
    #[serde(default)]
    pub message: String,
    /// Response data (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error detail (optional, any JSON)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<serde_json::Value>,
}

impl<T> ApiResponse<T> {
    /// Consume the envelope, returning the payload
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Paginated collection response
///
/// ```json
/// {
///     "data": [ ... ],
///     "total_data": 42,
///     "total_pages": 5,
///     "current_page": 1,
///     "limit": 10
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct PaginatedResponse<T> {
    /// Items on the requested page; absent or null means none
    #[serde(default = "Vec::new", deserialize_with = "null_as_empty")]
    pub data: Vec<T>,
    /// Total number of items across all pages
    #[serde(default)]
    pub total_data: u64,
    /// Total number of pages
    #[serde(default)]
    pub total_pages: u32,
    /// Current page number (1-based)
    #[serde(default)]
    pub current_page: u32,
    /// Items per page
    #[serde(default)]
    pub limit: u32,
    #[serde(default)]
    pub next_page: bool,
    #[serde(default)]
    pub prev_page: bool,
    #[serde(default)]
    pub message: String,
}

impl<T> PaginatedResponse<T> {
    /// Create a new paginated response
    pub fn new(data: Vec<T>, total_data: u64, current_page: u32, limit: u32) -> Self {
        let total_pages = if limit == 0 {
            u32::from(total_data > 0)
        } else {
            total_data.div_ceil(u64::from(limit)) as u32
        };
        Self {
            data,
            total_data,
            total_pages,
            current_page,
            limit,
            next_page: current_page < total_pages,
            prev_page: current_page > 1,
            message: "Success".to_string(),
        }
    }

    /// Page count as displayed: a list always has at least one page
    pub fn page_count(&self) -> u32 {
        self.total_pages.max(1)
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Failure body returned by the backend
///
/// Either `message`, `error`, or both may be present. `error` is free-form:
/// usually a string, sometimes an object of field errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl ErrorBody {
    /// The most specific human-readable text in the body, if any
    ///
    /// A non-empty `message` wins over a string `error`.
    pub fn display_text(&self) -> Option<String> {
        if let Some(message) = self.message.as_deref().map(str::trim)
            && !message.is_empty()
        {
            return Some(message.to_string());
        }
        match &self.error {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_paginated_response_defaults() {
        let resp: PaginatedResponse<String> = serde_json::from_value(json!({ "data": null })).unwrap();
        assert!(resp.data.is_empty());
        assert_eq!(resp.total_pages, 0);
        assert_eq!(resp.page_count(), 1);
    }

    #[test]
    fn test_envelopes_decode_payloads_without_default() {
        use crate::models::{WorkOrder, WorkOrderStatus};

        let order = json!({ "id": "wo-1", "booking_id": "b-1", "status": "pending" });

        let resp: ApiResponse<WorkOrder> =
            serde_json::from_value(json!({ "status": true, "message": "Success", "data": order })).unwrap();
        let data = resp.into_data().unwrap();
        assert_eq!(data.id, "wo-1");
        assert_eq!(data.status, WorkOrderStatus::Pending);

        let resp: ApiResponse<WorkOrder> = serde_json::from_value(json!({ "status": true })).unwrap();
        assert!(resp.into_data().is_none());

        let resp: PaginatedResponse<WorkOrder> =
            serde_json::from_value(json!({ "data": [order], "total_data": 1, "total_pages": 1 })).unwrap();
        assert_eq!(resp.data.len(), 1);
    }

    #[test]
    fn test_paginated_response_new() {
        let resp = PaginatedResponse::new(vec!["a", "b", "c"], 21, 2, 10);
        assert_eq!(resp.total_pages, 3);
        assert!(resp.next_page);
        assert!(resp.prev_page);
    }

    #[test]
    fn test_error_body_prefers_message() {
        let body: ErrorBody =
            serde_json::from_value(json!({ "message": "Data Not Found", "error": "record not found" }))
                .unwrap();
        assert_eq!(body.display_text().as_deref(), Some("Data Not Found"));
    }

    #[test]
    fn test_error_body_falls_back_to_error_string() {
        let body: ErrorBody = serde_json::from_value(json!({ "message": "  ", "error": "email taken" })).unwrap();
        assert_eq!(body.display_text().as_deref(), Some("email taken"));

        let body: ErrorBody = serde_json::from_value(json!({ "error": { "email": "invalid" } })).unwrap();
        assert_eq!(body.display_text(), None);
    }
}
