// crates/listing-api-client/src/model.rs
// ============================================================================
// Module: Listing API Models
// Description: Wire shapes returned by the marketplace listing API.
// Purpose: Decode success and error bodies without normalizing them.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Response bodies of the listing API. Error bodies come in two observed
//! shapes (a top-level `status` string or a nested `result.message`);
//! [`ErrorBody`] accepts both and keeps them apart.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Engagement counters attached to a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Like count.
    pub likes: u64,
    /// View count.
    pub view_count: u64,
    /// Contact count.
    pub contacts: u64,
}

/// Body returned by a successful create.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateResponse {
    /// Human-readable confirmation carrying the new listing id.
    pub status: String,
}

/// Listing as returned by the read endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingRecord {
    /// Server-assigned listing id.
    pub id: String,
    /// Owning seller id.
    pub seller_id: i64,
    /// Listing title.
    pub name: String,
    /// Listing price.
    pub price: i64,
    /// Engagement counters.
    pub statistics: Statistics,
    /// Creation timestamp as rendered by the server, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Nested error payload (`{"result": {"message": ...}}`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorResult {
    /// Diagnostic message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Per-field diagnostics, shape owned by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub messages: Option<Value>,
}

/// Error body in either of the observed shapes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Top-level status string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Nested result object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ErrorResult>,
}

impl ErrorBody {
    /// Builds a body carrying only a top-level status.
    #[must_use]
    pub fn with_status(status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            result: None,
        }
    }

    /// Builds a body carrying a top-level status and a nested message.
    #[must_use]
    pub fn with_result_message(status: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            result: Some(ErrorResult {
                message: Some(message.into()),
                messages: None,
            }),
        }
    }

    /// Returns the top-level status string, or an empty string when absent.
    #[must_use]
    pub fn status(&self) -> &str {
        self.status.as_deref().unwrap_or_default()
    }

    /// Returns the nested `result.message`, or an empty string when absent.
    #[must_use]
    pub fn result_message(&self) -> &str {
        self.result.as_ref().and_then(|result| result.message.as_deref()).unwrap_or_default()
    }
}
