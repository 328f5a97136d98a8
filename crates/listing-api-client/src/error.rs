// crates/listing-api-client/src/error.rs
// ============================================================================
// Module: Listing API Errors
// Description: Error type shared by the listing client and its helpers.
// Purpose: Classify client build, transport and decode failures.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! [`ListingApiError`] covers failures of the client itself: building,
//! encoding, transport and decoding. Non-2xx answers are not errors; they
//! come back as responses.

use thiserror::Error;

/// Listing API client failures.
///
/// # Invariants
/// - Variants are stable for error classification.
/// - HTTP status codes are never errors here; they are returned to the caller.
#[derive(Debug, Error)]
pub enum ListingApiError {
    /// The underlying HTTP client could not be built.
    #[error("failed to build http client: {0}")]
    ClientBuild(String),
    /// The request body could not be encoded as JSON.
    #[error("failed to encode request body: {0}")]
    Encode(String),
    /// The request never produced a response (connect, timeout, body read).
    #[error("{method} {path} failed: {message}")]
    Transport {
        /// HTTP method of the failed call.
        method: String,
        /// Request path relative to the base URL.
        path: String,
        /// Transport error text.
        message: String,
    },
    /// The response body did not decode into the requested type.
    #[error("failed to decode response body as {target}: {message}")]
    Decode {
        /// Name of the target type.
        target: &'static str,
        /// Decoder error text.
        message: String,
    },
    /// A create confirmation did not carry the expected message or id.
    #[error("unexpected create confirmation: {0}")]
    UnexpectedConfirmation(String),
}
