// system-tests/src/harness/checks.rs
// ============================================================================
// Module: Scenario Checks
// Description: Assertion helpers producing itemized scenario failures.
// Purpose: Name the call, field, expected value and actual value on mismatch.
// Dependencies: listing-api-client, thiserror
// ============================================================================

//! ## Overview
//! Scenarios assert through these helpers instead of panicking, so the runner
//! can keep going after a failure and report every mismatch with the call
//! that produced it.

use std::fmt::Display;

use listing_api_client::ApiResponse;
use listing_api_client::ListingApiError;
use listing_api_client::StatusCode;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Itemized scenario failure.
///
/// # Invariants
/// - Every variant names the API call it was raised for.
#[derive(Debug, Error)]
pub enum CheckFailure {
    /// Wrong HTTP status code.
    #[error("{call}: expected status {expected}, got {actual} (body: {body})")]
    Status {
        /// API call under test.
        call: String,
        /// Expected status code.
        expected: u16,
        /// Observed status code.
        actual: u16,
        /// Observed response body.
        body: String,
    },
    /// Wrong field value.
    #[error("{call}: expected {field} = {expected}, got {actual}")]
    Field {
        /// API call under test.
        call: String,
        /// Field path, e.g. `items[0].sellerId`.
        field: String,
        /// Expected value.
        expected: String,
        /// Observed value.
        actual: String,
    },
    /// Expected text is absent.
    #[error("{call}: expected {field} to contain '{needle}', got '{actual}'")]
    MissingText {
        /// API call under test.
        call: String,
        /// Field path.
        field: String,
        /// Required text.
        needle: String,
        /// Observed value.
        actual: String,
    },
    /// Forbidden text is present.
    #[error("{call}: {field} must not contain '{needle}', got '{actual}'")]
    ForbiddenText {
        /// API call under test.
        call: String,
        /// Field path.
        field: String,
        /// Forbidden text.
        needle: String,
        /// Observed value.
        actual: String,
    },
    /// Sequence shorter than required.
    #[error("{call}: expected {field} to hold at least {min} entries, got {actual}")]
    TooShort {
        /// API call under test.
        call: String,
        /// Field path.
        field: String,
        /// Minimum length.
        min: usize,
        /// Observed length.
        actual: usize,
    },
    /// The client failed before an assertion could be made.
    #[error("{call}: {source}")]
    Api {
        /// API call under test.
        call: String,
        /// Client error.
        source: ListingApiError,
    },
}

impl CheckFailure {
    /// Wraps a client error raised during `call`.
    #[must_use]
    pub fn api(call: &str, source: ListingApiError) -> Self {
        Self::Api {
            call: call.to_string(),
            source,
        }
    }
}

/// Requires `response` to carry the `expected` status.
///
/// # Errors
///
/// Returns [`CheckFailure::Status`] on mismatch.
pub fn expect_status(
    call: &str,
    response: &ApiResponse,
    expected: StatusCode,
) -> Result<(), CheckFailure> {
    if response.status == expected {
        return Ok(());
    }
    Err(CheckFailure::Status {
        call: call.to_string(),
        expected: expected.as_u16(),
        actual: response.status.as_u16(),
        body: response.body.clone(),
    })
}

/// Decodes the response body, naming the call on failure.
///
/// # Errors
///
/// Returns [`CheckFailure::Api`] when the body does not decode into `T`.
pub fn decode<T: DeserializeOwned>(call: &str, response: &ApiResponse) -> Result<T, CheckFailure> {
    response.json().map_err(|err| CheckFailure::api(call, err))
}

/// Requires `actual == expected` for `field`.
///
/// # Errors
///
/// Returns [`CheckFailure::Field`] on mismatch.
pub fn expect_eq<T: PartialEq + Display + ?Sized>(
    call: &str,
    field: &str,
    expected: &T,
    actual: &T,
) -> Result<(), CheckFailure> {
    if expected == actual {
        return Ok(());
    }
    Err(CheckFailure::Field {
        call: call.to_string(),
        field: field.to_string(),
        expected: expected.to_string(),
        actual: actual.to_string(),
    })
}

/// Requires `actual` to contain `needle`.
///
/// # Errors
///
/// Returns [`CheckFailure::MissingText`] when it does not.
pub fn expect_contains(
    call: &str,
    field: &str,
    actual: &str,
    needle: &str,
) -> Result<(), CheckFailure> {
    if actual.contains(needle) {
        return Ok(());
    }
    Err(CheckFailure::MissingText {
        call: call.to_string(),
        field: field.to_string(),
        needle: needle.to_string(),
        actual: actual.to_string(),
    })
}

/// Requires `actual` not to contain `needle`.
///
/// # Errors
///
/// Returns [`CheckFailure::ForbiddenText`] when it does.
pub fn expect_not_contains(
    call: &str,
    field: &str,
    actual: &str,
    needle: &str,
) -> Result<(), CheckFailure> {
    if !actual.contains(needle) {
        return Ok(());
    }
    Err(CheckFailure::ForbiddenText {
        call: call.to_string(),
        field: field.to_string(),
        needle: needle.to_string(),
        actual: actual.to_string(),
    })
}

/// Requires a sequence of at least `min` entries.
///
/// # Errors
///
/// Returns [`CheckFailure::TooShort`] when `actual < min`.
pub fn expect_min_len(
    call: &str,
    field: &str,
    actual: usize,
    min: usize,
) -> Result<(), CheckFailure> {
    if actual >= min {
        return Ok(());
    }
    Err(CheckFailure::TooShort {
        call: call.to_string(),
        field: field.to_string(),
        min,
        actual,
    })
}
