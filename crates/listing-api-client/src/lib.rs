// crates/listing-api-client/src/lib.rs
// ============================================================================
// Module: Listing API Client
// Description: Typed client and fixtures for the marketplace listing API.
// Purpose: Provide payload builders, id checks and a JSON HTTP client.
// Dependencies: reqwest, serde, thiserror, uuid
// ============================================================================

//! ## Overview
//! This crate holds the leaves of the listing system tests: the request
//! payload builder, the UUID check used on create confirmations, the response
//! body models and a JSON HTTP client that records every exchange.
//! Invariants:
//! - Builders never validate; invalid values reach the server unchanged.
//! - Client calls return the raw status and body; callers decide what passes.
//! - No call is retried.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod client;
pub mod error;
pub mod identifiers;
pub mod model;
pub mod payload;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use client::ApiResponse;
pub use client::ExchangeRecord;
pub use client::ListingApiClient;
pub use error::ListingApiError;
pub use identifiers::CreatedListing;
pub use identifiers::is_valid_uuid;
pub use model::CreateResponse;
pub use model::ErrorBody;
pub use model::ErrorResult;
pub use model::ListingRecord;
pub use model::Statistics;
pub use payload::ListingPayload;
pub use payload::ListingPayloadBuilder;
pub use reqwest::StatusCode;
