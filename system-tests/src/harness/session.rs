// system-tests/src/harness/session.rs
// ============================================================================
// Module: API Session Fixture
// Description: Session-scoped listing API client shared by every scenario.
// Purpose: Acquire the HTTP client once per run and release it at teardown.
// Dependencies: listing-api-client
// ============================================================================

//! ## Overview
//! [`ApiSession`] is acquired once per run and borrowed by every scenario.
//! [`ApiSession::close`] consumes the session, releasing the client and its
//! pooled connections, and hands back the HTTP transcript. A session dropped
//! without `close` (for example while unwinding) is released the same way.

use listing_api_client::CreateResponse;
use listing_api_client::CreatedListing;
use listing_api_client::ExchangeRecord;
use listing_api_client::ListingApiClient;
use listing_api_client::ListingPayload;
use listing_api_client::StatusCode;

use super::checks::CheckFailure;
use super::checks::decode;
use super::checks::expect_status;
use crate::config::SystemTestConfig;

/// Session-scoped listing API fixture.
pub struct ApiSession {
    /// The one HTTP client for the run.
    client: ListingApiClient,
}

impl ApiSession {
    /// Acquires the session client for `config`.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn open(config: &SystemTestConfig) -> Result<Self, String> {
        let client = ListingApiClient::new(&config.base_url, config.timeout)
            .map_err(|err| err.to_string())?;
        Ok(Self {
            client,
        })
    }

    /// Returns the shared client.
    #[must_use]
    pub const fn client(&self) -> &ListingApiClient {
        &self.client
    }

    /// Creates a listing and returns its id, requiring a 200 confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`CheckFailure`] when the call fails, the status is not 200, or
    /// the confirmation does not carry a valid id.
    pub async fn create_listing(
        &self,
        payload: &ListingPayload,
    ) -> Result<CreatedListing, CheckFailure> {
        let call = "POST /api/1/item";
        let response =
            self.client.create_item(payload).await.map_err(|err| CheckFailure::api(call, err))?;
        expect_status(call, &response, StatusCode::OK)?;
        let body: CreateResponse = decode(call, &response)?;
        CreatedListing::from_status(&body.status).map_err(|err| CheckFailure::api(call, err))
    }

    /// Releases the client and returns the recorded exchanges.
    #[must_use]
    pub fn close(self) -> Vec<ExchangeRecord> {
        self.client.transcript()
    }
}
