// system-tests/src/harness/scenario.rs
// ============================================================================
// Module: Scenario Contract
// Description: Trait implemented by every row of a scenario table.
// Purpose: Give the runner a uniform way to name, annotate and run rows.
// Dependencies: async-trait
// ============================================================================

use async_trait::async_trait;

use super::checks::CheckFailure;
use super::session::ApiSession;

/// One fixed input/expected-outcome contract against the listing API.
#[async_trait]
pub trait Scenario: Send + Sync {
    /// Stable scenario id, e.g. `TC-BND-001[111111]`.
    fn id(&self) -> String;

    /// Note for rows that document currently permissive API behavior rather
    /// than enforce a business rule.
    fn observation(&self) -> Option<&'static str> {
        None
    }

    /// Runs the scenario against the session client.
    ///
    /// # Errors
    ///
    /// Returns [`CheckFailure`] describing the first failed expectation.
    async fn run(&self, session: &ApiSession) -> Result<(), CheckFailure>;
}
