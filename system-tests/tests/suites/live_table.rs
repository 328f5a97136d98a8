// system-tests/tests/suites/live_table.rs
// ============================================================================
// Module: Live Contract Tests
// Description: Runs the listing scenario table against the configured API host.
// Purpose: Validate the live marketplace listing API black-box.
// Dependencies: system-tests helpers, suites
// ============================================================================

//! System tests against the live listing API (`LISTING_SYSTEM_TEST_BASE_URL`).

use helpers::contract::run_contract_table;
use system_tests::config::SystemTestConfig;

use crate::api_v1;
use crate::api_v2;
use crate::helpers;

#[tokio::test(flavor = "multi_thread")]
async fn listing_api_contract_table() -> Result<(), Box<dyn std::error::Error>> {
    let config = SystemTestConfig::load()?;
    let mut table = api_v1::scenarios();
    table.extend(api_v2::scenarios());

    let report = run_contract_table("listing_api_contract_table", &config, &table).await?;
    report.ensure_passed()?;
    Ok(())
}
