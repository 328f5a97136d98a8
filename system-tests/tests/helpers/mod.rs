// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for listing API system-tests.
// Purpose: Provide artifact reporting, the table driver and the API stub.
// Dependencies: system-tests, listing-api-client, axum
// ============================================================================

//! ## Overview
//! Shared helpers for listing API system-tests.
//! Invariants:
//! - Scenario tables run sequentially over one session client.
//! - Every run leaves a summary, a scenario report and an HTTP transcript.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test binaries.")]

pub mod artifacts;
