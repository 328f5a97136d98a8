// system-tests/src/lib.rs
// ============================================================================
// Module: Listing System Tests Library
// Description: Shared configuration and harness for listing API scenarios.
// Purpose: Provide the session fixture, scenario runner and env config.
// Dependencies: listing-api-client, async-trait, serde, thiserror, url
// ============================================================================

//! ## Overview
//! This crate hosts the configuration and the scenario harness used by the
//! listing API system-test binaries in `system-tests/tests`. The scenario
//! tables themselves live next to those binaries.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
pub mod harness;
