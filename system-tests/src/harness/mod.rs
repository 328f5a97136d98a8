// system-tests/src/harness/mod.rs
// ============================================================================
// Module: Scenario Harness
// Description: Session fixture, scenario contract and table runner.
// Purpose: Run listing API scenarios sequentially over one shared client.
// Dependencies: listing-api-client, async-trait, serde, thiserror
// ============================================================================

//! ## Overview
//! The harness owns the session-scoped HTTP client ([`ApiSession`]), the
//! [`Scenario`] contract each test case implements, assertion helpers that
//! produce itemized [`CheckFailure`] values, and [`run_table`], which runs a
//! scenario table one row at a time and collects a [`TableReport`].
//! Invariants:
//! - Rows run sequentially in table order; a failing row never stops the table.
//! - The session is released exactly once, on every exit path.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod checks;
mod runner;
mod scenario;
mod session;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use checks::CheckFailure;
pub use runner::ScenarioOutcome;
pub use runner::ScenarioStatus;
pub use runner::TableReport;
pub use runner::run_table;
pub use scenario::Scenario;
pub use session::ApiSession;
