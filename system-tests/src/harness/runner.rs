// system-tests/src/harness/runner.rs
// ============================================================================
// Module: Scenario Table Runner
// Description: Sequential runner and report for scenario tables.
// Purpose: Run every row once, in order, and itemize the failures.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`run_table`] executes rows one at a time against the shared session and
//! never short-circuits: every selected row runs and lands in the
//! [`TableReport`]. Rows whose id does not contain the optional filter are
//! recorded as skipped.

use std::time::Instant;

use serde::Serialize;

use super::scenario::Scenario;
use super::session::ApiSession;

/// Result classification for one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioStatus {
    /// Every expectation held.
    Pass,
    /// At least one expectation failed.
    Fail,
    /// Excluded by the id filter.
    Skipped,
}

impl ScenarioStatus {
    /// Returns a stable label for the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Skipped => "skipped",
        }
    }
}

/// Outcome of one row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioOutcome {
    /// Scenario id.
    pub id: String,
    /// Result classification.
    pub status: ScenarioStatus,
    /// Known-gap note attached to the row, if any.
    pub observation: Option<String>,
    /// Failure text when the row failed.
    pub failure: Option<String>,
    /// Wall-clock duration in milliseconds.
    pub duration_ms: u64,
}

/// Outcomes of a table run, in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableReport {
    /// Per-row outcomes.
    outcomes: Vec<ScenarioOutcome>,
}

impl TableReport {
    /// Returns every outcome in table order.
    #[must_use]
    pub fn outcomes(&self) -> &[ScenarioOutcome] {
        &self.outcomes
    }

    /// Returns the outcomes that failed.
    pub fn failures(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.outcomes.iter().filter(|outcome| outcome.status == ScenarioStatus::Fail)
    }

    /// Returns how many rows ended with `status`.
    #[must_use]
    pub fn count(&self, status: ScenarioStatus) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.status == status).count()
    }

    /// Returns how many rows actually ran.
    #[must_use]
    pub fn executed(&self) -> usize {
        self.outcomes.len() - self.count(ScenarioStatus::Skipped)
    }

    /// Returns the executed rows that carry a known-gap observation.
    pub fn known_gaps(&self) -> impl Iterator<Item = &ScenarioOutcome> {
        self.outcomes.iter().filter(|outcome| {
            outcome.status != ScenarioStatus::Skipped && outcome.observation.is_some()
        })
    }

    /// Returns true when at least one row ran and none failed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.executed() > 0 && self.failures().next().is_none()
    }

    /// Returns one summary line per executed row, flagging known-gap rows.
    #[must_use]
    pub fn notes(&self) -> Vec<String> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status != ScenarioStatus::Skipped)
            .map(|outcome| {
                let mut line = format!("{}: {}", outcome.id, outcome.status.as_str());
                if let Some(observation) = &outcome.observation {
                    line.push_str(&format!(" [known gap: {observation}]"));
                }
                line
            })
            .collect()
    }

    /// Checks that the table passed.
    ///
    /// # Errors
    ///
    /// Returns an itemized message listing every failed row, or an error when
    /// the filter excluded every row.
    pub fn ensure_passed(&self) -> Result<(), String> {
        let executed = self.executed();
        if executed == 0 {
            return Err("no scenarios ran; check LISTING_SYSTEM_TEST_FILTER".to_string());
        }
        let failures: Vec<&ScenarioOutcome> = self.failures().collect();
        if failures.is_empty() {
            return Ok(());
        }
        let mut message = format!("{} of {executed} scenarios failed:", failures.len());
        for outcome in failures {
            message.push_str(&format!(
                "\n- {}: {}",
                outcome.id,
                outcome.failure.as_deref().unwrap_or("unknown failure")
            ));
        }
        Err(message)
    }
}

/// Runs `scenarios` sequentially against `session`.
///
/// Rows whose id does not contain `filter` are skipped. A failing row is
/// recorded and the next row runs.
pub async fn run_table(
    session: &ApiSession,
    scenarios: &[Box<dyn Scenario>],
    filter: Option<&str>,
) -> TableReport {
    let mut outcomes = Vec::with_capacity(scenarios.len());
    for scenario in scenarios {
        let id = scenario.id();
        let observation = scenario.observation().map(str::to_string);
        if filter.is_some_and(|filter| !id.contains(filter)) {
            outcomes.push(ScenarioOutcome {
                id,
                status: ScenarioStatus::Skipped,
                observation,
                failure: None,
                duration_ms: 0,
            });
            continue;
        }
        let started = Instant::now();
        let result = scenario.run(session).await;
        let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let (status, failure) = match result {
            Ok(()) => (ScenarioStatus::Pass, None),
            Err(err) => (ScenarioStatus::Fail, Some(err.to_string())),
        };
        outcomes.push(ScenarioOutcome {
            id,
            status,
            observation,
            failure,
            duration_ms,
        });
    }
    TableReport {
        outcomes,
    }
}
