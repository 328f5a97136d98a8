// system-tests/tests/helpers/artifacts.rs
// ============================================================================
// Module: Run Artifacts
// Description: Artifact directory and run summary for contract tables.
// Purpose: Record what a table run did as canonical JSON and Markdown.
// Dependencies: system-tests, serde, serde_jcs
// ============================================================================

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;
use system_tests::config::SystemTestConfig;
use system_tests::harness::ScenarioStatus;
use system_tests::harness::TableReport;

/// Row tallies for one run.
#[derive(Debug, Serialize)]
struct RowCounts {
    passed: usize,
    failed: usize,
    skipped: usize,
}

/// A row that ran with a known-gap observation attached.
#[derive(Debug, Serialize)]
struct KnownGap {
    id: String,
    status: ScenarioStatus,
    observation: String,
}

/// A row that failed, with its itemized message.
#[derive(Debug, Serialize)]
struct FailedRow {
    id: String,
    failure: String,
}

/// Contents of `summary.json`.
#[derive(Debug, Serialize)]
struct RunSummary {
    test_name: String,
    status: &'static str,
    base_url: String,
    started_at_ms: u64,
    ended_at_ms: u64,
    duration_ms: u64,
    rows: RowCounts,
    known_gaps: Vec<KnownGap>,
    failures: Vec<FailedRow>,
    scenarios: Vec<String>,
    artifacts: Vec<String>,
}

fn now_millis() -> u64 {
    let elapsed = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default();
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

fn default_run_root(test_name: &str) -> PathBuf {
    let stamp = now_millis();
    PathBuf::from("target/system-tests").join(format!("run_{stamp}")).join(test_name)
}

/// Artifact directory for one contract run.
#[derive(Debug, Clone)]
pub struct RunArtifacts {
    root: PathBuf,
}

impl RunArtifacts {
    /// Creates the artifact directory, under the configured run root if set.
    pub fn new(test_name: &str, config: &SystemTestConfig) -> io::Result<Self> {
        let root = config
            .run_root
            .as_ref()
            .map_or_else(|| default_run_root(test_name), |root| root.join(test_name));
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
        })
    }

    /// Writes a JSON artifact using canonical JCS serialization.
    pub fn write_json<T: Serialize>(&self, name: &str, value: &T) -> io::Result<PathBuf> {
        let path = self.root.join(name);
        let bytes = serde_jcs::to_vec(value).map_err(|err| io::Error::other(err.to_string()))?;
        fs::write(&path, bytes)?;
        Ok(path)
    }

    /// Writes a UTF-8 text artifact.
    pub fn write_text(&self, name: &str, value: &str) -> io::Result<PathBuf> {
        let path = self.root.join(name);
        fs::write(&path, value.as_bytes())?;
        Ok(path)
    }
}

/// Writes the run summary, or a `panic` summary if the run never finishes.
pub struct RunReporter {
    artifacts: RunArtifacts,
    test_name: String,
    base_url: String,
    started_at_ms: u64,
    finalized: bool,
}

impl RunReporter {
    /// Creates a reporter for the named run.
    pub fn new(test_name: &str, config: &SystemTestConfig) -> io::Result<Self> {
        Ok(Self {
            artifacts: RunArtifacts::new(test_name, config)?,
            test_name: test_name.to_string(),
            base_url: config.base_url.clone(),
            started_at_ms: now_millis(),
            finalized: false,
        })
    }

    /// Returns the artifact directory.
    pub fn artifacts(&self) -> &RunArtifacts {
        &self.artifacts
    }

    /// Writes `summary.json` and `summary.md` for `report`.
    pub fn finish(&mut self, report: &TableReport, artifacts: &[&str]) -> io::Result<()> {
        let status = if report.all_passed() { "pass" } else { "fail" };
        self.write_summary(status, report, artifacts)
    }

    fn write_summary(
        &mut self,
        status: &'static str,
        report: &TableReport,
        artifacts: &[&str],
    ) -> io::Result<()> {
        let ended_at_ms = now_millis();
        let summary = RunSummary {
            test_name: self.test_name.clone(),
            status,
            base_url: self.base_url.clone(),
            started_at_ms: self.started_at_ms,
            ended_at_ms,
            duration_ms: ended_at_ms.saturating_sub(self.started_at_ms),
            rows: RowCounts {
                passed: report.count(ScenarioStatus::Pass),
                failed: report.count(ScenarioStatus::Fail),
                skipped: report.count(ScenarioStatus::Skipped),
            },
            known_gaps: report
                .known_gaps()
                .map(|outcome| KnownGap {
                    id: outcome.id.clone(),
                    status: outcome.status,
                    observation: outcome.observation.clone().unwrap_or_default(),
                })
                .collect(),
            failures: report
                .failures()
                .map(|outcome| FailedRow {
                    id: outcome.id.clone(),
                    failure: outcome.failure.clone().unwrap_or_default(),
                })
                .collect(),
            scenarios: report.notes(),
            artifacts: artifacts.iter().map(|name| (*name).to_string()).collect(),
        };
        self.artifacts.write_json("summary.json", &summary)?;
        self.artifacts.write_text("summary.md", &summary_markdown(&summary))?;
        self.finalized = true;
        Ok(())
    }
}

impl Drop for RunReporter {
    fn drop(&mut self) {
        if self.finalized {
            return;
        }
        let status = if std::thread::panicking() { "panic" } else { "unknown" };
        let _ = self.write_summary(status, &TableReport::default(), &[]);
    }
}

fn bullet_list(out: &mut String, items: &[String]) {
    if items.is_empty() {
        out.push_str("- None\n");
    }
    for item in items {
        out.push_str(&format!("- {item}\n"));
    }
}

fn summary_markdown(summary: &RunSummary) -> String {
    let mut out = String::from("# Listing Contract Run\n\n");
    out.push_str(&format!("- Test: {}\n", summary.test_name));
    out.push_str(&format!("- Status: {}\n", summary.status));
    out.push_str(&format!("- API: {}\n", summary.base_url));
    out.push_str(&format!(
        "- Rows: {} passed, {} failed, {} skipped\n",
        summary.rows.passed, summary.rows.failed, summary.rows.skipped
    ));
    out.push_str(&format!("- Duration (ms): {}\n", summary.duration_ms));
    out.push_str("\n## Scenarios\n\n");
    bullet_list(&mut out, &summary.scenarios);
    out.push_str("\n## Known Gaps\n\n");
    let gaps: Vec<String> = summary
        .known_gaps
        .iter()
        .map(|gap| format!("{} ({}): {}", gap.id, gap.status.as_str(), gap.observation))
        .collect();
    bullet_list(&mut out, &gaps);
    out.push_str("\n## Failures\n\n");
    let failures: Vec<String> =
        summary.failures.iter().map(|row| format!("{}: {}", row.id, row.failure)).collect();
    bullet_list(&mut out, &failures);
    out.push_str("\n## Artifacts\n\n");
    bullet_list(&mut out, &summary.artifacts);
    out
}
