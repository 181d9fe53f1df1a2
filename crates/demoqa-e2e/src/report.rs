//! Per-scenario outcomes and the end-of-run summary.

use std::fmt;
use std::path::PathBuf;

/// Outcome of one scenario.
#[derive(Debug)]
pub struct ScenarioOutcome {
    pub name: &'static str,
    pub error: Option<String>,
    pub duration_ms: u64,
    pub screenshot: Option<PathBuf>,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregated outcomes for a whole run.
#[derive(Debug, Default)]
pub struct RunReport {
    pub outcomes: Vec<ScenarioOutcome>,
}

impl RunReport {
    pub fn record(&mut self, outcome: ScenarioOutcome) {
        self.outcomes.push(outcome);
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outcome in &self.outcomes {
            let mark = if outcome.passed() { "✓" } else { "✗" };
            writeln!(f, "{mark} {} ({}ms)", outcome.name, outcome.duration_ms)?;
            if let Some(ref error) = outcome.error {
                writeln!(f, "    {error}")?;
            }
            if let Some(ref path) = outcome.screenshot {
                writeln!(f, "    screenshot: {}", path.display())?;
            }
        }
        write!(
            f,
            "\n{} passed, {} failed, {} total",
            self.passed(),
            self.failed(),
            self.outcomes.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pass(name: &'static str) -> ScenarioOutcome {
        ScenarioOutcome {
            name,
            error: None,
            duration_ms: 120,
            screenshot: None,
        }
    }

    fn fail(name: &'static str, error: &str) -> ScenarioOutcome {
        ScenarioOutcome {
            name,
            error: Some(error.to_string()),
            duration_ms: 450,
            screenshot: Some(PathBuf::from("shots/x.png")),
        }
    }

    #[test]
    fn counts_track_outcomes() {
        let mut report = RunReport::default();
        report.record(pass("add record"));
        report.record(fail("delete record", "check failed: row still present"));
        report.record(pass("search filters"));

        assert_eq!(report.passed(), 2);
        assert_eq!(report.failed(), 1);
        assert!(!report.all_passed());
    }

    #[test]
    fn display_includes_errors_and_totals() {
        let mut report = RunReport::default();
        report.record(pass("add record"));
        report.record(fail("delete record", "row still present"));

        let text = report.to_string();
        assert!(text.contains("✓ add record"));
        assert!(text.contains("✗ delete record"));
        assert!(text.contains("row still present"));
        assert!(text.contains("shots/x.png"));
        assert!(text.contains("1 passed, 1 failed, 2 total"));
    }

    #[test]
    fn empty_report_passes() {
        let report = RunReport::default();
        assert!(report.all_passed());
        assert!(report.to_string().contains("0 passed, 0 failed, 0 total"));
    }
}
