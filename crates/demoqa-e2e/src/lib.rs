//! # demoqa-e2e
//!
//! End-to-end scenario runner for the demoqa.com practice site. Scenarios
//! drive the page objects from `demoqa-pages` and assert table state through
//! `demoqa-table`'s settle-polling reader.
//!
//! Each scenario runs in a fresh browser session; a failed scenario leaves a
//! screenshot behind and the run continues with the next one.

pub mod report;
pub mod scenarios;

pub use report::{RunReport, ScenarioOutcome};
pub use scenarios::Scenario;

/// Result type for scenario code.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors a scenario can fail with.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Page(#[from] demoqa_pages::Error),

    #[error(transparent)]
    Table(#[from] demoqa_table::Error),

    #[error("check failed: {0}")]
    Check(String),
}

/// Assert a scenario expectation, failing with a readable message.
pub fn check(condition: bool, message: impl Into<String>) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(Error::Check(message.into()))
    }
}

/// Assert two values are equal, reporting both sides on failure.
pub fn check_eq<T: PartialEq + std::fmt::Debug>(
    actual: T,
    expected: T,
    what: &str,
) -> Result<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(Error::Check(format!(
            "{what}: expected {expected:?}, got {actual:?}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_passes_and_fails() {
        assert!(check(true, "never shown").is_ok());
        let err = check(false, "modal should close").unwrap_err();
        assert_eq!(err.to_string(), "check failed: modal should close");
    }

    #[test]
    fn check_eq_reports_both_sides() {
        assert!(check_eq(3, 3, "row count").is_ok());
        let err = check_eq(2, 3, "row count").unwrap_err();
        assert!(err.to_string().contains("expected 3"));
        assert!(err.to_string().contains("got 2"));
    }
}
