//! Scenario registry.
//!
//! A scenario is a named async function over a live page. The runner gives
//! each one a fresh session, so scenarios never depend on ordering.

mod radiobox;
mod textbox;
mod webtables;

use std::future::Future;
use std::pin::Pin;

use demoqa_pages::{Page, SuiteConfig};

use crate::Result;

pub type ScenarioFuture<'a> = Pin<Box<dyn Future<Output = Result<()>> + 'a>>;
pub type ScenarioFn = for<'a> fn(&'a Page, &'a SuiteConfig) -> ScenarioFuture<'a>;

/// A named, independently runnable scenario.
pub struct Scenario {
    pub name: &'static str,
    pub run: ScenarioFn,
}

macro_rules! scenario {
    ($name:expr, $func:path) => {{
        fn run<'a>(page: &'a Page, config: &'a SuiteConfig) -> ScenarioFuture<'a> {
            Box::pin($func(page, config))
        }
        Scenario { name: $name, run }
    }};
}

/// Every registered scenario, in execution order.
pub fn all() -> Vec<Scenario> {
    vec![
        scenario!("web tables: add record", webtables::add_record),
        scenario!("web tables: add multiple records", webtables::add_multiple_records),
        scenario!("web tables: edit record", webtables::edit_record),
        scenario!("web tables: delete record", webtables::delete_record),
        scenario!("web tables: search filters rows", webtables::search_filters_rows),
        scenario!("web tables: row actions and headers", webtables::row_actions_and_headers),
        scenario!("text box: submit echoes input", textbox::submit_echoes_input),
        scenario!("text box: invalid email rejected", textbox::invalid_email_rejected),
        scenario!("radio button: select yes", radiobox::select_yes),
        scenario!("radio button: select impressive", radiobox::select_impressive),
        scenario!("radio button: no is disabled", radiobox::no_is_disabled),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_unique_names() {
        let scenarios = all();
        assert!(!scenarios.is_empty());
        for (i, a) in scenarios.iter().enumerate() {
            for b in &scenarios[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn registry_covers_all_pages() {
        let names: Vec<&str> = all().iter().map(|s| s.name).collect();
        assert!(names.iter().any(|n| n.starts_with("web tables:")));
        assert!(names.iter().any(|n| n.starts_with("text box:")));
        assert!(names.iter().any(|n| n.starts_with("radio button:")));
    }
}
