//! Scenario driver: runs each selected demonstration against a fresh
//! [`Transcript`], isolates failures and collects a [`RunReport`].

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use itertools::Itertools;
use rayon::prelude::*;
use serde::Serialize;

use crate::catalog::{Family, Pattern, ScenarioFn};
use crate::transcript::Transcript;

/// A runnable entry. Usually built from a [`Pattern`], but any function with
/// the scenario signature can be registered.
#[derive(Clone)]
pub struct Scenario {
    pub name: String,
    pub family: Family,
    pub run: ScenarioFn,
}

impl Scenario {
    pub fn new(name: impl Into<String>, family: Family, run: ScenarioFn) -> Self {
        Self {
            name: name.into(),
            family,
            run,
        }
    }
}

impl From<Pattern> for Scenario {
    fn from(pattern: Pattern) -> Self {
        Self::new(pattern.to_string(), pattern.family(), pattern.scenario())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed { reason: String },
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioReport {
    pub name: String,
    pub family: Family,
    #[serde(flatten)]
    pub outcome: Outcome,
    pub lines: Transcript,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    pub scenarios: Vec<ScenarioReport>,
}

impl RunReport {
    pub fn all_passed(&self) -> bool {
        self.scenarios.iter().all(|s| s.outcome.is_passed())
    }

    pub fn passed(&self) -> usize {
        self.scenarios.iter().filter(|s| s.outcome.is_passed()).count()
    }

    pub fn failures(&self) -> Vec<&ScenarioReport> {
        self.scenarios
            .iter()
            .filter(|s| !s.outcome.is_passed())
            .collect()
    }

    /// `0` when everything passed, `1` otherwise.
    pub fn exit_code(&self) -> u8 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    pub fn summary(&self) -> String {
        let failures = self.failures();
        if failures.is_empty() {
            format!("{} scenarios passed", self.passed())
        } else {
            format!(
                "{} passed, {} failed: {}",
                self.passed(),
                failures.len(),
                failures.iter().map(|s| &s.name).join(", ")
            )
        }
    }
}

#[derive(Clone, Default)]
pub struct Harness {
    scenarios: Vec<Scenario>,
    parallel: bool,
}

impl Harness {
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self {
            scenarios,
            parallel: false,
        }
    }

    /// All 22 patterns in catalog order.
    pub fn catalog() -> Self {
        Self::for_patterns(Pattern::all())
    }

    /// Duplicates in `patterns` are dropped; catalog order wins over the
    /// order given.
    pub fn for_patterns(patterns: impl IntoIterator<Item = Pattern>) -> Self {
        let scenarios = patterns
            .into_iter()
            .sorted()
            .dedup()
            .map(Scenario::from)
            .collect();
        Self::new(scenarios)
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn push(&mut self, scenario: Scenario) {
        self.scenarios.push(scenario);
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    pub fn run(&self) -> RunReport {
        tracing::debug!(
            count = self.scenarios.len(),
            parallel = self.parallel,
            "starting run"
        );
        // par_iter().map().collect() preserves input order.
        let scenarios = if self.parallel {
            self.scenarios.par_iter().map(run_one).collect()
        } else {
            self.scenarios.iter().map(run_one).collect()
        };
        RunReport { scenarios }
    }
}

fn run_one(scenario: &Scenario) -> ScenarioReport {
    tracing::debug!(scenario = %scenario.name, "scenario started");
    let mut out = Transcript::new();

    let result = panic::catch_unwind(AssertUnwindSafe(|| (scenario.run)(&mut out)));
    let outcome = match result {
        Ok(Ok(())) => Outcome::Passed,
        Ok(Err(e)) => Outcome::Failed {
            reason: e.to_string(),
        },
        Err(payload) => Outcome::Failed {
            reason: format!("panicked: {}", panic_message(payload.as_ref())),
        },
    };

    match &outcome {
        Outcome::Passed => {
            tracing::debug!(scenario = %scenario.name, lines = out.len(), "scenario finished")
        }
        Outcome::Failed { reason } => {
            tracing::warn!(scenario = %scenario.name, %reason, "scenario failed")
        }
    }

    ScenarioReport {
        name: scenario.name.clone(),
        family: scenario.family,
        outcome,
        lines: out,
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s
    } else {
        "unknown panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CatalogError, Result};

    fn ok_scenario(out: &mut Transcript) -> Result<()> {
        out.line("fine");
        Ok(())
    }

    fn failing_scenario(out: &mut Transcript) -> Result<()> {
        out.line("about to fail");
        Err(CatalogError::invalid_argument("failing_scenario", "on purpose"))
    }

    fn panicking_scenario(out: &mut Transcript) -> Result<()> {
        out.line("about to panic");
        panic!("boom");
    }

    fn injected() -> Harness {
        Harness::new(vec![
            Scenario::new("ok", Family::Behavioral, ok_scenario),
            Scenario::new("err", Family::Behavioral, failing_scenario),
            Scenario::new("panic", Family::Behavioral, panicking_scenario),
            Scenario::new("ok-again", Family::Structural, ok_scenario),
        ])
    }

    #[test]
    fn test_full_catalog_passes() {
        let report = Harness::catalog().run();
        assert_eq!(report.scenarios.len(), 22);
        assert!(report.all_passed(), "{}", report.summary());
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_selection_keeps_catalog_order_and_dedups() {
        let harness = Harness::for_patterns([Pattern::Visitor, Pattern::Builder, Pattern::Visitor]);
        let report = harness.run();
        let names: Vec<_> = report.scenarios.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["builder", "visitor"]);
    }

    #[test]
    fn test_failures_are_isolated() {
        let report = injected().run();

        assert_eq!(report.scenarios.len(), 4);
        assert!(!report.all_passed());
        assert_eq!(report.exit_code(), 1);
        assert_eq!(report.passed(), 2);

        let failures = report.failures();
        assert_eq!(failures.len(), 2);
        assert_eq!(failures[0].name, "err");
        assert_eq!(
            failures[0].outcome,
            Outcome::Failed {
                reason: "Invalid argument to failing_scenario: on purpose".into()
            }
        );
        assert_eq!(
            failures[1].outcome,
            Outcome::Failed {
                reason: "panicked: boom".into()
            }
        );
        assert_eq!(report.scenarios[3].outcome, Outcome::Passed);
    }

    #[test]
    fn test_lines_before_failure_are_kept() {
        let report = injected().run();
        assert_eq!(report.scenarios[1].lines.lines(), ["about to fail"]);
        assert_eq!(report.scenarios[2].lines.lines(), ["about to panic"]);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let sequential = Harness::catalog().run();
        let parallel = Harness::catalog().parallel(true).run();

        assert_eq!(sequential.scenarios.len(), parallel.scenarios.len());
        for (a, b) in sequential.scenarios.iter().zip(&parallel.scenarios) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.lines, b.lines);
            assert_eq!(a.outcome, b.outcome);
        }
    }

    #[test]
    fn test_summary() {
        assert_eq!(
            injected().run().summary(),
            "2 passed, 2 failed: err, panic"
        );
        let mut harness = Harness::default();
        harness.push(Scenario::new("ok", Family::Creational, ok_scenario));
        assert_eq!(harness.run().summary(), "1 scenarios passed");
    }

    #[test]
    fn test_json_shape() {
        let report = injected().run();
        let json = serde_json::to_value(&report).unwrap();

        let first = &json["scenarios"][0];
        assert_eq!(first["name"], "ok");
        assert_eq!(first["family"], "behavioral");
        assert_eq!(first["status"], "passed");
        assert_eq!(first["lines"], serde_json::json!(["fine"]));

        let second = &json["scenarios"][1];
        assert_eq!(second["status"], "failed");
        assert_eq!(
            second["reason"],
            "Invalid argument to failing_scenario: on purpose"
        );
    }
}
