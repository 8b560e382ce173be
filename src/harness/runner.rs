//! Runs a test body under execution conditions, argument sources and
//! repetition, building a fresh fixture for every invocation.

use super::condition::{ConditionResult, ExecutionCondition};
use super::repeat::{RepeatedTest, Repetition};
use super::source::{ArgumentSource, Arguments};
use crate::error::HarnessResult;
use tracing::{debug, info};

/// What happened when a test case was run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Display names of the invocations that ran, in order
    pub invocations: Vec<String>,

    /// Reason the case was skipped, if it was
    pub skipped: Option<String>,
}

impl RunReport {
    fn skipped(reason: String) -> Self {
        Self {
            invocations: Vec::new(),
            skipped: Some(reason),
        }
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped.is_some()
    }

    pub fn executed(&self) -> usize {
        self.invocations.len()
    }
}

/// A named test case with optional execution conditions.
///
/// A failing body panics, as any Rust test body does; the runner only decides
/// whether and how often the body is invoked.
#[derive(Debug, Clone)]
pub struct TestCase {
    display_name: String,
    conditions: Vec<ExecutionCondition>,
}

impl TestCase {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            conditions: Vec::new(),
        }
    }

    /// Add a condition; all conditions must be enabled for the case to run.
    pub fn when(mut self, condition: ExecutionCondition) -> Self {
        self.conditions.push(condition);
        self
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// First disabling condition wins.
    pub fn check_conditions(&self) -> ConditionResult {
        self.conditions
            .iter()
            .map(ExecutionCondition::evaluate)
            .find(|result| !result.is_enabled())
            .unwrap_or(ConditionResult::Enabled)
    }

    /// Run the body once.
    pub fn run<T, S, B>(&self, setup: S, body: B) -> RunReport
    where
        S: Fn() -> T,
        B: FnOnce(&mut T),
    {
        if let Some(report) = self.skip_report() {
            return report;
        }

        let mut fixture = setup();
        debug!("Running {}", self.display_name);
        body(&mut fixture);

        RunReport {
            invocations: vec![self.display_name.clone()],
            skipped: None,
        }
    }

    /// Run the body once per argument row, each with a fresh fixture.
    ///
    /// # Errors
    ///
    /// Propagates failures to resolve the argument source. The body is not
    /// invoked in that case.
    pub fn run_parameterized<T, S, B>(
        &self,
        source: &ArgumentSource,
        setup: S,
        mut body: B,
    ) -> HarnessResult<RunReport>
    where
        S: Fn() -> T,
        B: FnMut(&mut T, &Arguments),
    {
        if let Some(report) = self.skip_report() {
            return Ok(report);
        }

        let rows = source.arguments()?;
        let mut invocations = Vec::with_capacity(rows.len());

        for (index, args) in rows.iter().enumerate() {
            let name = format!("[{}] {}", index + 1, args.join(", "));
            debug!("Running {} {}", self.display_name, name);

            let mut fixture = setup();
            body(&mut fixture, args);
            invocations.push(name);
        }

        Ok(RunReport {
            invocations,
            skipped: None,
        })
    }

    /// Run the body once per repetition, each with a fresh fixture.
    pub fn run_repeated<T, S, B>(&self, repeated: &RepeatedTest, setup: S, mut body: B) -> RunReport
    where
        S: Fn() -> T,
        B: FnMut(&mut T, Repetition),
    {
        if let Some(report) = self.skip_report() {
            return report;
        }

        let mut invocations = Vec::with_capacity(repeated.total() as usize);
        for repetition in repeated.repetitions() {
            let name = repeated.name_for(repetition);
            debug!("Running {}", name);

            let mut fixture = setup();
            body(&mut fixture, repetition);
            invocations.push(name);
        }

        RunReport {
            invocations,
            skipped: None,
        }
    }

    fn skip_report(&self) -> Option<RunReport> {
        match self.check_conditions() {
            ConditionResult::Enabled => None,
            ConditionResult::Disabled(reason) => {
                info!("Skipping {}: {}", self.display_name, reason);
                Some(RunReport::skipped(reason))
            }
        }
    }
}
