//! Repeated execution of a test case.

use crate::error::{HarnessError, HarnessResult};

/// Default display name pattern for repetitions.
pub const DEFAULT_NAME_PATTERN: &str = "repetition {currentRepetition} of {totalRepetitions}";

/// Position of one run within a repeated test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Repetition {
    /// 1-based
    pub current: u32,
    pub total: u32,
}

/// A test body run a fixed number of times.
///
/// The name pattern may contain `{displayName}`, `{currentRepetition}` and
/// `{totalRepetitions}` placeholders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatedTest {
    total: u32,
    display_name: String,
    name_pattern: String,
}

impl RepeatedTest {
    /// # Errors
    ///
    /// Returns `HarnessError::InvalidRepetitionCount` when `total` is zero.
    pub fn new(total: u32, display_name: impl Into<String>) -> HarnessResult<Self> {
        if total == 0 {
            return Err(HarnessError::InvalidRepetitionCount(total));
        }

        Ok(Self {
            total,
            display_name: display_name.into(),
            name_pattern: DEFAULT_NAME_PATTERN.to_string(),
        })
    }

    pub fn with_name_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.name_pattern = pattern.into();
        self
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn repetitions(&self) -> impl Iterator<Item = Repetition> + '_ {
        (1..=self.total).map(|current| Repetition {
            current,
            total: self.total,
        })
    }

    /// Display name for one repetition.
    pub fn name_for(&self, repetition: Repetition) -> String {
        self.name_pattern
            .replace("{displayName}", &self.display_name)
            .replace("{currentRepetition}", &repetition.current.to_string())
            .replace("{totalRepetitions}", &repetition.total.to_string())
    }
}
