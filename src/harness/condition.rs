//! Execution conditions: decide whether a test case runs on this host.

use std::env;
use std::fmt;

/// Operating system family a condition can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OsFamily {
    Linux,
    Mac,
    Windows,
    Other,
}

impl OsFamily {
    /// The family of the running host.
    pub fn current() -> Self {
        Self::from_name(env::consts::OS)
    }

    /// Map a `std::env::consts::OS` value to a family.
    pub fn from_name(name: &str) -> Self {
        match name {
            "linux" => Self::Linux,
            "macos" => Self::Mac,
            "windows" => Self::Windows,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linux => write!(f, "Linux"),
            Self::Mac => write!(f, "Mac OS"),
            Self::Windows => write!(f, "Windows"),
            Self::Other => write!(f, "other OS"),
        }
    }
}

/// Outcome of evaluating a condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConditionResult {
    Enabled,
    Disabled(String),
}

impl ConditionResult {
    pub fn is_enabled(&self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// A predicate over the host that gates a test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionCondition {
    /// Run only on the given OS
    EnabledOnOs { os: OsFamily, reason: String },

    /// Run everywhere except the given OS
    DisabledOnOs { os: OsFamily, reason: String },

    /// Run only when an environment variable equals `expected`
    EnvEquals { var: String, expected: String },
}

impl ExecutionCondition {
    pub fn enabled_on_os(os: OsFamily, reason: impl Into<String>) -> Self {
        Self::EnabledOnOs {
            os,
            reason: reason.into(),
        }
    }

    pub fn disabled_on_os(os: OsFamily, reason: impl Into<String>) -> Self {
        Self::DisabledOnOs {
            os,
            reason: reason.into(),
        }
    }

    pub fn env_equals(var: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::EnvEquals {
            var: var.into(),
            expected: expected.into(),
        }
    }

    /// Evaluate against the running host and process environment.
    pub fn evaluate(&self) -> ConditionResult {
        self.evaluate_with(OsFamily::current(), |var| env::var(var).ok())
    }

    /// Evaluate against an explicit host OS and variable lookup.
    pub fn evaluate_with<F>(&self, host: OsFamily, lookup: F) -> ConditionResult
    where
        F: Fn(&str) -> Option<String>,
    {
        match self {
            Self::EnabledOnOs { os, reason } => {
                if host == *os {
                    ConditionResult::Enabled
                } else {
                    ConditionResult::Disabled(reason.clone())
                }
            }
            Self::DisabledOnOs { os, reason } => {
                if host == *os {
                    ConditionResult::Disabled(reason.clone())
                } else {
                    ConditionResult::Enabled
                }
            }
            Self::EnvEquals { var, expected } => match lookup(var) {
                Some(value) if value == *expected => ConditionResult::Enabled,
                Some(value) => ConditionResult::Disabled(format!(
                    "{} is '{}', expected '{}'",
                    var, value, expected
                )),
                None => ConditionResult::Disabled(format!("{} is not set", var)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_vars(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_os_family_from_name() {
        assert_eq!(OsFamily::from_name("linux"), OsFamily::Linux);
        assert_eq!(OsFamily::from_name("macos"), OsFamily::Mac);
        assert_eq!(OsFamily::from_name("windows"), OsFamily::Windows);
        assert_eq!(OsFamily::from_name("freebsd"), OsFamily::Other);
    }

    #[test]
    fn test_enabled_on_os() {
        let cond = ExecutionCondition::enabled_on_os(OsFamily::Mac, "Enabled only on Mac OS");

        assert!(cond.evaluate_with(OsFamily::Mac, no_vars).is_enabled());
        assert_eq!(
            cond.evaluate_with(OsFamily::Linux, no_vars),
            ConditionResult::Disabled("Enabled only on Mac OS".to_string())
        );
    }

    #[test]
    fn test_disabled_on_os() {
        let cond = ExecutionCondition::disabled_on_os(OsFamily::Windows, "Disabled on Windows OS");

        assert!(cond.evaluate_with(OsFamily::Linux, no_vars).is_enabled());
        assert!(cond.evaluate_with(OsFamily::Mac, no_vars).is_enabled());
        assert!(!cond.evaluate_with(OsFamily::Windows, no_vars).is_enabled());
    }

    #[test]
    fn test_env_equals() {
        let cond = ExecutionCondition::env_equals("ENV", "TEST");

        let test_env = |var: &str| (var == "ENV").then(|| "TEST".to_string());
        let dev_env = |var: &str| (var == "ENV").then(|| "DEV".to_string());

        assert!(cond.evaluate_with(OsFamily::Linux, test_env).is_enabled());
        assert_eq!(
            cond.evaluate_with(OsFamily::Linux, dev_env),
            ConditionResult::Disabled("ENV is 'DEV', expected 'TEST'".to_string())
        );
        assert_eq!(
            cond.evaluate_with(OsFamily::Linux, no_vars),
            ConditionResult::Disabled("ENV is not set".to_string())
        );
    }
}
