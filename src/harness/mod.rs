//! Test-execution harness.
//!
//! Drives the contact manager from the outside: execution conditions
//! (host OS, environment variables), argument sources (literal values, inline
//! CSV, CSV files, provider functions) and repeated execution. The core never
//! depends on anything in here.

pub mod condition;
pub mod repeat;
pub mod runner;
pub mod source;

pub use condition::{ConditionResult, ExecutionCondition, OsFamily};
pub use repeat::{RepeatedTest, Repetition};
pub use runner::{RunReport, TestCase};
pub use source::{ArgumentSource, Arguments};
