//! Contact Manager - an in-memory contact store with required-field validation.
//!
//! Contacts are added from a first name, last name and phone number; any
//! missing or blank field rejects the contact without touching the store.
//! All contacts can be read back in insertion order.
//!
//! # Architecture
//!
//! - **models**: `Contact`, the unvalidated `NewContact` input and `ContactField`
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **repositories**: Storage seam and the in-memory implementation
//! - **services**: `ContactManager`, validation in front of a repository
//! - **harness**: Conditions, argument sources and repetition for driving
//!   the manager from tests

pub mod config;
pub mod error;
pub mod harness;
pub mod models;
pub mod repositories;
pub mod services;

pub use config::Config;
pub use error::{ConfigError, ContactError, HarnessError, ImportError};
pub use models::{Contact, ContactField, NewContact};
pub use repositories::{ContactRepository, InMemoryContactRepository};
pub use services::ContactManager;
