//! Contact manager service.
//!
//! Validates contact input and hands valid contacts to a repository.

use crate::error::{ContactResult, ImportError, ImportResult};
use crate::models::{Contact, NewContact};
use crate::repositories::{ContactRepository, InMemoryContactRepository};
use std::io;
use std::path::Path;
use tracing::debug;

/// Holds contacts for one session and validates required fields on insertion.
///
/// # Example
///
/// ```
/// use contact_manager::ContactManager;
///
/// let mut manager = ContactManager::new();
/// manager
///     .add_contact(Some("John"), Some("Smith"), Some("0123456789"))
///     .unwrap();
/// assert_eq!(manager.get_all_contacts().len(), 1);
///
/// assert!(manager.add_contact(None, Some("Smith"), Some("0123456789")).is_err());
/// assert_eq!(manager.get_all_contacts().len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ContactManager<R: ContactRepository = InMemoryContactRepository> {
    repository: R,
}

impl ContactManager<InMemoryContactRepository> {
    /// Create an empty manager backed by memory.
    pub fn new() -> Self {
        Self::with_repository(InMemoryContactRepository::new())
    }
}

impl<R: ContactRepository> ContactManager<R> {
    /// Create a manager over the given repository.
    pub fn with_repository(repository: R) -> Self {
        Self { repository }
    }

    /// Add a contact from its three fields.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::MissingRequiredField` when any field is absent
    /// or blank. Nothing is stored in that case.
    pub fn add_contact(
        &mut self,
        first_name: Option<&str>,
        last_name: Option<&str>,
        phone_number: Option<&str>,
    ) -> ContactResult<()> {
        let contact = Contact::new(first_name, last_name, phone_number)?;
        self.store(contact);
        Ok(())
    }

    /// Add a contact from unvalidated input.
    pub fn add(&mut self, input: NewContact) -> ContactResult<()> {
        let contact = Contact::try_from(input)?;
        self.store(contact);
        Ok(())
    }

    /// All contacts in insertion order.
    pub fn get_all_contacts(&self) -> &[Contact] {
        self.repository.all()
    }

    pub fn len(&self) -> usize {
        self.repository.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }

    /// Borrow the underlying repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Import contacts from a headed CSV file.
    ///
    /// Expected header: `first_name,last_name,phone_number`. Cells are stored
    /// exactly as written, like [`ContactManager::add`]; empty or blank cells
    /// are missing fields. Returns the number of contacts added.
    ///
    /// # Errors
    ///
    /// - `ImportError::Csv` if the file cannot be read or a row cannot be parsed
    /// - `ImportError::InvalidRecord` for the first row that fails validation;
    ///   rows before it remain stored
    pub fn import_csv(&mut self, path: impl AsRef<Path>) -> ImportResult<usize> {
        let path = path.as_ref();
        debug!("Importing contacts from {}", path.display());

        let reader = csv::Reader::from_path(path)?;
        self.import_from(reader)
    }

    /// Import contacts from any CSV source. See [`ContactManager::import_csv`].
    pub fn import_csv_reader<Rd: io::Read>(&mut self, source: Rd) -> ImportResult<usize> {
        let reader = csv::Reader::from_reader(source);
        self.import_from(reader)
    }

    fn import_from<Rd: io::Read>(&mut self, mut reader: csv::Reader<Rd>) -> ImportResult<usize> {
        let mut added = 0;

        for (index, record) in reader.deserialize::<NewContact>().enumerate() {
            let input = record?;
            self.add(input)
                .map_err(|source| ImportError::InvalidRecord {
                    row: index + 1,
                    source,
                })?;
            added += 1;
        }

        debug!("Imported {} contacts", added);
        Ok(added)
    }

    fn store(&mut self, contact: Contact) {
        debug!("Adding contact: {}", contact);
        self.repository.insert(contact);
    }
}
