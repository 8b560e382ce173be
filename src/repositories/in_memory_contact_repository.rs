use crate::models::Contact;
use crate::repositories::traits::ContactRepository;

/// Contact repository backed by a `Vec`.
///
/// Owns its contacts exclusively and is discarded with its owner; nothing is
/// persisted.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContactRepository {
    contacts: Vec<Contact>,
}

impl InMemoryContactRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty repository with room for `capacity` contacts.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            contacts: Vec::with_capacity(capacity),
        }
    }
}

impl ContactRepository for InMemoryContactRepository {
    fn insert(&mut self, contact: Contact) {
        self.contacts.push(contact);
    }

    fn all(&self) -> &[Contact] {
        &self.contacts
    }

    fn len(&self) -> usize {
        self.contacts.len()
    }
}
