use contact_manager::models::Contact;
use contact_manager::repositories::ContactRepository;
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock contact repository for testing.
///
/// Stores contacts in memory and tracks method calls for verification.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockContactRepository {
    contacts: Vec<Contact>,
    call_counts: RefCell<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockContactRepository {
    /// Create a new empty MockContactRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.borrow();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.borrow_mut().clear();
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.borrow_mut();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl ContactRepository for MockContactRepository {
    fn insert(&mut self, contact: Contact) {
        self.track_call("insert");
        self.contacts.push(contact);
    }

    fn all(&self) -> &[Contact] {
        self.track_call("all");
        &self.contacts
    }
}
