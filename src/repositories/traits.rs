use crate::models::Contact;

/// Storage for validated contacts.
///
/// Provides abstraction over where contacts are kept, enabling different
/// implementations (in-memory, mock). Implementations only ever receive
/// contacts that already passed validation.
pub trait ContactRepository {
    /// Append a contact, keeping insertion order.
    fn insert(&mut self, contact: Contact);

    /// All stored contacts in insertion order.
    fn all(&self) -> &[Contact];

    /// Number of stored contacts.
    fn len(&self) -> usize {
        self.all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
