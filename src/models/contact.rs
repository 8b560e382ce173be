//! Contact model: a person's first name, last name and phone number.

use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one of the required contact fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    FirstName,
    LastName,
    PhoneNumber,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstName => write!(f, "first name"),
            Self::LastName => write!(f, "last name"),
            Self::PhoneNumber => write!(f, "phone number"),
        }
    }
}

/// Unvalidated contact input.
///
/// Each field is optional so that absent values can be represented and
/// rejected. Empty cells in a CSV row deserialize to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewContact {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

impl NewContact {
    /// Build input with all three fields present.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            phone_number: Some(phone_number.into()),
        }
    }
}

/// A validated contact.
///
/// Fields are private: a `Contact` can only be obtained through validation,
/// so every instance has all three fields present and non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "NewContact")]
pub struct Contact {
    first_name: String,
    last_name: String,
    phone_number: String,
}

impl Contact {
    /// Validate the three fields and build a contact.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::MissingRequiredField` naming the first field
    /// (first name, last name, phone number) that is `None`, empty or only
    /// whitespace.
    pub fn new(
        first_name: Option<&str>,
        last_name: Option<&str>,
        phone_number: Option<&str>,
    ) -> ContactResult<Self> {
        Ok(Self {
            first_name: require(first_name, ContactField::FirstName)?.to_string(),
            last_name: require(last_name, ContactField::LastName)?.to_string(),
            phone_number: require(phone_number, ContactField::PhoneNumber)?.to_string(),
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }
}

impl TryFrom<NewContact> for Contact {
    type Error = ContactError;

    fn try_from(input: NewContact) -> ContactResult<Self> {
        Contact::new(
            input.first_name.as_deref(),
            input.last_name.as_deref(),
            input.phone_number.as_deref(),
        )
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} <{}>",
            self.first_name, self.last_name, self.phone_number
        )
    }
}

fn require(value: Option<&str>, field: ContactField) -> ContactResult<&str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ContactError::MissingRequiredField(field)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_contact_keeps_values() {
        let contact = Contact::new(Some("John"), Some("Smith"), Some("0123456789")).unwrap();
        assert_eq!(contact.first_name(), "John");
        assert_eq!(contact.last_name(), "Smith");
        assert_eq!(contact.phone_number(), "0123456789");
    }

    #[test]
    fn test_missing_fields_are_reported_in_order() {
        let err = Contact::new(None, None, None).unwrap_err();
        assert_eq!(err, ContactError::MissingRequiredField(ContactField::FirstName));

        let err = Contact::new(Some("John"), None, None).unwrap_err();
        assert_eq!(err, ContactError::MissingRequiredField(ContactField::LastName));

        let err = Contact::new(Some("John"), Some("Smith"), None).unwrap_err();
        assert_eq!(
            err,
            ContactError::MissingRequiredField(ContactField::PhoneNumber)
        );
    }

    #[test]
    fn test_blank_fields_count_as_missing() {
        let err = Contact::new(Some(""), Some("Smith"), Some("0123456789")).unwrap_err();
        assert_eq!(err, ContactError::MissingRequiredField(ContactField::FirstName));

        let err = Contact::new(Some("John"), Some("   "), Some("0123456789")).unwrap_err();
        assert_eq!(err, ContactError::MissingRequiredField(ContactField::LastName));
    }

    #[test]
    fn test_values_are_stored_untrimmed() {
        let contact = Contact::new(Some(" John "), Some("Smith"), Some("0123456789")).unwrap();
        assert_eq!(contact.first_name(), " John ");
    }

    #[test]
    fn test_serialization() {
        let contact = Contact::new(Some("John"), Some("Smith"), Some("0123456789")).unwrap();
        let json = serde_json::to_value(&contact).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "first_name": "John",
                "last_name": "Smith",
                "phone_number": "0123456789"
            })
        );
    }

    #[test]
    fn test_deserialization_validates() {
        let json = r#"{"first_name": "Jane", "last_name": "Doe", "phone_number": "555"}"#;
        let contact: Contact = serde_json::from_str(json).unwrap();
        assert_eq!(contact.first_name(), "Jane");

        let json = r#"{"first_name": "Jane", "last_name": "Doe"}"#;
        let result: Result<Contact, _> = serde_json::from_str(json);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("phone number"));
    }

    #[test]
    fn test_try_from_new_contact() {
        let contact = Contact::try_from(NewContact::new("John", "Smith", "0123456789")).unwrap();
        assert_eq!(contact.last_name(), "Smith");

        let input = NewContact {
            last_name: None,
            ..NewContact::new("John", "Smith", "0123456789")
        };
        assert!(Contact::try_from(input).is_err());
    }

    #[test]
    fn test_display() {
        let contact = Contact::new(Some("John"), Some("Smith"), Some("0123456789")).unwrap();
        assert_eq!(contact.to_string(), "John Smith <0123456789>");
    }
}
