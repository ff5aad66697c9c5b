//! Contact record: one person's name, phone numbers and birthday.

use crate::domain::{Birthday, ContactName, PhoneNumber, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of [`ContactRecord::edit_phone`] once the new number is valid.
///
/// A missing old number is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneEdit {
    /// The first matching number was replaced in place.
    Changed {
        name: String,
        old: String,
        new: PhoneNumber,
    },

    /// No phone on the record matched the old number.
    NotFound { name: String, old: String },
}

impl PhoneEdit {
    /// Whether the edit replaced a number.
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }
}

impl fmt::Display for PhoneEdit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Changed { name, old, new } => {
                write!(f, "Phone number has changed from {} to {} for {}", old, new, name)
            }
            Self::NotFound { name, old } => {
                write!(f, "Phone number {} not found for {}", old, name)
            }
        }
    }
}

/// A contact in the address book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    /// Identity key, immutable once created
    name: ContactName,

    /// Phone numbers in the order they were added; duplicates allowed
    #[serde(default)]
    phones: Vec<PhoneNumber>,

    /// At most one birthday; setting it again overwrites
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create an empty record for `name`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the name is blank.
    pub fn new(name: impl Into<String>) -> ValidationResult<Self> {
        Ok(Self::with_name(ContactName::new(name)?))
    }

    /// Create an empty record from an already validated name.
    pub fn with_name(name: ContactName) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn contact_name(&self) -> &ContactName {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number.
    ///
    /// The record is left untouched when validation fails.
    pub fn add_phone(&mut self, raw: &str) -> ValidationResult<&PhoneNumber> {
        let phone = PhoneNumber::new(raw)?;
        self.phones.push(phone);
        Ok(&self.phones[self.phones.len() - 1])
    }

    /// Remove every phone equal to `raw`. Returns how many were removed.
    pub fn remove_phone(&mut self, raw: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.as_str() != raw);
        before - self.phones.len()
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// `new` is validated before anything else; on failure the record is not
    /// modified and the validation error is returned.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> ValidationResult<PhoneEdit> {
        let replacement = PhoneNumber::new(new)?;

        match self.phones.iter_mut().find(|p| p.as_str() == old) {
            Some(slot) => {
                *slot = replacement.clone();
                Ok(PhoneEdit::Changed {
                    name: self.name.to_string(),
                    old: old.to_string(),
                    new: replacement,
                })
            }
            None => Ok(PhoneEdit::NotFound {
                name: self.name.to_string(),
                old: old.to_string(),
            }),
        }
    }

    /// First phone equal to `raw`, if any.
    pub fn find_phone(&self, raw: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == raw)
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn add_birthday(&mut self, raw: &str) -> ValidationResult<&Birthday> {
        let birthday = Birthday::parse(raw)?;
        Ok(&*self.birthday.insert(birthday))
    }

    /// Render the record for display.
    ///
    /// `Contact name: {name}, phones: {a}; {b}` with `, birthday: {DD.MM.YYYY}`
    /// appended when a birthday is set.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join("; ");
        write!(f, "Contact name: {}, phones: {}", self.name, phones)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
