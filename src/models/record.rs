//! Contact record: one person's name, phones and optional birthday.

use crate::domain::{Birthday, Name, PhoneNumber};
use crate::error::{BookError, BookResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// A single contact in the address book.
///
/// The name is fixed at creation. Phones keep insertion order and may repeat.
/// Every mutation validates its input before touching the record, so a failed
/// call leaves the record exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    name: Name,

    #[serde(default)]
    phones: Vec<PhoneNumber>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

impl ContactRecord {
    /// Create an empty record for the given name.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: Vec::new(),
            birthday: None,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Validate and append a phone number. Duplicates are kept.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<()> {
        self.push_phone(PhoneNumber::new(raw)?);
        Ok(())
    }

    /// Append an already validated phone number.
    pub fn push_phone(&mut self, phone: PhoneNumber) {
        debug!(name = %self.name, phone = %phone, "Adding phone");
        self.phones.push(phone);
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// `new` is validated before the search. `old` is matched as a plain
    /// string and does not have to be a valid phone number itself.
    ///
    /// # Errors
    ///
    /// - `BookError::InvalidFormat` if `new` is not a valid phone number
    /// - `BookError::PhoneNotFound` if no phone equals `old`
    pub fn edit_phone(&mut self, old: &str, new: &str) -> BookResult<()> {
        let replacement = PhoneNumber::new(new)?;

        match self.phones.iter_mut().find(|phone| phone.as_str() == old) {
            Some(slot) => {
                debug!(name = %self.name, old, new, "Editing phone");
                *slot = replacement;
                Ok(())
            }
            None => Err(BookError::PhoneNotFound(old.to_string())),
        }
    }

    /// Validate and set the birthday, replacing any previous one.
    pub fn set_birthday(&mut self, raw: &str) -> BookResult<()> {
        let birthday = Birthday::new(raw)?;
        debug!(name = %self.name, birthday = %birthday, "Setting birthday");
        self.birthday = Some(birthday);
        Ok(())
    }

    /// Phones joined with `", "`, in insertion order.
    pub fn phones_joined(&self) -> String {
        self.phones
            .iter()
            .map(PhoneNumber::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ContactRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.phones_joined())?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", birthday: {}", birthday)?;
        }
        Ok(())
    }
}
