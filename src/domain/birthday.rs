//! Birthday value object.

use super::errors::ValidationError;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The only textual date format accepted and produced.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

// chrono's %d and %m accept a single digit, so the shape is checked separately.
static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}\.\d{2}\.\d{4}$").expect("Failed to compile date shape regex"));

/// A calendar date of birth, written as `DD.MM.YYYY`.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new("24.08.1991").unwrap();
/// assert_eq!(birthday.to_string(), "24.08.1991");
/// assert!(Birthday::new("31.02.2020").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Birthday(NaiveDate);

impl Birthday {
    /// Parse a birthday from `DD.MM.YYYY`.
    ///
    /// # Validation Rules
    ///
    /// - Two-digit day, two-digit month, four-digit year, dot separated
    /// - Must name a real calendar date (`31.02.2020` is rejected)
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` carrying the raw input.
    pub fn new(date: impl Into<String>) -> Result<Self, ValidationError> {
        let date = date.into();

        if !DATE_SHAPE.is_match(&date) {
            return Err(ValidationError::InvalidBirthday(date));
        }

        match NaiveDate::parse_from_str(&date, DATE_FORMAT) {
            Ok(parsed) => Ok(Self(parsed)),
            Err(_) => Err(ValidationError::InvalidBirthday(date)),
        }
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Whether this is a 29 February birthday.
    pub fn is_leap_day(&self) -> bool {
        self.month() == 2 && self.day() == 29
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}
