//! The address book: every contact record of a session, keyed by name.

pub mod upcoming;

use crate::domain::Name;
use crate::models::ContactRecord;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::{debug, warn};

pub use upcoming::{UpcomingBirthday, DEFAULT_WINDOW_DAYS};

/// In-memory mapping from contact name to record.
///
/// Iteration follows the order in which each name was first added.
#[derive(Debug, Default, Clone)]
pub struct AddressBook {
    records: Vec<ContactRecord>,
    index: HashMap<String, usize>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its name.
    ///
    /// ⚠️ An existing record with the same name is replaced outright, phones
    /// and birthday included. Use [`AddressBook::find_or_create`] to add to
    /// an existing contact.
    pub fn add_record(&mut self, record: ContactRecord) {
        let key = record.name().as_str().to_string();
        match self.index.get(&key) {
            Some(&slot) => {
                warn!(name = %key, "Replacing existing contact record");
                self.records[slot] = record;
            }
            None => {
                debug!(name = %key, "Adding contact record");
                self.index.insert(key, self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Exact-match lookup by name.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.index.get(name).map(|&slot| &self.records[slot])
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        match self.index.get(name) {
            Some(&slot) => Some(&mut self.records[slot]),
            None => None,
        }
    }

    /// The record for `name`, created empty if it doesn't exist yet.
    pub fn find_or_create(&mut self, name: Name) -> &mut ContactRecord {
        let slot = match self.index.get(name.as_str()) {
            Some(&slot) => slot,
            None => {
                debug!(name = %name, "Creating contact record");
                let slot = self.records.len();
                self.index.insert(name.as_str().to_string(), slot);
                self.records.push(ContactRecord::new(name));
                slot
            }
        };
        &mut self.records[slot]
    }

    /// All records in insertion order. Can be iterated any number of times.
    pub fn iter(&self) -> impl Iterator<Item = &ContactRecord> + '_ {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Birthdays observed within the next seven days, in book order.
    pub fn upcoming_birthdays(&self, today: NaiveDate) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays_within(today, DEFAULT_WINDOW_DAYS)
    }

    /// Birthdays observed within `window_days` of `today`, in book order.
    ///
    /// Results are not sorted by date.
    pub fn upcoming_birthdays_within(
        &self,
        today: NaiveDate,
        window_days: i64,
    ) -> Vec<UpcomingBirthday> {
        self.iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let (date, days_left) = upcoming::observed_within(birthday, today, window_days)?;
                Some(UpcomingBirthday {
                    name: record.name().as_str().to_string(),
                    date,
                    days_left,
                })
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a ContactRecord;
    type IntoIter = std::slice::Iter<'a, ContactRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name(raw: &str) -> Name {
        Name::new(raw).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_book_is_empty() {
        let book = AddressBook::new();
        assert!(book.is_empty());
        assert_eq!(book.len(), 0);
        assert!(book.find("alice").is_none());
    }

    #[test]
    fn test_find_is_exact() {
        let mut book = AddressBook::new();
        book.add_record(ContactRecord::new(name("Alice")));
        assert!(book.find("Alice").is_some());
        assert!(book.find("alice").is_none());
        assert!(book.find("Alice ").is_none());
    }

    #[test]
    fn test_add_record_overwrites_in_place() {
        let mut book = AddressBook::new();
        book.add_record(ContactRecord::new(name("alice")));
        book.add_record(ContactRecord::new(name("bob")));
        book.find_mut("alice").unwrap().add_phone("1234567890").unwrap();

        book.add_record(ContactRecord::new(name("alice")));

        assert_eq!(book.len(), 2);
        assert!(book.find("alice").unwrap().phones().is_empty());
        let names: Vec<_> = book.iter().map(|r| r.name().as_str()).collect();
        assert_eq!(names, ["alice", "bob"]);
    }

    #[test]
    fn test_find_or_create_keeps_existing() {
        let mut book = AddressBook::new();
        book.find_or_create(name("bob")).add_phone("1112223333").unwrap();
        book.find_or_create(name("bob")).add_phone("4445556666").unwrap();

        assert_eq!(book.len(), 1);
        assert_eq!(book.find("bob").unwrap().phones_joined(), "1112223333, 4445556666");
    }

    #[test]
    fn test_iteration_is_insertion_order_and_restartable() {
        let mut book = AddressBook::new();
        for n in ["zoe", "adam", "mia"] {
            book.find_or_create(name(n));
        }
        let first: Vec<_> = book.iter().map(|r| r.name().to_string()).collect();
        let second: Vec<_> = (&book).into_iter().map(|r| r.name().to_string()).collect();
        assert_eq!(first, ["zoe", "adam", "mia"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_upcoming_birthdays_in_book_order() {
        // Monday
        let today = date(2024, 6, 10);
        let mut book = AddressBook::new();
        book.find_or_create(name("late")).set_birthday("14.06.1990").unwrap();
        book.find_or_create(name("none"));
        book.find_or_create(name("early")).set_birthday("11.06.1985").unwrap();
        book.find_or_create(name("far")).set_birthday("01.09.1985").unwrap();

        let upcoming = book.upcoming_birthdays(today);
        let names: Vec<_> = upcoming.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, ["late", "early"]);
        assert_eq!(upcoming[0].days_left, 4);
        assert_eq!(upcoming[1].date, date(2024, 6, 11));
    }

    #[test]
    fn test_upcoming_birthdays_year_rollover() {
        // 30.12.2024 is a Monday; 01.01.2025 is a Wednesday
        let today = date(2024, 12, 30);
        let mut book = AddressBook::new();
        book.find_or_create(name("alice")).set_birthday("01.01.2000").unwrap();

        let upcoming = book.upcoming_birthdays(today);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].to_string(), "alice: 01.01.2025");
        assert_eq!(upcoming[0].days_left, 2);
    }

    #[test]
    fn test_upcoming_birthdays_weekend_shift() {
        // Wednesday; Saturday 15th and Sunday 16th both observe on Monday 17th
        let today = date(2024, 6, 12);
        let mut book = AddressBook::new();
        book.find_or_create(name("sat")).set_birthday("15.06.1990").unwrap();
        book.find_or_create(name("sun")).set_birthday("16.06.1990").unwrap();

        let upcoming = book.upcoming_birthdays(today);
        assert_eq!(upcoming.len(), 2);
        assert!(upcoming.iter().all(|u| u.date == date(2024, 6, 17)));
    }

    #[test]
    fn test_upcoming_birthdays_custom_window() {
        let today = date(2024, 6, 10);
        let mut book = AddressBook::new();
        book.find_or_create(name("a")).set_birthday("20.06.1990").unwrap();

        assert!(book.upcoming_birthdays(today).is_empty());
        assert_eq!(book.upcoming_birthdays_within(today, 14).len(), 1);
        assert!(book.upcoming_birthdays_within(today, 0).is_empty());
    }

    #[test]
    fn test_leap_day_birthday_in_common_year() {
        // 2023-02-28 is a Tuesday
        let today = date(2023, 2, 25);
        let mut book = AddressBook::new();
        book.find_or_create(name("leap")).set_birthday("29.02.2000").unwrap();

        let upcoming = book.upcoming_birthdays(today);
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].date, date(2023, 2, 28));
    }
}
