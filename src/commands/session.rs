//! Per-session state handed to every command handler.

use crate::book::{AddressBook, DEFAULT_WINDOW_DAYS};
use chrono::{Local, NaiveDate};

/// Source of "today" for birthday queries.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The local calendar date of the machine.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock stuck on one date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// The address book of one interactive session plus what handlers need
/// around it.
pub struct Session {
    book: AddressBook,
    clock: Box<dyn Clock>,
    window_days: i64,
}

impl Session {
    /// A session over `book` using the system clock and the default window.
    pub fn new(book: AddressBook) -> Self {
        Self::with_clock(book, SystemClock)
    }

    pub fn with_clock(book: AddressBook, clock: impl Clock + 'static) -> Self {
        Self {
            book,
            clock: Box::new(clock),
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }

    /// Override the birthday look-ahead window.
    pub fn window_days(mut self, days: i64) -> Self {
        self.window_days = days;
        self
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut AddressBook {
        &mut self.book
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    pub fn birthday_window(&self) -> i64 {
        self.window_days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let day = NaiveDate::from_ymd_opt(2024, 12, 30).unwrap();
        let session = Session::with_clock(AddressBook::new(), FixedClock(day));
        assert_eq!(session.today(), day);
        assert_eq!(session.birthday_window(), DEFAULT_WINDOW_DAYS);
    }

    #[test]
    fn test_window_override() {
        let session = Session::new(AddressBook::new()).window_days(3);
        assert_eq!(session.birthday_window(), 3);
        assert!(session.book().is_empty());
    }
}
