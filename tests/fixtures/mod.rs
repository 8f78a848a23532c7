//! Shared fixtures for integration tests.
//!
//! Sessions here always run on a fixed clock so birthday windows are
//! deterministic.

use address_book::commands::{dispatch, FixedClock, Reply};
use address_book::{AddressBook, Session};
use chrono::NaiveDate;

/// Build a date, panicking on impossible input.
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

/// An empty session whose "today" is the given date.
#[allow(dead_code)]
pub fn session_on(today: NaiveDate) -> Session {
    Session::with_clock(AddressBook::new(), FixedClock(today))
}

/// Run a line and return the printed reply, or an empty string for none.
#[allow(dead_code)]
pub fn say(session: &mut Session, line: &str) -> String {
    match dispatch(line, session) {
        Reply::Continue(message) | Reply::Exit(message) => message,
        Reply::Silent => String::new(),
    }
}
