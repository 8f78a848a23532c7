//! Command handlers.
//!
//! Each handler takes the already tokenized arguments and the session, and
//! returns either the reply text or a [`BookError`]. [`respond`] is the one
//! place where errors become user-facing text, so no handler failure ever
//! reaches the REPL as anything but a message.

use super::session::Session;
use crate::domain::{Name, PhoneNumber};
use crate::error::{BookError, BookResult};
use tracing::{debug, warn};

pub const CONTACT_SAVED: &str = "Contact saved";
pub const PHONE_UPDATED: &str = "Phone updated";
pub const BIRTHDAY_ADDED: &str = "Birthday added";
pub const NO_CONTACTS: &str = "No contacts saved";
pub const NO_BIRTHDAYS: &str = "No birthdays this week";

/// Split `args` into exactly `N` arguments.
fn expect_args<const N: usize>(args: &[String]) -> BookResult<[&str; N]> {
    if args.len() != N {
        return Err(BookError::WrongArity {
            expected: N,
            got: args.len(),
        });
    }
    let mut out = [""; N];
    for (slot, arg) in out.iter_mut().zip(args) {
        *slot = arg.as_str();
    }
    Ok(out)
}

/// `add <name> <phone>`: find or create the contact, then add the phone.
///
/// Both fields are validated before the book is touched, so a bad phone
/// never leaves an empty contact behind.
pub fn add_contact(args: &[String], session: &mut Session) -> BookResult<String> {
    let [name, phone] = expect_args::<2>(args)?;
    let name = Name::new(name)?;
    let phone = PhoneNumber::new(phone)?;
    session.book_mut().find_or_create(name).push_phone(phone);
    Ok(CONTACT_SAVED.to_string())
}

/// `change <name> <old phone> <new phone>`
pub fn change_contact(args: &[String], session: &mut Session) -> BookResult<String> {
    let [name, old, new] = expect_args::<3>(args)?;
    let record = session
        .book_mut()
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record.edit_phone(old, new)?;
    Ok(PHONE_UPDATED.to_string())
}

/// `phone <name>`: the contact's phones, comma separated.
pub fn show_phone(args: &[String], session: &mut Session) -> BookResult<String> {
    let [name] = expect_args::<1>(args)?;
    let record = session
        .book()
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    if record.phones().is_empty() {
        return Err(BookError::PhoneNotFound(String::new()));
    }
    Ok(record.phones_joined())
}

/// `all`: one line per contact, in the order they were added.
pub fn show_all(args: &[String], session: &mut Session) -> BookResult<String> {
    let [] = expect_args::<0>(args)?;
    if session.book().is_empty() {
        return Ok(NO_CONTACTS.to_string());
    }
    Ok(session
        .book()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>`
pub fn add_birthday(args: &[String], session: &mut Session) -> BookResult<String> {
    let [name, date] = expect_args::<2>(args)?;
    let record = session
        .book_mut()
        .find_mut(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record.set_birthday(date)?;
    Ok(BIRTHDAY_ADDED.to_string())
}

/// `show-birthday <name>`
pub fn show_birthday(args: &[String], session: &mut Session) -> BookResult<String> {
    let [name] = expect_args::<1>(args)?;
    let record = session
        .book()
        .find(name)
        .ok_or_else(|| BookError::ContactNotFound(name.to_string()))?;
    record
        .birthday()
        .map(ToString::to_string)
        .ok_or_else(|| BookError::BirthdayNotSet(name.to_string()))
}

/// `birthdays`: observed birthdays within the session's window of today.
pub fn birthdays(args: &[String], session: &mut Session) -> BookResult<String> {
    let [] = expect_args::<0>(args)?;
    let today = session.today();
    let upcoming = session
        .book()
        .upcoming_birthdays_within(today, session.birthday_window());
    debug!(%today, count = upcoming.len(), "Computed upcoming birthdays");

    if upcoming.is_empty() {
        return Ok(NO_BIRTHDAYS.to_string());
    }
    Ok(upcoming
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n"))
}

/// Turn a handler outcome into the text shown to the user.
pub fn respond(result: BookResult<String>) -> String {
    match result {
        Ok(message) => message,
        Err(err) if err.is_not_found() => {
            debug!(error = ?err, "Lookup missed");
            err.to_string()
        }
        Err(err) => {
            warn!(error = ?err, "Command rejected");
            err.to_string()
        }
    }
}
