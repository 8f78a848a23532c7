//! End-to-end tests for the interactive loop.
//!
//! A whole session is fed in as text and the full transcript is compared.

use address_book::repl;

mod fixtures;
use fixtures::*;

fn transcript(today: chrono::NaiveDate, script: &str) -> String {
    transcript_bytes(today, script.as_bytes())
}

fn transcript_bytes(today: chrono::NaiveDate, script: &[u8]) -> String {
    let mut session = session_on(today);
    let mut out = Vec::new();
    repl::run(&mut session, script, &mut out, ">>> ").expect("in-memory io");
    String::from_utf8(out).expect("utf-8 output")
}

/// A typical session from greeting to goodbye.
#[test]
fn test_full_session() {
    let script = "\
hello
add alice 1234567890
add-birthday alice 01.01.2000
show-birthday alice
phone alice
birthdays

all
close
";
    let expected = "\
Welcome to the assistant bot!
>>> How can I help you?
>>> Contact saved
>>> Birthday added
>>> 01.01.2000
>>> 1234567890
>>> alice: 01.01.2025
>>> >>> alice: 1234567890, birthday: 01.01.2000
>>> Good bye!
";
    assert_eq!(transcript(date(2024, 12, 30), script), expected);
}

/// Errors are printed and the loop keeps going.
#[test]
fn test_errors_do_not_end_session() {
    let script = "add\nadd bob 1\nphone bob\nwhatever\nexit\n";
    let expected = "\
Welcome to the assistant bot!
>>> Not enough arguments provided
>>> Phone must contain 10 digits
>>> Contact not found
>>> Invalid command.
>>> Good bye!
";
    assert_eq!(transcript(date(2024, 6, 10), script), expected);
}

/// Running out of input ends the session quietly.
#[test]
fn test_session_without_exit() {
    let out = transcript(date(2024, 6, 10), "add bob 1112223333");
    assert_eq!(out, "Welcome to the assistant bot!\n>>> Contact saved\n>>> \n");
}

/// Bytes that are not UTF-8 get a reply and the session keeps its contacts.
#[test]
fn test_invalid_utf8_does_not_end_session() {
    let script = b"add bob 1112223333\nadd \xff\xfe 1234567890\n\xff\xfe\nphone bob\nexit\n";
    let expected = "\
Welcome to the assistant bot!
>>> Contact saved
>>> Input must be valid UTF-8
>>> Input must be valid UTF-8
>>> 1112223333
>>> Good bye!
";
    assert_eq!(transcript_bytes(date(2024, 6, 10), script), expected);
}
