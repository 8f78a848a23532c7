//! Address Book - an interactive command-line contact manager.
//!
//! Contacts have a name, any number of ten-digit phone numbers and an optional
//! birthday. The book answers which birthdays are coming up in the next week,
//! with weekend birthdays observed on the following Monday.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: The contact record and its mutations
//! - **book**: The address book and the upcoming birthday query
//! - **commands**: Command parsing, handlers and error normalization
//! - **repl**: The interactive loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use book::{AddressBook, UpcomingBirthday};
pub use commands::{dispatch, Reply, Session};
pub use config::Config;
pub use domain::{Birthday, Name, PhoneNumber, ValidationError};
pub use error::{BookError, BookResult, ConfigError};
pub use models::ContactRecord;
