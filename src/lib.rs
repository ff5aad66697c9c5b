//! Contact Book - a command-line address book for names, phone numbers and birthdays.
//!
//! The library holds the validated data model and the command layer; the
//! `contact-book` binary wires them to the terminal and a JSON file.
//!
//! # Architecture
//!
//! - **domain**: Validated field values (name, phone number, birthday)
//! - **models**: Contact records and the address book, including the upcoming-birthday query
//! - **matching**: Fuzzy name suggestions for lookups that miss
//! - **storage**: Loading and saving the whole book
//! - **commands**: Command parsing, dispatch and the interactive session
//! - **config**: Configuration from environment variables
//! - **error**: Error types for each concern

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod storage;

pub use commands::{Clock, Command, CommandHandler, FixedClock, Session, SystemClock};
pub use config::Config;
pub use domain::{validate_birthday, validate_phone, Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, ConfigError, SessionError, StorageError};
pub use matching::NameMatcher;
pub use models::{AddressBook, ContactRecord, PhoneEdit, UpcomingBirthday, WeekendPolicy};
pub use storage::{BookStore, JsonFileStore};
