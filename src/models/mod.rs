//! Data models for the contact book.
//!
//! This module contains the contact record and the address book that owns
//! every record.

pub mod book;
pub mod record;

pub use book::{AddressBook, BookDocument, UpcomingBirthday, WeekendPolicy, DEFAULT_HORIZON_DAYS};
pub use record::{ContactRecord, PhoneEdit};
