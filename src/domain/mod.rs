//! Domain value objects and field validators.
//!
//! This module contains type-safe wrappers for contact names, phone numbers
//! and birthdays. These value objects validate at construction time so an
//! invalid field can never be stored on a record.

pub mod birthday;
pub mod errors;
pub mod name;
pub mod phone;

pub use birthday::{format_date, validate_birthday, Birthday, BIRTHDAY_FORMAT};
pub use errors::{ValidationError, ValidationResult};
pub use name::ContactName;
pub use phone::{validate_phone, PhoneNumber};
