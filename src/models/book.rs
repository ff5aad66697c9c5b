//! Address book: the name-keyed collection of contact records.

use crate::domain::format_date;
use crate::models::record::ContactRecord;
use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use serde::{Deserialize, Serialize, Serializer};
use std::str::FromStr;

/// Default look-ahead window for [`AddressBook::upcoming_birthdays`].
pub const DEFAULT_HORIZON_DAYS: u32 = 7;

/// How a congratulation date that lands on a weekend is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeekendPolicy {
    /// Report the birthday on the day it falls
    #[default]
    Keep,
    /// Move Saturday and Sunday birthdays to the following Monday
    ShiftToMonday,
}

impl WeekendPolicy {
    /// Apply the policy to an occurrence date.
    pub fn apply(self, date: NaiveDate) -> NaiveDate {
        match (self, date.weekday()) {
            (Self::ShiftToMonday, Weekday::Sat) => date + Duration::days(2),
            (Self::ShiftToMonday, Weekday::Sun) => date + Duration::days(1),
            _ => date,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Keep => "keep",
            Self::ShiftToMonday => "shift-to-monday",
        }
    }
}

impl FromStr for WeekendPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "keep" => Ok(Self::Keep),
            "shift-to-monday" => Ok(Self::ShiftToMonday),
            other => Err(format!(
                "expected 'keep' or 'shift-to-monday', got: {}",
                other
            )),
        }
    }
}

/// A contact whose birthday falls inside the requested horizon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpcomingBirthday {
    /// Contact name
    pub name: String,

    /// Day to congratulate, after year rollover and weekend policy
    #[serde(serialize_with = "serialize_date")]
    pub congratulation_date: NaiveDate,
}

impl UpcomingBirthday {
    /// The congratulation date as `DD.MM.YYYY`.
    pub fn date_string(&self) -> String {
        format_date(self.congratulation_date)
    }
}

fn serialize_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_date(*date))
}

/// Serialized shape of an address book: `{"contacts": [...]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookDocument {
    #[serde(default)]
    pub contacts: Vec<ContactRecord>,
}

/// Mapping from contact name to [`ContactRecord`].
///
/// Names are unique. Records are kept in insertion order and looked up by
/// linear scan. [`AddressBook::add_record`] is an upsert: a record whose name
/// already exists replaces the old one at the same position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BookDocument", into = "BookDocument")]
pub struct AddressBook {
    records: Vec<ContactRecord>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|r| r.name() == name)
    }

    /// Insert `record`, replacing any record with the same name.
    ///
    /// Returns `true` when an existing record was replaced.
    pub fn add_record(&mut self, record: ContactRecord) -> bool {
        match self.position(record.name()) {
            Some(index) => {
                tracing::debug!(name = %record.name(), "Replacing contact record");
                self.records[index] = record;
                true
            }
            None => {
                tracing::debug!(name = %record.name(), "Adding contact record");
                self.records.push(record);
                false
            }
        }
    }

    /// Exact-name lookup.
    pub fn find(&self, name: &str) -> Option<&ContactRecord> {
        self.records.iter().find(|r| r.name() == name)
    }

    /// Exact-name lookup for modification.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut ContactRecord> {
        self.records.iter_mut().find(|r| r.name() == name)
    }

    /// Exact-name lookup for modification, building the error from the
    /// unchanged book on a miss.
    pub fn find_mut_or_else<E>(
        &mut self,
        name: &str,
        missing: impl FnOnce(&Self) -> E,
    ) -> Result<&mut ContactRecord, E> {
        match self.position(name) {
            Some(index) => Ok(&mut self.records[index]),
            None => Err(missing(self)),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Remove the record named `name`, if any.
    pub fn delete(&mut self, name: &str) -> Option<ContactRecord> {
        let index = self.position(name)?;
        tracing::debug!(name = %name, "Deleting contact record");
        Some(self.records.remove(index))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &ContactRecord> {
        self.records.iter()
    }

    /// Contact names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(ContactRecord::name)
    }

    /// Contacts whose next birthday is between `today` and
    /// `today + horizon_days`, both inclusive.
    ///
    /// Inclusion is decided on the real occurrence date; `policy` only changes
    /// the reported congratulation date. Results are ordered by congratulation
    /// date, ties in insertion order.
    pub fn upcoming_birthdays(
        &self,
        today: NaiveDate,
        horizon_days: u32,
        policy: WeekendPolicy,
    ) -> Vec<UpcomingBirthday> {
        let horizon = i64::from(horizon_days);

        let mut upcoming: Vec<UpcomingBirthday> = self
            .records
            .iter()
            .filter_map(|record| {
                let birthday = record.birthday()?;
                let occurrence = birthday.next_occurrence(today);
                let days_away = (occurrence - today).num_days();
                if !(0..=horizon).contains(&days_away) {
                    return None;
                }
                Some(UpcomingBirthday {
                    name: record.name().to_string(),
                    congratulation_date: policy.apply(occurrence),
                })
            })
            .collect();

        // Stable sort keeps insertion order for equal dates
        upcoming.sort_by_key(|u| u.congratulation_date);

        tracing::debug!(
            today = %today,
            horizon_days = horizon_days,
            policy = policy.as_str(),
            count = upcoming.len(),
            "Computed upcoming birthdays"
        );

        upcoming
    }

    /// [`AddressBook::upcoming_birthdays`] relative to the local calendar date.
    pub fn upcoming_birthdays_from_today(
        &self,
        horizon_days: u32,
        policy: WeekendPolicy,
    ) -> Vec<UpcomingBirthday> {
        self.upcoming_birthdays(Local::now().date_naive(), horizon_days, policy)
    }
}

impl FromIterator<ContactRecord> for AddressBook {
    fn from_iter<I: IntoIterator<Item = ContactRecord>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl From<BookDocument> for AddressBook {
    fn from(document: BookDocument) -> Self {
        document.contacts.into_iter().collect()
    }
}

impl From<AddressBook> for BookDocument {
    fn from(book: AddressBook) -> Self {
        BookDocument {
            contacts: book.records,
        }
    }
}
