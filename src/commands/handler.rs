//! Executes parsed commands against the address book.

use super::clock::Clock;
use super::parser::{
    Command, USAGE_ADD, USAGE_ADD_BIRTHDAY, USAGE_CHANGE, USAGE_DELETE, USAGE_PHONE,
    USAGE_REMOVE_PHONE, USAGE_SHOW_BIRTHDAY,
};
use crate::config::Config;
use crate::domain::validate_phone;
use crate::error::{CommandError, CommandResult};
use crate::matching::NameMatcher;
use crate::models::{AddressBook, ContactRecord, WeekendPolicy};

/// Maximum names offered in a "did you mean" hint.
const MAX_SUGGESTIONS: usize = 3;

/// Turns commands into book operations and reply text.
#[derive(Debug, Clone)]
pub struct CommandHandler<C: Clock> {
    clock: C,
    horizon_days: u32,
    weekend_policy: WeekendPolicy,
    matcher: NameMatcher,
}

impl<C: Clock> CommandHandler<C> {
    pub fn new(clock: C, horizon_days: u32, weekend_policy: WeekendPolicy) -> Self {
        Self {
            clock,
            horizon_days,
            weekend_policy,
            matcher: NameMatcher::new(),
        }
    }

    pub fn from_config(clock: C, config: &Config) -> Self {
        Self::new(clock, config.birthday_horizon_days, config.weekend_policy)
    }

    /// Run one command and return the reply to show the user.
    ///
    /// Errors are recoverable; the caller renders them and keeps going.
    pub fn execute(&self, book: &mut AddressBook, command: Command) -> CommandResult<String> {
        tracing::debug!(command = ?command, "Executing command");

        match command {
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Add { name, phone } => Self::add_contact(book, name, &phone),
            Command::Change { name, phone } => {
                let record = self.record_mut(book, &name)?;
                record.add_phone(&phone)?;
                Ok(format!("New contact number {} is updated.", phone))
            }
            Command::EditPhone { name, old, new } => {
                let record = self.record_mut(book, &name)?;
                let outcome = record.edit_phone(&old, &new)?;
                Ok(outcome.to_string())
            }
            Command::Phone { name } => {
                let record = self.record(book, &name)?;
                if record.phones().is_empty() {
                    return Ok(format!("'{}' has no phone numbers.", name));
                }
                let phones = record
                    .phones()
                    .iter()
                    .map(|p| p.as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                Ok(format!("The phone number for '{}' is {}", name, phones))
            }
            Command::All => {
                if book.is_empty() {
                    return Ok("No contacts.".to_string());
                }
                Ok(book
                    .records()
                    .map(ContactRecord::describe)
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
            Command::AddBirthday { name, date } => {
                let record = self.record_mut(book, &name)?;
                let birthday = record.add_birthday(&date)?;
                Ok(format!("Birthday for {}:{} added", name, birthday))
            }
            Command::ShowBirthday { name } => {
                let record = self.record(book, &name)?;
                Ok(match record.birthday() {
                    Some(birthday) => format!("{}'s birthday is {}", name, birthday),
                    None => format!("{}'s birthday was not found", name),
                })
            }
            Command::Birthdays => Ok(self.upcoming_birthdays(book)),
            Command::RemovePhone { name, phone } => {
                let record = self.record_mut(book, &name)?;
                Ok(match record.remove_phone(&phone) {
                    0 => format!("Phone number {} not found for {}", phone, name),
                    _ => format!("Phone number {} removed for {}", phone, name),
                })
            }
            Command::Delete { name } => match book.delete(&name) {
                Some(_) => Ok(format!("Contact {} deleted.", name)),
                None => Err(self.not_found(book, &name)),
            },
            Command::Help => Ok(help_text()),
            Command::Exit => Ok("Good bye!".to_string()),
        }
    }

    /// `add`: the phone is validated before the contact is created, so an
    /// invalid number never leaves an empty contact behind.
    fn add_contact(book: &mut AddressBook, name: String, phone: &str) -> CommandResult<String> {
        let phone = validate_phone(phone)?;

        if let Some(record) = book.find_mut(&name) {
            record.add_phone(phone.as_str())?;
            return Ok(format!("Contact updated. Phone number {} added.", phone));
        }

        let mut record = ContactRecord::new(name)?;
        record.add_phone(phone.as_str())?;
        book.add_record(record);
        Ok(format!("Contact added. Phone number {} added.", phone))
    }

    fn upcoming_birthdays(&self, book: &AddressBook) -> String {
        let today = self.clock.today();
        let upcoming = book.upcoming_birthdays(today, self.horizon_days, self.weekend_policy);

        if upcoming.is_empty() {
            return "No upcoming birthdays".to_string();
        }

        let unit = if self.horizon_days == 1 { "day" } else { "days" };
        let mut lines = vec![format!(
            "Upcoming birthdays in the next {} {}:",
            self.horizon_days, unit
        )];
        lines.extend(
            upcoming
                .iter()
                .map(|u| format!("{}: {}", u.name, u.date_string())),
        );
        lines.join("\n")
    }

    fn record<'b>(&self, book: &'b AddressBook, name: &str) -> CommandResult<&'b ContactRecord> {
        book.find(name).ok_or_else(|| self.not_found(book, name))
    }

    fn record_mut<'b>(
        &self,
        book: &'b mut AddressBook,
        name: &str,
    ) -> CommandResult<&'b mut ContactRecord> {
        book.find_mut_or_else(name, |book| self.not_found(book, name))
    }

    fn not_found(&self, book: &AddressBook, name: &str) -> CommandError {
        CommandError::ContactNotFound {
            name: name.to_string(),
            suggestions: self.matcher.suggest(name, book.names(), MAX_SUGGESTIONS),
        }
    }
}

fn help_text() -> String {
    let commands = [
        "hello",
        USAGE_ADD,
        USAGE_CHANGE,
        USAGE_PHONE,
        "all",
        USAGE_ADD_BIRTHDAY,
        USAGE_SHOW_BIRTHDAY,
        "birthdays",
        USAGE_REMOVE_PHONE,
        USAGE_DELETE,
        "close | exit",
    ];

    let mut lines = vec!["Commands:".to_string()];
    lines.extend(commands.iter().map(|c| format!("  {}", c)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::clock::FixedClock;
    use chrono::NaiveDate;

    fn handler() -> CommandHandler<FixedClock> {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        CommandHandler::new(FixedClock(today), 7, WeekendPolicy::Keep)
    }

    fn run(book: &mut AddressBook, line: &str) -> CommandResult<String> {
        let command = Command::parse(line).unwrap()?;
        handler().execute(book, command)
    }

    #[test]
    fn test_add_then_update() {
        let mut book = AddressBook::new();
        assert_eq!(
            run(&mut book, "add John 1234567890").unwrap(),
            "Contact added. Phone number 1234567890 added."
        );
        assert_eq!(
            run(&mut book, "add John 5555555555").unwrap(),
            "Contact updated. Phone number 5555555555 added."
        );
        assert_eq!(book.len(), 1);
        assert_eq!(book.find("John").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_add_invalid_phone_creates_nothing() {
        let mut book = AddressBook::new();
        let err = run(&mut book, "add John 12345").unwrap_err();
        assert_eq!(err.to_string(), "Phone number should contain 10 digits.");
        assert!(book.is_empty());
    }

    #[test]
    fn test_phone_lists_numbers() {
        let mut book = AddressBook::new();
        run(&mut book, "add John 1234567890").unwrap();
        run(&mut book, "add John 5555555555").unwrap();
        assert_eq!(
            run(&mut book, "phone John").unwrap(),
            "The phone number for 'John' is 1234567890, 5555555555"
        );
    }

    #[test]
    fn test_missing_contact_suggests_names() {
        let mut book = AddressBook::new();
        run(&mut book, "add John 1234567890").unwrap();
        let err = run(&mut book, "phone Jhon").unwrap_err();
        assert_eq!(
            err.to_string(),
            "No contact named 'Jhon' found. Did you mean: John?"
        );
    }

    #[test]
    fn test_mutating_command_on_missing_contact_suggests_names() {
        let mut book = AddressBook::new();
        run(&mut book, "add John 1234567890").unwrap();
        let err = run(&mut book, "change Jhon 1112223333").unwrap_err();
        assert_eq!(
            err.to_string(),
            "No contact named 'Jhon' found. Did you mean: John?"
        );
        assert_eq!(book.find("John").unwrap().phones().len(), 1);
    }

    #[test]
    fn test_change_appends_phone() {
        let mut book = AddressBook::new();
        run(&mut book, "add John 1234567890").unwrap();
        assert_eq!(
            run(&mut book, "change John 1112223333").unwrap(),
            "New contact number 1112223333 is updated."
        );
        assert_eq!(book.find("John").unwrap().phones().len(), 2);
    }

    #[test]
    fn test_change_edits_phone() {
        let mut book = AddressBook::new();
        run(&mut book, "add John 1234567890").unwrap();
        assert_eq!(
            run(&mut book, "change John 1234567890 1112223333").unwrap(),
            "Phone number has changed from 1234567890 to 1112223333 for John"
        );
        assert_eq!(
            run(&mut book, "change John 0000000000 1112223333").unwrap(),
            "Phone number 0000000000 not found for John"
        );
    }

    #[test]
    fn test_all() {
        let mut book = AddressBook::new();
        assert_eq!(run(&mut book, "all").unwrap(), "No contacts.");
        run(&mut book, "add John 1234567890").unwrap();
        run(&mut book, "add Jane 9876543210").unwrap();
        run(&mut book, "add-birthday Jane 01.02.1995").unwrap();
        assert_eq!(
            run(&mut book, "all").unwrap(),
            "Contact name: John, phones: 1234567890\n\
             Contact name: Jane, phones: 9876543210, birthday: 01.02.1995"
        );
    }

    #[test]
    fn test_birthday_commands() {
        let mut book = AddressBook::new();
        run(&mut book, "add John 1234567890").unwrap();
        assert_eq!(
            run(&mut book, "show-birthday John").unwrap(),
            "John's birthday was not found"
        );
        assert_eq!(
            run(&mut book, "add-birthday John 10.06.1990").unwrap(),
            "Birthday for John:10.06.1990 added"
        );
        assert_eq!(
            run(&mut book, "show-birthday John").unwrap(),
            "John's birthday is 10.06.1990"
        );
        assert!(run(&mut book, "add-birthday John 1.6.1990").is_err());
    }

    #[test]
    fn test_birthdays_report() {
        let mut book = AddressBook::new();
        assert_eq!(run(&mut book, "birthdays").unwrap(), "No upcoming birthdays");

        run(&mut book, "add John 1234567890").unwrap();
        run(&mut book, "add Jane 9876543210").unwrap();
        run(&mut book, "add-birthday John 17.06.1990").unwrap();
        run(&mut book, "add-birthday Jane 10.06.1992").unwrap();
        assert_eq!(
            run(&mut book, "birthdays").unwrap(),
            "Upcoming birthdays in the next 7 days:\nJane: 10.06.2024\nJohn: 17.06.2024"
        );
    }

    #[test]
    fn test_remove_phone_and_delete() {
        let mut book = AddressBook::new();
        run(&mut book, "add John 1234567890").unwrap();
        assert_eq!(
            run(&mut book, "remove-phone John 1234567890").unwrap(),
            "Phone number 1234567890 removed for John"
        );
        assert_eq!(
            run(&mut book, "remove-phone John 1234567890").unwrap(),
            "Phone number 1234567890 not found for John"
        );
        assert_eq!(run(&mut book, "delete John").unwrap(), "Contact John deleted.");
        assert!(run(&mut book, "delete John").is_err());
        assert!(book.is_empty());
    }
}
