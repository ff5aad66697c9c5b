//! Command-line parsing for the interactive loop.
//!
//! A line is split on whitespace; the first token, lowercased, names the
//! command and the remaining tokens are positional arguments.

use crate::error::{CommandError, CommandResult};

pub const USAGE_ADD: &str = "add <name> <phone>";
pub const USAGE_CHANGE: &str = "change <name> <phone> | change <name> <old phone> <new phone>";
pub const USAGE_PHONE: &str = "phone <name>";
pub const USAGE_ADD_BIRTHDAY: &str = "add-birthday <name> <DD.MM.YYYY>";
pub const USAGE_SHOW_BIRTHDAY: &str = "show-birthday <name>";
pub const USAGE_REMOVE_PHONE: &str = "remove-phone <name> <phone>";
pub const USAGE_DELETE: &str = "delete <name>";

/// A parsed user command with its positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    /// Create the contact if needed and append a phone
    Add { name: String, phone: String },
    /// Append a phone to an existing contact
    Change { name: String, phone: String },
    /// Replace one phone of an existing contact
    EditPhone {
        name: String,
        old: String,
        new: String,
    },
    Phone { name: String },
    All,
    AddBirthday { name: String, date: String },
    ShowBirthday { name: String },
    Birthdays,
    RemovePhone { name: String, phone: String },
    Delete { name: String },
    Help,
    /// `close` or `exit`
    Exit,
}

impl Command {
    /// Parse one input line.
    ///
    /// Returns `None` for a blank line.
    pub fn parse(line: &str) -> Option<CommandResult<Self>> {
        let mut tokens = line.split_whitespace();
        let command = tokens.next()?.to_lowercase();
        let args: Vec<String> = tokens.map(str::to_string).collect();
        Some(Self::from_parts(&command, args))
    }

    fn from_parts(command: &str, args: Vec<String>) -> CommandResult<Self> {
        let parsed = match command {
            "hello" => no_args(args, Self::Hello),
            "all" => no_args(args, Self::All),
            "birthdays" => no_args(args, Self::Birthdays),
            "help" => no_args(args, Self::Help),
            "close" | "exit" => Some(Self::Exit),
            "add" => two_args(args).map(|(name, phone)| Self::Add { name, phone }),
            "phone" => one_arg(args).map(|name| Self::Phone { name }),
            "add-birthday" => two_args(args).map(|(name, date)| Self::AddBirthday { name, date }),
            "show-birthday" => one_arg(args).map(|name| Self::ShowBirthday { name }),
            "remove-phone" => two_args(args).map(|(name, phone)| Self::RemovePhone { name, phone }),
            "delete" => one_arg(args).map(|name| Self::Delete { name }),
            "change" => match <[String; 3]>::try_from(args) {
                Ok([name, old, new]) => Some(Self::EditPhone { name, old, new }),
                Err(args) => two_args(args).map(|(name, phone)| Self::Change { name, phone }),
            },
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };

        parsed.ok_or(CommandError::WrongArguments {
            usage: usage_for(command),
        })
    }

    /// Whether this command ends the session.
    pub fn is_exit(&self) -> bool {
        matches!(self, Self::Exit)
    }
}

fn no_args(args: Vec<String>, command: Command) -> Option<Command> {
    args.is_empty().then_some(command)
}

fn one_arg(args: Vec<String>) -> Option<String> {
    let [name] = <[String; 1]>::try_from(args).ok()?;
    Some(name)
}

fn two_args(args: Vec<String>) -> Option<(String, String)> {
    let [first, second] = <[String; 2]>::try_from(args).ok()?;
    Some((first, second))
}

fn usage_for(command: &str) -> &'static str {
    match command {
        "add" => USAGE_ADD,
        "change" => USAGE_CHANGE,
        "phone" => USAGE_PHONE,
        "add-birthday" => USAGE_ADD_BIRTHDAY,
        "show-birthday" => USAGE_SHOW_BIRTHDAY,
        "remove-phone" => USAGE_REMOVE_PHONE,
        "delete" => USAGE_DELETE,
        "hello" => "hello",
        "all" => "all",
        "birthdays" => "birthdays",
        "help" => "help",
        _ => "help",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(line: &str) -> CommandResult<Command> {
        Command::parse(line).expect("non-blank line")
    }

    #[test]
    fn test_blank_line() {
        assert!(Command::parse("").is_none());
        assert!(Command::parse("   \t ").is_none());
    }

    #[test]
    fn test_command_name_is_case_insensitive() {
        assert_eq!(parse("HeLLo"), Ok(Command::Hello));
        assert_eq!(parse("  EXIT  "), Ok(Command::Exit));
        assert_eq!(parse("close"), Ok(Command::Exit));
    }

    #[test]
    fn test_arguments_keep_case() {
        assert_eq!(
            parse("ADD John 1234567890"),
            Ok(Command::Add {
                name: "John".to_string(),
                phone: "1234567890".to_string()
            })
        );
    }

    #[test]
    fn test_change_forms() {
        assert_eq!(
            parse("change John 1112223333"),
            Ok(Command::Change {
                name: "John".to_string(),
                phone: "1112223333".to_string()
            })
        );
        assert_eq!(
            parse("change John 1234567890 1112223333"),
            Ok(Command::EditPhone {
                name: "John".to_string(),
                old: "1234567890".to_string(),
                new: "1112223333".to_string()
            })
        );
        assert_eq!(
            parse("change John"),
            Err(CommandError::WrongArguments {
                usage: USAGE_CHANGE
            })
        );
    }

    #[test]
    fn test_wrong_argument_count() {
        assert_eq!(
            parse("add John"),
            Err(CommandError::WrongArguments { usage: USAGE_ADD })
        );
        assert_eq!(
            parse("phone"),
            Err(CommandError::WrongArguments { usage: USAGE_PHONE })
        );
        assert_eq!(
            parse("show-birthday John Jane"),
            Err(CommandError::WrongArguments {
                usage: USAGE_SHOW_BIRTHDAY
            })
        );
        assert!(parse("all now").is_err());
    }

    #[test]
    fn test_unknown_command() {
        assert_eq!(
            parse("launch rockets"),
            Err(CommandError::UnknownCommand("launch".to_string()))
        );
    }

    #[test]
    fn test_birthday_commands() {
        assert_eq!(
            parse("add-birthday John 10.06.1990"),
            Ok(Command::AddBirthday {
                name: "John".to_string(),
                date: "10.06.1990".to_string()
            })
        );
        assert_eq!(parse("birthdays"), Ok(Command::Birthdays));
    }
}
