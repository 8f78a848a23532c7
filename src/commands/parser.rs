//! Input tokenization and command names.

use std::str::FromStr;

/// Commands understood by the assistant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::All => "all",
            Self::AddBirthday => "add-birthday",
            Self::ShowBirthday => "show-birthday",
            Self::Birthdays => "birthdays",
            Self::Exit => "exit",
        }
    }
}

/// The token did not name a known command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "hello" => Ok(Self::Hello),
            "add" => Ok(Self::Add),
            "change" => Ok(Self::Change),
            "phone" => Ok(Self::Phone),
            "all" => Ok(Self::All),
            "add-birthday" => Ok(Self::AddBirthday),
            "show-birthday" => Ok(Self::ShowBirthday),
            "birthdays" => Ok(Self::Birthdays),
            "exit" | "close" => Ok(Self::Exit),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

/// Split a line on whitespace into a command token and its arguments.
///
/// Only the command token is lower-cased; names and phones keep their case.
/// Returns `None` for a blank line.
pub fn parse_input(line: &str) -> Option<(String, Vec<String>)> {
    let mut tokens = line.split_whitespace();
    let command = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();
    Some((command, args))
}
