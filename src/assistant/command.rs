//! Command-line parsing.

use std::fmt;

/// A recognized command word.
#[derive(Debug, Clone, PartialEq, Eq)]
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
    /// Anything else, kept lowercased; empty for a blank line
    Unknown(String),
}

impl Command {
    /// Match a command word, ignoring case.
    pub fn parse(word: &str) -> Self {
        let word = word.trim().to_lowercase();
        match word.as_str() {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "close" | "exit" => Self::Exit,
            _ => Self::Unknown(word),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let word = match self {
            Self::Hello => "hello",
            Self::Add => "add",
            Self::Change => "change",
            Self::Phone => "phone",
            Self::All => "all",
            Self::AddBirthday => "add-birthday",
            Self::ShowBirthday => "show-birthday",
            Self::Birthdays => "birthdays",
            Self::Exit => "exit",
            Self::Unknown(word) => word.as_str(),
        };
        f.write_str(word)
    }
}

/// One line of user input split into a command and its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: Command,
    pub args: Vec<String>,
}

/// Split a line on whitespace; the first token is the command word.
pub fn parse_input(line: &str) -> ParsedInput {
    let mut tokens = line.split_whitespace();
    let command = Command::parse(tokens.next().unwrap_or_default());
    let args = tokens.map(str::to_string).collect();
    ParsedInput { command, args }
}
