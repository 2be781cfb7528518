//! Interactive command tokens.

use std::fmt;
use std::str::FromStr;

use crate::error::DeckError;

/// One of the actions offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Add,
    Remove,
    Import,
    Export,
    Ask,
    Exit,
    Log,
    HardestCard,
    ResetStats,
}

impl Command {
    /// Every command, in menu order.
    pub const ALL: [Command; 9] = [
        Command::Add,
        Command::Remove,
        Command::Import,
        Command::Export,
        Command::Ask,
        Command::Exit,
        Command::Log,
        Command::HardestCard,
        Command::ResetStats,
    ];

    pub fn token(self) -> &'static str {
        match self {
            Command::Add => "add",
            Command::Remove => "remove",
            Command::Import => "import",
            Command::Export => "export",
            Command::Ask => "ask",
            Command::Exit => "exit",
            Command::Log => "log",
            Command::HardestCard => "hardest card",
            Command::ResetStats => "reset stats",
        }
    }

    /// The menu prompt listing every token.
    pub fn menu() -> String {
        let tokens: Vec<&str> = Self::ALL.iter().map(|c| c.token()).collect();
        format!("Input the action ({}):", tokens.join(", "))
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Tokens must match exactly; no trimming or case folding.
impl FromStr for Command {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.token() == s)
            .ok_or_else(|| DeckError::InvalidChoice(s.to_string()))
    }
}
