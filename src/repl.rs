use std::convert::TryFrom;
use std::fmt;

use anyhow::{bail, Error, Result};
use lazy_static::lazy_static;

/// Commands understood by the interactive prompt.
#[derive(PartialEq, Clone, Copy)]
pub enum Command {
    Run,
    Click,
    Show,
    Help,
    Quit,
}

impl Command {
    pub fn describe(&self) -> &'static str {
        match self {
            Command::Run => "run the narrated walkthrough",
            Command::Click => "activate the registered control",
            Command::Show => "print the output region's current text",
            Command::Help => "show this help",
            Command::Quit => "exit",
        }
    }
}

impl TryFrom<&str> for Command {
    type Error = Error;

    fn try_from(input: &str) -> Result<Self> {
        Ok(match normalize_input(input).as_str() {
            "run" => Self::Run,
            "click" => Self::Click,
            "show" => Self::Show,
            "help" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => bail!("Unknown command: {}", other),
        })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Run => write!(f, "run"),
            Command::Click => write!(f, "click"),
            Command::Show => write!(f, "show"),
            Command::Help => write!(f, "help"),
            Command::Quit => write!(f, "quit"),
        }
    }
}

lazy_static! {
    pub static ref COMMANDS: Vec<Command> = vec![
        Command::Run,
        Command::Click,
        Command::Show,
        Command::Help,
        Command::Quit,
    ];
}

/// Outcome of dispatching one command.
pub enum ReplResult {
    Ok,
    Quit,
    Err(String),
}

/// Fixup input so command matching is happy
///
/// Strips surrounding whitespace and lowercases, so `" Click "` and
/// `"click"` dispatch the same way.
pub fn normalize_input(input: &str) -> String {
    input.trim().to_ascii_lowercase()
}

#[test]
fn test_normalize_input() {
    assert_eq!(normalize_input("run"), "run");
    assert_eq!(normalize_input("  run  "), "run");
    assert_eq!(normalize_input("Click"), "click");
    assert_eq!(normalize_input("\tQUIT\n"), "quit");
}

#[test]
fn test_command_parse() {
    assert!(Command::try_from("run").unwrap() == Command::Run);
    assert!(Command::try_from(" Click ").unwrap() == Command::Click);
    assert!(Command::try_from("show").unwrap() == Command::Show);
    assert!(Command::try_from("exit").unwrap() == Command::Quit);
    assert!(Command::try_from("frobnicate").is_err());
    assert!(Command::try_from("").is_err());
}

#[test]
fn test_command_display_round_trips() {
    for cmd in COMMANDS.iter() {
        let parsed = Command::try_from(cmd.to_string().as_str()).unwrap();
        assert!(parsed == *cmd);
    }
}
