use anyhow::{Context, Result};
use engine::Field;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::Permission;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    UserName(String),
    OpponentName(String),
    SetCell {
        round: usize,
        field: Field,
        value: String,
    },
    ClearCell {
        round: usize,
        field: Field,
    },
    Hint {
        round: usize,
        field: Field,
    },
    Advanced(bool),
    Scenario(String),
    Scenarios,
    Show,
    Export,
    Reset,
    Help,
    Quit,
    Noop,
}

impl ConsoleCommand {
    /// The grant a command needs before it is dispatched, `None` when it is always allowed.
    pub fn required_permission(&self) -> Option<Permission> {
        match self {
            ConsoleCommand::Help
            | ConsoleCommand::Quit
            | ConsoleCommand::Noop
            | ConsoleCommand::Scenarios => None,
            ConsoleCommand::Advanced(_) | ConsoleCommand::Scenario(_) => Some(Permission::Advanced),
            _ => Some(Permission::Basic),
        }
    }
}

static USER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^user(?:\s+(.*))?$").unwrap());
static OPPONENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^opponent(?:\s+(.*))?$").unwrap());
static SET_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^set\s+(\d+)\s+(\S+)\s+(.+)$").unwrap());
static CLEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^clear\s+(\d+)\s+(\S+)$").unwrap());
static HINT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^hint\s+(\d+)\s+(\S+)$").unwrap());
static ADVANCED_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^advanced\s+(on|off)$").unwrap());
static SCENARIO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^scenario\s+(\S+)$").unwrap());

pub fn parse_line(line: &str) -> Result<ConsoleCommand> {
    match line {
        "scenarios" => Ok(ConsoleCommand::Scenarios),
        "show" => Ok(ConsoleCommand::Show),
        "export" => Ok(ConsoleCommand::Export),
        "reset" => Ok(ConsoleCommand::Reset),
        "help" => Ok(ConsoleCommand::Help),
        "quit" => Ok(ConsoleCommand::Quit),
        // user Rio
        _ if USER_RE.is_match(line) => {
            let cap = USER_RE.captures(line).unwrap();
            Ok(ConsoleCommand::UserName(optional_text(cap.get(1))))
        }
        _ if OPPONENT_RE.is_match(line) => {
            let cap = OPPONENT_RE.captures(line).unwrap();
            Ok(ConsoleCommand::OpponentName(optional_text(cap.get(1))))
        }
        // set 2 opp Siti Nurhaliza
        _ if SET_RE.is_match(line) => {
            let cap = SET_RE.captures(line).unwrap();
            Ok(ConsoleCommand::SetCell {
                round: parse_round(&cap[1])?,
                field: cap[2].parse()?,
                value: cap[3].trim().to_string(),
            })
        }
        _ if CLEAR_RE.is_match(line) => {
            let cap = CLEAR_RE.captures(line).unwrap();
            Ok(ConsoleCommand::ClearCell {
                round: parse_round(&cap[1])?,
                field: cap[2].parse()?,
            })
        }
        _ if HINT_RE.is_match(line) => {
            let cap = HINT_RE.captures(line).unwrap();
            Ok(ConsoleCommand::Hint {
                round: parse_round(&cap[1])?,
                field: cap[2].parse()?,
            })
        }
        _ if ADVANCED_RE.is_match(line) => {
            let cap = ADVANCED_RE.captures(line).unwrap();
            Ok(ConsoleCommand::Advanced(&cap[1] == "on"))
        }
        _ if SCENARIO_RE.is_match(line) => {
            let cap = SCENARIO_RE.captures(line).unwrap();
            Ok(ConsoleCommand::Scenario(cap[1].to_string()))
        }
        cmd if cmd.is_empty() => Ok(ConsoleCommand::Noop),
        _ => {
            anyhow::bail!("Command is unknown or not implemented: {}", line);
        }
    }
}

fn optional_text(capture: Option<regex::Match>) -> String {
    capture.map_or_else(String::new, |m| m.as_str().trim().to_string())
}

fn parse_round(round: &str) -> Result<usize> {
    round
        .parse()
        .with_context(|| format!("Could not read round number {}", round))
}
