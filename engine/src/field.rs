use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;

/// The two editable columns of a round row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Who the user faces this round.
    UserSide,
    /// Who the first opponent faces this round.
    OpponentSide,
}

impl FromStr for Field {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "user" | "u" | "user_side" => Ok(Field::UserSide),
            "opp" | "opponent" | "p8" | "opponent_side" => Ok(Field::OpponentSide),
            _ => Err(anyhow!("Field must be one of user or opp, got {:?}", s)),
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Field::UserSide => write!(f, "user"),
            Field::OpponentSide => write!(f, "opp"),
        }
    }
}
