use serde::ser::{Serialize, Serializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use anyhow::anyhow;

/// Which basic round a speculative round copies its value from.
///
/// The text form is `r<n>` with a 1-based round number. `Unknown` marks rounds the pattern
/// cannot predict yet; it is serialized as `null` and displayed as `UNKNOWN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternTag {
    Reference(usize),
    Unknown,
}

impl PatternTag {
    pub fn source_round(&self) -> Option<usize> {
        match self {
            PatternTag::Reference(round) => Some(*round),
            PatternTag::Unknown => None,
        }
    }
}

impl FromStr for PatternTag {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let round = s
            .strip_prefix('r')
            .ok_or_else(|| anyhow!("Pattern tag must start with 'r', got {:?}", s))?;

        let round: usize = round.parse()?;

        if round == 0 {
            return Err(anyhow!("Pattern tag round numbers are 1-based"));
        }

        Ok(PatternTag::Reference(round))
    }
}

impl Display for PatternTag {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            PatternTag::Reference(round) => write!(f, "r{}", round),
            PatternTag::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl Serialize for PatternTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PatternTag::Reference(round) => serializer.serialize_str(&format!("r{}", round)),
            PatternTag::Unknown => serializer.serialize_none(),
        }
    }
}
