use serde::Serialize;

use super::{Field, Round};

/// Number of rounds the basic rules cover.
pub const BASIC_ROUNDS: usize = 7;

/// The two names the user types before any round data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedNames {
    pub user_name: String,
    pub opponent_name: String,
}

impl SeedNames {
    pub fn new(user_name: impl Into<String>, opponent_name: impl Into<String>) -> Self {
        Self {
            user_name: user_name.into(),
            opponent_name: opponent_name.into(),
        }
    }

    /// Both names are filled in, ignoring surrounding whitespace.
    pub fn is_complete(&self) -> bool {
        !self.user_name.trim().is_empty() && !self.opponent_name.trim().is_empty()
    }
}

/// Rounds ordered by round number. Lookups are 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RoundTable {
    rounds: Vec<Round>,
}

impl RoundTable {
    /// A fresh table of empty rounds 1 through 7.
    pub fn basic() -> Self {
        Self {
            rounds: (1..=BASIC_ROUNDS).map(Round::empty).collect(),
        }
    }

    pub fn from_rounds(rounds: Vec<Round>) -> Self {
        Self { rounds }
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn get(&self, round_number: usize) -> Option<&Round> {
        round_number
            .checked_sub(1)
            .and_then(|index| self.rounds.get(index))
    }

    pub fn get_mut(&mut self, round_number: usize) -> Option<&mut Round> {
        round_number
            .checked_sub(1)
            .and_then(|index| self.rounds.get_mut(index))
    }

    /// The cell value, or an empty string when the round does not exist.
    pub fn value(&self, round_number: usize, field: Field) -> &str {
        self.get(round_number).map_or("", |round| round.get(field))
    }

    /// Writes the cell if the round exists. Missing rounds are never created.
    pub fn set(&mut self, round_number: usize, field: Field, value: &str) {
        if let Some(round) = self.get_mut(round_number) {
            round.set(field, value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Round> {
        self.rounds.iter()
    }

    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }
}

impl Default for RoundTable {
    fn default() -> Self {
        Self::basic()
    }
}

impl Extend<Round> for RoundTable {
    fn extend<T: IntoIterator<Item = Round>>(&mut self, iter: T) {
        self.rounds.extend(iter);
    }
}

impl<'a> IntoIterator for &'a RoundTable {
    type Item = &'a Round;
    type IntoIter = std::slice::Iter<'a, Round>;

    fn into_iter(self) -> Self::IntoIter {
        self.rounds.iter()
    }
}
