use serde::Serialize;

use super::{Field, PatternTag};

/// One row of the prediction table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {
    pub round_number: usize,
    pub user_side: String,
    pub opponent_side: String,
    /// Set only on rows produced by a scenario expansion.
    pub speculative: bool,
    /// The basic round a speculative row was copied from. Always `None` on basic rows.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<PatternTag>,
}

impl Round {
    pub fn empty(round_number: usize) -> Self {
        Self {
            round_number,
            user_side: String::new(),
            opponent_side: String::new(),
            speculative: false,
            pattern: None,
        }
    }

    pub fn speculative(round_number: usize, user_side: &str, pattern: PatternTag) -> Self {
        Self {
            round_number,
            user_side: user_side.to_owned(),
            opponent_side: String::new(),
            speculative: true,
            pattern: Some(pattern),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::UserSide => &self.user_side,
            Field::OpponentSide => &self.opponent_side,
        }
    }

    pub fn set(&mut self, field: Field, value: &str) {
        let cell = match field {
            Field::UserSide => &mut self.user_side,
            Field::OpponentSide => &mut self.opponent_side,
        };

        value.clone_into(cell);
    }

    pub fn has_any(&self) -> bool {
        !self.user_side.is_empty() || !self.opponent_side.is_empty()
    }

    pub fn has_both(&self) -> bool {
        !self.user_side.is_empty() && !self.opponent_side.is_empty()
    }

    /// The value this row contributes when referenced by a pattern: the user side when filled,
    /// otherwise the opponent side.
    pub fn preferred_value(&self) -> &str {
        if self.user_side.is_empty() {
            &self.opponent_side
        } else {
            &self.user_side
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self.pattern, Some(PatternTag::Unknown))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferred_value_prefers_user_side() {
        let mut round = Round::empty(2);
        round.set(Field::UserSide, "Alex");
        round.set(Field::OpponentSide, "Sam");
        assert_eq!(round.preferred_value(), "Alex");
    }

    #[test]
    fn test_preferred_value_falls_back_to_opponent_side() {
        let mut round = Round::empty(2);
        round.set(Field::OpponentSide, "Sam");
        assert_eq!(round.preferred_value(), "Sam");
        assert_eq!(Round::empty(3).preferred_value(), "");
    }

    #[test]
    fn test_has_any_and_has_both() {
        let mut round = Round::empty(6);
        assert!(!round.has_any());

        round.set(Field::OpponentSide, "Dewi");
        assert!(round.has_any());
        assert!(!round.has_both());

        round.set(Field::UserSide, "Rio");
        assert!(round.has_both());
    }

    #[test]
    fn test_basic_round_serializes_without_pattern() {
        let json = serde_json::to_value(Round::empty(1)).unwrap();
        assert!(json.get("pattern").is_none());

        let json = serde_json::to_value(Round::speculative(12, "", PatternTag::Unknown)).unwrap();
        assert_eq!(json["pattern"], serde_json::Value::Null);
        assert_eq!(json["speculative"], serde_json::Value::Bool(true));
    }
}
