use engine::{PatternTag, Round, RoundTable};

use super::scenario;

/// Speculative rounds for `scenario_id`, in the order the scenario declares them.
///
/// Each round copies the referenced basic round's user side, or its opponent side when the user
/// side is empty. References outside the table and `Unknown` patterns resolve to an empty value.
/// Empty or unknown ids produce no rounds.
pub fn expand(basic_table: &RoundTable, scenario_id: &str) -> Vec<Round> {
    let Some(scenario) = scenario(scenario_id) else {
        return vec![];
    };

    scenario
        .rounds
        .iter()
        .map(|r| Round::speculative(r.round, resolve(basic_table, r.pattern), r.pattern))
        .collect()
}

fn resolve(basic_table: &RoundTable, pattern: PatternTag) -> &str {
    pattern
        .source_round()
        .and_then(|round| basic_table.get(round))
        .map_or("", Round::preferred_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::Field::{OpponentSide, UserSide};

    fn basic_table() -> RoundTable {
        let mut table = RoundTable::basic();
        table.set(1, UserSide, "Vina");
        table.set(1, OpponentSide, "Rio");
        table.set(2, UserSide, "Alex");
        table.set(2, OpponentSide, "Sam");
        table.set(3, UserSide, "Sam");
        table.set(3, OpponentSide, "Alex");
        table.set(4, OpponentSide, "Dewi");
        table.set(5, UserSide, "Dewi");
        table.set(6, OpponentSide, "Fajar");
        table
    }

    #[test]
    fn test_round2_prefers_user_side() {
        let rounds = expand(&basic_table(), "round2");

        assert_eq!(rounds[0].round_number, 8);
        assert_eq!(rounds[0].pattern, Some(PatternTag::Reference(2)));
        assert_eq!(rounds[0].user_side, "Alex");
    }

    #[test]
    fn test_falls_back_to_opponent_side() {
        let rounds = expand(&basic_table(), "round2");

        // r4 has only the opponent side filled.
        assert_eq!(rounds[1].round_number, 9);
        assert_eq!(rounds[1].user_side, "Dewi");
    }

    #[test]
    fn test_empty_source_round_is_empty() {
        let rounds = expand(&basic_table(), "round1_s2");

        // r7 is blank in the basic table.
        assert_eq!(rounds[3].round_number, 11);
        assert_eq!(rounds[3].user_side, "");
        assert_eq!(rounds[3].pattern, Some(PatternTag::Reference(7)));
    }

    #[test]
    fn test_unknown_pattern_rounds() {
        let rounds = expand(&basic_table(), "round5_s2");

        let unknown = rounds
            .iter()
            .filter(|r| r.is_unknown())
            .map(|r| (r.round_number, r.user_side.as_str()))
            .collect::<Vec<_>>();

        assert_eq!(unknown, vec![(12, ""), (13, "")]);
    }

    #[test]
    fn test_reference_past_table_is_empty() {
        let rounds = expand(&basic_table(), "round5_s1");

        assert_eq!(rounds[3].round_number, 11);
        assert_eq!(rounds[3].pattern, Some(PatternTag::Reference(9)));
        assert_eq!(rounds[3].user_side, "");
        assert!(!rounds[3].is_unknown());
    }

    #[test]
    fn test_unknown_scenario_is_empty() {
        assert!(expand(&basic_table(), "nonexistent").is_empty());
        assert!(expand(&basic_table(), "").is_empty());
    }

    #[test]
    fn test_speculative_rounds_have_no_opponent_side() {
        for scenario in crate::scenarios() {
            let rounds = expand(&basic_table(), scenario.id);

            assert_eq!(rounds.len(), scenario.rounds.len());
            assert!(rounds
                .iter()
                .all(|r| r.speculative && r.opponent_side.is_empty()));
            assert_eq!(
                rounds.iter().map(|r| r.round_number).collect::<Vec<_>>(),
                scenario.rounds.iter().map(|r| r.round).collect::<Vec<_>>()
            );
        }
    }
}
