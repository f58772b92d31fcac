use std::collections::BTreeMap;

use engine::PatternTag;
use serde::Serialize;

use PatternTag::{Reference as R, Unknown};

/// A speculative round and the basic round its opponent is expected to repeat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScenarioRound {
    pub round: usize,
    pub pattern: PatternTag,
}

/// A named prediction pattern for rounds 8 and later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scenario {
    #[serde(skip)]
    pub id: &'static str,
    pub name: &'static str,
    pub rounds: &'static [ScenarioRound],
}

const fn at(round: usize, pattern: PatternTag) -> ScenarioRound {
    ScenarioRound { round, pattern }
}

/// Every selectable scenario in display order. The patterns decide user visible predictions, so
/// any change here changes results.
pub static SCENARIOS: [Scenario; 7] = [
    Scenario {
        id: "round1_s1",
        name: "Lawan Round 1 (Skenario 1)",
        rounds: &[
            at(8, R(1)),
            at(9, R(2)),
            at(10, R(3)),
            at(11, R(4)),
            at(12, R(5)),
            at(13, R(6)),
        ],
    },
    Scenario {
        id: "round1_s2",
        name: "Lawan Round 1 (Skenario 2)",
        rounds: &[
            at(8, R(1)),
            at(9, R(4)),
            at(10, R(5)),
            at(11, R(7)),
            at(12, R(3)),
            at(13, R(2)),
        ],
    },
    Scenario {
        id: "round2",
        name: "Lawan Round 2",
        rounds: &[
            at(8, R(2)),
            at(9, R(4)),
            at(10, R(3)),
            at(11, R(7)),
            at(12, R(5)),
            at(13, R(1)),
        ],
    },
    Scenario {
        id: "round5_s1",
        name: "Lawan Round 5 (Skenario 1)",
        rounds: &[
            at(8, R(5)),
            at(9, R(4)),
            at(10, R(3)),
            // Points past the basic table, so it always resolves empty.
            at(11, R(9)),
            at(12, R(7)),
        ],
    },
    Scenario {
        id: "round5_s2",
        name: "Lawan Round 5 (Skenario 2)",
        rounds: &[
            at(8, R(5)),
            at(9, R(2)),
            at(10, R(3)),
            at(11, R(7)),
            at(12, Unknown),
            at(13, Unknown),
        ],
    },
    Scenario {
        id: "round6_s1",
        name: "Lawan Round 6 (Skenario 1)",
        rounds: &[
            at(8, R(6)),
            at(9, R(2)),
            at(10, R(5)),
            at(11, R(4)),
            at(12, R(7)),
            at(13, R(1)),
        ],
    },
    Scenario {
        id: "round6_s2",
        name: "Lawan Round 6 (Skenario 2 - Mati 1)",
        rounds: &[
            at(8, R(6)),
            at(9, R(2)),
            at(10, R(5)),
            at(11, R(4)),
            // Mati 1: one player eliminated, round 5 repeats.
            at(12, R(5)),
            at(13, R(1)),
            at(14, R(3)),
        ],
    },
];

pub fn scenario(id: &str) -> Option<&'static Scenario> {
    SCENARIOS.iter().find(|s| s.id == id)
}

pub fn scenarios() -> impl Iterator<Item = &'static Scenario> {
    SCENARIOS.iter()
}

/// The catalogue as `{ id: { name, rounds: [{ round, pattern }] } }`.
pub fn catalogue_json() -> serde_json::Result<serde_json::Value> {
    let catalogue = SCENARIOS
        .iter()
        .map(|s| (s.id, s))
        .collect::<BTreeMap<_, _>>();

    serde_json::to_value(catalogue)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(id: &str) -> Vec<(usize, Option<usize>)> {
        scenario(id)
            .unwrap()
            .rounds
            .iter()
            .map(|r| (r.round, r.pattern.source_round()))
            .collect()
    }

    #[test]
    fn test_catalogue_has_seven_distinct_ids() {
        let mut ids = scenarios().map(|s| s.id).collect::<Vec<_>>();
        assert_eq!(ids.len(), 7);

        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn test_unknown_id_is_none() {
        assert!(scenario("nonexistent").is_none());
        assert!(scenario("").is_none());
    }

    #[test]
    fn test_round5_s2_ends_with_unknown() {
        assert_eq!(
            tags("round5_s2"),
            vec![
                (8, Some(5)),
                (9, Some(2)),
                (10, Some(3)),
                (11, Some(7)),
                (12, None),
                (13, None)
            ]
        );
    }

    #[test]
    fn test_round6_s2_runs_to_round_fourteen() {
        assert_eq!(
            tags("round6_s2"),
            vec![
                (8, Some(6)),
                (9, Some(2)),
                (10, Some(5)),
                (11, Some(4)),
                (12, Some(5)),
                (13, Some(1)),
                (14, Some(3))
            ]
        );
    }

    #[test]
    fn test_catalogue_json_shape() {
        let json = catalogue_json().unwrap();

        assert_eq!(json["round2"]["name"], "Lawan Round 2");
        assert_eq!(json["round2"]["rounds"][0]["round"], 8);
        assert_eq!(json["round2"]["rounds"][0]["pattern"], "r2");
        assert_eq!(json["round5_s2"]["rounds"][4]["pattern"], serde_json::Value::Null);
        assert!(json["round2"].get("id").is_none());
        assert_eq!(json.as_object().map(|o| o.len()), Some(7));
    }
}
