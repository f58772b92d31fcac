use super::{Field, Round, RoundTable, SeedNames};

/// Rules that turn seed names and manual inputs into a resolved round table.
///
/// Implementations must be total and side effect free. `recompute` is called again after every
/// edit, so applying it to its own output must return the same table.
pub trait PredictionEngine {
    fn recompute(&self, table: &RoundTable, seeds: &SeedNames) -> RoundTable;

    /// Whether the cell is written by `recompute` (read-only) rather than by the user.
    fn is_auto(&self, round_number: usize, field: Field) -> bool;

    /// Speculative rounds produced from a resolved basic table for the given scenario.
    /// Unknown or empty ids produce no rounds.
    fn expand(&self, basic_table: &RoundTable, scenario_id: &str) -> Vec<Round>;
}

/// Joins the basic table with the expansion for `scenario_id` when expansion is enabled.
pub fn build_display_table<E: PredictionEngine>(
    engine: &E,
    basic_table: &RoundTable,
    expansion_enabled: bool,
    scenario_id: &str,
) -> RoundTable {
    if !expansion_enabled || scenario_id.is_empty() {
        return basic_table.clone();
    }

    let mut display_table = basic_table.clone();
    display_table.extend(engine.expand(basic_table, scenario_id));
    display_table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PatternTag;

    struct EchoEngine;

    impl PredictionEngine for EchoEngine {
        fn recompute(&self, table: &RoundTable, _seeds: &SeedNames) -> RoundTable {
            table.clone()
        }

        fn is_auto(&self, _round_number: usize, _field: Field) -> bool {
            false
        }

        fn expand(&self, _basic_table: &RoundTable, scenario_id: &str) -> Vec<Round> {
            match scenario_id {
                "one" => vec![Round::speculative(8, "x", PatternTag::Reference(1))],
                _ => vec![],
            }
        }
    }

    #[test]
    fn test_display_table_disabled_returns_basic() {
        let basic = RoundTable::basic();
        let display = build_display_table(&EchoEngine, &basic, false, "one");
        assert_eq!(display, basic);
    }

    #[test]
    fn test_display_table_empty_scenario_returns_basic() {
        let basic = RoundTable::basic();
        let display = build_display_table(&EchoEngine, &basic, true, "");
        assert_eq!(display, basic);
    }

    #[test]
    fn test_display_table_appends_expansion() {
        let basic = RoundTable::basic();
        let display = build_display_table(&EchoEngine, &basic, true, "one");

        assert_eq!(display.len(), 8);
        assert_eq!(display.get(8).map(|r| r.user_side.as_str()), Some("x"));
        assert_eq!(basic.len(), 7);
    }
}
