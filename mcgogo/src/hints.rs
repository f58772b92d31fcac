use engine::{Field, RoundTable, BASIC_ROUNDS};

use super::{derivation_for, Source, FALLBACK_USER_LABEL};

/// Placeholder text for an input cell. Hints are never written into the table.
///
/// Derived cells name the source they are copied from. Round 5's opponent side is manual, but it
/// usually matches round 2's opponent side, so that name is offered once it is known.
pub fn hint(table: &RoundTable, round_number: usize, field: Field) -> Option<String> {
    if round_number > BASIC_ROUNDS {
        return Some("auto: scenario pattern".to_string());
    }

    if let Some(derivation) = derivation_for(round_number, field) {
        return Some(format!("auto: {}", describe(derivation.source)));
    }

    match (round_number, field) {
        (5, Field::OpponentSide) => {
            let candidate = table.value(2, Field::OpponentSide);
            (!candidate.is_empty()).then(|| format!("likely {} (R2 opp)", candidate))
        }
        _ => None,
    }
}

fn describe(source: Source) -> String {
    match source {
        Source::OpponentName => "opponent name".to_string(),
        Source::UserName => format!("user name or \"{}\"", FALLBACK_USER_LABEL),
        Source::Cell(round, field) => format!("R{} {}", round, field),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_five_opponent_hint_references_round_two() {
        let mut table = RoundTable::basic();
        assert_eq!(hint(&table, 5, Field::OpponentSide), None);

        table.set(2, Field::OpponentSide, "Siti");
        assert_eq!(
            hint(&table, 5, Field::OpponentSide).as_deref(),
            Some("likely Siti (R2 opp)")
        );
        assert_eq!(table.value(5, Field::OpponentSide), "");
    }

    #[test]
    fn test_derived_cells_name_their_source() {
        let table = RoundTable::basic();

        assert_eq!(
            hint(&table, 3, Field::UserSide).as_deref(),
            Some("auto: R2 opp")
        );
        assert_eq!(
            hint(&table, 1, Field::UserSide).as_deref(),
            Some("auto: opponent name")
        );
        assert_eq!(
            hint(&table, 7, Field::OpponentSide).as_deref(),
            Some("auto: R6 user")
        );
    }

    #[test]
    fn test_speculative_rounds_follow_scenario() {
        let table = RoundTable::basic();

        assert_eq!(
            hint(&table, 9, Field::UserSide).as_deref(),
            Some("auto: scenario pattern")
        );
    }

    #[test]
    fn test_manual_cells_have_no_hint() {
        let table = RoundTable::basic();

        assert_eq!(hint(&table, 2, Field::UserSide), None);
        assert_eq!(hint(&table, 4, Field::OpponentSide), None);
        assert_eq!(hint(&table, 6, Field::OpponentSide), None);
    }
}
