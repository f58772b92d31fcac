//! The fixed copy rules for basic rounds 1 through 7.
//!
//! Each derived cell is written from one source, but only when its guard holds. Rules are applied
//! top to bottom on a single copy of the table, so a rule sees cells written by earlier rules in
//! the same pass. The whole table is recomputed on every change.

use engine::{Field, RoundTable, SeedNames, BASIC_ROUNDS};

use Field::{OpponentSide, UserSide};

/// Written to round 1's opponent side while the user name is empty.
pub const FALLBACK_USER_LABEL: &str = "user";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    OpponentName,
    /// The user name, or `FALLBACK_USER_LABEL` when it is empty.
    UserName,
    Cell(usize, Field),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Always,
    /// At least one field of the round is filled.
    AnyFilled(usize),
    /// Both fields of the round are filled.
    BothFilled(usize),
    CellFilled(usize, Field),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Derivation {
    pub round: usize,
    pub field: Field,
    pub source: Source,
    pub guard: Guard,
}

const fn derive(round: usize, field: Field, source: Source, guard: Guard) -> Derivation {
    Derivation {
        round,
        field,
        source,
        guard,
    }
}

pub static DERIVATIONS: [Derivation; 8] = [
    derive(1, UserSide, Source::OpponentName, Guard::Always),
    derive(1, OpponentSide, Source::UserName, Guard::Always),
    // Round 3 swaps round 2 once either side of round 2 is known.
    derive(3, UserSide, Source::Cell(2, OpponentSide), Guard::AnyFilled(2)),
    derive(3, OpponentSide, Source::Cell(2, UserSide), Guard::AnyFilled(2)),
    derive(5, UserSide, Source::Cell(4, OpponentSide), Guard::CellFilled(4, OpponentSide)),
    derive(6, UserSide, Source::Cell(5, OpponentSide), Guard::CellFilled(5, OpponentSide)),
    // Round 7 swaps round 6 only once both sides of round 6 are known.
    derive(7, UserSide, Source::Cell(6, OpponentSide), Guard::BothFilled(6)),
    derive(7, OpponentSide, Source::Cell(6, UserSide), Guard::BothFilled(6)),
];

impl Guard {
    fn holds(&self, table: &RoundTable) -> bool {
        match *self {
            Guard::Always => true,
            Guard::AnyFilled(round) => table.get(round).is_some_and(|r| r.has_any()),
            Guard::BothFilled(round) => table.get(round).is_some_and(|r| r.has_both()),
            Guard::CellFilled(round, field) => !table.value(round, field).is_empty(),
        }
    }
}

impl Source {
    fn resolve<'a>(&self, table: &'a RoundTable, seeds: &'a SeedNames) -> &'a str {
        match *self {
            Source::OpponentName => &seeds.opponent_name,
            Source::UserName if seeds.user_name.is_empty() => FALLBACK_USER_LABEL,
            Source::UserName => &seeds.user_name,
            Source::Cell(round, field) => table.value(round, field),
        }
    }
}

/// Returns a copy of `table` with every derived cell whose guard holds rewritten. All other cells
/// are passed through untouched.
pub fn recompute(table: &RoundTable, seeds: &SeedNames) -> RoundTable {
    let mut resolved = table.clone();

    for derivation in DERIVATIONS.iter() {
        if !derivation.guard.holds(&resolved) {
            continue;
        }

        let value = derivation.source.resolve(&resolved, seeds).to_owned();
        resolved.set(derivation.round, derivation.field, &value);
    }

    resolved
}

/// Whether the cell is read-only for the user. Independent of whether its guard currently holds.
/// Speculative rounds past the basic table are always read-only.
pub fn is_auto(round_number: usize, field: Field) -> bool {
    if round_number > BASIC_ROUNDS {
        return true;
    }

    derivation_for(round_number, field).is_some()
}

pub fn derivation_for(round_number: usize, field: Field) -> Option<&'static Derivation> {
    DERIVATIONS
        .iter()
        .find(|d| d.round == round_number && d.field == field)
}
