use engine::{Field, PredictionEngine, Round, RoundTable, SeedNames};

use super::{expand, is_auto, recompute};

#[derive(Default)]
pub struct Engine {}

impl Engine {
    pub fn new() -> Self {
        Self {}
    }
}

impl PredictionEngine for Engine {
    fn recompute(&self, table: &RoundTable, seeds: &SeedNames) -> RoundTable {
        recompute(table, seeds)
    }

    fn is_auto(&self, round_number: usize, field: Field) -> bool {
        is_auto(round_number, field)
    }

    fn expand(&self, basic_table: &RoundTable, scenario_id: &str) -> Vec<Round> {
        expand(basic_table, scenario_id)
    }
}
