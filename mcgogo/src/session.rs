use anyhow::Result;
use engine::{build_display_table, Field, PredictionEngine, RoundTable, SeedNames, BASIC_ROUNDS};
use log::{debug, info};

use super::{hint, scenario, Engine, Scenario, SessionOptions};

/// State behind one prediction form: the seed names, the basic table and the advanced mode
/// selection. Every edit recomputes the whole basic table immediately.
pub struct PredictorSession {
    engine: Engine,
    options: SessionOptions,
    seeds: SeedNames,
    table: RoundTable,
    advanced: bool,
    selected_scenario: Option<&'static Scenario>,
}

impl PredictorSession {
    pub fn new(options: SessionOptions) -> Self {
        let engine = Engine::new();
        let seeds = SeedNames::default();
        let table = engine.recompute(&RoundTable::basic(), &seeds);

        Self {
            engine,
            options,
            seeds,
            table,
            advanced: false,
            selected_scenario: None,
        }
    }

    pub fn seeds(&self) -> &SeedNames {
        &self.seeds
    }

    pub fn table(&self) -> &RoundTable {
        &self.table
    }

    pub fn is_advanced(&self) -> bool {
        self.advanced
    }

    pub fn selected_scenario(&self) -> Option<&'static Scenario> {
        self.selected_scenario
    }

    pub fn set_user_name(&mut self, user_name: &str) {
        user_name.clone_into(&mut self.seeds.user_name);
        self.refresh();

        if !user_name.trim().is_empty() {
            info!("User nickname locked: {}", user_name);
        }
    }

    pub fn set_opponent_name(&mut self, opponent_name: &str) {
        opponent_name.clone_into(&mut self.seeds.opponent_name);
        self.refresh();

        if !opponent_name.trim().is_empty() {
            info!("First opponent locked: {}", opponent_name);
        }
    }

    /// Writes a manual cell of the basic table. Derived cells and rounds outside the basic table
    /// are read-only.
    pub fn set_cell(&mut self, round_number: usize, field: Field, value: &str) -> Result<()> {
        if !(1..=BASIC_ROUNDS).contains(&round_number) {
            anyhow::bail!(
                "Round {} cannot be edited, basic rounds are 1 to {}",
                round_number,
                BASIC_ROUNDS
            );
        }

        if self.engine.is_auto(round_number, field) {
            anyhow::bail!(
                "Round {} {} is computed automatically",
                round_number,
                field
            );
        }

        self.table.set(round_number, field, value);
        self.refresh();

        info!("Round {} updated", round_number);

        Ok(())
    }

    pub fn set_advanced(&mut self, enabled: bool) -> Result<()> {
        if enabled
            && !self.advanced
            && self.options.require_seeds_for_advanced
            && !self.seeds.is_complete()
        {
            anyhow::bail!("Complete the user nickname and first opponent before advanced mode");
        }

        if enabled != self.advanced {
            info!(
                "Advanced mode {}",
                if enabled { "enabled" } else { "disabled" }
            );
        }

        self.advanced = enabled;

        Ok(())
    }

    pub fn select_scenario(&mut self, scenario_id: &str) -> Result<&'static Scenario> {
        let selected = scenario(scenario_id)
            .ok_or_else(|| anyhow::anyhow!("Scenario {:?} is unknown", scenario_id))?;

        self.selected_scenario = Some(selected);
        info!("Scenario {} selected", selected.name);

        Ok(selected)
    }

    /// Clears the seed names and every cell and leaves advanced mode.
    pub fn reset(&mut self) {
        self.seeds = SeedNames::default();
        self.table = self.engine.recompute(&RoundTable::basic(), &self.seeds);
        self.advanced = false;
        self.selected_scenario = None;

        info!("Session reset");
    }

    /// The basic table followed by the selected scenario's rounds while advanced mode is on.
    pub fn display_table(&self) -> RoundTable {
        let scenario_id = self.selected_scenario.map_or("", |s| s.id);

        build_display_table(&self.engine, &self.table, self.advanced, scenario_id)
    }

    pub fn is_auto(&self, round_number: usize, field: Field) -> bool {
        self.engine.is_auto(round_number, field)
    }

    pub fn hint(&self, round_number: usize, field: Field) -> Option<String> {
        hint(&self.table, round_number, field)
    }

    fn refresh(&mut self) {
        self.table = self.engine.recompute(&self.table, &self.seeds);
        debug!("Recomputed table {:?}", self.table);
    }
}

impl Default for PredictorSession {
    fn default() -> Self {
        Self::new(SessionOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::Field::{OpponentSide, UserSide};

    fn seeded() -> PredictorSession {
        let mut session = PredictorSession::default();
        session.set_user_name("Rio");
        session.set_opponent_name("Vina");
        session
    }

    #[test]
    fn test_new_session_has_fallback_in_round_one() {
        let session = PredictorSession::default();

        assert_eq!(session.table().len(), BASIC_ROUNDS);
        assert_eq!(session.table().value(1, OpponentSide), "user");
        assert!(!session.is_advanced());
    }

    #[test]
    fn test_seed_change_recomputes_immediately() {
        let mut session = seeded();
        assert_eq!(session.table().value(1, UserSide), "Vina");

        session.set_opponent_name("Dewi");
        assert_eq!(session.table().value(1, UserSide), "Dewi");
    }

    #[test]
    fn test_cell_edit_recomputes_dependents() {
        let mut session = seeded();
        session.set_cell(2, OpponentSide, "Siti").unwrap();

        assert_eq!(session.table().value(3, UserSide), "Siti");

        session.set_cell(2, OpponentSide, "Tono").unwrap();
        assert_eq!(session.table().value(3, UserSide), "Tono");
    }

    #[test]
    fn test_auto_cells_are_read_only() {
        let mut session = seeded();

        assert!(session.set_cell(3, UserSide, "X").is_err());
        assert!(session.set_cell(5, UserSide, "X").is_err());
        assert!(session.set_cell(5, OpponentSide, "X").is_ok());
    }

    #[test]
    fn test_rounds_outside_basic_table_rejected() {
        let mut session = seeded();

        assert!(session.set_cell(0, UserSide, "X").is_err());
        assert!(session.set_cell(8, UserSide, "X").is_err());
        assert_eq!(session.table().len(), BASIC_ROUNDS);
    }

    #[test]
    fn test_advanced_requires_seed_names() {
        let mut session = PredictorSession::default();
        session.set_user_name("Rio");

        assert!(session.set_advanced(true).is_err());
        assert!(!session.is_advanced());

        session.set_opponent_name("Vina");
        assert!(session.set_advanced(true).is_ok());
        assert!(session.is_advanced());
    }

    #[test]
    fn test_advanced_without_seed_requirement() {
        let mut session = PredictorSession::new(SessionOptions {
            require_seeds_for_advanced: false,
        });

        assert!(session.set_advanced(true).is_ok());
    }

    #[test]
    fn test_display_table_needs_advanced_and_scenario() {
        let mut session = seeded();
        session.select_scenario("round2").unwrap();
        assert_eq!(session.display_table().len(), BASIC_ROUNDS);

        session.set_advanced(true).unwrap();
        assert_eq!(session.display_table().len(), 13);

        session.set_advanced(false).unwrap();
        assert_eq!(session.display_table().len(), BASIC_ROUNDS);
        assert_eq!(session.selected_scenario().map(|s| s.id), Some("round2"));
    }

    #[test]
    fn test_unknown_scenario_rejected() {
        let mut session = seeded();

        assert!(session.select_scenario("nonexistent").is_err());
        assert!(session.selected_scenario().is_none());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut session = seeded();
        session.set_cell(2, UserSide, "Budi").unwrap();
        session.set_advanced(true).unwrap();
        session.select_scenario("round1_s1").unwrap();

        session.reset();

        assert_eq!(session.seeds(), &SeedNames::default());
        assert_eq!(session.table().value(2, UserSide), "");
        assert_eq!(session.table().value(1, OpponentSide), "user");
        assert!(!session.is_advanced());
        assert!(session.selected_scenario().is_none());
    }
}
