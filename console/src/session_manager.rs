use anyhow::Result;
use engine::{Round, SeedNames};
use log::debug;
use mcgogo::{scenarios, PredictorSession};
use serde::Serialize;

use crate::{render_scenarios, render_table, AccessProvider, ConsoleCommand, ConsoleOptions, Output};

const HELP: &[&str] = &[
    "user <name>                  set your nickname",
    "opponent <name>              set your first opponent",
    "set <round> <user|opp> <v>   fill a manual cell",
    "clear <round> <user|opp>     empty a manual cell",
    "hint <round> <user|opp>      where a cell's value comes from",
    "advanced on|off              toggle rounds 8+",
    "scenario <id>                pick the advanced scenario",
    "scenarios                    list scenarios",
    "show | export | reset | quit",
];

#[derive(Serialize)]
struct Snapshot<'a> {
    seeds: &'a SeedNames,
    advanced: bool,
    scenario: Option<&'static str>,
    rounds: &'a [Round],
}

/// Applies console commands to a predictor session after checking access.
pub struct SessionManager<A> {
    session: PredictorSession,
    access: A,
    options: ConsoleOptions,
}

impl<A: AccessProvider> SessionManager<A> {
    pub fn new(session: PredictorSession, access: A, options: ConsoleOptions) -> Self {
        Self {
            session,
            access,
            options,
        }
    }

    pub fn session(&self) -> &PredictorSession {
        &self.session
    }

    pub fn command(&mut self, command: ConsoleCommand) -> Vec<Output> {
        debug!("Command {:?}", command);

        if let Some(permission) = command.required_permission() {
            if !self.access.is_authenticated() {
                self.access.on_login_required();
                return vec![Output::Warning("login required".to_string())];
            }

            if !self.access.has_permission(permission) {
                return vec![Output::Warning(format!(
                    "{} access is required for this command",
                    permission
                ))];
            }
        }

        match self.apply(command) {
            Ok(outputs) => outputs,
            Err(err) => vec![Output::Warning(err.to_string())],
        }
    }

    fn apply(&mut self, command: ConsoleCommand) -> Result<Vec<Output>> {
        let outputs = match command {
            ConsoleCommand::UserName(name) => {
                self.session.set_user_name(&name);
                vec![self.table()]
            }
            ConsoleCommand::OpponentName(name) => {
                self.session.set_opponent_name(&name);
                vec![self.table()]
            }
            ConsoleCommand::SetCell {
                round,
                field,
                value,
            } => {
                self.session.set_cell(round, field, &value)?;
                vec![self.table()]
            }
            ConsoleCommand::ClearCell { round, field } => {
                self.session.set_cell(round, field, "")?;
                vec![self.table()]
            }
            ConsoleCommand::Hint { round, field } => {
                let hint = self
                    .session
                    .hint(round, field)
                    .unwrap_or_else(|| "manual".to_string());
                vec![Output::Info(format!("R{} {}: {}", round, field, hint))]
            }
            ConsoleCommand::Advanced(enabled) => {
                self.session.set_advanced(enabled)?;
                let mode = if enabled { "advanced" } else { "basic" };
                vec![Output::Info(format!("{} mode", mode)), self.table()]
            }
            ConsoleCommand::Scenario(id) => {
                let scenario = self.session.select_scenario(&id)?;
                vec![
                    Output::Info(format!("scenario {}", scenario.name)),
                    self.table(),
                ]
            }
            ConsoleCommand::Scenarios => vec![Output::Table(render_scenarios(scenarios()))],
            ConsoleCommand::Show => vec![self.table()],
            ConsoleCommand::Export => vec![Output::Json(self.export()?)],
            ConsoleCommand::Reset => {
                self.session.reset();
                vec![Output::Info("reset".to_string()), self.table()]
            }
            ConsoleCommand::Help => HELP.iter().map(|l| Output::Info(l.to_string())).collect(),
            ConsoleCommand::Quit => vec![Output::Quit],
            ConsoleCommand::Noop => vec![],
        };

        Ok(outputs)
    }

    fn table(&self) -> Output {
        let session = &self.session;
        Output::Table(render_table(
            &session.display_table(),
            |round, field| session.is_auto(round, field),
            &self.options.unknown_label,
        ))
    }

    fn export(&self) -> Result<String> {
        let display_table = self.session.display_table();
        let snapshot = Snapshot {
            seeds: self.session.seeds(),
            advanced: self.session.is_advanced(),
            scenario: self.session.selected_scenario().map(|s| s.id),
            rounds: display_table.rounds(),
        };

        let json = if self.options.pretty_json {
            serde_json::to_string_pretty(&snapshot)?
        } else {
            serde_json::to_string(&snapshot)?
        };

        Ok(json)
    }
}
