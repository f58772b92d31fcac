mod cli;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use clap::Parser;
use cli::{Cli, Commands, PredictCommand};
use common::{get_env_any, ConfigLoader, PathExt};
use console::{
    render_scenarios, run_console, write_output, ConsoleCommand, ConsoleOptions, Output,
    SessionManager, StaticAccess,
};
use dotenv::dotenv;
use env_logger::Env;
use log::info;
use mcgogo::{catalogue_json, scenarios, PredictorSession, SessionOptions};

fn main() -> Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    let default_filter = match cli.command {
        Commands::Console(_) => "warn",
        _ => "info",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    match &cli.command {
        Commands::Console(console_args) => {
            let mut manager = create_manager(&console_args.config)?;
            let stdin = io::stdin();
            let stdout = io::stdout();

            run_console(stdin.lock(), stdout.lock(), &mut manager)?
        }
        Commands::Predict(predict_args) => predict(predict_args)?,
        Commands::Scenarios(scenarios_args) => {
            let mut stdout = io::stdout().lock();

            if scenarios_args.json {
                let json = serde_json::to_string_pretty(&catalogue_json()?)?;
                writeln!(stdout, "{}", json)?;
            } else {
                writeln!(stdout, "{}", render_scenarios(scenarios()))?;
            }
        }
    }

    Ok(())
}

fn predict(args: &PredictCommand) -> Result<()> {
    let mut manager = create_manager(&args.config)?;

    let mut commands = vec![
        ConsoleCommand::UserName(args.user.clone()),
        ConsoleCommand::OpponentName(args.opponent.clone()),
    ];

    commands.extend(args.cells.iter().map(|cell| ConsoleCommand::SetCell {
        round: cell.round,
        field: cell.field,
        value: cell.value.clone(),
    }));

    if let Some(scenario) = &args.scenario {
        commands.push(ConsoleCommand::Advanced(true));
        commands.push(ConsoleCommand::Scenario(scenario.clone()));
    }

    for command in commands {
        fail_on_warning(&manager.command(command))?;
    }

    let last = if args.json {
        ConsoleCommand::Export
    } else {
        ConsoleCommand::Show
    };

    let outputs = manager.command(last);
    fail_on_warning(&outputs)?;

    let mut stdout = io::stdout().lock();
    for output in &outputs {
        write_output(&mut stdout, output)?;
    }

    Ok(())
}

fn create_manager(config: &str) -> Result<SessionManager<StaticAccess>> {
    let config_path = get_env_any(&["MCGOGO_CONFIG"])
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config))
        .relative_to_cwd()?;

    info!("Reading config from {:?}", config_path);

    let config = ConfigLoader::new_or_default(config_path, "session".to_string())?;
    let session_options: SessionOptions = config.load()?;
    let console_options: ConsoleOptions = config.scoped("console").load()?;

    Ok(SessionManager::new(
        PredictorSession::new(session_options),
        console_options.access(),
        console_options,
    ))
}

fn fail_on_warning(outputs: &[Output]) -> Result<()> {
    match outputs.iter().find_map(|o| match o {
        Output::Warning(msg) => Some(msg),
        _ => None,
    }) {
        Some(msg) => Err(anyhow!("{}", msg)),
        None => Ok(()),
    }
}
