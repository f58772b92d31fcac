use std::str::FromStr;

use anyhow::{anyhow, Context};
use clap::{Args, Parser, Subcommand};
use engine::Field;

#[derive(Parser)]
#[clap(author, version)]
#[clap(name = "McGogo Opponent Predictor")]
#[clap(about = "Predicts who you and your first opponent face in each round", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Console(InteractiveCommand),
    Predict(PredictCommand),
    Scenarios(ScenariosCommand),
}

#[derive(Args)]
#[clap(about = "Reads commands from stdin, one per line. Type help for the list.", long_about = None)]
pub struct InteractiveCommand {
    #[clap(short, long, default_value_t = String::from("mcgogo.conf"))]
    pub config: String,
}

#[derive(Args)]
#[clap(about = "Prints the predicted table for the given names and rounds.", long_about = None)]
pub struct PredictCommand {
    #[clap(short, long, default_value_t = String::from("mcgogo.conf"))]
    pub config: String,

    #[clap(short, long, default_value_t = String::new())]
    pub user: String,

    #[clap(short, long, default_value_t = String::new())]
    pub opponent: String,

    /// A manual cell as ROUND:FIELD=NAME, e.g. 2:opp=Siti. Repeatable.
    #[clap(long = "cell")]
    pub cells: Vec<CellAssignment>,

    /// Extends the table past round 7 with this scenario.
    #[clap(short, long)]
    pub scenario: Option<String>,

    #[clap(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ScenariosCommand {
    #[clap(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellAssignment {
    pub round: usize,
    pub field: Field,
    pub value: String,
}

impl FromStr for CellAssignment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (round, rest) = s
            .split_once(':')
            .ok_or_else(|| anyhow!("Expected ROUND:FIELD=NAME, got {:?}", s))?;
        let (field, value) = rest
            .split_once('=')
            .ok_or_else(|| anyhow!("Expected ROUND:FIELD=NAME, got {:?}", s))?;

        Ok(Self {
            round: round
                .trim()
                .parse()
                .with_context(|| format!("Could not read round number {}", round))?,
            field: field.trim().parse()?,
            value: value.trim().to_string(),
        })
    }
}
