use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "secret-santa")]
#[command(about = "Draw Secret Santa assignments from a CSV roster")]
pub struct Cli {
    #[arg(short, long, global = true, help = "Log every rejected candidate")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Draw a new set of assignments
    Draw(DrawArgs),
    /// Check a stored draw record against its inputs
    Verify(VerifyArgs),
}

#[derive(Args)]
pub struct InputArgs {
    #[arg(long, help = "Roster CSV (Employee_Name, Employee_EmailID)")]
    pub participants: PathBuf,

    #[arg(long, help = "Previous round CSV (last year's output, or Giver_Email, Receiver_Email)")]
    pub previous: Option<PathBuf>,
}

#[derive(Args)]
pub struct DrawArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    #[arg(long, help = "Write assignments here instead of stdout")]
    pub output: Option<PathBuf>,

    #[arg(long, value_enum, help = "Assignment output format", default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,

    #[arg(long, help = "Write a JSON draw record for later verification")]
    pub record: Option<PathBuf>,

    #[arg(long, env = "SECRET_SANTA_SEED", help = "RNG seed (random if omitted)")]
    pub seed: Option<u64>,

    #[arg(long, help = "Shuffles to try before giving up")]
    pub max_attempts: Option<usize>,

    #[arg(long, help = "JSON config file with rng_seed and/or max_attempts")]
    pub config: Option<PathBuf>,
}

#[derive(Args)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    #[arg(long, help = "Draw record JSON produced by `draw --record`")]
    pub record: PathBuf,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}
