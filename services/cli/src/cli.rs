use crate::demo::{run_demo, DemoArgs};
use crate::report::{run_assess, run_schedule, AssessArgs, ScheduleArgs};
use clap::{Parser, Subcommand};
use house_dna::config::AppConfig;
use house_dna::error::AppError;
use house_dna::telemetry;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "house-dna",
    about = "Score the physical health of a house from its component inventory",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score a house snapshot and print its health report
    Assess(AssessArgs),
    /// Compute the next recommended maintenance date for a category
    Schedule(ScheduleArgs),
    /// Score a built-in sample house through the in-memory service
    Demo(DemoArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    debug!(environment = ?config.environment, "house-dna cli starting");

    match cli.command {
        Command::Assess(args) => run_assess(args, &config),
        Command::Schedule(args) => run_schedule(args, &config),
        Command::Demo(args) => run_demo(args, &config),
    }
}
