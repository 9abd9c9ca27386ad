mod cli;
mod demo;
mod infra;
mod report;

use house_dna::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
