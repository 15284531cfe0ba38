mod cli;
mod commands;
mod demo;
mod infra;

use hirenow::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
