//! Interactive and one-shot front end for the telephony traffic calculators.

pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod input;
pub mod interrupt;
pub mod menu;
pub mod prompt;
pub mod report;

pub use cli::{Cli, Commands};
pub use commands::run_command;
pub use crate::config::CalculatorConfig;
pub use error::AppError;
