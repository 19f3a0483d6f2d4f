//! Parsing and range checks for console entries.
//!
//! Each validator inspects a single entry and either yields a value or an
//! [`InputError`] whose message is shown before the prompt is repeated.

use teletraffic_core::TrafficError;
use thiserror::Error;

/// Broad category of a rejected entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputErrorKind {
    EmptyInput,
    OutOfRange,
    NotANumber,
}

/// Why an entry was rejected. Display strings are shown to the user verbatim.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("Entry cannot be empty.")]
    Empty,
    #[error("Invalid option. Please enter a number between {min} and {max}")]
    OutOfBounds { min: u32, max: u32 },
    #[error("Invalid option. Please enter a number between {min} and {max}")]
    InvalidSelection { min: u32, max: u32 },
    #[error("Invalid option. Must be a whole number greater than 0")]
    NotPositiveInteger,
    #[error("Invalid option. Number must be no greater than {max}")]
    TooLarge { max: u32 },
    #[error("Invalid option. Please enter a whole number.")]
    NotAWholeNumber,
    #[error("Invalid option. Number must be greater than 0")]
    NotPositiveNumber,
    #[error("Invalid option. Please enter a number.")]
    NotANumber,
    #[error("Invalid option. {0}")]
    Rejected(#[from] TrafficError),
}

impl InputError {
    pub fn kind(&self) -> InputErrorKind {
        match self {
            InputError::Empty => InputErrorKind::EmptyInput,
            InputError::OutOfBounds { .. }
            | InputError::NotPositiveInteger
            | InputError::TooLarge { .. }
            | InputError::NotPositiveNumber
            | InputError::Rejected(_) => InputErrorKind::OutOfRange,
            InputError::InvalidSelection { .. }
            | InputError::NotAWholeNumber
            | InputError::NotANumber => InputErrorKind::NotANumber,
        }
    }
}

/// Outcome of a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Choice(u32),
    Cancel,
}

fn non_empty(entry: &str) -> Result<&str, InputError> {
    let trimmed = entry.trim();
    if trimmed.is_empty() {
        Err(InputError::Empty)
    } else {
        Ok(trimmed)
    }
}

/// Integer in `[min, max]`, or the case-insensitive `cancel_token`.
pub fn parse_bounded_integer(
    entry: &str,
    min: u32,
    max: u32,
    cancel_token: &str,
) -> Result<Selection, InputError> {
    let trimmed = non_empty(entry)?;
    if trimmed.eq_ignore_ascii_case(cancel_token) {
        return Ok(Selection::Cancel);
    }
    match trimmed.parse::<i64>() {
        Ok(value) if value >= i64::from(min) && value <= i64::from(max) => u32::try_from(value)
            .map(Selection::Choice)
            .map_err(|_| InputError::OutOfBounds { min, max }),
        Ok(_) => Err(InputError::OutOfBounds { min, max }),
        Err(_) => Err(InputError::InvalidSelection { min, max }),
    }
}

/// Whole number greater than zero.
pub fn parse_positive_integer(entry: &str) -> Result<u32, InputError> {
    let trimmed = non_empty(entry)?;
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| InputError::NotAWholeNumber)?;
    if value <= 0 {
        return Err(InputError::NotPositiveInteger);
    }
    u32::try_from(value).map_err(|_| InputError::TooLarge { max: u32::MAX })
}

/// Finite real number greater than zero.
pub fn parse_positive_float(entry: &str) -> Result<f64, InputError> {
    let trimmed = non_empty(entry)?;
    let value = trimmed
        .parse::<f64>()
        .map_err(|_| InputError::NotANumber)?;
    if !value.is_finite() {
        return Err(InputError::NotANumber);
    }
    if value <= 0.0 {
        return Err(InputError::NotPositiveNumber);
    }
    Ok(value)
}
