//! Retry-until-valid console prompts.

use std::io::{self, BufRead, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use teletraffic_core::TrafficError;
use thiserror::Error;
use tracing::debug;

use crate::input::{
    parse_bounded_integer, parse_positive_float, parse_positive_integer, InputError, Selection,
};

/// Default token that backs out of a menu.
pub const DEFAULT_CANCEL_TOKEN: &str = "Q";

/// Reasons a prompt stops without producing a value.
#[derive(Debug, Error)]
pub enum PromptError {
    /// The user entered the cancel token at a menu.
    #[error("input cancelled")]
    Cancelled,
    /// Input stream closed.
    #[error("end of input")]
    EndOfInput,
    #[error("console I/O failed: {0}")]
    Io(#[from] io::Error),
}

/// What a [`LineSource`] produced while the prompter waited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEvent {
    /// Raw bytes of one entry, line terminator included.
    Line(Vec<u8>),
    /// The interrupt flag was raised before an entry arrived.
    Interrupted,
    Closed,
}

/// Source of console entries that can observe the interrupt flag.
pub trait LineSource {
    /// Waits for the next entry. Implementations clear `interrupted` when
    /// they report [`LineEvent::Interrupted`].
    fn next_line(&mut self, interrupted: &AtomicBool) -> io::Result<LineEvent>;
}

/// Buffered readers only check the flag before blocking; a line that was
/// read is always returned.
impl<R: BufRead> LineSource for R {
    fn next_line(&mut self, interrupted: &AtomicBool) -> io::Result<LineEvent> {
        if interrupted.swap(false, Ordering::SeqCst) {
            return Ok(LineEvent::Interrupted);
        }
        let mut line = Vec::new();
        if self.read_until(b'\n', &mut line)? == 0 {
            return Ok(LineEvent::Closed);
        }
        Ok(LineEvent::Line(line))
    }
}

/// Reads entries from `input`, writing prompts and rejection messages to `output`.
///
/// An interrupt while waiting for an entry re-displays the prompt. Bytes that
/// are not UTF-8 are decoded lossily and then rejected by the validators.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    interrupted: Arc<AtomicBool>,
    cancel_token: String,
}

impl<R: LineSource, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W, interrupted: Arc<AtomicBool>) -> Self {
        Self {
            input,
            output,
            interrupted,
            cancel_token: DEFAULT_CANCEL_TOKEN.to_string(),
        }
    }

    pub fn with_cancel_token(mut self, token: impl Into<String>) -> Self {
        self.cancel_token = token.into();
        self
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn read_entry(&mut self, prompt: &str) -> Result<String, PromptError> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            match self.input.next_line(&self.interrupted)? {
                LineEvent::Line(bytes) => {
                    let line = String::from_utf8_lossy(&bytes);
                    return Ok(line.trim_end_matches(['\r', '\n']).to_string());
                }
                LineEvent::Interrupted => {
                    debug!("interrupt received, prompting again");
                    writeln!(self.output)?;
                }
                LineEvent::Closed => return Err(PromptError::EndOfInput),
            }
        }
    }

    /// Prompts until `parse` accepts an entry.
    pub fn prompt_with<T, F>(&mut self, prompt: &str, mut parse: F) -> Result<T, PromptError>
    where
        F: FnMut(&str) -> Result<T, InputError>,
    {
        loop {
            let entry = self.read_entry(prompt)?;
            match parse(&entry) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    debug!(kind = ?err.kind(), entry = %entry, "rejected entry");
                    writeln!(self.output, "{err}")?;
                }
            }
        }
    }

    /// Menu entry in `[min, max]` mapped through `select`; the cancel token
    /// yields [`PromptError::Cancelled`].
    pub fn select<T, F>(
        &mut self,
        prompt: &str,
        min: u32,
        max: u32,
        select: F,
    ) -> Result<T, PromptError>
    where
        F: Fn(u32) -> Result<T, TrafficError>,
    {
        let token = self.cancel_token.clone();
        let picked = self.prompt_with(prompt, |entry| {
            match parse_bounded_integer(entry, min, max, &token)? {
                Selection::Choice(index) => Ok(Some(select(index)?)),
                Selection::Cancel => Ok(None),
            }
        })?;
        picked.ok_or(PromptError::Cancelled)
    }

    pub fn bounded_integer(
        &mut self,
        prompt: &str,
        min: u32,
        max: u32,
    ) -> Result<u32, PromptError> {
        self.select(prompt, min, max, Ok)
    }

    pub fn positive_integer(&mut self, prompt: &str) -> Result<u32, PromptError> {
        self.prompt_with(prompt, parse_positive_integer)
    }

    pub fn positive_float(&mut self, prompt: &str) -> Result<f64, PromptError> {
        self.prompt_with(prompt, parse_positive_float)
    }
}
