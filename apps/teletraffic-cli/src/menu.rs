//! Interactive menu loop.

use std::io::Write;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use teletraffic_core::{
    blocking_probability, required_channels_bounded, BandwidthRequest, BlockingTarget, Codec,
    ErlangLoad, NetworkLayer, TrafficSample, VlanTag,
};
use tracing::{debug, warn};

use crate::config::CalculatorConfig;
use crate::console::ConsoleLines;
use crate::error::AppError;
use crate::input::parse_positive_float;
use crate::interrupt;
use crate::prompt::{LineSource, PromptError, Prompter};
use crate::report::{
    BandwidthReport, BlockingReport, ChannelReport, ErlangReport, SILENCE_SUPPRESSION_NOTE,
};

const MAIN_MENU: &str = "\
Traffic Calculations

1: Erlang - calculate load of traffic
2: Erlang B - calculate number of channels
3: Erlang B Blocking Probability - calculate chance to block calls
4: Network Bandwidth - calculate bandwidth for given codec and call count

";

const VLAN_PROMPT: &str = "\
802.1Q
1: Yes
2: No

Do you want to include in calculation: ";

/// Calculator picked from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calculator {
    Erlang,
    Channels,
    Blocking,
    Bandwidth,
}

impl Calculator {
    pub fn from_menu_index(index: u32) -> Option<Self> {
        match index {
            1 => Some(Calculator::Erlang),
            2 => Some(Calculator::Channels),
            3 => Some(Calculator::Blocking),
            4 => Some(Calculator::Bandwidth),
            _ => None,
        }
    }
}

fn codec_prompt() -> String {
    let mut prompt = String::from("Codec Selection\n\n");
    for codec in Codec::ALL {
        prompt.push_str(&format!("{}: {}\n", codec.menu_index(), codec.profile().label));
    }
    prompt.push_str("\nWhich Codec would you like to use: ");
    prompt
}

fn layer_prompt() -> String {
    let mut prompt = String::from("Network Layers\n\n");
    for layer in NetworkLayer::ALL {
        prompt.push_str(&format!("{}: {}\n", layer.menu_index(), layer.label()));
    }
    prompt.push_str("\nWhat layer of Network do you want to calculate from: ");
    prompt
}

/// Runs the menu on the process console until the user quits.
pub fn run_interactive<W: Write>(config: &CalculatorConfig, output: W) -> Result<(), AppError> {
    let interrupted = match interrupt::install() {
        Ok(flag) => flag,
        Err(err) => {
            warn!("interrupt handler unavailable: {err}");
            Arc::new(AtomicBool::new(false))
        }
    };
    let prompter = Prompter::new(ConsoleLines::spawn()?, output, interrupted);
    Shell::new(prompter, config).run()?;
    Ok(())
}

/// Menu loop dispatching to the four calculators.
pub struct Shell<'a, R, W> {
    prompter: Prompter<R, W>,
    config: &'a CalculatorConfig,
}

impl<'a, R: LineSource, W: Write> Shell<'a, R, W> {
    pub fn new(prompter: Prompter<R, W>, config: &'a CalculatorConfig) -> Self {
        let prompter = prompter.with_cancel_token(config.cancel_token.clone());
        Self { prompter, config }
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    /// Loops until the cancel token is entered at the main menu or input ends.
    pub fn run(&mut self) -> Result<(), PromptError> {
        loop {
            writeln!(
                self.prompter.output(),
                "{MAIN_MENU}\nPress {} to return to main menu",
                self.config.cancel_token
            )?;
            let choice = match self.prompter.bounded_integer("\nEnter a number: ", 1, 4) {
                Ok(choice) => choice,
                Err(PromptError::Cancelled | PromptError::EndOfInput) => return Ok(()),
                Err(err) => return Err(err),
            };
            let Some(calculator) = Calculator::from_menu_index(choice) else {
                continue;
            };
            debug!(?calculator, "menu selection");

            match self.dispatch(calculator) {
                Ok(()) => {}
                Err(PromptError::Cancelled) => {
                    writeln!(self.prompter.output(), "\nReturning to menu.\n")?;
                }
                Err(PromptError::EndOfInput) => return Ok(()),
                Err(err) => return Err(err),
            }
        }
    }

    fn dispatch(&mut self, calculator: Calculator) -> Result<(), PromptError> {
        match calculator {
            Calculator::Erlang => self.erlang(),
            Calculator::Channels => self.channels(),
            Calculator::Blocking => self.blocking(),
            Calculator::Bandwidth => self.bandwidth(),
        }
    }

    fn show(&mut self, result: &dyn std::fmt::Display) -> Result<(), PromptError> {
        writeln!(self.prompter.output(), "\n\n{result}\n\n")?;
        Ok(())
    }

    fn erlang(&mut self) -> Result<(), PromptError> {
        let arrival_rate_per_minute = self
            .prompter
            .positive_integer("Enter the number of calls per minute: ")?;
        let mean_hold_time_seconds = self
            .prompter
            .positive_integer("Enter the Mean Hold Time in seconds: ")?;
        let average_call_time_seconds = self
            .prompter
            .positive_integer("Enter the Average Call Time in seconds: ")?;

        let report = ErlangReport::from(TrafficSample {
            arrival_rate_per_minute,
            mean_hold_time_seconds,
            average_call_time_seconds,
        });
        self.show(&report)
    }

    fn erlang_load(&mut self, prompt: &str) -> Result<ErlangLoad, PromptError> {
        self.prompter
            .prompt_with(prompt, |entry| Ok(ErlangLoad::new(parse_positive_float(entry)?)?))
    }

    fn channels(&mut self) -> Result<(), PromptError> {
        let erlangs = self.erlang_load("Enter amount of Erlang per hour: ")?;
        let target = self.prompter.prompt_with(
            "Enter the block level. Example .03 is 3 calls out of 100: ",
            |entry| Ok(BlockingTarget::new(parse_positive_float(entry)?)?),
        )?;

        match required_channels_bounded(erlangs, target, self.config.max_channel_search) {
            Ok(channels) => self.show(&ChannelReport {
                erlangs,
                target,
                channels,
            }),
            Err(err) => self.show(&err),
        }
    }

    fn blocking(&mut self) -> Result<(), PromptError> {
        let erlangs = self.erlang_load("Enter the Erlangs per hour: ")?;
        let channels = self.prompter.positive_integer("Number of channels: ")?;

        self.show(&BlockingReport {
            erlangs,
            channels,
            probability: blocking_probability(erlangs, channels),
        })
    }

    fn bandwidth(&mut self) -> Result<(), PromptError> {
        let concurrent_calls = self
            .prompter
            .positive_integer("Enter number of concurrent calls: ")?;
        let codec = self
            .prompter
            .select(&codec_prompt(), 1, 8, Codec::from_menu_index)?;
        let layer = self
            .prompter
            .select(&layer_prompt(), 1, 6, NetworkLayer::from_menu_index)?;
        let vlan = self
            .prompter
            .select(VLAN_PROMPT, 1, 2, |index| Ok(VlanTag::from(index == 1)))?;

        let report = BandwidthReport::from(BandwidthRequest {
            concurrent_calls,
            codec,
            layer,
            vlan,
        });
        if self.config.show_silence_disclaimer {
            writeln!(self.prompter.output(), "{SILENCE_SUPPRESSION_NOTE}")?;
        }
        self.show(&report)
    }
}

#[cfg(test)]
mod tests {
    use super::{codec_prompt, layer_prompt, Calculator};

    #[test]
    fn menu_indices_map_to_calculators() {
        assert_eq!(Calculator::from_menu_index(1), Some(Calculator::Erlang));
        assert_eq!(Calculator::from_menu_index(4), Some(Calculator::Bandwidth));
        assert_eq!(Calculator::from_menu_index(0), None);
        assert_eq!(Calculator::from_menu_index(5), None);
    }

    #[test]
    fn table_prompts_list_every_entry() {
        let codecs = codec_prompt();
        assert!(codecs.contains("1: G.711 (20ms)"));
        assert!(codecs.contains("8: G.722 (20ms)"));
        let layers = layer_prompt();
        assert!(layers.contains("1: Network (L1) - most"));
        assert!(layers.contains("6: Data - least"));
    }
}
