use std::fmt::Display;
use std::io::Write;

use serde::Serialize;
use teletraffic_core::{
    blocking_probability, required_channels_bounded, BandwidthRequest, BlockingTarget, ErlangLoad,
    TrafficSample, VlanTag,
};
use tracing::info;

use crate::cli::Commands;
use crate::config::CalculatorConfig;
use crate::error::AppError;
use crate::menu::run_interactive;
use crate::report::{
    codec_table, BandwidthReport, BlockingReport, ChannelReport, ErlangReport,
    SILENCE_SUPPRESSION_NOTE,
};

fn emit<T, W>(out: &mut W, result: &T, json: bool) -> Result<(), AppError>
where
    T: Serialize + Display,
    W: Write,
{
    if json {
        serde_json::to_writer_pretty(&mut *out, result)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{result}")?;
    }
    Ok(())
}

/// Executes one command, writing its result to `out`.
pub fn run_command<W: Write>(
    command: &Commands,
    config: &CalculatorConfig,
    json: bool,
    out: &mut W,
) -> Result<(), AppError> {
    match command {
        Commands::Menu => run_interactive(config, out),
        Commands::Erlang {
            calls_per_minute,
            hold_seconds,
            call_seconds,
        } => {
            let report = ErlangReport::from(TrafficSample {
                arrival_rate_per_minute: *calls_per_minute,
                mean_hold_time_seconds: *hold_seconds,
                average_call_time_seconds: *call_seconds,
            });
            emit(out, &report, json)
        }
        Commands::Channels { erlangs, target } => {
            let erlangs = ErlangLoad::new(*erlangs)?;
            let target = BlockingTarget::new(*target)?;
            let channels = required_channels_bounded(erlangs, target, config.max_channel_search)?;
            emit(
                out,
                &ChannelReport {
                    erlangs,
                    target,
                    channels,
                },
                json,
            )
        }
        Commands::Blocking { erlangs, channels } => {
            let erlangs = ErlangLoad::new(*erlangs)?;
            let report = BlockingReport {
                erlangs,
                channels: *channels,
                probability: blocking_probability(erlangs, *channels),
            };
            emit(out, &report, json)
        }
        Commands::Bandwidth {
            calls,
            codec,
            layer,
            vlan,
        } => {
            let report = BandwidthReport::from(BandwidthRequest {
                concurrent_calls: *calls,
                codec: *codec,
                layer: *layer,
                vlan: VlanTag::from(*vlan),
            });
            if config.show_silence_disclaimer && !json {
                writeln!(out, "{SILENCE_SUPPRESSION_NOTE}\n")?;
            }
            emit(out, &report, json)
        }
        Commands::Codecs => {
            let table = codec_table();
            if json {
                serde_json::to_writer_pretty(&mut *out, &table)?;
                writeln!(out)?;
            } else {
                for entry in &table {
                    writeln!(out, "{entry}")?;
                }
            }
            info!(codecs = table.len(), "listed codec table");
            Ok(())
        }
    }
}
