use std::path::PathBuf;

use clap::{Parser, Subcommand};
use teletraffic_core::{Codec, NetworkLayer};

use crate::input::{parse_positive_float, parse_positive_integer};

#[derive(Debug, Parser)]
#[command(name = "teletraffic", author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short)]
    pub config: Option<PathBuf>,
    /// Print results as JSON instead of sentences
    #[arg(long, global = true)]
    pub json: bool,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Run the interactive menu (default)
    Menu,
    /// Offered load in Erlangs from call statistics
    Erlang {
        /// Calls arriving per minute
        #[arg(long, value_parser = parse_positive_integer)]
        calls_per_minute: u32,
        /// Mean hold time per call in seconds
        #[arg(long, value_parser = parse_positive_integer)]
        hold_seconds: u32,
        /// Average talk time per call in seconds
        #[arg(long, value_parser = parse_positive_integer)]
        call_seconds: u32,
    },
    /// Channels needed to keep blocking below a target (Erlang B)
    Channels {
        /// Offered load in Erlangs
        #[arg(long, value_parser = parse_positive_float)]
        erlangs: f64,
        /// Acceptable blocked fraction, e.g. 0.03 for 3 in 100
        #[arg(long, value_parser = parse_positive_float)]
        target: f64,
    },
    /// Chance a call is blocked for a channel count (Erlang B)
    Blocking {
        /// Offered load in Erlangs
        #[arg(long, value_parser = parse_positive_float)]
        erlangs: f64,
        /// Trunk channels available
        #[arg(long, value_parser = parse_positive_integer)]
        channels: u32,
    },
    /// Estimated VoIP bandwidth for concurrent calls
    Bandwidth {
        /// Concurrent calls
        #[arg(long, value_parser = parse_positive_integer)]
        calls: u32,
        /// Codec key (see `codecs`)
        #[arg(long, default_value = "g711")]
        codec: Codec,
        /// Layer to measure from: l1, l2, ip, udp, rtp or data
        #[arg(long, default_value = "ip")]
        layer: NetworkLayer,
        /// Include an 802.1Q VLAN tag
        #[arg(long)]
        vlan: bool,
    },
    /// List the codec table
    Codecs,
}
