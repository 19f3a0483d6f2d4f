//! Result records shared by the interactive menu and one-shot commands.
//!
//! `Display` renders the sentence shown on the console; `Serialize` backs
//! `--json` output.

use std::fmt;

use serde::Serialize;
use teletraffic_core::format::{format_erlangs, format_kbps, format_percentage};
use teletraffic_core::{
    BandwidthRequest, BlockingTarget, ChannelCount, Codec, CodecProfile, ErlangLoad, TrafficSample,
};

pub const SILENCE_SUPPRESSION_NOTE: &str = "\
Because Silence Suppression (or Voice Activity Detection) can vary widely in
bandwidth reduction, it was not taken into consideration. For purposes of
planning and design, Silence Suppression should never be used for circuits
less than 24 concurrent calls. Also keep in mind things like music on hold
render it useless as well.";

#[derive(Debug, Clone, Serialize)]
pub struct ErlangReport {
    #[serde(flatten)]
    pub sample: TrafficSample,
    pub erlangs: f64,
}

impl From<TrafficSample> for ErlangReport {
    fn from(sample: TrafficSample) -> Self {
        Self {
            erlangs: sample.erlangs(),
            sample,
        }
    }
}

impl fmt::Display for ErlangReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total traffic Erlangs offered in an hour is {}",
            format_erlangs(self.erlangs)
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChannelReport {
    pub erlangs: ErlangLoad,
    pub target: BlockingTarget,
    pub channels: ChannelCount,
}

impl fmt::Display for ChannelReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You would require {} channels.", self.channels)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BlockingReport {
    pub erlangs: ErlangLoad,
    pub channels: ChannelCount,
    pub probability: f64,
}

impl fmt::Display for BlockingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "There would be a {} chance to block calls.",
            format_percentage(self.probability)
        )
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BandwidthReport {
    #[serde(flatten)]
    pub request: BandwidthRequest,
    pub kbps: f64,
}

impl From<BandwidthRequest> for BandwidthReport {
    fn from(request: BandwidthRequest) -> Self {
        Self {
            kbps: request.kbps(),
            request,
        }
    }
}

impl fmt::Display for BandwidthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "It will require approximately {} Kbps.",
            format_kbps(self.kbps)
        )
    }
}

/// One row of the codec listing.
#[derive(Debug, Clone, Serialize)]
pub struct CodecEntry {
    pub index: u32,
    pub codec: Codec,
    #[serde(flatten)]
    pub profile: CodecProfile,
}

pub fn codec_table() -> Vec<CodecEntry> {
    Codec::ALL
        .into_iter()
        .map(|codec| CodecEntry {
            index: codec.menu_index(),
            codec,
            profile: codec.profile(),
        })
        .collect()
}

impl fmt::Display for CodecEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:<8} {:<26} {:>7.3} pps {:>4} bytes",
            self.index,
            self.codec.key(),
            self.profile.label,
            self.profile.packets_per_second,
            self.profile.payload_bytes
        )
    }
}
