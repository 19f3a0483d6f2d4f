//! VoIP bandwidth estimation.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::codec::{Codec, CodecProfile};
use crate::error::TrafficError;

/// Extra bytes per frame for an 802.1Q tag.
pub const VLAN_TAG_OVERHEAD_BYTES: u32 = 4;

/// Protocol layer at which bandwidth is measured, from most to least overhead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkLayer {
    /// Layer 1: full Ethernet framing including preamble and inter-frame gap.
    #[serde(rename = "l1")]
    Physical,
    /// Layer 2: Ethernet header and trailer.
    #[serde(rename = "l2")]
    DataLink,
    Ip,
    Udp,
    Rtp,
    /// Voice payload only.
    #[serde(rename = "data")]
    Payload,
}

impl NetworkLayer {
    pub const ALL: [NetworkLayer; 6] = [
        NetworkLayer::Physical,
        NetworkLayer::DataLink,
        NetworkLayer::Ip,
        NetworkLayer::Udp,
        NetworkLayer::Rtp,
        NetworkLayer::Payload,
    ];

    /// Header bytes added to every voice packet at this layer.
    pub fn overhead_bytes(self) -> u32 {
        match self {
            NetworkLayer::Physical => 78,
            NetworkLayer::DataLink => 58,
            NetworkLayer::Ip => 40,
            NetworkLayer::Udp => 20,
            NetworkLayer::Rtp => 8,
            NetworkLayer::Payload => 0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NetworkLayer::Physical => "Network (L1) - most",
            NetworkLayer::DataLink => "Channel (L2)",
            NetworkLayer::Ip => "IP",
            NetworkLayer::Udp => "UDP",
            NetworkLayer::Rtp => "RTP",
            NetworkLayer::Payload => "Data - least",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            NetworkLayer::Physical => "l1",
            NetworkLayer::DataLink => "l2",
            NetworkLayer::Ip => "ip",
            NetworkLayer::Udp => "udp",
            NetworkLayer::Rtp => "rtp",
            NetworkLayer::Payload => "data",
        }
    }

    /// 1-based position in the layer menu.
    pub fn menu_index(self) -> u32 {
        match self {
            NetworkLayer::Physical => 1,
            NetworkLayer::DataLink => 2,
            NetworkLayer::Ip => 3,
            NetworkLayer::Udp => 4,
            NetworkLayer::Rtp => 5,
            NetworkLayer::Payload => 6,
        }
    }

    pub fn from_menu_index(index: u32) -> Result<Self, TrafficError> {
        Self::ALL
            .into_iter()
            .find(|layer| layer.menu_index() == index)
            .ok_or_else(|| TrafficError::UnknownSelection {
                kind: "network layer",
                value: index.to_string(),
            })
    }
}

impl fmt::Display for NetworkLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NetworkLayer {
    type Err = TrafficError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|layer| layer.key() == wanted)
            .ok_or_else(|| TrafficError::UnknownSelection {
                kind: "network layer",
                value: s.to_string(),
            })
    }
}

/// Whether frames carry an 802.1Q VLAN tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum VlanTag {
    Tagged,
    #[default]
    Untagged,
}

impl VlanTag {
    pub fn overhead_bytes(self) -> u32 {
        match self {
            VlanTag::Tagged => VLAN_TAG_OVERHEAD_BYTES,
            VlanTag::Untagged => 0,
        }
    }
}

impl From<bool> for VlanTag {
    fn from(tagged: bool) -> Self {
        if tagged {
            VlanTag::Tagged
        } else {
            VlanTag::Untagged
        }
    }
}

/// Estimated link bandwidth in Kbps for `concurrent_calls` voice streams.
///
/// `(payload + layer overhead + vlan overhead) * pps * calls * 8 / 1000`.
pub fn estimate_bandwidth_kbps(
    concurrent_calls: u32,
    codec: CodecProfile,
    network_layer_overhead_bytes: u32,
    vlan_overhead_bytes: u32,
) -> f64 {
    let packets_per_second_total = codec.packets_per_second * f64::from(concurrent_calls);
    let per_packet_bytes = f64::from(codec.payload_bytes)
        + f64::from(network_layer_overhead_bytes)
        + f64::from(vlan_overhead_bytes);
    let bits_per_second = per_packet_bytes * packets_per_second_total * 8.0;
    bits_per_second / 1000.0
}

/// Inputs of one bandwidth estimate expressed with the lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BandwidthRequest {
    pub concurrent_calls: u32,
    pub codec: Codec,
    pub layer: NetworkLayer,
    pub vlan: VlanTag,
}

impl BandwidthRequest {
    pub fn kbps(&self) -> f64 {
        let kbps = estimate_bandwidth_kbps(
            self.concurrent_calls,
            self.codec.profile(),
            self.layer.overhead_bytes(),
            self.vlan.overhead_bytes(),
        );
        debug!(
            calls = self.concurrent_calls,
            codec = self.codec.key(),
            layer = self.layer.key(),
            vlan = self.vlan == VlanTag::Tagged,
            kbps,
            "bandwidth estimate"
        );
        kbps
    }
}
