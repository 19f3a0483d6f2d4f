//! Voice codec packetization table.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TrafficError;

/// Packetization parameters for one codec.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CodecProfile {
    /// Human-readable name as shown in the codec menu.
    pub label: &'static str,
    /// Voice packets emitted per second per call.
    pub packets_per_second: f64,
    /// Voice payload carried in each packet.
    pub payload_bytes: u32,
    /// Audio duration carried by one packet.
    pub packetization_ms: u32,
}

/// Supported voice codecs, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Codec {
    #[serde(rename = "g711")]
    G711,
    #[serde(rename = "g723-53")]
    G723_1Rate53,
    #[serde(rename = "g723-63")]
    G723_1Rate63,
    #[serde(rename = "g726-24")]
    G726Rate24,
    #[serde(rename = "g726-32")]
    G726Rate32,
    #[serde(rename = "g728")]
    G728,
    #[serde(rename = "g729")]
    G729,
    #[serde(rename = "g722")]
    G722,
}

pub const G711: CodecProfile = CodecProfile {
    label: "G.711 (20ms)",
    packets_per_second: 50.0,
    payload_bytes: 160,
    packetization_ms: 20,
};

pub const G723_1_RATE_53: CodecProfile = CodecProfile {
    label: "G.723.1 (5.3 Kbps) (30ms)",
    packets_per_second: 33.333,
    payload_bytes: 20,
    packetization_ms: 30,
};

pub const G723_1_RATE_63: CodecProfile = CodecProfile {
    label: "G.723.1 (6.3 Kbps) (30ms)",
    packets_per_second: 33.333,
    payload_bytes: 24,
    packetization_ms: 30,
};

pub const G726_RATE_24: CodecProfile = CodecProfile {
    label: "G.726 (24 Kbps) (20ms)",
    packets_per_second: 50.0,
    payload_bytes: 60,
    packetization_ms: 20,
};

pub const G726_RATE_32: CodecProfile = CodecProfile {
    label: "G.726 (32 Kbps) (20ms)",
    packets_per_second: 50.0,
    payload_bytes: 80,
    packetization_ms: 20,
};

pub const G728: CodecProfile = CodecProfile {
    label: "G.728 (30ms)",
    packets_per_second: 33.333,
    payload_bytes: 60,
    packetization_ms: 30,
};

pub const G729: CodecProfile = CodecProfile {
    label: "G.729 (20ms)",
    packets_per_second: 50.0,
    payload_bytes: 20,
    packetization_ms: 20,
};

pub const G722: CodecProfile = CodecProfile {
    label: "G.722 (20ms)",
    packets_per_second: 50.0,
    payload_bytes: 160,
    packetization_ms: 20,
};

impl Codec {
    pub const ALL: [Codec; 8] = [
        Codec::G711,
        Codec::G723_1Rate53,
        Codec::G723_1Rate63,
        Codec::G726Rate24,
        Codec::G726Rate32,
        Codec::G728,
        Codec::G729,
        Codec::G722,
    ];

    pub fn profile(self) -> CodecProfile {
        match self {
            Codec::G711 => G711,
            Codec::G723_1Rate53 => G723_1_RATE_53,
            Codec::G723_1Rate63 => G723_1_RATE_63,
            Codec::G726Rate24 => G726_RATE_24,
            Codec::G726Rate32 => G726_RATE_32,
            Codec::G728 => G728,
            Codec::G729 => G729,
            Codec::G722 => G722,
        }
    }

    /// Short name accepted on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Codec::G711 => "g711",
            Codec::G723_1Rate53 => "g723-53",
            Codec::G723_1Rate63 => "g723-63",
            Codec::G726Rate24 => "g726-24",
            Codec::G726Rate32 => "g726-32",
            Codec::G728 => "g728",
            Codec::G729 => "g729",
            Codec::G722 => "g722",
        }
    }

    /// 1-based position in the codec menu.
    pub fn menu_index(self) -> u32 {
        match self {
            Codec::G711 => 1,
            Codec::G723_1Rate53 => 2,
            Codec::G723_1Rate63 => 3,
            Codec::G726Rate24 => 4,
            Codec::G726Rate32 => 5,
            Codec::G728 => 6,
            Codec::G729 => 7,
            Codec::G722 => 8,
        }
    }

    pub fn from_menu_index(index: u32) -> Result<Self, TrafficError> {
        Self::ALL
            .into_iter()
            .find(|codec| codec.menu_index() == index)
            .ok_or_else(|| TrafficError::UnknownSelection {
                kind: "codec",
                value: index.to_string(),
            })
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile().label)
    }
}

impl FromStr for Codec {
    type Err = TrafficError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace(['.', '_'], "");
        Self::ALL
            .into_iter()
            .find(|codec| codec.key().replace('-', "") == wanted.replace('-', ""))
            .ok_or_else(|| TrafficError::UnknownSelection {
                kind: "codec",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::Codec;

    #[test]
    fn menu_indices_cover_one_through_eight() {
        for (position, codec) in Codec::ALL.into_iter().enumerate() {
            assert_eq!(codec.menu_index() as usize, position + 1);
            assert_eq!(Codec::from_menu_index(codec.menu_index()), Ok(codec));
        }
        assert!(Codec::from_menu_index(0).is_err());
        assert!(Codec::from_menu_index(9).is_err());
    }

    #[test]
    fn g711_profile() {
        let profile = Codec::G711.profile();
        assert_eq!(profile.payload_bytes, 160);
        assert_eq!(profile.packets_per_second, 50.0);
    }

    #[test]
    fn thirty_ms_codecs_send_a_third_fewer_packets() {
        for codec in [Codec::G723_1Rate53, Codec::G723_1Rate63, Codec::G728] {
            let profile = codec.profile();
            assert_eq!(profile.packetization_ms, 30);
            assert_eq!(profile.packets_per_second, 33.333);
        }
    }

    #[test]
    fn parses_keys_and_loose_spellings() {
        assert_eq!("g711".parse::<Codec>(), Ok(Codec::G711));
        assert_eq!("G.711".parse::<Codec>(), Ok(Codec::G711));
        assert_eq!("g723-53".parse::<Codec>(), Ok(Codec::G723_1Rate53));
        assert_eq!("G726_32".parse::<Codec>(), Ok(Codec::G726Rate32));
        assert!("opus".parse::<Codec>().is_err());
    }
}
