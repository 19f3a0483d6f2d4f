use serde::{Deserialize, Serialize};

use crate::error::TrafficError;
use crate::traffic::erlangs_offered;

/// Number of trunk lines/circuits.
pub type ChannelCount = u32;

/// Offered traffic intensity in Erlangs (always finite and `>= 0`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct ErlangLoad(f64);

impl ErlangLoad {
    /// Validates a raw Erlang value.
    pub fn new(erlangs: f64) -> Result<Self, TrafficError> {
        if erlangs.is_finite() && erlangs >= 0.0 {
            Ok(Self(erlangs))
        } else {
            Err(TrafficError::InvalidLoad(erlangs))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<ErlangLoad> for f64 {
    fn from(value: ErlangLoad) -> Self {
        value.0
    }
}

impl TryFrom<f64> for ErlangLoad {
    type Error = TrafficError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Acceptable fraction of blocked calls, strictly inside `(0, 1)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct BlockingTarget(f64);

impl BlockingTarget {
    pub fn new(fraction: f64) -> Result<Self, TrafficError> {
        if fraction > 0.0 && fraction < 1.0 {
            Ok(Self(fraction))
        } else {
            Err(TrafficError::InvalidTarget(fraction))
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<BlockingTarget> for f64 {
    fn from(value: BlockingTarget) -> Self {
        value.0
    }
}

impl TryFrom<f64> for BlockingTarget {
    type Error = TrafficError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Call-arrival statistics observed over a busy period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficSample {
    pub arrival_rate_per_minute: u32,
    pub mean_hold_time_seconds: u32,
    pub average_call_time_seconds: u32,
}

impl TrafficSample {
    /// Offered load for this sample at full precision.
    pub fn erlangs(&self) -> f64 {
        erlangs_offered(
            self.arrival_rate_per_minute,
            self.mean_hold_time_seconds,
            self.average_call_time_seconds,
        )
    }

    pub fn load(&self) -> ErlangLoad {
        // Product of u32 values over a positive constant is always finite and >= 0.
        ErlangLoad(self.erlangs())
    }
}
