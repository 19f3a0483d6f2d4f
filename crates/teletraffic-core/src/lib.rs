//! Telephony traffic engineering primitives.
//!
//! Includes the Erlang B evaluators, offered-load conversion, VoIP bandwidth
//! estimation with its codec/layer tables, and display formatting helpers.

pub mod bandwidth;
pub mod codec;
pub mod erlang;
pub mod error;
pub mod format;
pub mod traffic;
pub mod types;

pub use bandwidth::{estimate_bandwidth_kbps, BandwidthRequest, NetworkLayer, VlanTag};
pub use codec::{Codec, CodecProfile};
pub use erlang::{
    blocking_probability, required_channels, required_channels_bounded,
    DEFAULT_MAX_CHANNEL_SEARCH,
};
pub use error::TrafficError;
pub use traffic::erlangs_offered;
pub use types::{BlockingTarget, ChannelCount, ErlangLoad, TrafficSample};
