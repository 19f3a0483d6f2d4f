//! Erlang B evaluators.
//!
//! Two recurrences over the same blocking function: [`blocking_probability`]
//! walks the inverse-blocking accumulator directly, while
//! [`required_channels`] grows an unnormalized term and its running sum
//! until the blocking fraction drops below the target.

use tracing::{debug, warn};

use crate::error::TrafficError;
use crate::types::{BlockingTarget, ChannelCount, ErlangLoad};

/// Default iteration bound for the channel search.
pub const DEFAULT_MAX_CHANNEL_SEARCH: ChannelCount = 100_000;

/// Accumulators above this are rescaled by [`RESCALE_FACTOR`] (a power of two,
/// so the blocking ratio is unchanged bit for bit).
const RESCALE_THRESHOLD: f64 = 1e250;
const RESCALE_FACTOR: f64 = 1.0 / 9_007_199_254_740_992.0 / 9_007_199_254_740_992.0;

/// Blocking probability for `channels` trunks offered `load` Erlangs.
///
/// Computes `b_n = 1 + n * b_(n-1) / load` from `b_0 = 1` and returns
/// `1 / b_channels`. Zero channels always block; zero load never blocks.
pub fn blocking_probability(load: ErlangLoad, channels: ChannelCount) -> f64 {
    if channels == 0 {
        return 1.0;
    }
    let erlangs = load.value();
    if erlangs == 0.0 {
        return 0.0;
    }

    let mut inverse = 1.0_f64;
    for count in 1..=channels {
        inverse = 1.0 + (f64::from(count) * inverse) / erlangs;
        // Past f64 range the probability is below resolution and stays there.
        if inverse.is_infinite() {
            break;
        }
    }
    let probability = 1.0 / inverse;
    debug!(erlangs, channels, probability, "erlang b blocking probability");
    probability
}

/// Smallest channel count whose blocking fraction is below `target`.
///
/// Searches at most [`DEFAULT_MAX_CHANNEL_SEARCH`] channels.
pub fn required_channels(
    load: ErlangLoad,
    target: BlockingTarget,
) -> Result<ChannelCount, TrafficError> {
    required_channels_bounded(load, target, DEFAULT_MAX_CHANNEL_SEARCH)
}

/// Same as [`required_channels`] with an explicit search bound.
///
/// At channel index `n` the step term is `load / n * d_(n-1)`; the candidate
/// blocking fraction is `step / (e_(n-1) + step)`, after which `e_n = e_(n-1) +
/// step` and `d_n = step`, starting from `d_0 = e_0 = 1`.
pub fn required_channels_bounded(
    load: ErlangLoad,
    target: BlockingTarget,
    max_channels: ChannelCount,
) -> Result<ChannelCount, TrafficError> {
    let erlangs = load.value();
    let goal = target.value();

    let mut previous_d = 1.0_f64;
    let mut previous_e = 1.0_f64;
    for channel in 1..=max_channels {
        let step = (erlangs / f64::from(channel)) * previous_d;
        let candidate = step / (previous_e + step);
        previous_e += step;
        previous_d = step;
        if candidate < goal {
            debug!(erlangs, target = goal, channels = channel, "erlang b channel sizing");
            return Ok(channel);
        }
        if previous_e > RESCALE_THRESHOLD {
            previous_e *= RESCALE_FACTOR;
            previous_d *= RESCALE_FACTOR;
        }
    }

    warn!(
        erlangs,
        target = goal,
        max_channels,
        "channel search exhausted without meeting target"
    );
    Err(TrafficError::SearchExhausted {
        target: goal,
        max: max_channels,
    })
}
