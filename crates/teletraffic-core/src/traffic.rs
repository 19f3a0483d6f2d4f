use tracing::debug;

/// Converts a per-minute arrival rate and per-call duration into Erlangs.
///
/// Duration is hold time plus talk time; the result is hourly traffic
/// intensity at full precision.
pub fn erlangs_offered(
    arrival_rate_per_minute: u32,
    mean_hold_time_seconds: u32,
    average_call_time_seconds: u32,
) -> f64 {
    let total_time_minutes =
        (f64::from(mean_hold_time_seconds) + f64::from(average_call_time_seconds)) / 60.0;
    let erlangs = (f64::from(arrival_rate_per_minute) * total_time_minutes) / 60.0;
    debug!(
        arrival_rate_per_minute,
        mean_hold_time_seconds, average_call_time_seconds, erlangs, "offered load"
    );
    erlangs
}
