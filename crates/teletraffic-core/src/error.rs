use thiserror::Error;

/// Errors returned when traffic inputs violate a calculation precondition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrafficError {
    /// Offered load is negative, NaN or infinite.
    #[error("invalid offered load: {0} Erlangs")]
    InvalidLoad(f64),
    /// Blocking target outside the open interval (0, 1).
    #[error("invalid blocking target: {0} (expected a value between 0 and 1)")]
    InvalidTarget(f64),
    /// Channel search passed its iteration bound without meeting the target.
    #[error("no channel count up to {max} meets the blocking target {target}")]
    SearchExhausted { target: f64, max: u32 },
    /// Name or menu index that does not map onto a table entry.
    #[error("unknown {kind}: {value}")]
    UnknownSelection { kind: &'static str, value: String },
}
