use thiserror::Error;

/// Errors raised while building a [`Configuration`](super::Configuration).
///
/// These are construction-time guards only. Evaluation, conflict detection,
/// and priority validation never fail; a configuration that reaches them is
/// assumed structurally valid.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("duplicate condition id '{id}'")]
    DuplicateConditionId { id: String },

    #[error("allocation percentage {value} for channel '{channel}' is outside 0..=100")]
    AllocationOutOfRange { channel: String, value: f64 },

    #[error("auto-release hours must be positive, got {hours}")]
    NonPositiveAutoRelease { hours: f64 },
}
