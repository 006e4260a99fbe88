use thiserror::Error;

use crate::ttl::MAX_TTL_MINUTES;

/// Validation failures that stop a build request before it is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TriggerError {
    /// The requested time-to-live is above the service maximum.
    #[error("time to live of {requested} minutes exceeds the maximum of {max} minutes", max = MAX_TTL_MINUTES)]
    TimeToLiveTooHigh {
        /// The value the caller asked for.
        requested: u32,
    },

    /// The branch argument was an empty string.
    #[error("branch must not be empty")]
    EmptyBranch,

    /// The token argument was an empty string.
    #[error("CircleCI token must not be empty")]
    EmptyToken,
}
