//! Crate-wide error type.
//!
//! Physics operations are total and never fail; errors only come from
//! building a scenario (bad parameters, allocation, placement) or from
//! loading a scenario file.

use thiserror::Error;

/// Crate-wide result type alias.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Invalid configuration or body parameter.
    #[error("invalid parameter: {0}")]
    InvalidParam(String),

    /// The body store could not be allocated.
    #[error("failed to allocate storage for {count} bodies")]
    Allocation { count: usize },

    /// Rejection sampling hit the configured retry cap.
    #[error("failed to place body {index} without overlap after {attempts} attempts; use fewer bodies, a smaller radius or a larger arena")]
    PlacementFailed { index: usize, attempts: u64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placement_message_names_body_and_attempts() {
        let e = Error::PlacementFailed { index: 7, attempts: 1000 };
        let msg = e.to_string();
        assert!(msg.contains("body 7"));
        assert!(msg.contains("1000 attempts"));
    }

    #[test]
    fn invalid_param_message() {
        let e = Error::InvalidParam("radius must be > 0".to_string());
        assert!(e.to_string().starts_with("invalid parameter"));
    }
}
