//! Error types for transition configuration.

use thiserror::Error;

/// Errors raised when a transition sequence is started with bad timings.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TransitionError {
    /// A phase duration was below zero.
    #[error("{phase} duration must not be negative, got {value}")]
    NegativeDuration { phase: &'static str, value: f32 },

    /// A phase duration was NaN or infinite.
    #[error("{phase} duration must be finite, got {value}")]
    NonFiniteDuration { phase: &'static str, value: f32 },
}
