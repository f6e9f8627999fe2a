//! Error types for external model calls.

use thiserror::Error;

/// Errors produced at the model-call boundary.
///
/// These never abort an orchestration run: the swarm converts a failed
/// generation into an in-band error fragment, and the completion
/// service converts any failure into an empty suggestion list.
#[derive(Debug, Error)]
pub enum GenError {
    /// The underlying model request failed (transport, quota, vendor).
    #[error("Generation request failed: {0}")]
    Request(String),

    /// The provider returned output the caller could not use.
    #[error("Malformed provider output: {0}")]
    Malformed(String),
}
