//! Error types for the orchestration core.

use thiserror::Error;

/// Core error type for orchestration operations.
///
/// Most failure modes in the pipeline degrade in-band (error
/// fragments, empty suggestion lists, swallowed notifications); the
/// variants here cover the failures that genuinely prevent a run from
/// starting or that notifier implementations report.
#[derive(Debug, Error)]
pub enum NexusError {
    /// Swarm error passthrough (invalid pool configuration).
    #[error("Swarm error: {0}")]
    Swarm(#[from] nexus_swarm::SwarmError),

    /// A handoff notification failed. Reported by notifier
    /// implementations; the controller logs and swallows it.
    #[error("Handoff notification failed: {0}")]
    Notifier(String),
}
