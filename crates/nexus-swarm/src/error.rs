//! Error types for the agent swarm.

use thiserror::Error;

/// Errors that can occur while running the agent pool.
#[derive(Debug, Error)]
pub enum SwarmError {
    /// The swarm configuration is unusable.
    #[error("Invalid swarm configuration: {0}")]
    InvalidConfig(String),

    /// A single agent's generation attempt failed. Recovered by
    /// substituting an error fragment; never aborts the round.
    #[error("Agent '{0}' failed to produce a fragment: {1}")]
    AgentFailure(String, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let err = SwarmError::InvalidConfig("agent_count must be at least 1".to_string());
        assert!(err.to_string().contains("agent_count"));
    }

    #[test]
    fn test_agent_failure_display() {
        let err = SwarmError::AgentFailure("cognito-2".to_string(), "timeout".to_string());
        assert!(err.to_string().contains("cognito-2"));
        assert!(err.to_string().contains("timeout"));
    }
}
