//! Configuration for the orchestrator.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use nexus_swarm::SwarmConfig;

/// Configuration for an [`Orchestrator`](crate::Orchestrator).
///
/// # Example
///
/// ```rust
/// use nexus_core::OrchestratorConfig;
/// use nexus_swarm::SwarmConfig;
///
/// let config = OrchestratorConfig::new()
///     .with_swarm(SwarmConfig::new().with_agent_count(6))
///     .with_stage_pause_ms(0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestratorConfig {
    /// Agent pool configuration.
    pub swarm: SwarmConfig,

    /// Pause inserted on the seeding and relay stages, in
    /// milliseconds. Matches the reference cadence of 500 ms; tests
    /// set it to 0.
    pub stage_pause_ms: u64,

    /// Entropy token mixed into the genesis seed. `None` uses the
    /// current Unix time in milliseconds; pinning a token makes the
    /// whole seed chain reproducible.
    pub genesis_entropy: Option<String>,
}

impl OrchestratorConfig {
    /// Creates a config with default values.
    ///
    /// Defaults:
    /// - Swarm: 4 agents, 2 rounds, 30 s generator deadline
    /// - Stage pause: 500 ms
    /// - Genesis entropy: current time
    #[must_use]
    pub fn new() -> Self {
        Self {
            swarm: SwarmConfig::new(),
            stage_pause_ms: 500,
            genesis_entropy: None,
        }
    }

    /// Sets the swarm configuration.
    #[must_use]
    pub fn with_swarm(mut self, swarm: SwarmConfig) -> Self {
        self.swarm = swarm;
        self
    }

    /// Sets the inter-stage pause in milliseconds.
    #[must_use]
    pub fn with_stage_pause_ms(mut self, ms: u64) -> Self {
        self.stage_pause_ms = ms;
        self
    }

    /// Pins the genesis entropy token.
    #[must_use]
    pub fn with_genesis_entropy(mut self, token: impl Into<String>) -> Self {
        self.genesis_entropy = Some(token.into());
        self
    }

    /// The inter-stage pause as a [`Duration`].
    pub fn stage_pause(&self) -> Duration {
        Duration::from_millis(self.stage_pause_ms)
    }
}

impl Default for OrchestratorConfig {
    fn default() -> Self {
        Self::new()
    }
}
