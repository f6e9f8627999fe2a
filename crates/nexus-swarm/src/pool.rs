//! Agent pool and the fan-out/join round loop.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::task::JoinSet;
use tokio::time::timeout;
use tracing::{debug, warn};

use nexus_gen::{strip_code_fences, FragmentGenerator};
use nexus_seed::seed_hash;

use crate::agent::{Agent, FragmentResult};
use crate::error::SwarmError;
use crate::prompt::{compose_prompt, peer_context};
use crate::Result;

/// Fragment substituted when the model answers with empty text.
pub const EMPTY_RESPONSE_FRAGMENT: &str = "// Model returned an empty response.";

/// Configuration for the agent pool.
///
/// # Example
///
/// ```rust
/// use nexus_swarm::SwarmConfig;
///
/// let config = SwarmConfig::new()
///     .with_agent_count(6)
///     .with_round_count(3)
///     .with_generator_deadline_ms(5_000);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwarmConfig {
    /// Number of Cognito agents spawned per run.
    pub agent_count: usize,
    /// Number of reasoning rounds per run.
    pub round_count: usize,
    /// Per-call deadline for generator requests, in milliseconds.
    /// Expiry is handled exactly like a generator failure.
    pub generator_deadline_ms: u64,
}

impl SwarmConfig {
    /// Creates a config with default values.
    ///
    /// Defaults:
    /// - Agents: 4
    /// - Rounds: 2
    /// - Generator deadline: 30,000 ms
    #[must_use]
    pub const fn new() -> Self {
        Self {
            agent_count: 4,
            round_count: 2,
            generator_deadline_ms: 30_000,
        }
    }

    /// Sets the agent count.
    #[must_use]
    pub const fn with_agent_count(mut self, count: usize) -> Self {
        self.agent_count = count;
        self
    }

    /// Sets the round count.
    #[must_use]
    pub const fn with_round_count(mut self, count: usize) -> Self {
        self.round_count = count;
        self
    }

    /// Sets the per-call generator deadline in milliseconds.
    #[must_use]
    pub const fn with_generator_deadline_ms(mut self, ms: u64) -> Self {
        self.generator_deadline_ms = ms;
        self
    }

    /// The per-call deadline as a [`Duration`].
    pub fn generator_deadline(&self) -> Duration {
        Duration::from_millis(self.generator_deadline_ms)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.agent_count == 0 {
            return Err(SwarmError::InvalidConfig(
                "agent_count must be at least 1".to_string(),
            ));
        }
        if self.round_count == 0 {
            return Err(SwarmError::InvalidConfig(
                "round_count must be at least 1".to_string(),
            ));
        }
        if self.generator_deadline_ms == 0 {
            return Err(SwarmError::InvalidConfig(
                "generator_deadline_ms must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of one agent's generator call within a round.
///
/// Failures are first-class: a rejected or timed-out call never
/// cancels the batch, it becomes a [`SwarmError::AgentFailure`] that
/// is later rendered as an in-band error fragment.
#[derive(Debug)]
pub enum AgentOutcome {
    /// The raw model text, not yet fence-stripped.
    Fragment(String),
    /// The call failed; the error is substituted into the result set.
    Failed(SwarmError),
}

impl AgentOutcome {
    /// Renders the outcome as fragment text plus a failure flag.
    ///
    /// Success: fences stripped and trimmed, with an explicit marker
    /// for empty model output. Failure: a comment-style error fragment
    /// so the result sequence stays well-formed; the flag lets the
    /// controller keep failed contributions out of consensus scoring.
    pub fn render(self) -> (String, bool) {
        match self {
            AgentOutcome::Fragment(text) => {
                let body = strip_code_fences(&text);
                if body.is_empty() {
                    (EMPTY_RESPONSE_FRAGMENT.to_string(), false)
                } else {
                    (body, false)
                }
            }
            AgentOutcome::Failed(err) => {
                warn!("substituting error fragment: {err}");
                (format!("// Error generating code: {err}"), true)
            }
        }
    }
}

/// A pool of Cognito agents sharing one genesis seed.
///
/// Created once per orchestration run. Each agent starts from
/// `seed_hash(genesis, agent_id)` and evolves its seed at the start of
/// every round with `seed_hash(seed, genesis, round)`.
pub struct AgentPool {
    genesis: String,
    agents: Vec<Agent>,
    config: SwarmConfig,
}

impl AgentPool {
    /// Creates a pool of `config.agent_count` agents from a genesis
    /// seed.
    ///
    /// # Errors
    ///
    /// Returns [`SwarmError::InvalidConfig`] when the configuration is
    /// unusable (zero agents, zero rounds, zero deadline).
    pub fn new(genesis: impl Into<String>, config: SwarmConfig) -> Result<Self> {
        config.validate()?;
        let genesis = genesis.into();

        let agents = (0..config.agent_count)
            .map(|index| {
                let id = format!("cognito-{index}");
                let seed = seed_hash(&[&genesis, &id]);
                Agent { id, seed }
            })
            .collect();

        Ok(Self {
            genesis,
            agents,
            config,
        })
    }

    /// The agents with their current seeds.
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    /// The pool configuration.
    pub fn config(&self) -> &SwarmConfig {
        &self.config
    }

    /// Runs a single round: evolves every agent's seed, composes the
    /// prompts against `prior` (results from strictly earlier rounds),
    /// dispatches all generator calls concurrently and join-waits on
    /// every one of them.
    ///
    /// The returned results are in agent order, independent of
    /// completion order.
    pub async fn run_round(
        &mut self,
        round: usize,
        prior: &[FragmentResult],
        generator: Arc<dyn FragmentGenerator>,
        request: &str,
    ) -> Vec<FragmentResult> {
        let round_token = round.to_string();
        for agent in &mut self.agents {
            agent.seed = seed_hash(&[&agent.seed, &self.genesis, &round_token]);
        }

        // Snapshot once: every agent in this round sees the same
        // strictly-earlier context.
        let context = peer_context(prior);
        let deadline = self.config.generator_deadline();

        let mut tasks = JoinSet::new();
        for (index, agent) in self.agents.iter().enumerate() {
            let prompt = compose_prompt(agent, request, &context);
            let generator = Arc::clone(&generator);
            let agent_id = agent.id.clone();

            tasks.spawn(async move {
                let outcome = match timeout(deadline, generator.generate(&prompt)).await {
                    Ok(Ok(text)) => AgentOutcome::Fragment(text),
                    Ok(Err(err)) => {
                        AgentOutcome::Failed(SwarmError::AgentFailure(agent_id, err.to_string()))
                    }
                    Err(_) => AgentOutcome::Failed(SwarmError::AgentFailure(
                        agent_id,
                        format!("deadline of {}ms exceeded", deadline.as_millis()),
                    )),
                };
                (index, outcome)
            });
        }

        let mut slots: Vec<Option<AgentOutcome>> = Vec::new();
        slots.resize_with(self.agents.len(), || None);

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, outcome)) => slots[index] = Some(outcome),
                Err(err) => warn!("agent task failed to join: {err}"),
            }
        }

        let mut results = Vec::with_capacity(self.agents.len());
        for (agent, slot) in self.agents.iter().zip(slots) {
            let outcome = slot.unwrap_or_else(|| {
                AgentOutcome::Failed(SwarmError::AgentFailure(
                    agent.id.clone(),
                    "task aborted before completion".to_string(),
                ))
            });

            let (fragment, failed) = outcome.render();
            debug!(agent = %agent.id, round, failed, "fragment collected");

            results.push(FragmentResult {
                agent_id: agent.id.clone(),
                fragment,
                seed: agent.seed.clone(),
                failed,
            });
        }

        results
    }

    /// Runs all configured rounds sequentially and returns the flat
    /// result sequence (round order, agent order within round).
    pub async fn run_rounds(
        &mut self,
        generator: Arc<dyn FragmentGenerator>,
        request: &str,
    ) -> Vec<FragmentResult> {
        let mut results = Vec::with_capacity(self.config.agent_count * self.config.round_count);

        for round in 0..self.config.round_count {
            let round_results = self
                .run_round(round, &results, Arc::clone(&generator), request)
                .await;
            results.extend(round_results);
        }

        results
    }
}
