//! The orchestration facade.
//!
//! [`Orchestrator`] drives the five-stage pipeline. The state machine
//! advances in strict forward order - `Nexus → Cognito → Relay →
//! Sentinel → Echo` - with no skips and no backward transitions. Each
//! transition sets the stage's status and loading flag, awaits the
//! handoff notification, performs the stage's work and marks the stage
//! complete before the next transition.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::sync::watch;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use nexus_consensus::ConsensusEngine;
use nexus_gen::FragmentGenerator;
use nexus_swarm::AgentPool;
use nexus_seed::seed_hash;

use crate::config::OrchestratorConfig;
use crate::notify::{HandoffNotifier, NoopNotifier};
use crate::state::{HandoffSource, OrchestrationState, StageId, NO_CONSENSUS_FALLBACK};
use crate::Result;

/// Drives orchestration runs and owns the observable state.
///
/// One orchestrator serves many sequential runs; each run starts from
/// a fresh [`OrchestrationState`]. The orchestrator is the sole writer
/// of that state - observers consume snapshots via [`subscribe`].
///
/// # Example
///
/// ```rust,ignore
/// let mut orchestrator = Orchestrator::new(config, generator)
///     .with_notifier(Arc::new(PacketAnimator::new()));
///
/// let state = orchestrator.run("write a fizzbuzz").await?;
/// assert!(state.final_code.is_some());
/// ```
///
/// [`subscribe`]: Orchestrator::subscribe
pub struct Orchestrator {
    /// Configuration.
    config: OrchestratorConfig,

    /// The code-generation collaborator, invoked once per agent per
    /// round.
    generator: Arc<dyn FragmentGenerator>,

    /// Stage handoff hook; best-effort.
    notifier: Arc<dyn HandoffNotifier>,

    /// Candidate scoring engine.
    engine: ConsensusEngine,

    /// Current run state; republished as a snapshot on every change.
    state: OrchestrationState,

    /// Snapshot channel for observers.
    watch_tx: watch::Sender<OrchestrationState>,
}

impl Orchestrator {
    /// Creates an orchestrator with no handoff notifier attached.
    pub fn new(config: OrchestratorConfig, generator: Arc<dyn FragmentGenerator>) -> Self {
        let state = OrchestrationState::new();
        let (watch_tx, _) = watch::channel(state.clone());

        Self {
            config,
            generator,
            notifier: Arc::new(NoopNotifier),
            engine: ConsensusEngine::new(),
            state,
            watch_tx,
        }
    }

    /// Attaches a handoff notifier.
    #[must_use]
    pub fn with_notifier(mut self, notifier: Arc<dyn HandoffNotifier>) -> Self {
        self.notifier = notifier;
        self
    }

    /// The current state record.
    pub fn state(&self) -> &OrchestrationState {
        &self.state
    }

    /// Subscribes to state snapshots. Every stage transition publishes
    /// one complete snapshot.
    pub fn subscribe(&self) -> watch::Receiver<OrchestrationState> {
        self.watch_tx.subscribe()
    }

    /// Clears the visibility flag. This is the only way it is cleared;
    /// `run` never resets it.
    pub fn dismiss(&mut self) {
        self.state.is_visible = false;
        self.publish();
    }

    /// Runs one full orchestration for the given request.
    ///
    /// Resets all stage statuses and candidate data synchronously
    /// before the first stage begins, then drives the pipeline to the
    /// terminal report. Returns the terminal state.
    ///
    /// # Errors
    ///
    /// Returns [`NexusError::Swarm`](crate::NexusError::Swarm) when the
    /// configured pool cannot be created. Generator and notifier
    /// failures never surface here - they degrade in-band.
    pub async fn run(&mut self, request: &str) -> Result<OrchestrationState> {
        // Full reset before the first stage; a new run must never
        // inherit stage statuses or candidates from the previous one.
        self.state = OrchestrationState::new();
        self.state.is_visible = true;
        self.state.is_loading = true;
        self.publish();

        // Nexus: derive the genesis seed and spawn the agent pool.
        self.set_stage(StageId::Nexus, "Generating genesis seed...", true);
        self.handoff(HandoffSource::External, StageId::Nexus).await;

        let genesis_entropy = match &self.config.genesis_entropy {
            Some(token) => token.clone(),
            None => unix_millis().to_string(),
        };
        let genesis = seed_hash(&["genesis", &genesis_entropy]);
        let mut pool = AgentPool::new(genesis, self.config.swarm.clone())?;
        info!(agents = pool.agents().len(), "agent pool seeded");

        self.set_stage(StageId::Nexus, "Orchestrating agents...", true);
        self.pause().await;
        self.set_stage(StageId::Nexus, "Agent pool ready.", false);

        // Cognito: reasoning rounds, fan-out/join per round.
        self.set_stage(StageId::Cognito, "Fractal reasoning in progress...", true);
        self.handoff(HandoffSource::Stage(StageId::Nexus), StageId::Cognito)
            .await;

        let rounds = self.config.swarm.round_count;
        let mut results = Vec::new();
        for round in 0..rounds {
            let status = format!("Reasoning round {}/{}...", round + 1, rounds);
            self.set_stage(StageId::Cognito, &status, true);

            let round_results = pool
                .run_round(round, &results, Arc::clone(&self.generator), request)
                .await;
            results.extend(round_results);
        }
        self.set_stage(StageId::Cognito, "Reasoning complete.", false);

        // Relay: forward the accumulated fragments.
        self.set_stage(StageId::Relay, "Transmitting fragments...", true);
        self.handoff(HandoffSource::Stage(StageId::Cognito), StageId::Relay)
            .await;
        self.pause().await;
        self.set_stage(StageId::Relay, "Transmission complete.", false);

        // Sentinel: consensus scoring over the successful fragments.
        self.set_stage(StageId::Sentinel, "Analyzing consensus and entropy...", true);
        self.handoff(HandoffSource::Stage(StageId::Relay), StageId::Sentinel)
            .await;

        let scorable: Vec<_> = results.iter().filter(|r| !r.failed).cloned().collect();
        debug!(
            total = results.len(),
            scorable = scorable.len(),
            "scoring fragments"
        );
        let ranked = self.engine.rank(&scorable);
        self.set_stage(StageId::Sentinel, "Consensus reached.", false);

        // Echo: publish the final report as one snapshot.
        self.set_stage(StageId::Echo, "Generating final report...", true);
        self.handoff(HandoffSource::Stage(StageId::Sentinel), StageId::Echo)
            .await;

        let best = ranked.first();
        self.state.final_code = Some(
            best.map(|c| c.text.clone())
                .unwrap_or_else(|| NO_CONSENSUS_FALLBACK.to_string()),
        );
        self.state.consensus_score = best.map(|c| c.score).unwrap_or(0.0);
        self.state.candidates = ranked;
        self.state.is_loading = false;
        self.state.stages.nexus.status = "Orchestration complete.".to_string();
        self.state.stages.echo.status = "Report generated.".to_string();
        self.state.stages.echo.is_loading = false;
        self.publish();

        info!(
            score = self.state.consensus_score,
            candidates = self.state.candidates.len(),
            "orchestration complete"
        );

        Ok(self.state.clone())
    }

    /// Updates one stage and publishes the snapshot.
    fn set_stage(&mut self, id: StageId, status: &str, loading: bool) {
        let stage = self.state.stages.stage_mut(id);
        stage.status = status.to_string();
        stage.is_loading = loading;
        self.publish();
    }

    /// Publishes the current state as one atomic snapshot.
    fn publish(&self) {
        self.watch_tx.send_replace(self.state.clone());
    }

    /// Notifies the handoff hook; failures are logged and swallowed.
    async fn handoff(&self, from: HandoffSource, to: StageId) {
        if let Err(err) = self.notifier.notify(from, to).await {
            warn!(%from, %to, "handoff notification failed: {err}");
        }
    }

    /// Sleeps for the configured inter-stage pause.
    async fn pause(&self) {
        let pause = self.config.stage_pause();
        if !pause.is_zero() {
            sleep(pause).await;
        }
    }
}

/// Milliseconds since the Unix epoch, for genesis entropy.
fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}
