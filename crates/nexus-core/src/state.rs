//! Observable orchestration state.
//!
//! One [`OrchestrationState`] record exists per run. The controller is
//! its only writer; observers receive complete snapshots through a
//! watch channel, so a transition is always atomic from their
//! viewpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

use nexus_consensus::Candidate;

/// Literal surfaced as final code when no candidates exist.
pub const NO_CONSENSUS_FALLBACK: &str = "// No consensus could be reached.";

/// The five pipeline stages, in strict forward order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StageId {
    /// Seeding: genesis hash and agent pool creation.
    Nexus,
    /// Reasoning rounds across the agent pool.
    Cognito,
    /// Forwarding accumulated fragments to scoring.
    Relay,
    /// Consensus and entropy analysis.
    Sentinel,
    /// Final report.
    Echo,
}

impl StageId {
    /// All stages in pipeline order.
    pub const ALL: [StageId; 5] = [
        StageId::Nexus,
        StageId::Cognito,
        StageId::Relay,
        StageId::Sentinel,
        StageId::Echo,
    ];

    /// Lowercase stage name.
    pub fn name(self) -> &'static str {
        match self {
            StageId::Nexus => "nexus",
            StageId::Cognito => "cognito",
            StageId::Relay => "relay",
            StageId::Sentinel => "sentinel",
            StageId::Echo => "echo",
        }
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Origin of a stage handoff: either a pipeline stage or the external
/// input that kicks off a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandoffSource {
    /// The run was started from outside the pipeline.
    External,
    /// Handoff from a pipeline stage.
    Stage(StageId),
}

impl fmt::Display for HandoffSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandoffSource::External => f.write_str("external-input"),
            HandoffSource::Stage(stage) => f.write_str(stage.name()),
        }
    }
}

/// Externally observable state of one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageState {
    /// Human-readable status text.
    pub status: String,
    /// True while the stage is doing work.
    pub is_loading: bool,
}

impl StageState {
    fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
            is_loading: false,
        }
    }
}

/// Per-stage state, one record per pipeline stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Stages {
    pub nexus: StageState,
    pub cognito: StageState,
    pub relay: StageState,
    pub sentinel: StageState,
    pub echo: StageState,
}

impl Stages {
    /// Immutable access by stage id.
    pub fn stage(&self, id: StageId) -> &StageState {
        match id {
            StageId::Nexus => &self.nexus,
            StageId::Cognito => &self.cognito,
            StageId::Relay => &self.relay,
            StageId::Sentinel => &self.sentinel,
            StageId::Echo => &self.echo,
        }
    }

    /// Mutable access by stage id.
    pub fn stage_mut(&mut self, id: StageId) -> &mut StageState {
        match id {
            StageId::Nexus => &mut self.nexus,
            StageId::Cognito => &mut self.cognito,
            StageId::Relay => &mut self.relay,
            StageId::Sentinel => &mut self.sentinel,
            StageId::Echo => &mut self.echo,
        }
    }
}

/// The complete observable state of one orchestration run.
///
/// Created fresh at the start of every run - a new run never inherits
/// stage statuses or candidate data from the previous one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestrationState {
    /// Per-stage status and loading flags.
    pub stages: Stages,
    /// Ranked candidates, descending by score. Empty until the
    /// Sentinel stage completes.
    pub candidates: Vec<Candidate>,
    /// Winning candidate text, or [`NO_CONSENSUS_FALLBACK`]. `None`
    /// until the Echo stage completes.
    pub final_code: Option<String>,
    /// Score of the winning candidate; 0 when there is no consensus.
    pub consensus_score: f64,
    /// True while a run is in flight.
    pub is_loading: bool,
    /// Set on run start; only cleared when the consumer dismisses the
    /// view, never by the controller.
    pub is_visible: bool,
}

impl OrchestrationState {
    /// The pristine pre-run state.
    pub fn new() -> Self {
        Self {
            stages: Stages {
                nexus: StageState::new("Idle. Awaiting command."),
                cognito: StageState::new("Ready"),
                relay: StageState::new("Ready"),
                sentinel: StageState::new("Ready"),
                echo: StageState::new("Awaiting final report..."),
            },
            candidates: Vec::new(),
            final_code: None,
            consensus_score: 0.0,
            is_loading: false,
            is_visible: false,
        }
    }
}

impl Default for OrchestrationState {
    fn default() -> Self {
        Self::new()
    }
}
