//! # Nexus Core
//!
//! The orchestration engine for multi-agent code generation: one
//! coordinating facade drives a pool of Cognito agents through
//! reasoning rounds, relays their fragments into consensus scoring and
//! reports the winning candidate.
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        NEXUS CORE                               │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │   Nexus ──► Cognito ──► Relay ──► Sentinel ──► Echo             │
//! │  (seeding)  (rounds)  (forward)  (consensus)  (report)          │
//! │                │                      │                         │
//! │                ▼                      ▼                         │
//! │         ┌────────────┐        ┌──────────────┐                  │
//! │         │ nexus-swarm│        │nexus-consensus│                 │
//! │         │  fan-out   │        │   ranking     │                 │
//! │         └────────────┘        └──────────────┘                  │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Stages advance in strict forward order; there are no backward
//! transitions and no skips. Every stage transition publishes a
//! complete [`OrchestrationState`] snapshot through a watch channel,
//! so observers never see a half-updated record.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use nexus_core::{Orchestrator, OrchestratorConfig};
//!
//! let mut orchestrator = Orchestrator::new(OrchestratorConfig::default(), generator);
//! let mut updates = orchestrator.subscribe();
//!
//! let state = orchestrator.run("write a binary search in rust").await?;
//! println!("{}", state.final_code.unwrap());
//! ```
//!
//! ## Failure policy
//!
//! The pipeline degrades rather than fails: a broken generator call
//! becomes a visible error fragment for that agent, a failed handoff
//! notification is logged and swallowed, and an empty candidate set is
//! reported as the literal no-consensus fallback with score 0.

mod config;
mod error;
mod notify;
mod orchestrator;
mod state;

pub use config::OrchestratorConfig;
pub use error::NexusError;
pub use notify::{HandoffNotifier, NoopNotifier};
pub use orchestrator::Orchestrator;
pub use state::{
    HandoffSource, OrchestrationState, StageId, StageState, Stages, NO_CONSENSUS_FALLBACK,
};

// Re-export component types for convenience
pub use nexus_consensus::{Candidate, ConsensusEngine};
pub use nexus_gen::{CompletionProvider, CompletionService, FragmentGenerator};
pub use nexus_swarm::{AgentPool, FragmentResult, SwarmConfig};

/// Core result type for orchestration operations.
pub type Result<T> = std::result::Result<T, NexusError>;
