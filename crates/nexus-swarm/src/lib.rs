//! # Nexus Swarm
//!
//! The fan-out phase of an orchestration run. A pool of Cognito agents
//! holds one evolving origin seed per agent; each round, every agent's
//! seed is rehashed, a prompt is composed with the peer fragments from
//! strictly earlier rounds, and all generator calls for the round are
//! dispatched concurrently. The round completes only when every call
//! has resolved - join semantics, not race-to-first.
//!
//! ## Failure domains
//!
//! Agents fail independently. A generator error or deadline expiry for
//! one agent becomes an in-band error fragment for that agent's
//! contribution; the other agents in the round are unaffected and the
//! run never aborts because of a single agent.
//!
//! ## Ordering
//!
//! Results accumulate in round order, then agent order within a round,
//! regardless of the order in which the concurrent calls happen to
//! resolve.

pub mod agent;
pub mod error;
pub mod pool;
pub mod prompt;

pub use agent::{Agent, FragmentResult};
pub use error::SwarmError;
pub use pool::{AgentOutcome, AgentPool, SwarmConfig, EMPTY_RESPONSE_FRAGMENT};
pub use prompt::{compose_prompt, peer_context, FRAGMENT_PREVIEW_CHARS};

/// Result type for swarm operations.
pub type Result<T> = std::result::Result<T, SwarmError>;
