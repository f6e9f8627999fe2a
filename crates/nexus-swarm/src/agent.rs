//! Agent identity and per-round results.

use serde::{Deserialize, Serialize};

/// One Cognito worker identity.
///
/// The id is stable for the lifetime of an orchestration run; the seed
/// is rehashed in place at the start of every round and never resets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agent {
    /// Stable identity, e.g. `cognito-0`.
    pub id: String,
    /// Current origin seed, evolved cumulatively across rounds.
    pub seed: String,
}

/// One agent's contribution for one round. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentResult {
    /// The contributing agent.
    pub agent_id: String,
    /// The fragment text, fence-stripped and trimmed. For a failed
    /// call this is the substituted comment-style error fragment.
    pub fragment: String,
    /// The origin seed the agent carried when producing the fragment.
    pub seed: String,
    /// True when the generator call failed and the fragment is an
    /// error substitute. Failed contributions stay visible in the
    /// sequence but are excluded from consensus scoring.
    pub failed: bool,
}
