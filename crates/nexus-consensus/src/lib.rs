//! # Nexus Consensus
//!
//! Deduplicates and ranks the fragments produced by the agent swarm.
//!
//! ## Scoring
//!
//! Fragments are grouped by exact trimmed-text equality - trimming is
//! the sole normalization, there is no whitespace collapsing and no
//! case folding. Each group becomes a [`Candidate`] scored as
//!
//! ```text
//! score = vote_count + avg_entropy * 0.5
//! ```
//!
//! Cross-agent agreement dominates: one extra vote always outweighs
//! the entropy term. The entropy of the contributing origin seeds acts
//! as a fractional tiebreak that rewards diversity among agreeing
//! agents.
//!
//! ## Ordering guarantees
//!
//! Groups are discovered in first-seen order over the input sequence,
//! and ranking is a stable sort on descending score - so candidates
//! with equal scores rank earliest-produced-first. Both properties are
//! documented guarantees, not artifacts of map iteration order.

pub mod ranking;

pub use ranking::{Candidate, ConsensusEngine};
