//! Candidate grouping and entropy-weighted ranking.

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use nexus_seed::shannon_entropy;
use nexus_swarm::FragmentResult;

/// A deduplicated fragment with its aggregate voting statistics.
///
/// Candidates partition the result set: every [`FragmentResult`]
/// contributes to exactly one candidate, so the vote counts across all
/// candidates always sum to the number of input results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    /// The trimmed fragment text; also the deduplication key.
    pub text: String,
    /// Contributing agents, in contribution order. May repeat an id
    /// when the same agent produced the text in several rounds.
    pub contributing_agent_ids: Vec<String>,
    /// Number of contributions; always at least 1.
    pub vote_count: usize,
    /// Sum of the Shannon entropy of every contributing seed.
    pub total_entropy: f64,
    /// `total_entropy / vote_count`.
    pub avg_entropy: f64,
    /// `vote_count + avg_entropy * entropy_weight`.
    pub score: f64,
}

/// Accumulates one group during the grouping pass.
struct GroupAccumulator {
    text: String,
    agents: Vec<String>,
    seeds: Vec<String>,
}

/// Scores and ranks fragment candidates.
///
/// # Example
///
/// ```rust
/// use nexus_consensus::ConsensusEngine;
/// use nexus_swarm::FragmentResult;
///
/// let results = vec![
///     FragmentResult {
///         agent_id: "cognito-0".into(),
///         fragment: "fn answer() -> u32 { 42 }".into(),
///         seed: "a1b2c3".into(),
///         failed: false,
///     },
///     FragmentResult {
///         agent_id: "cognito-1".into(),
///         fragment: "fn answer() -> u32 { 42 }".into(),
///         seed: "d4e5f6".into(),
///         failed: false,
///     },
/// ];
///
/// let ranked = ConsensusEngine::new().rank(&results);
/// assert_eq!(ranked.len(), 1);
/// assert_eq!(ranked[0].vote_count, 2);
/// ```
#[derive(Debug, Clone)]
pub struct ConsensusEngine {
    /// Weight applied to `avg_entropy` in the score (default: 0.5).
    entropy_weight: f64,
}

impl Default for ConsensusEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsensusEngine {
    /// Creates an engine with the reference entropy weight of 0.5.
    pub fn new() -> Self {
        Self {
            entropy_weight: 0.5,
        }
    }

    /// Creates an engine with a custom entropy weight.
    ///
    /// The weight must be non-negative, and keeping it below 1.0
    /// preserves the vote-count-dominates property for typical seed
    /// entropies.
    pub fn with_entropy_weight(weight: f64) -> Self {
        assert!(
            weight >= 0.0 && weight.is_finite(),
            "entropy weight must be a non-negative finite number"
        );
        Self {
            entropy_weight: weight,
        }
    }

    /// The configured entropy weight.
    pub fn entropy_weight(&self) -> f64 {
        self.entropy_weight
    }

    /// Groups results by trimmed text, scores each group and returns
    /// the candidates in descending score order.
    ///
    /// # Ordering
    ///
    /// The sort is stable over groups discovered in first-seen order,
    /// so candidates with exactly equal scores rank
    /// earliest-produced-first. Empty input yields an empty ranking;
    /// surfacing a fallback is the caller's concern.
    pub fn rank(&self, results: &[FragmentResult]) -> Vec<Candidate> {
        let mut groups: Vec<GroupAccumulator> = Vec::new();
        let mut by_text: HashMap<String, usize> = HashMap::new();

        for result in results {
            let text = result.fragment.trim();
            let slot = match by_text.get(text) {
                Some(&slot) => slot,
                None => {
                    by_text.insert(text.to_string(), groups.len());
                    groups.push(GroupAccumulator {
                        text: text.to_string(),
                        agents: Vec::new(),
                        seeds: Vec::new(),
                    });
                    groups.len() - 1
                }
            };
            groups[slot].agents.push(result.agent_id.clone());
            groups[slot].seeds.push(result.seed.clone());
        }

        let mut candidates: Vec<Candidate> = groups
            .into_iter()
            .map(|group| {
                let vote_count = group.agents.len();
                let total_entropy: f64 = group.seeds.iter().map(|s| shannon_entropy(s)).sum();
                let avg_entropy = total_entropy / vote_count as f64;
                let score = vote_count as f64 + avg_entropy * self.entropy_weight;

                Candidate {
                    text: group.text,
                    contributing_agent_ids: group.agents,
                    vote_count,
                    total_entropy,
                    avg_entropy,
                    score,
                }
            })
            .collect();

        // Stable sort: equal scores keep discovery order.
        candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        debug!(
            results = results.len(),
            candidates = candidates.len(),
            "ranking complete"
        );

        candidates
    }
}
