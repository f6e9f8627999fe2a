//! Prompt composition for agent generator calls.
//!
//! Each agent sees three things: the external request, its own origin
//! seed, and a peer-context block listing fragments from strictly
//! earlier rounds. Same-round peers never appear - the context is
//! snapshotted before the round's calls are dispatched.

use crate::agent::{Agent, FragmentResult};

/// How many characters of each peer fragment are quoted in the
/// collaboration context.
pub const FRAGMENT_PREVIEW_CHARS: usize = 80;

/// Builds the collaboration-context block from prior-round results.
///
/// Returns an empty string when there are no prior results (round
/// zero). Each listed fragment is truncated to
/// [`FRAGMENT_PREVIEW_CHARS`] characters.
pub fn peer_context(prior: &[FragmentResult]) -> String {
    if prior.is_empty() {
        return String::new();
    }

    let previews: Vec<String> = prior
        .iter()
        .map(|result| {
            let preview: String = result
                .fragment
                .chars()
                .take(FRAGMENT_PREVIEW_CHARS)
                .collect();
            format!("// From {}:\n{}...", result.agent_id, preview)
        })
        .collect();

    format!(
        "\nReview these peer fragments for inspiration:\n{}",
        previews.join("\n")
    )
}

/// Composes the full per-agent prompt for one generator call.
pub fn compose_prompt(agent: &Agent, request: &str, peer_context: &str) -> String {
    format!(
        "You are an expert coding agent ({id}). Your task is to respond to the following \
         request. Use your unique origin seed to bias your creativity. Origin: {seed}\n\n\
         Request: {request}\n\n{peer_context}",
        id = agent.id,
        seed = agent.seed,
    )
}
