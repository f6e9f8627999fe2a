//! Offline stand-ins for the external model services.
//!
//! The CLI has no network layer; these implementations derive their
//! output deterministically from the prompt so that a run is fully
//! reproducible and still exercises the whole pipeline.

use async_trait::async_trait;

use nexus_core::{FragmentGenerator, HandoffNotifier, HandoffSource, StageId};
use nexus_gen::CompletionProvider;
use nexus_seed::seed_hash;

/// Extracts the text after `marker` on the same logical block, up to a
/// blank line or the end of the prompt.
fn extract_after<'a>(prompt: &'a str, marker: &str) -> Option<&'a str> {
    let start = prompt.find(marker)? + marker.len();
    let rest = &prompt[start..];
    let end = rest.find("\n\n").unwrap_or(rest.len());
    Some(rest[..end].trim())
}

/// Deterministic fragment generator.
///
/// In convergent mode every agent answers a request identically, which
/// demonstrates vote accumulation. With `variety` enabled the fragment
/// also depends on the agent's origin seed, so candidates diverge and
/// the entropy tiebreak becomes visible in the ranking.
pub struct OfflineGenerator {
    variety: bool,
}

impl OfflineGenerator {
    pub fn new(variety: bool) -> Self {
        Self { variety }
    }
}

#[async_trait]
impl FragmentGenerator for OfflineGenerator {
    async fn generate(&self, prompt: &str) -> nexus_gen::Result<String> {
        let request = extract_after(prompt, "Request: ").unwrap_or("unspecified request");
        let tag = if self.variety {
            let origin = extract_after(prompt, "Origin: ").unwrap_or("0");
            seed_hash(&["offline", request, origin])
        } else {
            seed_hash(&["offline", request])
        };

        Ok(format!(
            "// candidate {tag}\nfn solve() {{\n    // {request}\n    unimplemented!()\n}}"
        ))
    }
}

/// Deterministic completion provider: suffixes the identifier being
/// typed with a few common continuations.
pub struct OfflineCompletionProvider;

#[async_trait]
impl CompletionProvider for OfflineCompletionProvider {
    async fn complete(&self, before: &str, _after: &str) -> nexus_gen::Result<Vec<String>> {
        let token: String = before
            .chars()
            .rev()
            .take_while(|c| c.is_alphanumeric() || *c == '_')
            .collect::<Vec<_>>()
            .into_iter()
            .rev()
            .collect();

        if token.is_empty() {
            return Ok(vec!["()".to_string(), ".into()".to_string()]);
        }

        Ok(vec![
            format!("{token}_count"),
            format!("{token}s"),
            format!("{token}.len()"),
            format!("{token}.iter()"),
        ])
    }
}

/// Prints each stage handoff to stderr as the pipeline advances.
pub struct TraceNotifier;

#[async_trait]
impl HandoffNotifier for TraceNotifier {
    async fn notify(&self, from: HandoffSource, to: StageId) -> nexus_core::Result<()> {
        eprintln!("  handoff: {from} -> {to}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_offline_generator_is_deterministic() {
        let generator = OfflineGenerator::new(false);
        let a = generator.generate("Request: sort a list\n\n").await.unwrap();
        let b = generator.generate("Request: sort a list\n\n").await.unwrap();
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_variety_mode_diverges_by_origin() {
        let generator = OfflineGenerator::new(true);
        let a = generator
            .generate("Origin: aaaa\n\nRequest: sort a list\n\n")
            .await
            .unwrap();
        let b = generator
            .generate("Origin: bbbb\n\nRequest: sort a list\n\n")
            .await
            .unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn test_completion_suffixes_current_token() {
        let provider = OfflineCompletionProvider;
        let suggestions = provider.complete("let item", "").await.unwrap();
        assert!(suggestions.iter().any(|s| s == "item_count"));
    }
}
