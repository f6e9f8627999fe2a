//! Inline code completion seam.
//!
//! Completion is orthogonal to orchestration: the editor surface asks
//! for suggestions around a cursor position, and the answer is always
//! a (possibly empty) list - never an error. The trigger gates live on
//! the caller side so that every provider gets the same behavior:
//! no suggestions without enough context, none inside a line comment,
//! none inside an unterminated string.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::Result;

/// Maximum number of suggestions surfaced per request.
pub const MAX_SUGGESTIONS: usize = 5;

/// Minimum non-whitespace characters of preceding context required
/// before a provider is consulted.
pub const MIN_CONTEXT_CHARS: usize = 3;

/// Produces completion suggestions for a cursor position.
///
/// `before` and `after` are the code on either side of the cursor.
/// Implementations may return up to any number of suggestions; the
/// wrapping [`CompletionService`] truncates to [`MAX_SUGGESTIONS`].
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Returns completion suggestions for the given cursor context.
    async fn complete(&self, before: &str, after: &str) -> Result<Vec<String>>;
}

/// Gated wrapper around a [`CompletionProvider`].
///
/// Applies the trigger heuristics before consulting the provider and
/// degrades every failure to an empty suggestion list:
///
/// - fewer than [`MIN_CONTEXT_CHARS`] non-whitespace characters before
///   the cursor → no call, empty list;
/// - the line under the cursor contains `//` → empty list;
/// - the line under the cursor contains an odd number of quote
///   characters (`'`, `"`, `` ` ``) → empty list;
/// - provider error → logged, empty list.
///
/// Surviving suggestions are filtered of blanks and truncated to
/// [`MAX_SUGGESTIONS`].
pub struct CompletionService<P> {
    provider: P,
}

impl<P: CompletionProvider> CompletionService<P> {
    /// Wraps a provider with the trigger gates.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns suggestions for the cursor context, or an empty list.
    pub async fn suggest(&self, before: &str, after: &str) -> Vec<String> {
        if !should_trigger(before) {
            debug!("completion suppressed by trigger gates");
            return Vec::new();
        }

        match self.provider.complete(before, after).await {
            Ok(suggestions) => suggestions
                .into_iter()
                .filter(|s| !s.trim().is_empty())
                .take(MAX_SUGGESTIONS)
                .collect(),
            Err(err) => {
                warn!("completion provider failed: {err}");
                Vec::new()
            }
        }
    }
}

/// Decides whether the cursor context warrants a completion request.
fn should_trigger(before: &str) -> bool {
    let context_chars = before.chars().filter(|c| !c.is_whitespace()).count();
    if context_chars < MIN_CONTEXT_CHARS {
        return false;
    }

    // Everything after the last newline is the line being typed.
    let last_line = before.rsplit('\n').next().unwrap_or("");

    if last_line.contains("//") {
        return false;
    }

    let quotes = last_line
        .chars()
        .filter(|c| matches!(c, '\'' | '"' | '`'))
        .count();

    quotes % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GenError;

    struct FixedProvider(Vec<String>);

    #[async_trait]
    impl CompletionProvider for FixedProvider {
        async fn complete(&self, _before: &str, _after: &str) -> Result<Vec<String>> {
            Ok(self.0.clone())
        }
    }

    struct FailingProvider;

    #[async_trait]
    impl CompletionProvider for FailingProvider {
        async fn complete(&self, _before: &str, _after: &str) -> Result<Vec<String>> {
            Err(GenError::Request("quota exceeded".to_string()))
        }
    }

    fn fixed(suggestions: &[&str]) -> CompletionService<FixedProvider> {
        CompletionService::new(FixedProvider(
            suggestions.iter().map(|s| s.to_string()).collect(),
        ))
    }

    #[tokio::test]
    async fn test_short_context_suppressed() {
        let service = fixed(&["foo()"]);
        assert!(service.suggest("ab", "").await.is_empty());
        assert!(service.suggest("  a b ", "").await.is_empty());
    }

    #[tokio::test]
    async fn test_line_comment_suppressed() {
        let service = fixed(&["foo()"]);
        assert!(service.suggest("let x = 1;\n// say som", "").await.is_empty());
    }

    #[tokio::test]
    async fn test_unterminated_string_suppressed() {
        let service = fixed(&["foo()"]);
        assert!(service.suggest("let s = \"hel", "").await.is_empty());
    }

    #[tokio::test]
    async fn test_terminated_string_allowed() {
        let service = fixed(&["foo()"]);
        assert_eq!(service.suggest("let s = \"hi\"; s.", "").await, vec!["foo()"]);
    }

    #[tokio::test]
    async fn test_comment_on_earlier_line_allowed() {
        let service = fixed(&["bar()"]);
        let before = "// header comment\nlet value = ";
        assert_eq!(service.suggest(before, "").await, vec!["bar()"]);
    }

    #[tokio::test]
    async fn test_provider_error_degrades_to_empty() {
        let service = CompletionService::new(FailingProvider);
        assert!(service.suggest("let value = ", "").await.is_empty());
    }

    #[tokio::test]
    async fn test_truncated_to_max() {
        let service = fixed(&["a()", "b()", "c()", "d()", "e()", "f()", "g()"]);
        let out = service.suggest("let value = ", "").await;
        assert_eq!(out.len(), MAX_SUGGESTIONS);
        assert_eq!(out[0], "a()");
    }

    #[tokio::test]
    async fn test_blank_suggestions_dropped() {
        let service = fixed(&["", "  ", "real()"]);
        assert_eq!(service.suggest("let value = ", "").await, vec!["real()"]);
    }
}
