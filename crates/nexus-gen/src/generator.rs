//! Fragment generation seam.
//!
//! The swarm treats the code-generation service as an opaque async
//! function. Anything implementing [`FragmentGenerator`] can back an
//! orchestration run: a vendor HTTP client in production, a scripted
//! stand-in in tests and the offline CLI.

use async_trait::async_trait;

use crate::Result;

/// Produces a candidate code fragment for a composed agent prompt.
///
/// Implementations should return the raw model text; the caller strips
/// markdown fences and trims before the fragment enters consensus.
/// A returned error is recovered by the caller (the agent's
/// contribution becomes a visible error fragment), so implementations
/// should report failures instead of silently returning empty text.
#[async_trait]
pub trait FragmentGenerator: Send + Sync {
    /// Generates a fragment for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Strips a markdown code fence wrapper from model output.
///
/// Models occasionally wrap fragments in ```` ```lang ```` fences even
/// when told not to. This removes a leading fence line (with an
/// optional language tag) and a trailing ```` ``` ```` marker, then
/// trims surrounding whitespace. Inner fences are left untouched.
///
/// # Example
///
/// ```rust
/// use nexus_gen::strip_code_fences;
///
/// assert_eq!(strip_code_fences("```js\nconsole.log(1)\n```"), "console.log(1)");
/// assert_eq!(strip_code_fences("plain text"), "plain text");
/// ```
pub fn strip_code_fences(text: &str) -> String {
    let mut body = text;

    if let Some(rest) = body.strip_prefix("```") {
        if let Some(pos) = rest.find('\n') {
            if rest[..pos]
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
            {
                body = &rest[pos + 1..];
            }
        }
    }

    let body = body.strip_suffix("```").unwrap_or(body);
    body.trim().to_string()
}
