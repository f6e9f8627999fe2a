//! # Entropy Scoring
//!
//! Shannon entropy over character frequencies, used by the consensus
//! stage as a "creative diversity" proxy: agents whose origin seeds are
//! more dispersed contribute a slightly higher tiebreak weight to the
//! candidates they agree on.
//!
//! For a string with empirical character probabilities `p(c)`:
//!
//! ```text
//! H = -Σ p(c) log₂ p(c)
//! ```
//!
//! measured in bits per character. Reference points for the base-36
//! seeds this is applied to:
//!
//! | Input | Entropy (bits/char) |
//! |-------|---------------------|
//! | `""` or `"aaaa"` | 0.0 |
//! | `"ab"` | 1.0 |
//! | typical 6-digit base-36 seed | 2.0 - 2.6 |
//!
//! The function is pure and total: empty input scores 0.0 rather than
//! producing a NaN from a zero-length distribution.

use std::collections::HashMap;

/// Computes the Shannon entropy of a string in bits per character.
///
/// The distribution is taken over Unicode scalar values. Returns 0.0
/// for the empty string and for any string made of a single repeated
/// character; the result is never negative.
///
/// # Example
///
/// ```rust
/// use nexus_seed::shannon_entropy;
///
/// assert_eq!(shannon_entropy(""), 0.0);
/// assert_eq!(shannon_entropy("aaaa"), 0.0);
/// assert!((shannon_entropy("ab") - 1.0).abs() < 1e-9);
/// ```
pub fn shannon_entropy(text: &str) -> f64 {
    if text.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    let mut total = 0usize;

    for c in text.chars() {
        *freq.entry(c).or_insert(0) += 1;
        total += 1;
    }

    let total = total as f64;
    let mut entropy = 0.0;

    for &count in freq.values() {
        let p = count as f64 / total;
        entropy -= p * p.log2();
    }

    entropy
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(shannon_entropy(""), 0.0);
    }

    #[test]
    fn test_uniform_char_is_zero() {
        assert_eq!(shannon_entropy("aaaa"), 0.0);
    }

    #[test]
    fn test_two_chars_one_bit() {
        let h = shannon_entropy("ab");
        assert!((h - 1.0).abs() < 1e-9, "expected ~1.0, got {}", h);
    }

    #[test]
    fn test_alternating_pair_one_bit() {
        let h = shannon_entropy("abababab");
        assert!((h - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_never_negative() {
        for s in ["", "a", "seed", "0k2m3n4b", "//", "🦀🦀x"] {
            assert!(shannon_entropy(s) >= 0.0, "negative entropy for {:?}", s);
        }
    }

    #[test]
    fn test_four_distinct_chars_two_bits() {
        let h = shannon_entropy("abcd");
        assert!((h - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_skew_lowers_entropy() {
        // A skewed distribution carries less information than a
        // uniform one over the same alphabet.
        assert!(shannon_entropy("aaab") < shannon_entropy("aabb"));
    }

    #[test]
    fn test_typical_seed_range() {
        let h = shannon_entropy("1z141z3");
        assert!(h > 1.0 && h < 3.0, "seed entropy out of range: {}", h);
    }
}
