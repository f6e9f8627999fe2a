//! # Seed Hashing
//!
//! Order-sensitive string hashing used to derive agent seeds.
//!
//! The orchestrator needs reproducible-but-distinct seeds: every agent
//! must diverge from its peers, yet a re-run with the same genesis
//! input must reproduce the same seed chain. A 32-bit rolling hash is
//! enough for that - we only need cheap, stable dispersion, not
//! collision resistance.
//!
//! ## Algorithm
//!
//! 1. Concatenate the input parts in the given order.
//! 2. Roll `h = h * 31 + unit` over the UTF-16 code units of the
//!    concatenation, wrapping in 32-bit signed arithmetic at every step.
//! 3. Take the absolute value and render it in base-36 (lowercase).
//!
//! Iterating UTF-16 code units (rather than Unicode scalars) keeps the
//! output stable for any input, including text with astral-plane
//! characters, and matches the classic `h*31` string-hash family.
//!
//! ## Properties
//!
//! - **Deterministic**: identical part sequences give identical output.
//! - **Order-sensitive**: `seed_hash(&["a", "b"])` differs from
//!   `seed_hash(&["b", "a"])` whenever the concatenations differ.
//! - **Not cryptographic**: collisions are possible and acceptable.

/// Digits used for base-36 rendering.
const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Derives a seed token from an ordered sequence of string parts.
///
/// Concatenates the parts in order and applies the rolling hash
/// described in the module docs. The result is a short lowercase
/// base-36 string.
///
/// # Arguments
///
/// * `parts` - Input strings, concatenated in the given order. Order
///   matters: swapping two distinct parts changes the result.
///
/// # Example
///
/// ```rust
/// use nexus_seed::seed_hash;
///
/// // Same inputs, same seed.
/// let genesis = seed_hash(&["genesis", "1700000000000"]);
/// assert_eq!(genesis, seed_hash(&["genesis", "1700000000000"]));
///
/// // Order matters; part boundaries do not.
/// assert_ne!(seed_hash(&["a", "b"]), seed_hash(&["b", "a"]));
/// assert_eq!(seed_hash(&["a", "b"]), seed_hash(&["ab"]));
/// ```
pub fn seed_hash(parts: &[&str]) -> String {
    let mut h: i32 = 0;

    for part in parts {
        for unit in part.encode_utf16() {
            h = h.wrapping_mul(31).wrapping_add(i32::from(unit));
        }
    }

    to_base36(h.unsigned_abs())
}

/// Renders an unsigned 32-bit value in lowercase base-36.
fn to_base36(mut value: u32) -> String {
    if value == 0 {
        return "0".to_string();
    }

    // 32 bits fit in at most 7 base-36 digits.
    let mut digits = [0u8; 7];
    let mut len = 0;

    while value > 0 {
        digits[len] = BASE36_DIGITS[(value % 36) as usize];
        value /= 36;
        len += 1;
    }

    digits[..len].iter().rev().map(|&d| d as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deterministic() {
        let a = seed_hash(&["genesis", "1234567890"]);
        let b = seed_hash(&["genesis", "1234567890"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_order_sensitive() {
        // "ab" rolls to 31*97 + 98 = 3105, "ba" to 31*98 + 97 = 3135.
        assert_ne!(seed_hash(&["a", "b"]), seed_hash(&["b", "a"]));
        assert_ne!(seed_hash(&["alpha", "beta"]), seed_hash(&["beta", "alpha"]));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(seed_hash(&[]), "0");
        assert_eq!(seed_hash(&[""]), "0");
    }

    #[test]
    fn test_concatenation_boundary_irrelevant() {
        // The hash runs over the concatenation, so part boundaries
        // do not affect the result.
        assert_eq!(seed_hash(&["ab", "cd"]), seed_hash(&["abcd"]));
    }

    #[test]
    fn test_base36_alphabet() {
        let seed = seed_hash(&["genesis", "cognito-0", "7"]);
        assert!(!seed.is_empty());
        assert!(seed
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_single_char() {
        // h = 'a' = 97 -> "2p" in base-36.
        assert_eq!(seed_hash(&["a"]), "2p");
    }

    #[test]
    fn test_wraparound_stays_stable() {
        // Long input forces many 32-bit wraps; the result must still be
        // identical across calls.
        let long = "x".repeat(10_000);
        assert_eq!(seed_hash(&[&long]), seed_hash(&[&long]));
    }

    #[test]
    fn test_non_ascii_input() {
        let a = seed_hash(&["génesis", "λ"]);
        let b = seed_hash(&["génesis", "λ"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(u32::MAX), "1z141z3");
    }
}
