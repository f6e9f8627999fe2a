//! # Nexus Seed
//!
//! Deterministic seed derivation and entropy scoring for the Nexus
//! orchestrator. Every Cognito agent carries an evolving "origin" seed;
//! this crate provides the two pure functions that drive it:
//!
//! - [`seed_hash`] - order-sensitive rolling hash rendered in base-36,
//!   used to derive the genesis seed and every per-round origin.
//! - [`shannon_entropy`] - character-frequency Shannon entropy, used by
//!   the consensus stage as a proxy for seed diversity.
//!
//! Both functions are pure and platform-stable: the same inputs produce
//! the same outputs on every target, which is what makes orchestration
//! runs reproducible when the genesis timestamp is pinned.
//!
//! The hash is a diversity seed, not a security primitive. It is not
//! collision-resistant and must never be used to authenticate anything.

pub mod entropy;
pub mod hash;

pub use entropy::shannon_entropy;
pub use hash::seed_hash;
