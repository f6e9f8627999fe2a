//! # Nexus Gen
//!
//! Seams to the external code-generation service. The orchestrator
//! never talks to a model vendor directly; it consumes two async
//! traits defined here:
//!
//! - [`FragmentGenerator`] - one prompt in, one code fragment out.
//!   Invoked once per agent per round by the swarm.
//! - [`CompletionProvider`] - inline completion suggestions for the
//!   editor surface, wrapped by [`CompletionService`] which enforces
//!   the caller-side trigger gates.
//!
//! Model output is untrusted text: callers strip markdown code fences
//! with [`strip_code_fences`] before storing a fragment, and the
//! completion service degrades to an empty suggestion list on any
//! provider error rather than surfacing it.

pub mod completion;
pub mod error;
pub mod generator;

pub use completion::{CompletionProvider, CompletionService, MAX_SUGGESTIONS};
pub use error::GenError;
pub use generator::{strip_code_fences, FragmentGenerator};

/// Result type for generation operations.
pub type Result<T> = std::result::Result<T, GenError>;
