//! Assignment generator - constrained random permutation search
//!
//! See `engine.rs` for the search loop.

pub mod engine;

// Re-export main types for convenience
pub use engine::{generate, search, DrawOutcome, GenerationError, GeneratorConfig, DEFAULT_MAX_ATTEMPTS};
