//! Secret Santa Core - Rust Engine
//!
//! Draws anonymous gift-giving assignments for a group: everyone gives to
//! exactly one other member and receives from exactly one other member.
//!
//! # Architecture
//!
//! - **models**: Domain types (Participant, Assignment, ForbiddenPairs, events)
//! - **generator**: Rejection-sampling search for a valid draw
//! - **rng**: Deterministic random number generation
//! - **validation**: Independent invariant checks over a finished draw
//! - **record**: Reproducible draw records (seed + input digest)
//! - **tabular**: CSV decoding of rosters and previous rounds, CSV encoding of draws
//!
//! # Critical Invariants
//!
//! 1. Nobody is assigned to themselves
//! 2. Nobody gets the receiver they had in the previous round
//! 3. All randomness is deterministic (seeded RNG)

// Module declarations
pub mod generator;
pub mod models;
pub mod record;
pub mod rng;
pub mod tabular;
pub mod validation;

// Re-exports for convenience
pub use generator::{generate, search, DrawOutcome, GenerationError, GeneratorConfig, DEFAULT_MAX_ATTEMPTS};
pub use models::{
    assignment::Assignment,
    event::{DrawEvent, DrawObserver, EventLog, NoopObserver, RejectionReason},
    forbidden::ForbiddenPairs,
    participant::Participant,
};
pub use record::{compute_input_hash, run_draw, verify_record, DrawRecord, RecordError};
pub use rng::RngManager;
pub use tabular::TabularError;
pub use validation::{validate_assignments, ValidationError};
