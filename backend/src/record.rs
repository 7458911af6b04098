//! Draw records - reproducible, verifiable results
//!
//! A [`DrawRecord`] captures everything needed to prove a draw was produced
//! honestly from a given roster: the seed, the budget, and a digest of the
//! inputs. Replaying the seed over the same inputs must reproduce the same
//! assignments.
//!
//! # Critical Invariants
//!
//! - **Determinism**: Same seed + inputs produces identical assignments
//! - **Input Matching**: A record only verifies against the inputs it was drawn from

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

use crate::generator::{search, GenerationError, GeneratorConfig};
use crate::models::{Assignment, DrawObserver, ForbiddenPairs, NoopObserver, Participant};
use crate::rng::RngManager;
use crate::validation::{validate_assignments, ValidationError};

/// Errors from producing or verifying a draw record
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecordError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("record is invalid: {0}")]
    Invalid(#[from] ValidationError),

    #[error("inputs do not match the record (expected digest {expected}, found {actual})")]
    InputMismatch { expected: String, actual: String },

    #[error("replaying seed {rng_seed} does not reproduce the recorded assignments")]
    ReplayMismatch { rng_seed: u64 },

    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// A completed draw
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawRecord {
    /// Unique run identifier (UUID v4)
    pub run_id: String,

    /// Seed the draw was made with
    pub rng_seed: u64,

    /// Budget the draw was allowed
    pub max_attempts: usize,

    /// Attempts actually used
    pub attempts: usize,

    /// SHA256 of the canonical inputs
    pub input_hash: String,

    pub assignments: Vec<Assignment>,
}

impl DrawRecord {
    pub fn to_json(&self) -> Result<String, RecordError> {
        serde_json::to_string_pretty(self).map_err(|e| RecordError::Serialization(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        serde_json::from_str(json).map_err(|e| RecordError::Serialization(e.to_string()))
    }
}

#[derive(Serialize)]
struct CanonicalInputs<'a> {
    participants: &'a [Participant],
    forbidden: &'a ForbiddenPairs,
}

/// SHA256 digest of the draw inputs
///
/// Participant order is part of the digest (it fixes giver order); the
/// forbidden map is already key-ordered.
pub fn compute_input_hash(
    participants: &[Participant],
    forbidden: &ForbiddenPairs,
) -> Result<String, RecordError> {
    let json = serde_json::to_string(&CanonicalInputs {
        participants,
        forbidden,
    })
    .map_err(|e| RecordError::Serialization(format!("Input serialization failed: {}", e)))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    let result = hasher.finalize();

    Ok(format!("{:x}", result))
}

/// Run a seeded draw and record it
pub fn run_draw(
    config: &GeneratorConfig,
    participants: &[Participant],
    forbidden: &ForbiddenPairs,
    observer: &mut dyn DrawObserver,
) -> Result<DrawRecord, RecordError> {
    let input_hash = compute_input_hash(participants, forbidden)?;
    let mut rng = RngManager::new(config.rng_seed);
    let outcome = search(participants, forbidden, &mut rng, config.max_attempts, observer)?;

    Ok(DrawRecord {
        run_id: uuid::Uuid::new_v4().to_string(),
        rng_seed: config.rng_seed,
        max_attempts: config.max_attempts,
        attempts: outcome.attempts,
        input_hash,
        assignments: outcome.assignments,
    })
}

/// Check a record against the inputs it claims to come from
///
/// Verifies the input digest, the draw invariants, and that replaying the
/// recorded seed reproduces the recorded assignments.
pub fn verify_record(
    record: &DrawRecord,
    participants: &[Participant],
    forbidden: &ForbiddenPairs,
) -> Result<(), RecordError> {
    let actual = compute_input_hash(participants, forbidden)?;
    if actual != record.input_hash {
        return Err(RecordError::InputMismatch {
            expected: record.input_hash.clone(),
            actual,
        });
    }

    validate_assignments(participants, forbidden, &record.assignments)?;

    let mut rng = RngManager::new(record.rng_seed);
    let replay = search(
        participants,
        forbidden,
        &mut rng,
        record.max_attempts,
        &mut NoopObserver,
    )
    .map_err(|_| RecordError::ReplayMismatch {
        rng_seed: record.rng_seed,
    })?;

    if replay.assignments != record.assignments || replay.attempts != record.attempts {
        return Err(RecordError::ReplayMismatch {
            rng_seed: record.rng_seed,
        });
    }

    Ok(())
}
