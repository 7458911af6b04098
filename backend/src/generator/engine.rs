//! Rejection-sampling search for a valid draw.
//!
//! Givers keep their input order. Each attempt shuffles a copy of the roster
//! into a candidate receiver sequence and walks both sequences in lockstep,
//! abandoning the attempt at the first pairing that is a self-match or a
//! repeat of the previous round. The first candidate to survive the walk is
//! returned. Every valid bijection is reachable through a uniform shuffle,
//! so accepted draws are uniform over the valid ones.
//!
//! # Critical Invariants
//!
//! 1. Output length equals roster length
//! 2. Givers appear in input order, receivers are a permutation of the roster
//! 3. No giver receives themselves (by email)
//! 4. No giver receives their previous-round receiver
//!
//! # Example
//!
//! ```rust
//! use secret_santa_core_rs::{generate, ForbiddenPairs, Participant, RngManager};
//!
//! let roster = vec![
//!     Participant::new("Alice", "alice@co"),
//!     Participant::new("Bob", "bob@co"),
//!     Participant::new("Carol", "carol@co"),
//! ];
//! let forbidden: ForbiddenPairs = [("alice@co", "bob@co")].into_iter().collect();
//! let mut rng = RngManager::new(42);
//!
//! let assignments = generate(&roster, &forbidden, &mut rng).unwrap();
//! assert_eq!(assignments.len(), 3);
//! assert_eq!(assignments[0].receiver.email(), "carol@co");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{
    Assignment, DrawEvent, DrawObserver, ForbiddenPairs, NoopObserver, Participant, RejectionReason,
};
use crate::rng::RngManager;

/// Attempts made before giving up
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// RNG seed for a reproducible draw
    pub rng_seed: u64,

    /// Shuffles tried before reporting failure
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

impl GeneratorConfig {
    pub fn new(rng_seed: u64) -> Self {
        Self {
            rng_seed,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

/// The only way a draw can fail.
///
/// Carries the inputs so the caller can explain the failure; never carries a
/// partial assignment list.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GenerationError {
    #[error(
        "unable to generate valid assignments after {attempts} attempts ({} participants, {} prior-round pairs)",
        .participants.len(),
        .forbidden.len()
    )]
    GenerationFailed {
        attempts: usize,
        participants: Vec<Participant>,
        forbidden: ForbiddenPairs,
    },
}

impl GenerationError {
    /// Multi-line report of the roster and prior-round pairs
    pub fn diagnostic_report(&self) -> String {
        let GenerationError::GenerationFailed {
            attempts,
            participants,
            forbidden,
        } = self;

        let mut report = format!("no valid draw found in {} attempt(s)\n", attempts);
        report.push_str(&format!("participants ({}):\n", participants.len()));
        for participant in participants {
            report.push_str(&format!("  {} <{}>\n", participant.name(), participant.email()));
        }
        if forbidden.is_empty() {
            report.push_str("prior-round pairs: none\n");
        } else {
            report.push_str(&format!("prior-round pairs ({}):\n", forbidden.len()));
            for (giver, receiver) in forbidden.iter() {
                report.push_str(&format!("  {} -> {}\n", giver, receiver));
            }
        }
        report
    }
}

/// A successful search
#[derive(Debug, Clone, PartialEq)]
pub struct DrawOutcome {
    /// One assignment per participant, in giver input order
    pub assignments: Vec<Assignment>,

    /// Attempts used, including the successful one
    pub attempts: usize,
}

/// Draw with the default budget and no observer
///
/// # Errors
/// [`GenerationError::GenerationFailed`] after [`DEFAULT_MAX_ATTEMPTS`] rejected candidates.
pub fn generate(
    participants: &[Participant],
    forbidden: &ForbiddenPairs,
    rng: &mut RngManager,
) -> Result<Vec<Assignment>, GenerationError> {
    search(participants, forbidden, rng, DEFAULT_MAX_ATTEMPTS, &mut NoopObserver)
        .map(|outcome| outcome.assignments)
}

/// Search for a valid draw within `max_attempts` shuffles
///
/// Inputs are not validated: one participant always exhausts the budget,
/// and an empty roster yields an empty draw on the first attempt.
pub fn search(
    participants: &[Participant],
    forbidden: &ForbiddenPairs,
    rng: &mut RngManager,
    max_attempts: usize,
    observer: &mut dyn DrawObserver,
) -> Result<DrawOutcome, GenerationError> {
    let mut receivers = participants.to_vec();
    let mut attempt = 0;

    while attempt < max_attempts {
        attempt += 1;
        observer.on_event(&DrawEvent::AttemptStarted { attempt });

        receivers.clone_from_slice(participants);
        rng.shuffle(&mut receivers);

        match check_candidate(participants, &receivers, forbidden) {
            Ok(()) => {
                observer.on_event(&DrawEvent::DrawSucceeded {
                    attempt,
                    participants: participants.len(),
                });
                let assignments = participants
                    .iter()
                    .cloned()
                    .zip(receivers)
                    .map(|(giver, receiver)| Assignment::new(giver, receiver))
                    .collect();
                return Ok(DrawOutcome {
                    assignments,
                    attempts: attempt,
                });
            }
            Err((position, reason)) => {
                observer.on_event(&DrawEvent::CandidateRejected {
                    attempt,
                    position,
                    giver_email: participants[position].email().to_string(),
                    receiver_email: receivers[position].email().to_string(),
                    reason,
                });
            }
        }
    }

    observer.on_event(&DrawEvent::DrawFailed {
        attempt,
        participants: participants.len(),
    });

    Err(GenerationError::GenerationFailed {
        attempts: attempt,
        participants: participants.to_vec(),
        forbidden: forbidden.clone(),
    })
}

/// First rejected position of a candidate, if any
fn check_candidate(
    givers: &[Participant],
    receivers: &[Participant],
    forbidden: &ForbiddenPairs,
) -> Result<(), (usize, RejectionReason)> {
    for (position, (giver, receiver)) in givers.iter().zip(receivers).enumerate() {
        if giver.same_identity(receiver) {
            return Err((position, RejectionReason::SelfMatch));
        }
        if forbidden.forbids(giver.email(), receiver.email()) {
            return Err((position, RejectionReason::RepeatOfPriorRound));
        }
    }
    Ok(())
}
