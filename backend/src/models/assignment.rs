//! Assignment model
//!
//! One directed giver → receiver edge of a draw.

use serde::{Deserialize, Serialize};

use super::participant::Participant;

/// A giver paired with the participant they buy a gift for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Assignment {
    pub giver: Participant,
    pub receiver: Participant,
}

impl Assignment {
    pub fn new(giver: Participant, receiver: Participant) -> Self {
        Self { giver, receiver }
    }

    /// True if giver and receiver share an email
    pub fn is_self_match(&self) -> bool {
        self.giver.same_identity(&self.receiver)
    }
}
