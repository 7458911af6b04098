//! Participant model
//!
//! One member of the group taking part in a draw. The email is the identity:
//! two participants with the same email are indistinguishable to the
//! generator, so decoders must guarantee uniqueness before a draw.

use serde::{Deserialize, Serialize};

/// A member of the group
///
/// # Example
/// ```
/// use secret_santa_core_rs::Participant;
///
/// let alice = Participant::new("Alice", "alice@co");
/// assert_eq!(alice.name(), "Alice");
/// assert_eq!(alice.email(), "alice@co");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    /// Display name
    name: String,

    /// Identity within a run
    email: String,
}

impl Participant {
    /// Create a participant
    ///
    /// Values are stored as given; trimming is the decoder's job.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Whether two participants share an identity
    pub fn same_identity(&self, other: &Participant) -> bool {
        self.email == other.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_identity_compares_email_only() {
        let a = Participant::new("Alice", "alice@co");
        let b = Participant::new("Alice Smith", "alice@co");
        let c = Participant::new("Alice", "alice@home");

        assert!(a.same_identity(&b));
        assert!(!a.same_identity(&c));
        assert_ne!(a, b, "equality still covers the name");
    }
}
