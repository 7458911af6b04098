//! Forbidden pairs from the previous round
//!
//! Maps each giver email to the single receiver email they had last time.
//! Keys need not cover the current roster: newcomers simply have no entry.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Previous-round giver → receiver lookup
///
/// Stored in key order so diagnostics and digests are stable.
///
/// # Example
/// ```
/// use secret_santa_core_rs::ForbiddenPairs;
///
/// let forbidden: ForbiddenPairs = [("alice@co", "bob@co")].into_iter().collect();
///
/// assert_eq!(forbidden.get("alice@co"), Some("bob@co"));
/// assert_eq!(forbidden.get("carol@co"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForbiddenPairs {
    pairs: BTreeMap<String, String>,
}

impl ForbiddenPairs {
    /// Empty map (no prior-round constraint)
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the receiver a giver had last round
    ///
    /// A later entry for the same giver replaces the earlier one.
    pub fn insert(&mut self, giver_email: impl Into<String>, receiver_email: impl Into<String>) {
        self.pairs.insert(giver_email.into(), receiver_email.into());
    }

    /// Receiver the giver had last round, if any
    pub fn get(&self, giver_email: &str) -> Option<&str> {
        self.pairs.get(giver_email).map(String::as_str)
    }

    /// Whether giver → receiver repeats the previous round
    pub fn forbids(&self, giver_email: &str, receiver_email: &str) -> bool {
        self.get(giver_email) == Some(receiver_email)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate (giver, receiver) in giver-email order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(g, r)| (g.as_str(), r.as_str()))
    }
}

impl<G: Into<String>, R: Into<String>> FromIterator<(G, R)> for ForbiddenPairs {
    fn from_iter<I: IntoIterator<Item = (G, R)>>(iter: I) -> Self {
        let mut forbidden = ForbiddenPairs::new();
        for (giver, receiver) in iter {
            forbidden.insert(giver, receiver);
        }
        forbidden
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_later_entry_replaces_earlier() {
        let forbidden: ForbiddenPairs = [("a@x", "b@x"), ("a@x", "c@x")].into_iter().collect();

        assert_eq!(forbidden.len(), 1);
        assert_eq!(forbidden.get("a@x"), Some("c@x"));
    }

    #[test]
    fn test_forbids_is_directional() {
        let forbidden: ForbiddenPairs = [("a@x", "b@x")].into_iter().collect();

        assert!(forbidden.forbids("a@x", "b@x"));
        assert!(!forbidden.forbids("b@x", "a@x"));
    }

    #[test]
    fn test_serializes_as_plain_map() {
        let forbidden: ForbiddenPairs = [("b@x", "a@x"), ("a@x", "b@x")].into_iter().collect();
        let json = serde_json::to_string(&forbidden).unwrap();

        assert_eq!(json, r#"{"a@x":"b@x","b@x":"a@x"}"#);
    }
}
