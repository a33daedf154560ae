//! Per-employee relationship ledger.
//!
//! Keys are peer names, not handles, so an entry never keeps a peer alive
//! and nothing is mirrored onto the peer's own ledger. A BTreeMap keeps
//! iteration order stable for the event log.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationshipLedger {
    scores: BTreeMap<String, i64>,
}

impl RelationshipLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score for `peer`, or `None` if the two have never interacted.
    pub fn score(&self, peer: &str) -> Option<i64> {
        self.scores.get(peer).copied()
    }

    pub fn contains(&self, peer: &str) -> bool {
        self.scores.contains_key(peer)
    }

    /// Mutable score for `peer`, inserting 0 on first contact.
    pub fn entry(&mut self, peer: &str) -> &mut i64 {
        self.scores.entry(peer.to_string()).or_insert(0)
    }

    pub fn set(&mut self, peer: &str, score: i64) {
        self.scores.insert(peer.to_string(), score);
    }

    /// Lower every score by `amount`. No floor. Returns how many entries moved.
    pub fn sour_all(&mut self, amount: i64) -> usize {
        for score in self.scores.values_mut() {
            *score = score.saturating_sub(amount);
        }
        self.scores.len()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.scores.iter().map(|(name, score)| (name.as_str(), *score))
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for RelationshipLedger {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_inserts_zero_on_first_contact() {
        let mut ledger = RelationshipLedger::new();
        assert_eq!(ledger.score("B"), None);
        assert_eq!(*ledger.entry("B"), 0);
        assert!(ledger.contains("B"));
    }

    #[test]
    fn sour_all_has_no_floor() {
        let mut ledger: RelationshipLedger = [("B", 0), ("C", 3)].into_iter().collect();
        assert_eq!(ledger.sour_all(1), 2);
        assert_eq!(ledger.score("B"), Some(-1));
        assert_eq!(ledger.score("C"), Some(2));
    }
}
