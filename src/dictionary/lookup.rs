// Lookup service - answers term queries against the current dictionary snapshot
//
// The snapshot is an immutable Arc<Dictionary>. Readers clone the Arc under a
// short read lock and query it lock-free; refresh swaps the pointer, so a query
// sees either the old or the new dictionary in full.

use super::store::{normalize_term, Dictionary};
use parking_lot::RwLock;
use std::sync::Arc;

/// Outcome of a term query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    /// The term has a transliteration
    Found(String),
    /// No entry for the term (the user may still be typing)
    NotFound,
}

impl Lookup {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    /// Convert into an Option
    pub fn into_option(self) -> Option<String> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::NotFound => None,
        }
    }
}

/// Shared handle to the active dictionary snapshot
///
/// Cloning is cheap and every clone observes the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct LookupService {
    current: Arc<RwLock<Arc<Dictionary>>>,
}

impl LookupService {
    /// Create a service over an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically replace the active snapshot
    pub fn refresh(&self, snapshot: Arc<Dictionary>) {
        let entries = snapshot.len();
        *self.current.write() = snapshot;
        crate::info!("Dictionary snapshot refreshed with {} entries", entries);
    }

    /// Look up a raw term as typed by the user
    pub fn query(&self, term: &str) -> Lookup {
        let snapshot = self.snapshot();
        match snapshot.get(&normalize_term(term)) {
            Some(value) => Lookup::Found(value.to_string()),
            None => Lookup::NotFound,
        }
    }

    /// The snapshot currently answering queries
    pub fn snapshot(&self) -> Arc<Dictionary> {
        self.current.read().clone()
    }
}

#[cfg(test)]
#[path = "lookup_test.rs"]
mod tests;
