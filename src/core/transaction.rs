//! Registry of open transactions and the single active one

use super::log_entry::Tags;
use std::collections::HashMap;

/// Tracks the named transactions that are currently open.
///
/// At most one transaction is active at a time; the most recently started
/// one wins. The registry itself is not synchronized, the logger keeps it
/// behind a lock.
#[derive(Debug, Default)]
pub struct TransactionRegistry {
    transactions: HashMap<String, Option<Tags>>,
    active: Option<String>,
}

/// What happened when a transaction was started
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartOutcome {
    /// Attributes of the transaction that was overwritten, if the id was already open
    pub replaced: Option<Option<Tags>>,
}

impl StartOutcome {
    pub fn overwrote_existing(&self) -> bool {
        self.replaced.is_some()
    }
}

impl TransactionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `id` with `attributes` and make it the active transaction.
    ///
    /// An empty id is recorded but leaves no transaction active.
    pub fn start(&mut self, id: &str, attributes: Option<Tags>) -> StartOutcome {
        let replaced = self.transactions.insert(id.to_string(), attributes);
        self.active = if id.is_empty() {
            None
        } else {
            Some(id.to_string())
        };
        StartOutcome { replaced }
    }

    /// Close `id`, returning its attributes, or `None` if it was never opened.
    ///
    /// The active slot is cleared only when it refers to `id`.
    pub fn end(&mut self, id: &str) -> Option<Option<Tags>> {
        let attributes = self.transactions.remove(id)?;
        if self.active.as_deref() == Some(id) {
            self.active = None;
        }
        Some(attributes)
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn attributes(&self, id: &str) -> Option<&Tags> {
        self.transactions.get(id).and_then(Option::as_ref)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.transactions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> Option<Tags> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_start_sets_active() {
        let mut registry = TransactionRegistry::new();
        let outcome = registry.start("t1", attrs(&[("u", "a")]));

        assert!(!outcome.overwrote_existing());
        assert_eq!(registry.active(), Some("t1"));
        assert_eq!(registry.attributes("t1").unwrap()["u"], "a");
    }

    #[test]
    fn test_restart_overwrites_attributes() {
        let mut registry = TransactionRegistry::new();
        registry.start("t1", attrs(&[("u", "a")]));
        let outcome = registry.start("t1", attrs(&[("u", "b")]));

        assert_eq!(outcome.replaced, Some(attrs(&[("u", "a")])));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.attributes("t1").unwrap()["u"], "b");
    }

    #[test]
    fn test_end_clears_only_matching_active() {
        let mut registry = TransactionRegistry::new();
        registry.start("t1", None);
        registry.start("t2", None);

        assert_eq!(registry.end("t1"), Some(None));
        assert_eq!(registry.active(), Some("t2"));

        assert!(registry.end("t2").is_some());
        assert_eq!(registry.active(), None);
        assert!(registry.is_empty());
    }

    #[test]
    fn test_end_unknown_is_noop() {
        let mut registry = TransactionRegistry::new();
        registry.start("t1", None);

        assert_eq!(registry.end("nope"), None);
        assert_eq!(registry.active(), Some("t1"));
        assert!(registry.contains("t1"));
    }

    #[test]
    fn test_empty_id_is_never_active() {
        let mut registry = TransactionRegistry::new();
        registry.start("t1", None);
        registry.start("", None);

        assert_eq!(registry.active(), None);
        assert!(registry.contains(""));
        assert!(registry.contains("t1"));
    }
}
