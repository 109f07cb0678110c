//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Free-form string attributes attached to an entry or a transaction.
pub type Tags = BTreeMap<String, String>;

/// One logging event as handed to drivers.
///
/// Entries are created fresh for every logging call and are only ever
/// passed to drivers by shared reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub level: LogLevel,
    pub message: String,
    #[serde(default)]
    pub tags: Option<Tags>,
    /// Empty when no transaction was active
    #[serde(default)]
    pub transaction_id: String,
}

impl LogEntry {
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            level,
            message: message.into(),
            tags: None,
            transaction_id: String::new(),
        }
    }

    pub fn with_tags(mut self, tags: Option<Tags>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_transaction(mut self, transaction_id: impl Into<String>) -> Self {
        self.transaction_id = transaction_id.into();
        self
    }

    pub fn transaction(&self) -> Option<&str> {
        if self.transaction_id.is_empty() {
            None
        } else {
            Some(&self.transaction_id)
        }
    }

    /// Tags, if any were given and at least one is present
    pub fn non_empty_tags(&self) -> Option<&Tags> {
        self.tags.as_ref().filter(|tags| !tags.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_has_no_transaction() {
        let entry = LogEntry::new(LogLevel::Info, "hello");
        assert_eq!(entry.transaction(), None);
        assert_eq!(entry.transaction_id, "");
        assert!(entry.tags.is_none());
    }

    #[test]
    fn test_empty_tags_are_treated_as_absent() {
        let entry = LogEntry::new(LogLevel::Debug, "x").with_tags(Some(Tags::new()));
        assert!(entry.non_empty_tags().is_none());
    }

    #[test]
    fn test_json_field_names() {
        let mut tags = Tags::new();
        tags.insert("u".to_string(), "a".to_string());
        let entry = LogEntry::new(LogLevel::Warning, "careful")
            .with_tags(Some(tags))
            .with_transaction("t1");

        let value = serde_json::to_value(&entry).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            ["level", "message", "tags", "timestamp", "transaction_id"]
        );
        assert_eq!(value["level"], 2);
        assert_eq!(value["transaction_id"], "t1");
        assert_eq!(value["tags"]["u"], "a");
    }

    #[test]
    fn test_absent_tags_serialize_as_null() {
        let entry = LogEntry::new(LogLevel::Info, "plain");
        let value = serde_json::to_value(&entry).unwrap();
        assert!(value["tags"].is_null());
    }
}
