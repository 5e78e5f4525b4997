//! Answer keys, values, and the ordered per-session answer set.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Identifier of a question and of the answer it collects (e.g. `purpose`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerKey(String);

impl AnswerKey {
    /// Creates a validated answer key.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the key is empty
    /// - `InvalidFormat` if the key contains characters outside `[A-Za-z0-9_]`
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ValidationError::empty_field("key"));
        }
        if !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(ValidationError::invalid_format(
                "key",
                "keys are ASCII alphanumeric identifiers",
            ));
        }
        Ok(Self(key))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnswerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One enumerated answer value (e.g. `tourism`, `yes`).
///
/// Values are exact tokens from a question's answer domain. Matching is
/// byte-for-byte equality, never substring matching against display text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerValue(String);

impl AnswerValue {
    /// Creates a validated answer value.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the value is empty
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::empty_field("value"));
        }
        Ok(Self(value))
    }

    /// Returns the value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One collected answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerEntry {
    pub key: AnswerKey,
    pub value: AnswerValue,
}

/// Ordered mapping from answer key to value.
///
/// Insertion order is the asking order; keys are unique. Answers are never
/// retracted, which is what makes candidate narrowing monotonic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    entries: Vec<AnswerEntry>,
}

impl AnswerSet {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up the value for a key.
    pub fn get(&self, key: &AnswerKey) -> Option<&AnswerValue> {
        self.entries
            .iter()
            .find(|e| &e.key == key)
            .map(|e| &e.value)
    }

    /// Returns true if the key has been answered.
    pub fn contains_key(&self, key: &AnswerKey) -> bool {
        self.get(key).is_some()
    }

    /// Appends an answer.
    ///
    /// # Errors
    ///
    /// - `InvalidFormat` if the key is already present (a key is never
    ///   asked twice)
    pub fn insert(&mut self, key: AnswerKey, value: AnswerValue) -> Result<(), ValidationError> {
        if self.contains_key(&key) {
            return Err(ValidationError::invalid_format(
                "key",
                format!("'{}' is already answered", key),
            ));
        }
        self.entries.push(AnswerEntry { key, value });
        Ok(())
    }

    /// Number of collected answers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no answers have been collected.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates answers in asking order.
    pub fn iter(&self) -> impl Iterator<Item = &AnswerEntry> {
        self.entries.iter()
    }

    /// The keys answered so far, in asking order.
    pub fn keys(&self) -> impl Iterator<Item = &AnswerKey> {
        self.entries.iter().map(|e| &e.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(s: &str) -> AnswerKey {
        AnswerKey::new(s).unwrap()
    }

    fn value(s: &str) -> AnswerValue {
        AnswerValue::new(s).unwrap()
    }

    #[test]
    fn answer_key_rejects_empty() {
        assert!(AnswerKey::new("").is_err());
    }

    #[test]
    fn answer_key_rejects_whitespace_and_punctuation() {
        assert!(AnswerKey::new("has space").is_err());
        assert!(AnswerKey::new("has-dash").is_err());
        assert!(AnswerKey::new("governmentOfficial").is_ok());
        assert!(AnswerKey::new("study_type").is_ok());
    }

    #[test]
    fn answer_value_rejects_empty() {
        assert!(AnswerValue::new("").is_err());
    }

    #[test]
    fn insert_preserves_order() {
        let mut answers = AnswerSet::new();
        answers.insert(key("purpose"), value("diplomatic")).unwrap();
        answers.insert(key("diplomat"), value("yes")).unwrap();

        let keys: Vec<&str> = answers.keys().map(AnswerKey::as_str).collect();
        assert_eq!(keys, vec!["purpose", "diplomat"]);
    }

    #[test]
    fn insert_rejects_duplicate_key() {
        let mut answers = AnswerSet::new();
        answers.insert(key("purpose"), value("tourism")).unwrap();
        let result = answers.insert(key("purpose"), value("business"));
        assert!(result.is_err());
        assert_eq!(answers.get(&key("purpose")), Some(&value("tourism")));
    }

    #[test]
    fn get_finds_inserted_value() {
        let mut answers = AnswerSet::new();
        answers.insert(key("diplomat"), value("no")).unwrap();
        assert_eq!(answers.get(&key("diplomat")), Some(&value("no")));
        assert_eq!(answers.get(&key("purpose")), None);
    }

    #[test]
    fn answer_set_roundtrips_through_json() {
        let mut answers = AnswerSet::new();
        answers.insert(key("purpose"), value("diplomatic")).unwrap();
        answers.insert(key("diplomat"), value("yes")).unwrap();

        let json = serde_json::to_string(&answers).unwrap();
        let restored: AnswerSet = serde_json::from_str(&json).unwrap();
        assert_eq!(answers, restored);

        // Order must survive persistence.
        let keys: Vec<&str> = restored.keys().map(AnswerKey::as_str).collect();
        assert_eq!(keys, vec!["purpose", "diplomat"]);
    }
}
