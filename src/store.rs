//! In-memory rule store (rule name -> source text)
//!
//! Owned by the integration layer and passed by reference to whatever needs
//! it; the analysis functions never keep documents between calls.

use crate::providers::Analyzer;
use crate::types::Diagnostic;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Rule not found: {0}")]
    NotFound(String),
    #[error("Rule already exists: {0}")]
    AlreadyExists(String),
    #[error("Invalid rule name: {0:?}")]
    InvalidName(String),
}

/// A stored rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleEntry {
    pub name: String,
    pub content: String,
}

/// Rule documents keyed by name
#[derive(Debug, Default, Clone)]
pub struct RuleStore {
    rules: BTreeMap<String, String>,
}

impl RuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new rule; fails if the name is blank or already taken
    pub fn create(
        &mut self,
        name: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<(), StoreError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(StoreError::InvalidName(name));
        }
        if self.rules.contains_key(&name) {
            return Err(StoreError::AlreadyExists(name));
        }
        tracing::debug!(rule = %name, "created rule");
        self.rules.insert(name, content.into());
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&str, StoreError> {
        self.rules
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))
    }

    /// Replace a rule's content, returning the previous content
    pub fn update(&mut self, name: &str, content: impl Into<String>) -> Result<String, StoreError> {
        let slot = self
            .rules
            .get_mut(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        Ok(std::mem::replace(slot, content.into()))
    }

    /// Remove a rule, returning its content
    pub fn delete(&mut self, name: &str) -> Result<String, StoreError> {
        let removed = self
            .rules
            .remove(name)
            .ok_or_else(|| StoreError::NotFound(name.to_string()))?;
        tracing::debug!(rule = %name, "deleted rule");
        Ok(removed)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// All rules, ordered by name
    pub fn list(&self) -> Vec<RuleEntry> {
        self.rules
            .iter()
            .map(|(name, content)| RuleEntry {
                name: name.clone(),
                content: content.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Diagnostics for every stored rule, ordered by name
    pub fn lint_all(&self, analyzer: &Analyzer) -> Vec<(String, Vec<Diagnostic>)> {
        self.rules
            .iter()
            .map(|(name, content)| (name.clone(), analyzer.lint(content)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_and_get() {
        let mut store = RuleStore::new();
        store.create("mz", "rule mz {}").unwrap();

        assert_eq!(store.get("mz"), Ok("rule mz {}"));
        assert!(store.contains("mz"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_missing() {
        let store = RuleStore::new();
        assert_eq!(store.get("nope"), Err(StoreError::NotFound("nope".to_string())));
    }

    #[test]
    fn test_create_duplicate() {
        let mut store = RuleStore::new();
        store.create("a", "one").unwrap();

        assert_eq!(
            store.create("a", "two"),
            Err(StoreError::AlreadyExists("a".to_string()))
        );
        assert_eq!(store.get("a"), Ok("one"));
    }

    #[test]
    fn test_create_blank_name() {
        let mut store = RuleStore::new();
        assert!(matches!(store.create("  ", "x"), Err(StoreError::InvalidName(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn test_update() {
        let mut store = RuleStore::new();
        store.create("a", "old").unwrap();

        assert_eq!(store.update("a", "new"), Ok("old".to_string()));
        assert_eq!(store.get("a"), Ok("new"));
        assert!(matches!(store.update("b", "x"), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_delete() {
        let mut store = RuleStore::new();
        store.create("a", "text").unwrap();

        assert_eq!(store.delete("a"), Ok("text".to_string()));
        assert!(store.is_empty());
        assert_eq!(store.delete("a"), Err(StoreError::NotFound("a".to_string())));
    }

    #[test]
    fn test_list_sorted_by_name() {
        let mut store = RuleStore::new();
        store.create("b", "2").unwrap();
        store.create("a", "1").unwrap();

        let names: Vec<_> = store.list().into_iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_lint_all() {
        let mut store = RuleStore::new();
        store
            .create("good", "rule g { meta: strings: $a = \"x\" condition: $a }")
            .unwrap();
        store.create("bad", "rule b {").unwrap();

        let results = store.lint_all(&Analyzer::default());

        assert_eq!(results[0].0, "bad");
        assert!(!results[0].1.is_empty());
        assert_eq!(results[1].0, "good");
        assert!(results[1].1.is_empty());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::NotFound("x".to_string()).to_string(),
            "Rule not found: x"
        );
    }
}
