//! Shared state between checkers within a single analysis run.
//!
//! Later checkers may depend on what earlier checkers found (the framework
//! checker reads the language checker's entrypoint and the metadata
//! checker's project name). That state lives in an [`AnalysisContext`]
//! owned by the engine and passed by reference into every checker run: a
//! fresh context per `analyze` call, never an ambient global, so separate
//! runs cannot observe each other's entries.

use std::collections::HashMap;
use std::path::Path;

use super::outcome::{ContextValue, Outcome};

/// Everything one checker left behind for its successors.
#[derive(Debug, Default)]
pub struct CheckerEntry {
    /// The outcome the engine recorded after the checker ran.
    pub outcome: Option<Outcome>,
    extras: HashMap<&'static str, ContextValue>,
}

/// Per-run scratch space shared across checkers.
#[derive(Debug, Default)]
pub struct AnalysisContext {
    entries: HashMap<&'static str, CheckerEntry>,
}

impl AnalysisContext {
    /// Create an empty context for a fresh analysis run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a checker's outcome. Called by the engine after each run.
    pub fn record_outcome(&mut self, checker: &'static str, outcome: Outcome) {
        self.entries.entry(checker).or_default().outcome = Some(outcome);
    }

    /// Stash an auxiliary value under a checker's name.
    pub fn stash(&mut self, checker: &'static str, key: &'static str, value: ContextValue) {
        self.entries
            .entry(checker)
            .or_default()
            .extras
            .insert(key, value);
    }

    /// Outcome a previously run checker recorded, if any.
    ///
    /// `None` means the checker did not run (e.g. it was ignored); callers
    /// must treat that as "no information", not as unknown.
    pub fn outcome_of(&self, checker: &str) -> Option<Outcome> {
        self.entries.get(checker).and_then(|e| e.outcome)
    }

    /// Raw auxiliary value stashed by a previous checker.
    pub fn get(&self, checker: &str, key: &str) -> Option<&ContextValue> {
        self.entries.get(checker).and_then(|e| e.extras.get(key))
    }

    /// Auxiliary path value, if present and path-typed.
    pub fn path_of(&self, checker: &str, key: &str) -> Option<&Path> {
        match self.get(checker, key) {
            Some(ContextValue::Path(p)) => Some(p.as_path()),
            _ => None,
        }
    }

    /// Auxiliary text value, if present and text-typed.
    pub fn text_of(&self, checker: &str, key: &str) -> Option<&str> {
        match self.get(checker, key) {
            Some(ContextValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Whether any state was recorded for a checker.
    pub fn contains(&self, checker: &str) -> bool {
        self.entries.contains_key(checker)
    }
}
