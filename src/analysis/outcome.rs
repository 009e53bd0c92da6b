//! Check categories, outcome tags, and result records.
//!
//! Every checker reports one [`Outcome`] per run. The tag set is closed:
//! checkers draw from their own subset (e.g. the language checker only ever
//! reports `Python` or `Unknown`), and the engine adds the `Ignored` and
//! crash-fallback sentinels on top.

use std::path::PathBuf;

/// Category of a checker.
///
/// Attributes are informational traits of the analyzed charm; warnings and
/// errors are the two lint severities. The category decides which ignore
/// bucket applies and which outcome stands in when a checker crashes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckCategory {
    /// Informational trait, no judgement attached.
    Attribute,
    /// Lint finding that should be addressed.
    Warning,
    /// Lint finding that blocks proper operation.
    Error,
}

impl CheckCategory {
    /// Outcome substituted when a checker of this category crashes.
    pub fn crash_fallback(&self) -> Outcome {
        match self {
            CheckCategory::Attribute => Outcome::Unknown,
            CheckCategory::Warning | CheckCategory::Error => Outcome::Fatal,
        }
    }
}

impl std::fmt::Display for CheckCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CheckCategory::Attribute => write!(f, "attribute"),
            CheckCategory::Warning => write!(f, "warning"),
            CheckCategory::Error => write!(f, "error"),
        }
    }
}

/// Result tag reported for a checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The charm is written in Python.
    Python,
    /// The charm is based on the operator framework.
    Operator,
    /// The charm is based on the reactive framework.
    Reactive,
    /// A validated descriptor is complete and well-formed.
    Ok,
    /// A validated descriptor is missing, malformed, or incomplete.
    Errors,
    /// The checker could not determine anything; also the crash fallback
    /// for attribute checkers.
    Unknown,
    /// The checker was skipped via configuration.
    Ignored,
    /// Crash fallback for warning and error checkers.
    Fatal,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tag = match self {
            Outcome::Python => "python",
            Outcome::Operator => "operator",
            Outcome::Reactive => "reactive",
            Outcome::Ok => "ok",
            Outcome::Errors => "errors",
            Outcome::Unknown => "unknown",
            Outcome::Ignored => "ignored",
            Outcome::Fatal => "fatal",
        };
        write!(f, "{}", tag)
    }
}

/// Outcome of one checker over one analyzed directory.
///
/// Produced once per registered checker per analysis run, in registry
/// order, and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Checker name, unique within the registry.
    pub name: &'static str,

    /// Checker category.
    pub category: CheckCategory,

    /// Documentation URL for this check.
    pub url: &'static str,

    /// Human-readable explanation of the outcome.
    pub text: String,

    /// The reported outcome tag.
    pub outcome: Outcome,
}

/// Auxiliary value a checker stashes for its successors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContextValue {
    /// A free-form string, e.g. a discovered project name.
    Text(String),
    /// A filesystem path, e.g. a resolved entrypoint.
    Path(PathBuf),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_display() {
        assert_eq!(format!("{}", CheckCategory::Attribute), "attribute");
        assert_eq!(format!("{}", CheckCategory::Warning), "warning");
        assert_eq!(format!("{}", CheckCategory::Error), "error");
    }

    #[test]
    fn attribute_crashes_fall_back_to_unknown() {
        assert_eq!(CheckCategory::Attribute.crash_fallback(), Outcome::Unknown);
    }

    #[test]
    fn lint_crashes_fall_back_to_fatal() {
        assert_eq!(CheckCategory::Warning.crash_fallback(), Outcome::Fatal);
        assert_eq!(CheckCategory::Error.crash_fallback(), Outcome::Fatal);
    }

    #[test]
    fn outcome_display_tags() {
        assert_eq!(format!("{}", Outcome::Python), "python");
        assert_eq!(format!("{}", Outcome::Operator), "operator");
        assert_eq!(format!("{}", Outcome::Reactive), "reactive");
        assert_eq!(format!("{}", Outcome::Ignored), "ignored");
        assert_eq!(format!("{}", Outcome::Fatal), "fatal");
    }
}
