//! Charm framework detection.

use std::fs;
use std::path::Path;

use crate::analysis::checker::Checker;
use crate::analysis::context::AnalysisContext;
use crate::analysis::imports::scan_imports;
use crate::analysis::outcome::{CheckCategory, Outcome};
use crate::error::Result;

use super::language::LanguageChecker;
use super::metadata::MetadataChecker;

/// Detects which framework the charm is built on.
///
/// The operator framework is detected when:
///
/// - the language checker recorded Python
/// - the charm ships a `venv/ops` directory
/// - the recorded entrypoint imports `ops`
///
/// Failing that, the reactive framework is detected when:
///
/// - the metadata checker recorded a charm name (a valid name is enough,
///   the descriptor as a whole may still have errors)
/// - `wheelhouse/` contains an entry named `charms.reactive-*`
/// - `reactive/<name>.py` imports `charms.reactive`
///
/// Must be registered after both the language and metadata checkers.
#[derive(Debug, Default)]
pub struct FrameworkChecker {
    outcome: Option<Outcome>,
}

impl FrameworkChecker {
    pub const NAME: &'static str = "framework";

    const REACTIVE_LIB_PREFIX: &'static str = "charms.reactive-";

    fn check_operator(&self, basedir: &Path, ctx: &AnalysisContext) -> bool {
        if ctx.outcome_of(LanguageChecker::NAME) != Some(Outcome::Python) {
            return false;
        }

        if !basedir.join("venv").join("ops").is_dir() {
            return false;
        }

        let Some(entrypoint) = ctx.path_of(LanguageChecker::NAME, LanguageChecker::ENTRYPOINT_KEY)
        else {
            return false;
        };
        scan_imports(entrypoint)
            .iter()
            .any(|parts| parts.first().map(String::as_str) == Some("ops"))
    }

    fn check_reactive(&self, basedir: &Path, ctx: &AnalysisContext) -> bool {
        let Some(name) = ctx.text_of(MetadataChecker::NAME, MetadataChecker::NAME_KEY) else {
            return false;
        };

        let Ok(wheelhouse) = fs::read_dir(basedir.join("wheelhouse")) else {
            return false;
        };
        let has_reactive_lib = wheelhouse.flatten().any(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .starts_with(Self::REACTIVE_LIB_PREFIX)
        });
        if !has_reactive_lib {
            return false;
        }

        let entrypoint = basedir.join("reactive").join(format!("{name}.py"));
        scan_imports(&entrypoint)
            .iter()
            .any(|parts| parts.len() >= 2 && parts[0] == "charms" && parts[1] == "reactive")
    }
}

impl Checker for FrameworkChecker {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn category(&self) -> CheckCategory {
        CheckCategory::Attribute
    }

    fn url(&self) -> &'static str {
        "https://charmscan.dev/docs/checkers#framework"
    }

    fn description(&self) -> &'static str {
        "The framework the charm is based on."
    }

    /// Outcome-specific explanation.
    ///
    /// # Panics
    ///
    /// Panics if called before [`run`](Checker::run); that is a usage bug,
    /// not a data condition.
    fn text(&self) -> String {
        let text = match self
            .outcome
            .expect("framework text queried before the checker ran")
        {
            Outcome::Operator => "The charm is based on the operator framework.",
            Outcome::Reactive => "The charm is based on the reactive framework.",
            _ => "The charm is not based on any known framework.",
        };
        text.to_string()
    }

    fn run(&mut self, basedir: &Path, ctx: &mut AnalysisContext) -> Result<Outcome> {
        let outcome = if self.check_operator(basedir, ctx) {
            Outcome::Operator
        } else if self.check_reactive(basedir, ctx) {
            Outcome::Reactive
        } else {
            Outcome::Unknown
        };
        self.outcome = Some(outcome);
        Ok(outcome)
    }
}
