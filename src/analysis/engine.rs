//! The analysis engine.
//!
//! Drives the checker registry over a charm directory: applies the ignore
//! configuration, runs each checker sequentially, converts crashes into
//! category fallback outcomes, and assembles one [`CheckResult`] per
//! registered checker, in registry order. A single checker's bug never
//! aborts the batch.

use std::path::Path;

use tracing::{debug, warn};

use crate::config::AnalysisConfig;

use super::checker::Checker;
use super::context::AnalysisContext;
use super::outcome::{CheckCategory, CheckResult, Outcome};
use super::registry::builtin_checkers;

/// Run all builtin checkers over `basedir`.
pub fn analyze(config: &AnalysisConfig, basedir: &Path) -> Vec<CheckResult> {
    analyze_with(builtin_checkers(), config, basedir)
}

/// Run a caller-supplied checker sequence over `basedir`.
///
/// Checkers run strictly in the given order; a fresh [`AnalysisContext`]
/// is allocated for the run, so separate calls never observe each other's
/// shared state.
pub fn analyze_with(
    mut checkers: Vec<Box<dyn Checker>>,
    config: &AnalysisConfig,
    basedir: &Path,
) -> Vec<CheckResult> {
    let mut ctx = AnalysisContext::new();
    let mut results = Vec::with_capacity(checkers.len());

    for checker in checkers.iter_mut() {
        let name = checker.name();
        let category = checker.category();

        let ignored = match category {
            CheckCategory::Attribute => config.ignore.ignores_attribute(name),
            CheckCategory::Warning | CheckCategory::Error => config.ignore.ignores_linter(name),
        };
        if ignored {
            // skipped checkers still produce a row, but leave no trace in
            // the context: successors must see "no information", not unknown
            debug!("checker '{}' ignored by configuration", name);
            results.push(CheckResult {
                name,
                category,
                url: checker.url(),
                text: checker.description().to_string(),
                outcome: Outcome::Ignored,
            });
            continue;
        }

        debug!("running checker '{}'", name);
        let (outcome, text) = match checker.run(basedir, &mut ctx) {
            Ok(outcome) => (outcome, checker.text()),
            Err(err) => {
                warn!("checker '{}' failed: {}", name, err);
                (category.crash_fallback(), checker.description().to_string())
            }
        };

        ctx.record_outcome(name, outcome);
        results.push(CheckResult {
            name,
            category,
            url: checker.url(),
            text,
            outcome,
        });
    }

    results
}
