//! The checker trait.
//!
//! A checker is one named analysis unit: it inspects the unpacked charm
//! directory, may read what earlier checkers left in the
//! [`AnalysisContext`], and reports a single [`Outcome`].

use std::path::Path;

use crate::error::Result;

use super::context::AnalysisContext;
use super::outcome::{CheckCategory, Outcome};

/// A single unit of analysis over a charm directory.
///
/// Checkers run strictly sequentially in registry order; a checker that
/// reads another's context entry must be registered after it. `run` takes
/// `&mut self` so a checker can cache its outcome for the post-run
/// [`text`](Checker::text) accessor.
pub trait Checker {
    /// Checker name, unique within the registry.
    fn name(&self) -> &'static str;

    /// Category, which decides the ignore bucket and crash fallback.
    fn category(&self) -> CheckCategory;

    /// Documentation URL for this check.
    fn url(&self) -> &'static str;

    /// Static one-line description. Safe to call at any time; used for
    /// ignored and crashed checkers, where no outcome-specific text exists.
    fn description(&self) -> &'static str;

    /// Human-readable explanation of the outcome.
    ///
    /// Only meaningful after a successful `run`. Checkers whose text
    /// depends on the outcome panic when queried early; that is a
    /// programming error in the caller, not a data condition.
    fn text(&self) -> String {
        self.description().to_string()
    }

    /// Inspect `basedir` and report an outcome.
    ///
    /// Expected absences (missing files, unparsable sources) are soft and
    /// yield a checker-specific outcome such as [`Outcome::Unknown`]. An
    /// `Err` is the crash case: the engine logs it and substitutes the
    /// category's fallback outcome without aborting the batch.
    fn run(&mut self, basedir: &Path, ctx: &mut AnalysisContext) -> Result<Outcome>;
}
