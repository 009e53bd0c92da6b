//! The ordered builtin checker registry.

use super::checker::Checker;
use super::checkers::{FrameworkChecker, LanguageChecker, MetadataChecker};

/// All builtin checkers, in run order.
///
/// The order is a correctness invariant, not a convenience: the framework
/// checker reads context entries written by both the language and metadata
/// checkers, so those must come first.
pub fn builtin_checkers() -> Vec<Box<dyn Checker>> {
    vec![
        Box::new(LanguageChecker),
        Box::new(MetadataChecker),
        Box::new(FrameworkChecker::default()),
    ]
}

/// Names of all builtin checkers, in run order.
pub fn builtin_names() -> Vec<&'static str> {
    builtin_checkers().iter().map(|c| c.name()).collect()
}
