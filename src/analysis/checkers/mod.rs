//! Builtin checkers.

pub mod framework;
pub mod language;
pub mod metadata;

pub use framework::FrameworkChecker;
pub use language::LanguageChecker;
pub use metadata::MetadataChecker;
