//! Structural analysis of built charm directories.
//!
//! The analysis runs an ordered set of independent checkers over an
//! unpacked charm tree. Each checker reports one outcome; later checkers
//! may consume what earlier ones left in the shared [`AnalysisContext`].
//!
//! # Overview
//!
//! - **Checkers** - Individual analysis units ([`Checker`] trait)
//! - **Registry** - The ordered builtin checker list ([`builtin_checkers`])
//! - **Engine** - Sequential driver with ignore and crash policy ([`analyze`])
//! - **Context** - Per-run shared state ([`AnalysisContext`])
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use charmscan::analysis::analyze;
//! use charmscan::config::AnalysisConfig;
//!
//! let results = analyze(&AnalysisConfig::default(), Path::new("build/my-charm"));
//! for check in &results {
//!     println!("{}[{}]: {}", check.category, check.name, check.outcome);
//! }
//! ```

pub mod checker;
pub mod checkers;
pub mod context;
pub mod engine;
pub mod imports;
pub mod outcome;
pub mod registry;

pub use checker::Checker;
pub use checkers::{FrameworkChecker, LanguageChecker, MetadataChecker};
pub use context::AnalysisContext;
pub use engine::{analyze, analyze_with};
pub use outcome::{CheckCategory, CheckResult, ContextValue, Outcome};
pub use registry::builtin_checkers;
