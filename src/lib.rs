//! charmscan - Structural analysis of built charm directories.
//!
//! charmscan inspects an unpacked charm tree and reports structural facts
//! about it: what language it is written in, which framework it relies on,
//! and whether its required descriptor files are present and well-formed.
//! It never modifies the inspected tree and never enforces policy; it only
//! reports, one row per checker.
//!
//! # Modules
//!
//! - [`analysis`] - Checker protocol, registry, shared context, and engine
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Error types and result aliases
//! - [`report`] - Human and JSON result rendering
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use charmscan::analysis::analyze;
//! use charmscan::config::AnalysisConfig;
//!
//! let results = analyze(&AnalysisConfig::default(), Path::new("build/my-charm"));
//! assert_eq!(results.len(), 3);
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;

pub use error::{CharmscanError, Result};
