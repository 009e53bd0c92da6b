//! Charm metadata descriptor validation.

use std::fs;
use std::path::Path;

use serde_yaml::Value;

use crate::analysis::checker::Checker;
use crate::analysis::context::AnalysisContext;
use crate::analysis::outcome::{CheckCategory, ContextValue, Outcome};
use crate::error::Result;

/// Validates the charm's `metadata.yaml` descriptor.
///
/// The outcome is [`Outcome::Ok`] when the file parses and all of `name`,
/// `summary` and `description` are present as strings; anything else is
/// [`Outcome::Errors`]. A string `name` is stashed in the context whenever
/// it is found, even when the overall outcome is errors; the framework
/// checker only needs the name, not a fully valid descriptor.
#[derive(Debug, Default)]
pub struct MetadataChecker;

impl MetadataChecker {
    pub const NAME: &'static str = "metadata";

    /// Context key for the charm name.
    pub const NAME_KEY: &'static str = "name";

    /// Descriptor file at the charm root.
    const METADATA_FILE: &'static str = "metadata.yaml";

    /// Fields that must be present as strings for the descriptor to be ok.
    const REQUIRED_FIELDS: [&'static str; 3] = ["name", "summary", "description"];
}

impl Checker for MetadataChecker {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn category(&self) -> CheckCategory {
        CheckCategory::Attribute
    }

    fn url(&self) -> &'static str {
        "https://charmscan.dev/docs/checkers#metadata"
    }

    fn description(&self) -> &'static str {
        "The charm has a complete and valid metadata.yaml file."
    }

    fn run(&mut self, basedir: &Path, ctx: &mut AnalysisContext) -> Result<Outcome> {
        let path = basedir.join(Self::METADATA_FILE);

        // missing, unreadable or malformed descriptors are data errors
        let doc: Option<Value> = fs::read_to_string(&path)
            .ok()
            .and_then(|raw| serde_yaml::from_str(&raw).ok());
        let Some(doc) = doc else {
            return Ok(Outcome::Errors);
        };

        // partial information still matters: record the name before
        // judging the rest of the required fields
        if let Some(name) = doc.get("name").and_then(Value::as_str) {
            ctx.stash(Self::NAME, Self::NAME_KEY, ContextValue::Text(name.into()));
        }

        let complete = Self::REQUIRED_FIELDS
            .iter()
            .all(|field| doc.get(field).and_then(Value::as_str).is_some());

        if complete {
            Ok(Outcome::Ok)
        } else {
            Ok(Outcome::Errors)
        }
    }
}
