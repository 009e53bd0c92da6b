//! Result rendering.
//!
//! The analysis engine hands back an ordered list of [`CheckResult`]; this
//! module formats it for terminal display or as machine-readable JSON.

use std::io::Write;

use serde::Serialize;

use crate::analysis::{CheckCategory, CheckResult, Outcome};

/// Output format for analysis results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: '{other}'")),
        }
    }
}

/// Render results in the requested format.
pub fn render<W: Write>(
    results: &[CheckResult],
    format: OutputFormat,
    writer: &mut W,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => render_human(results, writer),
        OutputFormat::Json => render_json(results, writer),
    }
}

/// Render results for terminal display, grouped by category.
pub fn render_human<W: Write>(results: &[CheckResult], writer: &mut W) -> std::io::Result<()> {
    for category in [
        CheckCategory::Attribute,
        CheckCategory::Warning,
        CheckCategory::Error,
    ] {
        let rows: Vec<_> = results.iter().filter(|r| r.category == category).collect();
        if rows.is_empty() {
            continue;
        }

        writeln!(writer, "{}s:", category)?;
        for row in rows {
            writeln!(writer, "  {}: {}", row.name, row.outcome)?;
            if row.outcome != Outcome::Ignored {
                writeln!(writer, "   = note: {}", row.text)?;
            }
            writeln!(writer, "   --> {}", row.url)?;
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct JsonCheck<'a> {
    name: &'a str,
    category: String,
    url: &'a str,
    text: &'a str,
    result: String,
}

/// Render results as JSON for tooling integration.
pub fn render_json<W: Write>(results: &[CheckResult], writer: &mut W) -> std::io::Result<()> {
    let rows: Vec<JsonCheck<'_>> = results
        .iter()
        .map(|r| JsonCheck {
            name: r.name,
            category: r.category.to_string(),
            url: r.url,
            text: &r.text,
            result: r.outcome.to_string(),
        })
        .collect();

    serde_json::to_writer_pretty(&mut *writer, &rows)?;
    writeln!(writer)
}
