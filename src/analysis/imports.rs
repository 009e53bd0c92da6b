//! Minimal Python import detection.
//!
//! Checkers only need to know which modules a file imports, so this is a
//! line scanner, not a grammar parser: it recognizes `import a.b, c as d`
//! and `from a.b import c` statements and yields each imported module path
//! split into its dotted segments. Anything unreadable or unrecognized
//! yields nothing; an unparsable entrypoint means "no imports found",
//! never a failure.

use std::fs;
use std::path::Path;

/// Scan a Python source file and return the imported module paths.
///
/// Each element is one dotted module path split into segments, e.g.
/// `from charms.reactive import stuff` yields `["charms", "reactive"]`.
pub fn scan_imports(path: &Path) -> Vec<Vec<String>> {
    let Ok(source) = fs::read_to_string(path) else {
        return Vec::new();
    };
    scan_source(&source)
}

/// Scan already-loaded Python source for import statements.
pub fn scan_source(source: &str) -> Vec<Vec<String>> {
    let mut found = Vec::new();
    for line in source.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("import ") {
            for item in rest.split(',') {
                if let Some(module) = first_word(item) {
                    found.push(split_dotted(module));
                }
            }
        } else if let Some(rest) = line.strip_prefix("from ") {
            // only a real `from X import Y` statement counts
            let mut words = rest.split_whitespace();
            if let (Some(module), Some("import")) = (words.next(), words.next()) {
                found.push(split_dotted(module));
            }
        }
    }
    found
}

/// First whitespace-delimited word of a fragment, dropping any `as` alias.
fn first_word(fragment: &str) -> Option<&str> {
    fragment.split_whitespace().next()
}

fn split_dotted(module: &str) -> Vec<String> {
    module.split('.').map(str::to_string).collect()
}
