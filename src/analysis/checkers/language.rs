//! Implementation language detection.

use std::fs;
use std::path::Path;

use crate::analysis::checker::Checker;
use crate::analysis::context::AnalysisContext;
use crate::analysis::outcome::{CheckCategory, ContextValue, Outcome};
use crate::error::Result;

/// Detects the language the charm is written in.
///
/// Currently only Python is detected, when all of the following hold:
///
/// - the charm has a readable text `dispatch` script that invokes something
/// - the invoked entrypoint has a `.py` extension
/// - the entrypoint file is executable
///
/// On success the resolved entrypoint path is stashed in the context for
/// later checkers.
#[derive(Debug, Default)]
pub struct LanguageChecker;

impl LanguageChecker {
    pub const NAME: &'static str = "language";

    /// Context key for the resolved entrypoint path.
    pub const ENTRYPOINT_KEY: &'static str = "entrypoint";

    /// Launcher script every built charm carries at its root.
    const DISPATCH_FILE: &'static str = "dispatch";
}

impl Checker for LanguageChecker {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn category(&self) -> CheckCategory {
        CheckCategory::Attribute
    }

    fn url(&self) -> &'static str {
        "https://charmscan.dev/docs/checkers#language"
    }

    fn description(&self) -> &'static str {
        "The charm is written with Python."
    }

    fn run(&mut self, basedir: &Path, ctx: &mut AnalysisContext) -> Result<Outcome> {
        let dispatch = basedir.join(Self::DISPATCH_FILE);

        // unreadable or non-text dispatch is a soft unknown, not a crash
        let Ok(contents) = fs::read_to_string(&dispatch) else {
            return Ok(Outcome::Unknown);
        };

        // dispatch scripts may reassign the invoked command; the last
        // non-blank line is what actually runs
        let Some(last_line) = contents.lines().filter(|l| !l.trim().is_empty()).next_back() else {
            return Ok(Outcome::Unknown);
        };

        let entrypoint_str = match shlex::split(last_line) {
            Some(words) => match words.last() {
                Some(word) => word.clone(),
                None => return Ok(Outcome::Unknown),
            },
            None => return Ok(Outcome::Unknown),
        };

        let entrypoint = basedir.join(entrypoint_str);
        if entrypoint.extension().is_some_and(|ext| ext == "py") && is_executable(&entrypoint) {
            ctx.stash(
                Self::NAME,
                Self::ENTRYPOINT_KEY,
                ContextValue::Path(entrypoint),
            );
            Ok(Outcome::Python)
        } else {
            Ok(Outcome::Unknown)
        }
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    fs::metadata(path).is_ok_and(|m| m.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const EXAMPLE_DISPATCH: &str = "\n#!/bin/sh\n\nPYTHONPATH=lib:venv ./charm.py\n";

    fn write_executable(dir: &Path, name: &str, contents: &str) {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&path, fs::Permissions::from_mode(0o700)).unwrap();
        }
    }

    fn run(basedir: &Path) -> (Outcome, AnalysisContext) {
        let mut ctx = AnalysisContext::new();
        let outcome = LanguageChecker.run(basedir, &mut ctx).unwrap();
        (outcome, ctx)
    }

    #[test]
    fn python_charm_detected() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("dispatch"), EXAMPLE_DISPATCH).unwrap();
        write_executable(temp.path(), "charm.py", "");

        let (outcome, ctx) = run(temp.path());

        assert_eq!(outcome, Outcome::Python);
        assert_eq!(
            ctx.path_of(LanguageChecker::NAME, LanguageChecker::ENTRYPOINT_KEY),
            Some(temp.path().join("./charm.py").as_path())
        );
    }

    #[test]
    fn no_dispatch_is_unknown() {
        let temp = TempDir::new().unwrap();
        let (outcome, ctx) = run(temp.path());
        assert_eq!(outcome, Outcome::Unknown);
        assert!(!ctx.contains(LanguageChecker::NAME));
    }

    #[cfg(unix)]
    #[test]
    fn inaccessible_dispatch_is_unknown() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let dispatch = temp.path().join("dispatch");
        fs::write(&dispatch, EXAMPLE_DISPATCH).unwrap();
        fs::set_permissions(&dispatch, fs::Permissions::from_mode(0o000)).unwrap();

        let (outcome, _) = run(temp.path());
        assert_eq!(outcome, Outcome::Unknown);
    }

    #[test]
    fn undecodable_dispatch_is_unknown() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("dispatch"), [0xC0u8, 0xC0]).unwrap();

        let (outcome, _) = run(temp.path());
        assert_eq!(outcome, Outcome::Unknown);
    }

    #[test]
    fn empty_dispatch_is_unknown() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("dispatch"), "").unwrap();

        let (outcome, _) = run(temp.path());
        assert_eq!(outcome, Outcome::Unknown);
    }

    #[test]
    fn missing_entrypoint_is_unknown() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("dispatch"), EXAMPLE_DISPATCH).unwrap();

        let (outcome, _) = run(temp.path());
        assert_eq!(outcome, Outcome::Unknown);
    }

    #[test]
    fn non_python_entrypoint_is_unknown() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("dispatch"), "#!/bin/sh\n./charm\n").unwrap();
        write_executable(temp.path(), "charm", "");

        let (outcome, _) = run(temp.path());
        assert_eq!(outcome, Outcome::Unknown);
    }

    #[cfg(unix)]
    #[test]
    fn non_executable_entrypoint_is_unknown() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("dispatch"), EXAMPLE_DISPATCH).unwrap();
        fs::write(temp.path().join("charm.py"), "").unwrap();

        let (outcome, ctx) = run(temp.path());
        assert_eq!(outcome, Outcome::Unknown);
        assert!(!ctx.contains(LanguageChecker::NAME));
    }

    #[test]
    fn later_dispatch_lines_override_earlier_ones() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("dispatch"),
            "#!/bin/sh\n./other.sh\n./charm.py\n",
        )
        .unwrap();
        write_executable(temp.path(), "charm.py", "");

        let (outcome, _) = run(temp.path());
        assert_eq!(outcome, Outcome::Python);
    }
}
