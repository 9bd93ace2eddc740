//! Stack detection over a project directory
//!
//! A stack is declared by a marker file named `Pulumi.<stack-name>.yaml` at the
//! top level of the project directory. Detection is purely lexical: filenames
//! are matched against a fixed pattern and the marker files are never opened.
//! Results come back in directory-iteration order; callers must not assume
//! alphabetical order, and duplicate tokens are preserved as-is.

use regex::Regex;
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;

/// Filename pattern declaring a stack. The capture group is the stack name.
const STACK_FILE_PATTERN: &str = r"^Pulumi\.(.+)\.yaml$";

/// Marker file whose presence makes a directory a Pulumi project root.
const PROJECT_MARKER: &str = "Pulumi.yaml";

#[derive(Error, Debug)]
pub enum DetectError {
    #[error("failed to resolve current directory: {0}")]
    CurrentDir(#[source] io::Error),
    #[error("failed to read directory {path}: {source}")]
    ReadDir { path: PathBuf, source: io::Error },
}

fn stack_file_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(STACK_FILE_PATTERN).expect("valid stack file pattern"))
}

/// Finds all stack names in `dir` by matching filenames against
/// `Pulumi.<stack-name>.yaml`.
///
/// Directories are skipped even when their name matches the pattern. No
/// recursion into subdirectories.
pub fn detect(dir: &Path) -> Result<Vec<String>, DetectError> {
    let entries = fs::read_dir(dir).map_err(|source| DetectError::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut stacks = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| DetectError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let file_type = entry.file_type().map_err(|source| DetectError::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        if file_type.is_dir() {
            continue;
        }

        let name = entry.file_name();
        let name = name.to_string_lossy();
        if let Some(captures) = stack_file_regex().captures(&name) {
            stacks.push(captures[1].to_string());
        }
    }

    Ok(stacks)
}

/// Finds all stack names in the current working directory.
pub fn detect_in_current_dir() -> Result<Vec<String>, DetectError> {
    let dir = env::current_dir().map_err(DetectError::CurrentDir)?;
    detect(&dir)
}

/// Returns the stacks that start with `prefix`, preserving order.
///
/// An empty prefix returns the input unchanged. Comparison is byte-literal
/// and case-sensitive.
pub fn filter_by_prefix(stacks: Vec<String>, prefix: &str) -> Vec<String> {
    if prefix.is_empty() {
        return stacks;
    }

    stacks
        .into_iter()
        .filter(|stack| stack.starts_with(prefix))
        .collect()
}

/// Checks whether `dir` contains a `Pulumi.yaml` project marker.
///
/// A directory named `Pulumi.yaml` does not count, and any stat error
/// (including a missing `dir`) yields `false` rather than an error.
pub fn has_project_marker(dir: &Path) -> bool {
    fs::metadata(dir.join(PROJECT_MARKER))
        .map(|meta| !meta.is_dir())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").expect("failed to create fixture file");
    }

    #[test]
    fn detect_finds_stack_files() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Pulumi.dev.yaml");
        touch(dir.path(), "Pulumi.production.yaml");
        touch(dir.path(), "Pulumi.yaml");
        touch(dir.path(), "notes.txt");

        let mut stacks = detect(dir.path()).unwrap();
        stacks.sort();
        assert_eq!(stacks, vec!["dev", "production"]);
    }

    #[test]
    fn detect_skips_directories_even_when_name_matches() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Pulumi.a.yaml");
        touch(dir.path(), "Pulumi.b.yaml");
        touch(dir.path(), "notes.txt");
        fs::create_dir(dir.path().join("Pulumi.c.yaml")).unwrap();

        let mut stacks = detect(dir.path()).unwrap();
        stacks.sort();
        assert_eq!(stacks, vec!["a", "b"]);
    }

    #[test]
    fn detect_keeps_empty_token() {
        // "Pulumi..yaml" captures the empty string; the detector does not
        // second-guess it.
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Pulumi..yaml");

        let stacks = detect(dir.path()).unwrap();
        assert_eq!(stacks, vec![""]);
    }

    #[test]
    fn detect_ignores_near_misses() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Pulumi.dev.yml");
        touch(dir.path(), "pulumi.dev.yaml");
        touch(dir.path(), "Pulumi.dev.yaml.bak");

        assert_eq!(detect(dir.path()).unwrap(), Vec::<String>::new());
    }

    #[test]
    fn detect_token_may_contain_dots() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Pulumi.dev.eu-west-1.yaml");

        assert_eq!(detect(dir.path()).unwrap(), vec!["dev.eu-west-1"]);
    }

    #[test]
    fn detect_errors_on_missing_directory() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");

        let err = detect(&missing).unwrap_err();
        assert!(matches!(err, DetectError::ReadDir { .. }));
    }

    #[test]
    #[serial]
    fn detect_in_current_dir_reads_working_directory() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "Pulumi.staging.yaml");

        let original = env::current_dir().unwrap();
        env::set_current_dir(dir.path()).unwrap();
        let result = detect_in_current_dir();
        env::set_current_dir(original).unwrap();

        assert_eq!(result.unwrap(), vec!["staging"]);
    }

    #[test]
    fn filter_by_prefix_keeps_order() {
        let stacks = vec![
            "dev".to_string(),
            "development".to_string(),
            "prod".to_string(),
        ];

        assert_eq!(
            filter_by_prefix(stacks, "dev"),
            vec!["dev".to_string(), "development".to_string()]
        );
    }

    #[test]
    fn filter_by_prefix_empty_prefix_is_identity() {
        let stacks = vec!["b".to_string(), "a".to_string()];

        assert_eq!(filter_by_prefix(stacks.clone(), ""), stacks);
    }

    #[test]
    fn filter_by_prefix_is_case_sensitive() {
        let stacks = vec!["Dev".to_string(), "dev".to_string()];

        assert_eq!(filter_by_prefix(stacks, "de"), vec!["dev".to_string()]);
    }

    #[test]
    fn project_marker_requires_a_file() {
        let dir = TempDir::new().unwrap();
        assert!(!has_project_marker(dir.path()));

        touch(dir.path(), "Pulumi.yaml");
        assert!(has_project_marker(dir.path()));
    }

    #[test]
    fn project_marker_rejects_directory() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("Pulumi.yaml")).unwrap();

        assert!(!has_project_marker(dir.path()));
    }

    #[test]
    fn project_marker_false_for_missing_dir() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("does-not-exist");

        assert!(!has_project_marker(&missing));
    }
}
