//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to existing files, sorted and without duplicates
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;

            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        return Err(CliError::NoInputFiles(patterns.to_vec()).into());
    }

    files.sort();
    files.dedup();

    log::info!("{} input files", files.len());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolves_glob_sorted_and_deduplicated() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["b.txt", "a.txt", "c.md"] {
            fs::write(temp_dir.path().join(name), "x").unwrap();
        }
        let pattern = temp_dir.path().join("*.txt").display().to_string();
        let exact = temp_dir.path().join("a.txt").display().to_string();

        let files = resolve_patterns(&[pattern, exact]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.txt", "b.txt"]);
    }

    #[test]
    fn test_no_match() {
        let err = resolve_patterns(&["/nonexistent/*.txt".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::NoInputFiles(_))
        ));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[".to_string()]).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_directories_are_skipped() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("sub")).unwrap();
        let pattern = temp_dir.path().join("*").display().to_string();
        assert!(resolve_patterns(&[pattern]).is_err());
    }
}
