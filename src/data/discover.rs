use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Result, ScatterError};

/// Find files in `dir` (non-recursive) whose names match `pattern`.
///
/// Only regular files are returned, sorted by path. An empty result is not
/// an error.
pub fn discover_inputs(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let full_pattern = if dir == Path::new(".") {
        pattern.to_string()
    } else {
        // The directory part is literal; only the file pattern may glob.
        format!(
            "{}/{}",
            glob::Pattern::escape(&dir.display().to_string()),
            pattern
        )
    };

    let paths = glob::glob(&full_pattern).map_err(|source| ScatterError::Pattern {
        pattern: full_pattern.clone(),
        source,
    })?;

    let mut files = Vec::new();
    for entry in paths {
        let path = entry.map_err(|e| ScatterError::Io {
            path: e.path().to_path_buf(),
            source: std::io::Error::new(e.error().kind(), e.error().to_string()),
        })?;
        if path.is_file() {
            files.push(path);
        } else {
            debug!("Skipping non-file match {}", path.display());
        }
    }
    files.sort();

    debug!("Pattern {full_pattern} matched {} file(s)", files.len());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn matches_only_pattern_files() {
        let temp_dir = TempDir::new().unwrap();
        for name in ["scatterB.xlsx", "scatterA.xlsx", "other.xlsx", "scatter.csv"] {
            fs::write(temp_dir.path().join(name), b"").unwrap();
        }

        let files = discover_inputs(temp_dir.path(), "scatter*.xlsx").unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["scatterA.xlsx", "scatterB.xlsx"]);
    }

    #[test]
    fn zero_matches_is_not_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let files = discover_inputs(temp_dir.path(), "scatter*.xlsx").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn skips_directories_and_nested_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("scatterDir.xlsx")).unwrap();
        fs::create_dir(temp_dir.path().join("nested")).unwrap();
        fs::write(temp_dir.path().join("nested/scatterC.xlsx"), b"").unwrap();

        let files = discover_inputs(temp_dir.path(), "scatter*.xlsx").unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn directory_metacharacters_are_literal() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("run[1]");
        fs::create_dir(&dir).unwrap();
        fs::write(dir.join("scatterA.xlsx"), b"").unwrap();

        let files = discover_inputs(&dir, "scatter*.xlsx").unwrap();
        assert_eq!(files, vec![dir.join("scatterA.xlsx")]);
    }

    #[test]
    fn invalid_pattern_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let err = discover_inputs(temp_dir.path(), "scatter[.xlsx").unwrap_err();
        assert!(matches!(err, ScatterError::Pattern { .. }));
    }
}
