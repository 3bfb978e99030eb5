//! Roster file loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::roster::{RosterSpec, parse_rosters};

/// Loader for two-player roster text files.
pub struct RosterLoader;

impl RosterLoader {
    /// Load both roster sections from a text file.
    ///
    /// Sections are returned unvalidated; see [`RosterSpec::validate`].
    pub fn load(path: &Path) -> LoadResult<[RosterSpec; 2]> {
        let content = read_file(path)?;
        parse_rosters(&content)
            .map_err(|e| anyhow::anyhow!("Invalid roster {}: {}", path.display(), e))
    }

    /// Roster files (`*.txt`) in `dir`, sorted by file name.
    pub fn list(dir: &Path) -> LoadResult<Vec<std::path::PathBuf>> {
        let entries = std::fs::read_dir(dir)
            .map_err(|e| anyhow::anyhow!("Failed to read roster directory {}: {}", dir.display(), e))?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|ext| ext == "txt") {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}
