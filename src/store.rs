// File: ./src/store.rs
//! Read-only view over the export root.
//!
//! Layout on disk: one directory per run, each holding `output<N>.csv` files.
//! Nothing here writes, caches, or interprets CSV content.
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

pub const DEFAULT_EXPORT_ROOT: &str = "../Calendar-Output";

#[derive(Debug)]
pub enum StoreError {
    /// The requested run or file does not exist (or names a path outside the root).
    NotFound,
    Io(io::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound => write!(f, "Not found"),
            StoreError::Io(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::NotFound => None,
            StoreError::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

/// Index embedded in an export file name, if the name is `output<digits>.csv`
/// (ASCII case-insensitive).
pub fn export_index(name: &str) -> Option<u64> {
    let lower = name.to_ascii_lowercase();
    let digits = lower.strip_prefix("output")?.strip_suffix(".csv")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    // Absurdly long indices still order after every shorter one.
    Some(digits.parse().unwrap_or(u64::MAX))
}

/// First run of ASCII digits in `name` as a number, 0 when there is none.
pub fn numeric_suffix(name: &str) -> u64 {
    name.split(|c: char| !c.is_ascii_digit())
        .find(|part| !part.is_empty())
        .map(|digits| digits.parse().unwrap_or(u64::MAX))
        .unwrap_or(0)
}

/// A single path component supplied by a caller. Anything that could leave
/// the directory it is joined onto is refused.
fn checked_segment(segment: &str) -> Option<&str> {
    let bad = segment.is_empty()
        || segment == "."
        || segment == ".."
        || segment.contains(['/', '\\', '\0']);
    if bad { None } else { Some(segment) }
}

#[derive(Debug, Clone)]
pub struct ExportTree {
    root: PathBuf,
}

impl ExportTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn run_dir(&self, run: &str) -> Option<PathBuf> {
        checked_segment(run).map(|run| self.root.join(run))
    }

    /// Run directory names, most recently modified first.
    ///
    /// A missing root is an empty list. Runs sharing an mtime keep the order
    /// the directory listing produced.
    pub async fn list_runs(&self) -> Result<Vec<String>, StoreError> {
        let mut entries = match tokio::fs::read_dir(&self.root).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("Export root {:?} does not exist", self.root);
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut runs: Vec<(String, SystemTime)> = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            if !entry.file_type().await?.is_dir() {
                continue;
            }
            let modified = tokio::fs::metadata(entry.path()).await?.modified()?;
            runs.push((entry.file_name().to_string_lossy().into_owned(), modified));
        }

        runs.sort_by(|a, b| b.1.cmp(&a.1));
        Ok(runs.into_iter().map(|(name, _)| name).collect())
    }

    /// Export file names of `run`, ordered by their numeric index.
    ///
    /// An unknown run is an empty list.
    pub async fn list_files(&self, run: &str) -> Result<Vec<String>, StoreError> {
        let Some(dir) = self.run_dir(run) else {
            log::warn!("Refusing run name {:?}", run);
            return Ok(Vec::new());
        };
        let mut entries = match tokio::fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            if export_index(&name).is_none() || entry.file_type().await?.is_dir() {
                continue;
            }
            files.push(name);
        }

        files.sort_by_key(|name| numeric_suffix(name));
        Ok(files)
    }

    /// Raw text of `<root>/<run>/<file>`. Invalid UTF-8 is replaced, not rejected.
    pub async fn read_file(&self, run: &str, file: &str) -> Result<String, StoreError> {
        let path = self
            .run_dir(run)
            .zip(checked_segment(file))
            .map(|(dir, file)| dir.join(file))
            .ok_or(StoreError::NotFound)?;

        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(String::from_utf8_lossy(&bytes).into_owned()),
            // A run name that is a plain file has no files under it.
            Err(e) if matches!(e.kind(), io::ErrorKind::NotFound | io::ErrorKind::NotADirectory) => {
                Err(StoreError::NotFound)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_names() {
        assert_eq!(export_index("output1.csv"), Some(1));
        assert_eq!(export_index("OUTPUT007.CSV"), Some(7));
        assert_eq!(export_index("output.csv"), None);
        assert_eq!(export_index("output1.csv.bak"), None);
        assert_eq!(export_index("output-1.csv"), None);
        assert_eq!(export_index("myoutput1.csv"), None);
    }

    #[test]
    fn suffix_defaults_to_zero() {
        assert_eq!(numeric_suffix("output12.csv"), 12);
        assert_eq!(numeric_suffix("readme"), 0);
    }

    #[test]
    fn traversal_segments_are_refused() {
        for bad in ["", ".", "..", "a/b", "..\\x", "nul\0"] {
            assert!(checked_segment(bad).is_none(), "{:?}", bad);
        }
        assert_eq!(checked_segment("2024-05-01_batch"), Some("2024-05-01_batch"));
        assert_eq!(checked_segment("..hidden"), Some("..hidden"));
    }
}
