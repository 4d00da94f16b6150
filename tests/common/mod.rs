// Shared fixtures for integration tests: a throwaway export root on disk.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

pub const HEADER: &str = "Subject,Start Date,End Date,Start Time,End Time";

/// A temporary export root, removed on drop.
pub struct TempTree {
    pub root: PathBuf,
}

impl TempTree {
    pub fn new() -> Self {
        let root = std::env::temp_dir().join(format!("schedview_tree_{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&root).expect("failed to create temp export root");
        Self { root }
    }

    /// A path under the temp dir that does not exist.
    pub fn missing() -> PathBuf {
        std::env::temp_dir().join(format!("schedview_missing_{}", uuid::Uuid::new_v4()))
    }

    pub fn run(&self, name: &str) -> PathBuf {
        let dir = self.root.join(name);
        fs::create_dir_all(&dir).expect("failed to create run dir");
        dir
    }

    pub fn file(&self, run: &str, name: &str, contents: &str) -> PathBuf {
        let path = self.run(run).join(name);
        fs::write(&path, contents).expect("failed to write export file");
        path
    }

    /// Pins a run directory's mtime to `secs` after the epoch.
    pub fn touch_run(&self, run: &str, secs: u64) {
        set_mtime(&self.root.join(run), secs);
    }
}

impl Drop for TempTree {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

pub fn set_mtime(path: &Path, secs: u64) {
    let time = SystemTime::UNIX_EPOCH + Duration::from_secs(secs);
    fs::File::open(path)
        .and_then(|f| f.set_modified(time))
        .expect("failed to set mtime");
}

/// A CSV in the generator's column order with one row per `(subject, date, start, end)`.
pub fn csv(rows: &[(&str, &str, &str, &str)]) -> String {
    let mut out = String::from(HEADER);
    for (subject, date, start, end) in rows {
        out.push_str(&format!("\n{},{},{},{},{}", subject, date, date, start, end));
    }
    out.push('\n');
    out
}
