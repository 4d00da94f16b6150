// File: ./src/source.rs
//! Where the viewer gets runs, file lists and CSV text from.
use crate::store::{ExportTree, StoreError};
use anyhow::{Result, anyhow};
use async_trait::async_trait;

/// The three read operations of the local file API.
///
/// Implemented over HTTP by [`crate::client::ShimClient`] and directly over the
/// filesystem by [`ExportTree`]. Both must answer identically for the same tree.
#[async_trait]
pub trait ScheduleSource: Send + Sync {
    /// Run names, most recent first.
    async fn list_runs(&self) -> Result<Vec<String>>;
    /// Export file names of a run in index order.
    async fn list_files(&self, run: &str) -> Result<Vec<String>>;
    /// Raw CSV text of one export.
    async fn fetch_file(&self, run: &str, file: &str) -> Result<String>;

    /// Human readable origin, for the status line.
    fn describe(&self) -> String;
}

#[async_trait]
impl ScheduleSource for ExportTree {
    async fn list_runs(&self) -> Result<Vec<String>> {
        Ok(ExportTree::list_runs(self).await?)
    }

    async fn list_files(&self, run: &str) -> Result<Vec<String>> {
        Ok(ExportTree::list_files(self, run).await?)
    }

    async fn fetch_file(&self, run: &str, file: &str) -> Result<String> {
        match self.read_file(run, file).await {
            Ok(text) => Ok(text),
            Err(StoreError::NotFound) => Err(anyhow!("Not found: {}/{}", run, file)),
            Err(e) => Err(e.into()),
        }
    }

    fn describe(&self) -> String {
        self.root().display().to_string()
    }
}
