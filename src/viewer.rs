// File: ./src/viewer.rs
//! Viewer state and the operations that are allowed to change it.
//!
//! Rendering reads a `ViewerState` and nothing else; every transition goes
//! through one of the methods below.
use crate::model::layout::{WeekView, layout_week};
use crate::model::{CalendarEvent, parse_events};
use crate::source::ScheduleSource;
use anyhow::{Context, Result};
use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerState {
    pub runs: Vec<String>,
    pub selected_run: Option<String>,
    pub files: Vec<String>,
    pub index: usize,
    pub events: Vec<CalendarEvent>,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discovers runs and opens the most recent one, if any.
    pub async fn initialize(&mut self, source: &dyn ScheduleSource) -> Result<()> {
        let runs = source.list_runs().await.context("Failed to list runs")?;
        log::info!("Found {} run(s) in {}", runs.len(), source.describe());
        self.runs = runs;
        if let Some(first) = self.runs.first().cloned() {
            self.selected_run = Some(first.clone());
            self.load_run(source, &first).await?;
        }
        Ok(())
    }

    /// Lists `run`'s files and shows the first one (or nothing).
    pub async fn load_run(&mut self, source: &dyn ScheduleSource, run: &str) -> Result<()> {
        let files = source
            .list_files(run)
            .await
            .with_context(|| format!("Failed to list files of run '{}'", run))?;
        self.files = files;
        self.index = 0;
        match self.files.first().cloned() {
            Some(first) => self.events = fetch_events(source, run, &first).await?,
            None => self.events.clear(),
        }
        log::debug!(
            "Loaded run '{}': {} file(s), {} event(s)",
            run,
            self.files.len(),
            self.events.len()
        );
        Ok(())
    }

    /// Shows file `i` of the selected run. Out of range, or no run: nothing happens.
    pub async fn load_index(&mut self, source: &dyn ScheduleSource, i: i64) -> Result<()> {
        let Some(run) = self.selected_run.clone() else {
            return Ok(());
        };
        if i < 0 || i as usize >= self.files.len() {
            return Ok(());
        }
        let i = i as usize;
        self.index = i;
        let file = self.files[i].clone();
        self.events = fetch_events(source, &run, &file).await?;
        Ok(())
    }

    pub async fn next(&mut self, source: &dyn ScheduleSource) -> Result<()> {
        self.load_index(source, self.index as i64 + 1).await
    }

    pub async fn previous(&mut self, source: &dyn ScheduleSource) -> Result<()> {
        self.load_index(source, self.index as i64 - 1).await
    }

    pub async fn select_run(&mut self, source: &dyn ScheduleSource, run: &str) -> Result<()> {
        self.selected_run = Some(run.to_string());
        self.load_run(source, run).await
    }

    pub fn current_file(&self) -> Option<&str> {
        self.files.get(self.index).map(String::as_str)
    }

    pub fn can_go_previous(&self) -> bool {
        self.index > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.index + 1 < self.files.len()
    }

    /// `"3 / 12"`, or `"0 / 0"` with nothing loaded.
    pub fn position_label(&self) -> String {
        if self.files.is_empty() {
            "0 / 0".to_string()
        } else {
            format!("{} / {}", self.index + 1, self.files.len())
        }
    }

    /// The run `step` places away from the selected one in the run list, wrapping.
    pub fn neighbour_run(&self, step: isize) -> Option<&str> {
        if self.runs.is_empty() {
            return None;
        }
        let len = self.runs.len() as isize;
        let current = self
            .selected_run
            .as_ref()
            .and_then(|sel| self.runs.iter().position(|r| r == sel))
            .unwrap_or(0) as isize;
        let target = (current + step).rem_euclid(len) as usize;
        self.runs.get(target).map(String::as_str)
    }

    pub fn week(&self, today: NaiveDate) -> WeekView {
        layout_week(&self.events, today)
    }
}

async fn fetch_events(
    source: &dyn ScheduleSource,
    run: &str,
    file: &str,
) -> Result<Vec<CalendarEvent>> {
    let text = source
        .fetch_file(run, file)
        .await
        .with_context(|| format!("Failed to fetch '{}/{}'", run, file))?;
    Ok(parse_events(&text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_files(n: usize) -> ViewerState {
        ViewerState {
            runs: vec!["a".into(), "b".into(), "c".into()],
            selected_run: Some("a".into()),
            files: (1..=n).map(|i| format!("output{}.csv", i)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn position_label_and_bounds() {
        let mut state = with_files(3);
        assert_eq!(state.position_label(), "1 / 3");
        assert!(!state.can_go_previous());
        assert!(state.can_go_next());
        state.index = 2;
        assert_eq!(state.position_label(), "3 / 3");
        assert!(state.can_go_previous());
        assert!(!state.can_go_next());
        assert_eq!(ViewerState::new().position_label(), "0 / 0");
    }

    #[test]
    fn neighbour_run_wraps() {
        let state = with_files(1);
        assert_eq!(state.neighbour_run(1), Some("b"));
        assert_eq!(state.neighbour_run(-1), Some("c"));
        assert_eq!(ViewerState::new().neighbour_run(1), None);
    }
}
