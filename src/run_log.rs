use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};
use std::fmt;
use tokio::sync::Mutex;

/// Label recorded when a run had no state or day filter
pub const ALL: &str = "all";

/// Recency window requested for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayWindow {
    All,
    Days(u32),
}

impl From<Option<u32>> for DayWindow {
    fn from(days: Option<u32>) -> Self {
        days.map_or(DayWindow::All, DayWindow::Days)
    }
}

impl fmt::Display for DayWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayWindow::All => f.write_str(ALL),
            DayWindow::Days(days) => write!(f, "{}", days),
        }
    }
}

impl Serialize for DayWindow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DayWindow::All => serializer.serialize_str(ALL),
            DayWindow::Days(days) => serializer.serialize_u32(*days),
        }
    }
}

/// Summary of one completed collection run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunLogEntry {
    /// Local time the run finished
    pub timestamp: NaiveDateTime,
    /// Requested state filter, or `"all"`
    pub state_filter: String,
    pub day_window: DayWindow,
    /// Number of exported records
    pub count: usize,
}

impl RunLogEntry {
    pub fn new(
        timestamp: NaiveDateTime,
        state_filter: Option<&str>,
        day_window: Option<u32>,
        count: usize,
    ) -> Self {
        let state_filter = match state_filter {
            Some(state) if !state.is_empty() => state.to_string(),
            _ => ALL.to_string(),
        };
        Self {
            timestamp,
            state_filter,
            day_window: day_window.into(),
            count,
        }
    }

    /// Timestamp as shown in the history view
    pub fn timestamp_label(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Append-only history of runs, kept for the life of the process
///
/// Appends are serialized by the lock, so entries appear in the order the runs
/// completed. Readers get a copy and never observe a partial append.
#[derive(Debug, Default)]
pub struct RunLog {
    entries: Mutex<Vec<RunLogEntry>>,
}

impl RunLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn append(&self, entry: RunLogEntry) {
        let mut entries = self.entries.lock().await;
        ::log::debug!(
            "Run log entry #{}: state={} days={} count={}",
            entries.len() + 1,
            entry.state_filter,
            entry.day_window,
            entry.count
        );
        entries.push(entry);
    }

    /// Snapshot of every entry, oldest first
    pub async fn all(&self) -> Vec<RunLogEntry> {
        self.entries.lock().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
