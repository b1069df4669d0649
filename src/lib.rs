pub mod collect;
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod fetchers;
pub mod filter;
pub mod history;
pub mod matcher;
pub mod parsers;
pub mod results;
pub mod run_log;

// Re-export commonly used types for convenience
pub use config::HarvestConfig;
pub use error::{ExportError, FetchError, HarvestError};
pub use results::{MatchedRecord, RecordTable};
pub use run_log::{RunLog, RunLogEntry};

use chrono::{Days, Local, NaiveDate};
use extract::Extractor;
use fetchers::{Fetcher, HttpFetcher};
use filter::RecordFilter;
use matcher::KeywordMatcher;
use std::path::PathBuf;
use std::sync::Arc;

/// Spreadsheet produced by a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportResult {
    pub file_path: PathBuf,
    pub record_count: usize,
}

/// Result of one collect-filter-export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Records were found and written
    Exported(ExportResult),
    /// Nothing survived the filters; no file was written and nothing was logged
    NoResults,
}

/// Drives collection runs over the configured sources and keeps their history
pub struct Harvester<F = HttpFetcher> {
    extractor: Extractor<F>,
    sources: Vec<String>,
    export_path: PathBuf,
    run_log: Arc<RunLog>,
}

impl Harvester<HttpFetcher> {
    /// Create a harvester that fetches pages over HTTP
    pub fn new(config: &HarvestConfig) -> Result<Self, HarvestError> {
        let fetcher = HttpFetcher::new(config)?;
        Ok(Self::with_fetcher(config, fetcher))
    }
}

impl<F: Fetcher> Harvester<F> {
    /// Create a harvester with a custom page fetcher
    pub fn with_fetcher(config: &HarvestConfig, fetcher: F) -> Self {
        Self {
            extractor: Extractor::new(fetcher, KeywordMatcher::new(&config.keywords)),
            sources: config.sources.clone(),
            export_path: config.export_path.clone(),
            run_log: Arc::new(RunLog::new()),
        }
    }

    /// Record runs into an existing log, e.g. one shared with a history view
    pub fn with_run_log(mut self, run_log: Arc<RunLog>) -> Self {
        self.run_log = run_log;
        self
    }

    /// Collect and filter records without exporting or logging
    pub async fn collect(
        &self,
        state_filter: Option<&str>,
        min_date: Option<NaiveDate>,
    ) -> RecordTable {
        let filter = RecordFilter::new(state_filter, min_date);
        collect::collect(&self.extractor, &self.sources, &filter).await
    }

    /// Run a full collection and export the result
    ///
    /// `day_window` keeps records extracted within the last `day_window` days
    /// (today counts as day 0). When records remain they are written to the
    /// export path and one entry is appended to the run log; otherwise
    /// [`RunOutcome::NoResults`] is returned and the log is left untouched.
    pub async fn collect_and_export(
        &self,
        state_filter: Option<&str>,
        day_window: Option<u32>,
    ) -> Result<RunOutcome, HarvestError> {
        ::log::info!(
            "Starting collection (state: {:?}, days: {:?})",
            state_filter,
            day_window
        );

        let min_date = day_window.map(min_date_for_window);
        let table = self.collect(state_filter, min_date).await;
        if table.is_empty() {
            ::log::info!("No records matched the requested filters");
            return Ok(RunOutcome::NoResults);
        }

        let file_path = export::export(&table, &self.export_path)?;
        let record_count = table.len();

        let entry = RunLogEntry::new(
            Local::now().naive_local(),
            state_filter,
            day_window,
            record_count,
        );
        self.run_log.append(entry).await;

        Ok(RunOutcome::Exported(ExportResult {
            file_path,
            record_count,
        }))
    }

    /// Snapshot of every completed run, oldest first
    pub async fn run_log(&self) -> Vec<RunLogEntry> {
        self.run_log.all().await
    }

    pub fn shared_run_log(&self) -> Arc<RunLog> {
        Arc::clone(&self.run_log)
    }
}

/// Earliest extraction date inside a window of `days` days ending today
pub fn min_date_for_window(days: u32) -> NaiveDate {
    Local::now()
        .date_naive()
        .checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN)
}
