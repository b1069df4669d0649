use crate::results::{MatchedRecord, RecordTable};
use chrono::NaiveDate;

/// Optional narrowing applied to a collected table
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    /// Case-insensitive substring required in the record's source URL
    pub state: Option<String>,
    /// Earliest extraction date kept
    pub min_date: Option<NaiveDate>,
}

impl RecordFilter {
    pub fn new(state: Option<&str>, min_date: Option<NaiveDate>) -> Self {
        Self {
            state: state.map(str::to_string),
            min_date,
        }
    }

    /// Determine if a record passes every configured filter
    pub fn accepts(&self, record: &MatchedRecord) -> bool {
        self.accepts_state(record) && self.accepts_date(record)
    }

    fn accepts_state(&self, record: &MatchedRecord) -> bool {
        match &self.state {
            // An empty filter is treated as absent
            Some(state) if !state.is_empty() => record
                .source
                .to_lowercase()
                .contains(&state.to_lowercase()),
            _ => true,
        }
    }

    fn accepts_date(&self, record: &MatchedRecord) -> bool {
        self.min_date
            .is_none_or(|min_date| record.extracted_at >= min_date)
    }

    /// Drop the records that fail the filter, keeping the survivors' order
    pub fn apply(&self, table: &mut RecordTable) {
        let before = table.len();
        table.retain(|record| self.accepts(record));
        if table.len() != before {
            ::log::debug!(
                "Filter {:?} kept {} of {} records",
                self,
                table.len(),
                before
            );
        }
    }
}
