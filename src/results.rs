use chrono::NaiveDate;
use serde::Deserialize;

/// Placeholder stored in `pdf_match` until linked documents are inspected
pub const PDF_MATCH_PLACEHOLDER: &str = "not applicable";

/// Spreadsheet column labels, in export order
pub const COLUMN_HEADERS: [&str; 5] = ["Título", "Link", "Fonte", "PDF Match", "Data de Extração"];

/// One hyperlink whose visible text matched the keyword set
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MatchedRecord {
    /// Trimmed display text of the anchor
    #[serde(rename = "Título")]
    pub title: String,

    /// Absolute destination URL
    #[serde(rename = "Link")]
    pub link: String,

    /// Page the anchor was found on
    #[serde(rename = "Fonte")]
    pub source: String,

    /// Reserved classification field
    #[serde(rename = "PDF Match")]
    pub pdf_match: String,

    /// Day the record was extracted
    #[serde(rename = "Data de Extração")]
    pub extracted_at: NaiveDate,
}

impl MatchedRecord {
    /// Create a new record with the placeholder `pdf_match` value
    pub fn new(title: String, link: String, source: String, extracted_at: NaiveDate) -> Self {
        Self {
            title,
            link,
            source,
            pdf_match: PDF_MATCH_PLACEHOLDER.to_string(),
            extracted_at,
        }
    }

    /// Field values as spreadsheet cells, in `COLUMN_HEADERS` order
    pub fn cells(&self) -> [String; 5] {
        [
            self.title.clone(),
            self.link.clone(),
            self.source.clone(),
            self.pdf_match.clone(),
            self.extracted_at.format("%Y-%m-%d").to_string(),
        ]
    }
}

/// Ordered collection of records produced by one collection run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordTable {
    records: Vec<MatchedRecord>,
}

impl RecordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append records, keeping their order
    pub fn extend(&mut self, records: impl IntoIterator<Item = MatchedRecord>) {
        self.records.extend(records);
    }

    /// Keep only the records for which `keep` returns true, preserving order
    pub fn retain(&mut self, keep: impl FnMut(&MatchedRecord) -> bool) {
        self.records.retain(keep);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[MatchedRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchedRecord> {
        self.records.iter()
    }
}

impl From<Vec<MatchedRecord>> for RecordTable {
    fn from(records: Vec<MatchedRecord>) -> Self {
        Self { records }
    }
}

impl FromIterator<MatchedRecord> for RecordTable {
    fn from_iter<I: IntoIterator<Item = MatchedRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RecordTable {
    type Item = MatchedRecord;
    type IntoIter = std::vec::IntoIter<MatchedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordTable {
    type Item = &'a MatchedRecord;
    type IntoIter = std::slice::Iter<'a, MatchedRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
