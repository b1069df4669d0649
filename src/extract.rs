//! Page extraction: fetch one listing page and keep the anchors whose text
//! matches the keyword set.

use crate::error::FetchError;
use crate::fetchers::Fetcher;
use crate::matcher::KeywordMatcher;
use crate::parsers::html;
use crate::results::MatchedRecord;
use chrono::{Local, NaiveDate};
use url::Url;

/// Outcome of extracting one source
///
/// A failed fetch is not an error for the caller: it yields no records. The
/// cause is kept so the orchestrator can log it.
#[derive(Debug)]
pub enum Extraction {
    /// The page was fetched and parsed (possibly with no matches)
    Records(Vec<MatchedRecord>),
    /// The page could not be fetched
    Failed(FetchError),
}

impl Extraction {
    /// Records found, empty when the fetch failed
    pub fn into_records(self) -> Vec<MatchedRecord> {
        match self {
            Extraction::Records(records) => records,
            Extraction::Failed(_) => Vec::new(),
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Extraction::Failed(_))
    }
}

/// Fetches pages and turns their matching anchors into records
pub struct Extractor<F> {
    fetcher: F,
    matcher: KeywordMatcher,
}

impl<F: Fetcher> Extractor<F> {
    pub fn new(fetcher: F, matcher: KeywordMatcher) -> Self {
        Self { fetcher, matcher }
    }

    /// Fetch `source` once and return its matching anchors, dated today
    pub async fn extract(&self, source: &Url) -> Extraction {
        match self.fetcher.fetch(source).await {
            Ok(body) => {
                let today = Local::now().date_naive();
                let records = matched_records(&body, source, &self.matcher, today);
                ::log::info!("Found {} matching links in {}", records.len(), source);
                Extraction::Records(records)
            }
            Err(e) => {
                ::log::warn!("Failed to fetch {}: {}", source, e);
                Extraction::Failed(e)
            }
        }
    }
}

/// Build records from the anchors of `html` whose text satisfies `matcher`
///
/// Relative destinations are resolved against `source`. Anchors with no text,
/// no destination, or a destination that cannot be resolved are skipped.
pub fn matched_records(
    html: &str,
    source: &Url,
    matcher: &KeywordMatcher,
    today: NaiveDate,
) -> Vec<MatchedRecord> {
    html::parse_anchors(html)
        .into_iter()
        .filter(|anchor| anchor.is_usable() && matcher.matches(&anchor.text))
        .filter_map(|anchor| match source.join(&anchor.href) {
            Ok(link) => Some(MatchedRecord::new(
                anchor.text,
                link.to_string(),
                source.to_string(),
                today,
            )),
            Err(e) => {
                ::log::debug!("Skipping unresolvable href {:?}: {}", anchor.href, e);
                None
            }
        })
        .collect()
}
