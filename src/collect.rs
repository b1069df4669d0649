use crate::extract::{Extraction, Extractor};
use crate::fetchers::Fetcher;
use crate::filter::RecordFilter;
use crate::results::RecordTable;
use url::Url;

/// Runs the extractor over every source in order and filters the merged result
///
/// Sources are fetched one at a time. A source that cannot be parsed as a URL
/// or whose page cannot be fetched is logged and skipped; it never aborts the
/// run. The returned table keeps source order, then anchor order within a page.
pub async fn collect<F: Fetcher>(
    extractor: &Extractor<F>,
    sources: &[String],
    filter: &RecordFilter,
) -> RecordTable {
    let mut table = RecordTable::new();

    for source in sources {
        let url = match Url::parse(source) {
            Ok(url) => url,
            Err(e) => {
                ::log::error!("Skipping invalid source {:?}: {}", source, e);
                continue;
            }
        };

        match extractor.extract(&url).await {
            Extraction::Records(records) => table.extend(records),
            Extraction::Failed(e) => {
                ::log::error!("Error accessing {}: {}", url, e);
            }
        }
    }

    ::log::info!(
        "Collected {} records from {} sources",
        table.len(),
        sources.len()
    );

    filter.apply(&mut table);
    table
}
