use crate::parsers::Anchor;
use scraper::{Html, Selector};

/// Parses HTML content and returns every anchor that carries an `href`
///
/// Anchor text is the concatenation of all descendant text nodes, trimmed.
/// Anchors are returned in document order.
pub fn parse_anchors(html: &str) -> Vec<Anchor> {
    let doc = Html::parse_document(html);

    let link_selector = Selector::parse("a[href]").unwrap();
    let anchors = doc
        .select(&link_selector)
        .filter_map(|e| {
            let href = e.value().attr("href")?;
            let text = e.text().collect::<String>();
            Some(Anchor::new(text.trim().to_string(), href.trim().to_string()))
        })
        .collect::<Vec<_>>();

    ::log::debug!("HTML parser found {} anchors", anchors.len());
    if !anchors.is_empty() {
        ::log::trace!(
            "First few anchors: {:?}",
            anchors.iter().take(5).collect::<Vec<_>>()
        );
    }

    anchors
}
