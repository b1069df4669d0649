use crate::error::FetchError;
use crate::fetchers::Fetcher;
use std::collections::HashMap;
use std::time::Duration;
use url::Url;

/// Canned response for one URL
#[derive(Debug, Clone)]
pub enum StubPage {
    Html(String),
    Status(u16),
    Timeout,
}

/// In-memory fetcher; unknown URLs answer 404
#[derive(Debug, Clone, Default)]
pub struct StubFetcher {
    pages: HashMap<String, StubPage>,
    delay: Option<Duration>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_html(mut self, url: &str, html: &str) -> Self {
        self.pages
            .insert(url.to_string(), StubPage::Html(html.to_string()));
        self
    }

    pub fn with_page(mut self, url: &str, page: StubPage) -> Self {
        self.pages.insert(url.to_string(), page);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

impl Fetcher for StubFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match self.pages.get(url.as_str()) {
            Some(StubPage::Html(html)) => Ok(html.clone()),
            Some(StubPage::Status(code)) => Err(FetchError::Status(*code)),
            Some(StubPage::Timeout) => Err(FetchError::Timeout(Duration::from_secs(30))),
            None => Err(FetchError::Status(404)),
        }
    }
}
