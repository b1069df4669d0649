use crate::config::HarvestConfig;
use crate::error::FetchError;
use crate::fetchers::Fetcher;
use reqwest::Client;
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

/// Fetches pages with a plain HTTP GET
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
    timeout: Duration,
}

impl HttpFetcher {
    /// Build a fetcher using the timeout and user agent from `config`
    pub fn new(config: &HarvestConfig) -> Result<Self, FetchError> {
        let timeout = config.timeout();
        if timeout.as_secs() != config.timeout_secs {
            ::log::warn!(
                "Fetch timeout of {}s is too short, using {}s",
                config.timeout_secs,
                timeout.as_secs()
            );
        }

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(timeout)
            .build()?;

        Ok(Self { client, timeout })
    }

    async fn get_body(&self, url: &Url) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| self.classify(e))?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        // Decodes using the charset from Content-Type, falling back to UTF-8
        response.text().await.map_err(|e| self.classify(e))
    }

    fn classify(&self, error: reqwest::Error) -> FetchError {
        if error.is_timeout() {
            FetchError::Timeout(self.timeout)
        } else {
            FetchError::Request(error)
        }
    }
}

impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        ::log::debug!("GET {}", url);
        let started = std::time::Instant::now();

        // The client timeout covers the request; this also bounds body decoding
        let result = match timeout(self.timeout, self.get_body(url)).await {
            Ok(result) => result,
            Err(_) => Err(FetchError::Timeout(self.timeout)),
        };

        ::log::debug!(
            "Fetched {} in {:.2} seconds (ok: {})",
            url,
            started.elapsed().as_secs_f64(),
            result.is_ok()
        );
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::Extractor;
    use crate::matcher::KeywordMatcher;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Accepts one connection, reads the request and answers with `response`
    async fn serve_once(response: Vec<u8>) -> Url {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let _ = socket.write_all(&response).await;
            let _ = socket.shutdown().await;
        });
        Url::parse(&format!("http://{}/editais", addr)).unwrap()
    }

    fn http_response(content_type: &str, body: &[u8]) -> Vec<u8> {
        let mut response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            content_type,
            body.len()
        )
        .into_bytes();
        response.extend_from_slice(body);
        response
    }

    fn short_timeout_config() -> HarvestConfig {
        HarvestConfig {
            timeout_secs: 1,
            ..HarvestConfig::default()
        }
    }

    #[tokio::test]
    async fn test_latin1_page_is_decoded_from_content_type() {
        let body = b"<html><body><a href=\"/d\">Servi\xe7o de ventila\xe7\xe3o</a></body></html>";
        let url = serve_once(http_response("text/html; charset=iso-8859-1", body)).await;

        let fetcher = HttpFetcher::new(&short_timeout_config()).unwrap();
        let extractor = Extractor::new(fetcher, KeywordMatcher::new(["ventilação"]));
        let records = extractor.extract(&url).await.into_records();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Serviço de ventilação");
        assert_eq!(records[0].link, url.join("/d").unwrap().to_string());
    }

    #[tokio::test]
    async fn test_utf8_page_is_fetched() {
        let body = "<a href=\"/c\">Climatização</a>".as_bytes();
        let url = serve_once(http_response("text/html; charset=utf-8", body)).await;

        let fetcher = HttpFetcher::new(&short_timeout_config()).unwrap();
        let page = fetcher.fetch(&url).await.unwrap();
        assert!(page.contains("Climatização"));
    }

    #[tokio::test]
    async fn test_error_status_is_reported() {
        let response = b"HTTP/1.1 503 Service Unavailable\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";
        let url = serve_once(response.to_vec()).await;

        let fetcher = HttpFetcher::new(&short_timeout_config()).unwrap();
        assert!(matches!(fetcher.fetch(&url).await, Err(FetchError::Status(503))));
    }

    #[tokio::test]
    async fn test_silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            // Hold the connection open without ever answering
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let fetcher = HttpFetcher::new(&short_timeout_config()).unwrap();
        let url = Url::parse(&format!("http://{}/editais", addr)).unwrap();

        let started = std::time::Instant::now();
        let result = fetcher.fetch(&url).await;
        assert!(matches!(result, Err(FetchError::Timeout(_))), "{:?}", result);
        assert!(started.elapsed() < Duration::from_secs(3));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_an_error() {
        let config = HarvestConfig {
            timeout_secs: 2,
            ..HarvestConfig::default()
        };
        let fetcher = HttpFetcher::new(&config).unwrap();
        // Port 9 on localhost is the discard service and is essentially never open
        let url = Url::parse("http://127.0.0.1:9/listing").unwrap();
        assert!(fetcher.fetch(&url).await.is_err());
    }
}
