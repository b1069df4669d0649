use crate::error::FetchError;
use std::future::Future;
use url::Url;

/// Retrieves the body of a single page
///
/// Implementations make exactly one attempt per call and must bound it in time;
/// retries are not part of the contract.
pub trait Fetcher: Send + Sync {
    /// Fetch `url` and return its decoded body
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<String, FetchError>> + Send;
}
