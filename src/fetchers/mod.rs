pub mod fetcher;
pub mod http;

#[cfg(test)]
pub(crate) mod testing;

pub use fetcher::Fetcher;
pub use http::HttpFetcher;
