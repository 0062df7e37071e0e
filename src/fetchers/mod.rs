pub mod fetcher;
pub mod http;

pub use fetcher::{FetchPolicy, Fetcher, HttpResponse, Transport};
pub use http::HttpTransport;
