use crate::error::FetchError;
use crate::results::FetchedPage;
use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

/// Status and body of an HTTP response
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Single-attempt HTTP GET.
///
/// Implementations report only transport failures as errors; any response,
/// whatever its status, is returned as `Ok`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &Url) -> Result<HttpResponse, FetchError>;
}

/// How a failed fetch is treated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Invalid URLs, network errors and non-2xx statuses are errors
    Strict,
    /// Every failure is logged and turned into `None`
    Tolerant,
}

/// Fetches pages and resources over a shared transport
#[derive(Clone)]
pub struct Fetcher {
    transport: Arc<dyn Transport>,
}

impl Fetcher {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetch `url` as text under the given policy.
    ///
    /// Under `FetchPolicy::Tolerant` this never returns `Err`.
    pub async fn fetch(
        &self,
        url: &str,
        policy: FetchPolicy,
    ) -> Result<Option<String>, FetchError> {
        match self.try_fetch(url).await {
            Ok(body) => Ok(Some(body)),
            Err(e) => match policy {
                FetchPolicy::Strict => Err(e),
                FetchPolicy::Tolerant => {
                    ::log::warn!("Resource unavailable, leaving it out: {}", e);
                    Ok(None)
                }
            },
        }
    }

    /// Fetch the primary page of a link; any failure is fatal for the link
    pub async fn fetch_page(&self, url: &str) -> Result<FetchedPage, FetchError> {
        ::log::debug!("Fetching page: {}", url);
        let raw_html = self
            .fetch(url, FetchPolicy::Strict)
            .await?
            .unwrap_or_default();

        Ok(FetchedPage {
            source_url: url.to_string(),
            raw_html,
        })
    }

    /// Fetch a stylesheet or script; failures degrade to `None`
    pub async fn fetch_resource(&self, url: &str) -> Option<String> {
        ::log::debug!("Fetching resource: {}", url);
        self.fetch(url, FetchPolicy::Tolerant).await.ok().flatten()
    }

    async fn try_fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let response = self.transport.get(&parsed).await?;
        if !response.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }

        Ok(response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::StubTransport;

    fn fetcher(transport: StubTransport) -> Fetcher {
        Fetcher::new(Arc::new(transport))
    }

    #[tokio::test]
    async fn test_fetch_page_success() {
        let fetcher = fetcher(
            StubTransport::new().with_page("https://example.test/", 200, "<p>hi</p>"),
        );

        let page = fetcher.fetch_page("https://example.test/").await.unwrap();
        assert_eq!(page.source_url, "https://example.test/");
        assert_eq!(page.raw_html, "<p>hi</p>");
    }

    #[tokio::test]
    async fn test_fetch_page_non_success_status_is_fatal() {
        let fetcher = fetcher(
            StubTransport::new().with_page("https://example.test/missing", 404, "not found"),
        );

        let err = fetcher
            .fetch_page("https://example.test/missing")
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_fetch_page_invalid_url() {
        let transport = Arc::new(StubTransport::new());
        let fetcher = Fetcher::new(transport.clone());

        let err = fetcher.fetch_page("not a url").await.unwrap_err();
        assert!(matches!(err, FetchError::InvalidUrl { .. }));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_resource_tolerates_failures() {
        let fetcher = fetcher(
            StubTransport::new()
                .with_page("https://example.test/a.css", 500, "boom")
                .with_network_error("https://example.test/b.css"),
        );

        assert_eq!(fetcher.fetch_resource("https://example.test/a.css").await, None);
        assert_eq!(fetcher.fetch_resource("https://example.test/b.css").await, None);
        assert_eq!(fetcher.fetch_resource("::").await, None);
    }

    #[tokio::test]
    async fn test_tolerant_policy_returns_body_on_success() {
        let fetcher = fetcher(
            StubTransport::new().with_page("https://example.test/a.js", 204, ""),
        );

        let body = fetcher
            .fetch("https://example.test/a.js", FetchPolicy::Tolerant)
            .await
            .unwrap();
        assert_eq!(body, Some(String::new()));
    }
}
