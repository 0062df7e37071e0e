//! In-memory collaborators for tests.

use crate::emitter::ArchiveSink;
use crate::error::FetchError;
use crate::fetchers::{HttpResponse, Transport};
use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};
use tokio::sync::Barrier;
use url::Url;

/// Transport answering from a fixed table and recording every request.
///
/// URLs missing from the table fail with a network error.
#[derive(Default)]
pub struct StubTransport {
    responses: HashMap<String, Option<HttpResponse>>,
    requests: Mutex<Vec<String>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, status: u16, body: &str) -> Self {
        self.responses.insert(
            url.to_string(),
            Some(HttpResponse {
                status,
                body: body.to_string(),
            }),
        );
        self
    }

    pub fn with_network_error(mut self, url: &str) -> Self {
        self.responses.insert(url.to_string(), None);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        match self.responses.get(url.as_str()) {
            Some(Some(response)) => Ok(response.clone()),
            _ => Err(FetchError::Network {
                url: url.to_string(),
                message: "connection refused".to_string(),
            }),
        }
    }
}

/// Transport whose requests only complete once `barrier` is full.
///
/// Answers every URL with status 200 and the URL as body.
pub struct BarrierTransport {
    barrier: Arc<Barrier>,
}

impl BarrierTransport {
    pub fn new(parties: usize) -> Self {
        Self {
            barrier: Arc::new(Barrier::new(parties)),
        }
    }
}

#[async_trait]
impl Transport for BarrierTransport {
    async fn get(&self, url: &Url) -> Result<HttpResponse, FetchError> {
        self.barrier.wait().await;
        Ok(HttpResponse {
            status: 200,
            body: url.to_string(),
        })
    }
}

/// Sink keeping every delivered archive in memory
#[derive(Default)]
pub struct CapturingSink {
    delivered: Mutex<Vec<(String, String)>>,
    fail: bool,
}

impl CapturingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every delivery fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// `(filename, html)` pairs in delivery order
    pub fn delivered(&self) -> Vec<(String, String)> {
        self.delivered.lock().unwrap().clone()
    }
}

impl ArchiveSink for CapturingSink {
    fn deliver(&self, bytes: &[u8], filename: &str) -> io::Result<()> {
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        self.delivered.lock().unwrap().push((
            filename.to_string(),
            String::from_utf8_lossy(bytes).into_owned(),
        ));
        Ok(())
    }
}
