use crate::batch::{self, Status};
use crate::config::ArchiverConfig;
use crate::emitter::{ArchiveSink, DirectorySink};
use crate::fetchers::{Fetcher, HttpTransport, Transport};
use crate::results::BatchReport;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Builder for configuring and running archive batches
pub struct Archiver {
    config: ArchiverConfig,

    // Defaults to an `HttpTransport` built from the config
    transport: Option<Arc<dyn Transport>>,

    // Defaults to a `DirectorySink` on the configured output directory
    sink: Option<Arc<dyn ArchiveSink>>,
}

impl Archiver {
    /// Create an archiver with default configuration
    pub fn new() -> Self {
        Self {
            config: ArchiverConfig::default(),
            transport: None,
            sink: None,
        }
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: ArchiverConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file<P: AsRef<Path>>(
        self,
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let config = ArchiverConfig::from_file(path)?;
        Ok(self.with_config(config))
    }

    /// Override the output directory
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.output_dir = dir.into();
        self
    }

    /// Override the per-request timeout
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.config.timeout_secs = timeout_secs;
        self
    }

    /// Override the User-Agent header
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Use a custom transport instead of HTTP
    pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Deliver archives somewhere other than the output directory
    pub fn with_sink(mut self, sink: Arc<dyn ArchiveSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn config(&self) -> &ArchiverConfig {
        &self.config
    }

    /// Archive every link in `input`, streaming status updates to `progress`
    pub async fn run(
        &self,
        input: &str,
        progress: &mpsc::UnboundedSender<Status>,
    ) -> Result<BatchReport, Box<dyn std::error::Error>> {
        let transport: Arc<dyn Transport> = match &self.transport {
            Some(transport) => Arc::clone(transport),
            None => Arc::new(HttpTransport::from_config(&self.config)?),
        };
        let sink: Arc<dyn ArchiveSink> = match &self.sink {
            Some(sink) => Arc::clone(sink),
            None => Arc::new(DirectorySink::new(&self.config.output_dir)),
        };

        let fetcher = Fetcher::new(transport);
        Ok(batch::run(&fetcher, sink.as_ref(), input, progress).await)
    }
}

impl Default for Archiver {
    fn default() -> Self {
        Self::new()
    }
}
