use thiserror::Error;

/// Errors raised while fetching a page or resource
#[derive(Debug, Error)]
pub enum FetchError {
    /// The link could not be parsed as an absolute URL
    #[error("Ugyldig lenke {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The request never produced a response (DNS, TLS, timeout, ...)
    #[error("Nettverksfeil ved henting av {url}: {message}")]
    Network { url: String, message: String },

    /// The server answered with a non-success status code
    #[error("Kunne ikke hente innhold fra {url}. Statuskode: {status}")]
    Status { url: String, status: u16 },
}

impl FetchError {
    /// The URL the failed request was made for
    pub fn url(&self) -> &str {
        match self {
            FetchError::InvalidUrl { url, .. }
            | FetchError::Network { url, .. }
            | FetchError::Status { url, .. } => url,
        }
    }
}

/// Failure that aborts the pipeline for a single link
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The assembled archive could not be handed to the sink
    #[error("Kunne ikke lagre {filename}: {source}")]
    Deliver {
        filename: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors loading an archiver configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
