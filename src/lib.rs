// Re-export modules
pub mod archiver;
pub mod assembler;
pub mod batch;
pub mod config;
pub mod emitter;
pub mod error;
pub mod fetchers;
pub mod inliner;
pub mod links;
pub mod parsers;
pub mod results;
pub mod utils;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types for convenience
pub use archiver::Archiver;
pub use batch::Status;
pub use config::ArchiverConfig;
pub use emitter::{ArchiveSink, DirectorySink};
pub use error::{ArchiveError, FetchError};
pub use results::{Archive, BatchReport, LinkOutcome};
