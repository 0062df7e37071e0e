use crate::error::ArchiveError;

/// Raw HTML of a successfully fetched page
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// URL the page was fetched from
    pub source_url: String,

    /// Response body as text
    pub raw_html: String,
}

/// The parts of a page the archive is built from
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedDocument {
    /// Page title, empty if the page has none
    pub title: String,

    /// Serialized inner markup of `<body>`
    pub body_markup: String,

    /// Absolute URLs of `<link rel="stylesheet">` elements, in document order
    pub stylesheet_refs: Vec<String>,

    /// Contents of `<style>` elements, in document order
    pub inline_style_blocks: Vec<String>,

    /// Absolute URLs of `<script src>` elements, in document order
    pub script_refs: Vec<String>,
}

/// Ready-to-embed style and script tags for one page.
///
/// An unavailable resource keeps its slot as an empty string, so the
/// fragment counts always match the reference counts of the source document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlinedResourceSet {
    /// Fetched stylesheets in reference order, followed by inline style blocks
    pub style_fragments: Vec<String>,

    /// Fetched scripts in reference order
    pub script_fragments: Vec<String>,
}

/// A finished archive, ready for delivery
#[derive(Debug, Clone)]
pub struct Archive {
    /// Suggested file name derived from the page title
    pub filename: String,

    /// The self-contained HTML document
    pub html: String,
}

/// Result of processing a single link
#[derive(Debug)]
pub struct LinkOutcome {
    pub link: String,
    pub result: Result<String, ArchiveError>,
}

impl LinkOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

/// Per-link outcomes of one batch, in input order
#[derive(Debug, Default)]
pub struct BatchReport {
    pub outcomes: Vec<LinkOutcome>,
}

impl BatchReport {
    /// Number of links archived successfully
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// Number of links that failed
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}
