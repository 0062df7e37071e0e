use crate::assembler;
use crate::emitter::ArchiveSink;
use crate::error::ArchiveError;
use crate::fetchers::Fetcher;
use crate::inliner;
use crate::links::{InvalidInput, LinkList};
use crate::parsers;
use crate::results::{Archive, BatchReport, LinkOutcome};
use crate::utils::sanitize_filename;
use std::fmt;
use tokio::sync::mpsc;

/// Progress of a batch, as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    BlankInput,
    NoValidLinks,
    Starting,
    LinkFailed { link: String, error: String },
    Completed,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::BlankInput => write!(f, "Vennligst lim inn minst én gyldig lenke."),
            Status::NoValidLinks => write!(f, "Ingen gyldige lenker funnet."),
            Status::Starting => write!(f, "Laster ned nettsider..."),
            Status::LinkFailed { link, error } => {
                write!(f, "Feil ved nedlasting av {link}: {error}")
            }
            Status::Completed => {
                write!(f, "Nedlasting fullført! Sidene er lagret som HTML-filer.")
            }
        }
    }
}

impl From<InvalidInput> for Status {
    fn from(invalid: InvalidInput) -> Self {
        match invalid {
            InvalidInput::Blank => Status::BlankInput,
            InvalidInput::NoLinks => Status::NoValidLinks,
        }
    }
}

/// Archive every link in `input`, one after another.
///
/// A failing link is reported on `progress` and the batch moves on; every
/// link gets exactly one outcome in the returned report. A closed `progress`
/// channel is ignored.
pub async fn run(
    fetcher: &Fetcher,
    sink: &dyn ArchiveSink,
    input: &str,
    progress: &mpsc::UnboundedSender<Status>,
) -> BatchReport {
    let report_status = |status: Status| {
        ::log::debug!("Status: {:?}", status);
        let _ = progress.send(status);
    };

    let links = match LinkList::parse(input) {
        Ok(links) => links,
        Err(invalid) => {
            ::log::warn!("Nothing to archive: {:?}", invalid);
            report_status(invalid.into());
            return BatchReport::default();
        }
    };

    ::log::info!("Archiving {} links", links.len());
    report_status(Status::Starting);

    let mut report = BatchReport::default();
    for (index, link) in links.iter().enumerate() {
        ::log::info!("Processing link {}/{}: {}", index + 1, links.len(), link);

        let result = archive_link(fetcher, sink, link).await;
        if let Err(e) = &result {
            ::log::error!("Failed to archive {}: {}", link, e);
            report_status(Status::LinkFailed {
                link: link.to_string(),
                error: e.to_string(),
            });
        }

        report.outcomes.push(LinkOutcome {
            link: link.to_string(),
            result,
        });
    }

    ::log::info!(
        "Batch complete - {} archived, {} failed",
        report.succeeded(),
        report.failed()
    );
    report_status(Status::Completed);

    report
}

/// Build the archive for a single link without delivering it
pub async fn build_archive(fetcher: &Fetcher, link: &str) -> Result<Archive, ArchiveError> {
    let page = fetcher.fetch_page(link).await?;
    let doc = parsers::parse(&page.raw_html, &page.source_url);
    let inlined = inliner::inline(fetcher, &doc).await;
    let html = assembler::assemble(&doc, &inlined);

    Ok(Archive {
        filename: sanitize_filename(&doc.title),
        html,
    })
}

/// Run the full pipeline for one link, returning the delivered file name
async fn archive_link(
    fetcher: &Fetcher,
    sink: &dyn ArchiveSink,
    link: &str,
) -> Result<String, ArchiveError> {
    let archive = build_archive(fetcher, link).await?;

    sink.deliver(archive.html.as_bytes(), &archive.filename)
        .map_err(|source| ArchiveError::Deliver {
            filename: archive.filename.clone(),
            source,
        })?;

    Ok(archive.filename)
}
