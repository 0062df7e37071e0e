use crate::results::ParsedDocument;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Parses an HTML page into the parts an archive is built from.
///
/// Parsing is permissive: malformed markup still yields a document, and
/// missing pieces come back empty. Stylesheet and script references are
/// resolved against the document's `<base href>` if it has one, otherwise
/// against `page_url`. References that cannot be resolved are skipped.
pub fn parse(html: &str, page_url: &str) -> ParsedDocument {
    let doc = Html::parse_document(html);
    let base = document_base(&doc, page_url);

    let title_selector = Selector::parse("title").unwrap();
    let title = doc
        .select(&title_selector)
        .next()
        .map(|e| e.text().collect::<String>())
        .unwrap_or_default()
        .split_ascii_whitespace()
        .collect::<Vec<_>>()
        .join(" ");

    let body_selector = Selector::parse("body").unwrap();
    let body_markup = doc
        .select(&body_selector)
        .next()
        .map(|e| e.inner_html())
        .unwrap_or_default();

    let link_selector = Selector::parse("link[href]").unwrap();
    let stylesheet_refs = doc
        .select(&link_selector)
        .filter(|e| is_stylesheet(e))
        .filter_map(|e| resolve(base.as_ref(), e.value().attr("href")))
        .collect::<Vec<_>>();

    let style_selector = Selector::parse("style").unwrap();
    let inline_style_blocks = doc
        .select(&style_selector)
        .map(|e| e.text().collect::<String>())
        .collect::<Vec<_>>();

    let script_selector = Selector::parse("script[src]").unwrap();
    let script_refs = doc
        .select(&script_selector)
        .filter_map(|e| resolve(base.as_ref(), e.value().attr("src")))
        .collect::<Vec<_>>();

    ::log::debug!(
        "HTML parser found {} stylesheets, {} inline styles and {} scripts",
        stylesheet_refs.len(),
        inline_style_blocks.len(),
        script_refs.len()
    );

    ParsedDocument {
        title,
        body_markup,
        stylesheet_refs,
        inline_style_blocks,
        script_refs,
    }
}

/// The URL relative references in the document resolve against
fn document_base(doc: &Html, page_url: &str) -> Option<Url> {
    let page = match Url::parse(page_url) {
        Ok(url) => Some(url),
        Err(e) => {
            ::log::debug!("Page URL {} is not absolute: {}", page_url, e);
            None
        }
    };

    let base_selector = Selector::parse("base[href]").unwrap();
    let base_href = doc
        .select(&base_selector)
        .next()
        .and_then(|e| e.value().attr("href"));

    match base_href {
        Some(href) => {
            let joined = match &page {
                Some(page) => page.join(href.trim()),
                None => Url::parse(href.trim()),
            };
            joined.ok().or(page)
        }
        None => page,
    }
}

// `rel` must be exactly `stylesheet`; alternate sheets stay out
fn is_stylesheet(element: &ElementRef) -> bool {
    element
        .value()
        .attr("rel")
        .is_some_and(|rel| rel.trim().eq_ignore_ascii_case("stylesheet"))
}

fn resolve(base: Option<&Url>, reference: Option<&str>) -> Option<String> {
    let reference = reference?.trim();
    if reference.is_empty() {
        return None;
    }

    let resolved = match base {
        Some(base) => base.join(reference),
        None => Url::parse(reference),
    };

    match resolved {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            ::log::debug!("Skipping unresolvable reference {}: {}", reference, e);
            None
        }
    }
}
