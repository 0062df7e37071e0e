use crate::fetchers::Fetcher;
use crate::results::{InlinedResourceSet, ParsedDocument};
use futures::future::join_all;

/// Fetches every external stylesheet and script of a page and wraps them as
/// inline tags.
///
/// All fetches are started together and awaited jointly; fragments come back
/// in reference order. A resource that cannot be fetched keeps its slot as an
/// empty string. Inline style blocks are appended after the fetched
/// stylesheets.
pub async fn inline(fetcher: &Fetcher, doc: &ParsedDocument) -> InlinedResourceSet {
    let stylesheets = join_all(doc.stylesheet_refs.iter().map(|url| fetcher.fetch_resource(url)));
    let scripts = join_all(doc.script_refs.iter().map(|url| fetcher.fetch_resource(url)));
    let (stylesheets, scripts) = futures::join!(stylesheets, scripts);

    let mut style_fragments = stylesheets
        .into_iter()
        .map(|css| css.map(|css| wrap("style", &css)).unwrap_or_default())
        .collect::<Vec<_>>();
    let inline_count = doc.inline_style_blocks.len();
    style_fragments.extend(doc.inline_style_blocks.iter().map(|css| wrap("style", css)));

    let script_fragments = scripts
        .into_iter()
        .map(|js| js.map(|js| wrap("script", &js)).unwrap_or_default())
        .collect::<Vec<_>>();

    let fetched_styles = style_fragments.len() - inline_count;
    let missing_styles = style_fragments[..fetched_styles]
        .iter()
        .filter(|f| f.is_empty())
        .count();
    if missing_styles > 0 {
        ::log::warn!(
            "{} of {} stylesheets could not be included",
            missing_styles,
            fetched_styles
        );
    }

    let missing_scripts = script_fragments.iter().filter(|f| f.is_empty()).count();
    if missing_scripts > 0 {
        ::log::warn!(
            "{} of {} scripts could not be included",
            missing_scripts,
            script_fragments.len()
        );
    }

    InlinedResourceSet {
        style_fragments,
        script_fragments,
    }
}

fn wrap(tag: &str, content: &str) -> String {
    format!("<{tag}>{content}</{tag}>")
}
