use crate::results::{InlinedResourceSet, ParsedDocument};
use crate::utils::escape_html;

/// Style overrides appended to every archive so images and SVGs stay inside
/// their container.
pub const NORMALIZATION_CSS: &str = r#"<style>
img {
    max-width: 100%;
    height: auto;
}
svg {
    max-width: 100%;
    height: auto;
    display: block;
}
svg polygon {
    max-width: 100%;
    height: auto;
}
svg[data-icon] {
    width: 1em;
    height: 1em;
}
svg.c_icon {
    width: 50%;
    height: auto;
}
</style>"#;

/// Builds the self-contained archive document.
///
/// Cascade order in `<head>` is fetched stylesheets, then inline style
/// blocks, then `NORMALIZATION_CSS`. Scripts follow the original body markup.
pub fn assemble(doc: &ParsedDocument, inlined: &InlinedResourceSet) -> String {
    let styles = inlined.style_fragments.join("\n");
    let scripts = inlined.script_fragments.join("\n");

    format!(
        r#"<!DOCTYPE html>
<html lang="no">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
{styles}
{normalization}
</head>
<body>
{body}
{scripts}
</body>
</html>
"#,
        title = escape_html(&doc.title),
        styles = styles,
        normalization = NORMALIZATION_CSS,
        body = doc.body_markup,
        scripts = scripts,
    )
}
