//! Table-of-contents links with GitHub-flavored heading anchors.

use crate::model::TocEntry;

/// Render one TOC list item linking into `target` (the report file name).
///
/// `12 : Draw loop` → `- [12 : Draw loop](Main.md#draw-loop)`
pub fn render_toc_item(entry: &TocEntry, target: &str) -> String {
    format!(
        "- [{} : {}]({}#{})",
        entry.line,
        entry.name,
        target,
        github_slug(&entry.name)
    )
}

/// GitHub heading anchor slug.
///
/// - lowercase
/// - keep alphanumerics, space, hyphen and underscore; drop the rest
/// - replace spaces with hyphens
fn github_slug(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    for c in text.trim().to_lowercase().chars() {
        if c.is_alphanumeric() || c == ' ' || c == '-' || c == '_' {
            slug.push(c);
        }
    }
    slug.replace(' ', "-")
}
