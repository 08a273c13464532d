use anyhow::Context;

use crate::models::Page;
use crate::parsing::{Link, TextSegment, parse};

/// Somewhere pages can be read from, such as a hosted Scrapbox server.
pub trait PageSource {
    /// Returns the raw markup of `page`.
    fn fetch_text(&self, page: &Page) -> anyhow::Result<String>;

    /// Returns up to `limit` page titles of `project` on `server`.
    fn list_pages(&self, server: &str, project: &str, limit: usize) -> anyhow::Result<Vec<String>>;
}

/// Fetches `page` and parses it, resolving links against the page's own project.
pub fn load_page(source: &impl PageSource, page: &Page) -> anyhow::Result<Vec<TextSegment>> {
    let text = source
        .fetch_text(page)
        .with_context(|| format!("failed to fetch page from {page}"))?;
    log::debug!("fetched {} bytes from {page}", text.len());
    let segments = parse(&text, &page.server, &page.project)
        .with_context(|| format!("failed to parse page {page}"))?;
    Ok(segments)
}

/// The links of a parsed page, in order.
pub fn collect_links(segments: &[TextSegment]) -> Vec<&Link> {
    segments
        .iter()
        .filter_map(|segment| match segment {
            TextSegment::Link(link) => Some(link),
            _ => None,
        })
        .collect()
}
