//! # Parsing
//!
//! Lossless scanner for Scrapbox-style markup.
//!
//! ## Architecture
//!
//! Parsing is a single pass of an ordered-choice grammar over the input:
//!
//! - **`kinds`**: Bracket and decoration types owning their delimiter symbols
//! - **`trim`**: Validation and stripping of `[...]` and `[* ...]` wrapping
//! - **`link`**: Classification of bracket contents into a URL and a title
//! - **`segment`**: `TextSegment` enum with canonical rendering
//! - **`cursor`**: `Cursor` over code points with position tracking
//! - **`context`**: `ScanContext` accumulating segments for one parse call
//! - **`scanner`**: `Scanner` with one function per grammar rule
//!
//! ## Round Trip
//!
//! Concatenating `render()` of every emitted segment reproduces the input
//! exactly. Malformed brackets degrade to `Plain` segments rather than errors.

pub mod context;
pub mod cursor;
pub mod error;
pub mod kinds;
pub mod link;
pub mod scanner;
pub mod segment;
pub mod trim;

#[cfg(test)]
pub mod tests;

pub use context::ScanContext;
pub use error::{ParseError, SegmentError};
pub use link::{Link, escape_path_segment, new_link, resolve_link};
pub use scanner::Scanner;
pub use segment::TextSegment;
pub use trim::{has_brackets, trim_brackets, trim_decorated};

/// Parses `input` into segments, resolving links against `server`/`project`.
pub fn parse(input: &str, server: &str, project: &str) -> Result<Vec<TextSegment>, ParseError> {
    let mut ctx = ScanContext::new(server, project);
    Scanner::new(input, &mut ctx).run()?;
    let segments = ctx.into_segments();
    log::trace!("parsed {} bytes into {} segments", input.len(), segments.len());
    Ok(segments)
}

/// Concatenates the canonical rendering of every segment.
pub fn render(segments: &[TextSegment]) -> String {
    segments.iter().map(TextSegment::render).collect()
}

/// Concatenates the markup-free text of every segment.
pub fn plain_text(segments: &[TextSegment]) -> String {
    segments.iter().map(TextSegment::plain_text).collect()
}
