use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use super::{
    error::SegmentError,
    kinds::Bracket,
    trim::{has_brackets, trim_brackets},
};

/// Marker that classifies a token as an external URL.
///
/// Matched by containment anywhere in the token, not as a scheme prefix.
const URL_MARKER: &str = "http";
const PATH_SEPARATOR: char = '/';

/// Bytes escaped inside one path segment.
///
/// Unreserved characters and the sub-delimiters `$&+:=@` stay literal; `,` and
/// `;` are escaped along with everything else.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

/// A resolved bracket link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// The bracket text as written, re-emitted verbatim when rendering.
    pub original_text: String,
    pub server: String,
    pub project: String,
    pub title: String,
    pub url: String,
}

impl Link {
    /// Renders `original_text` when present, otherwise `[title url]`.
    pub fn render(&self) -> String {
        if !self.original_text.is_empty() {
            return self.original_text.clone();
        }
        if self.title.is_empty() {
            format!("{}{}{}", Bracket::OPEN, self.url, Bracket::CLOSE)
        } else {
            format!(
                "{}{} {}{}",
                Bracket::OPEN,
                self.title,
                self.url,
                Bracket::CLOSE
            )
        }
    }

    /// The title, or the URL for untitled external links.
    pub fn plain_text(&self) -> String {
        if self.title.is_empty() {
            self.url.clone()
        } else {
            self.title.clone()
        }
    }

    /// True when the URL points somewhere other than `server`.
    pub fn is_external(&self) -> bool {
        !self.url.starts_with(&format!("{}/", self.server))
    }
}

/// Builds a [`Link`] from bracketed text such as `[Page name]`.
pub fn new_link(raw_bracket_text: &str, server: &str, project: &str) -> Result<Link, SegmentError> {
    if !has_brackets(raw_bracket_text) {
        return Err(SegmentError::InvalidText(raw_bracket_text.to_string()));
    }
    let trimmed = trim_brackets(raw_bracket_text)?;
    let (url, title) = resolve_link(trimmed, server, project);
    Ok(Link {
        original_text: raw_bracket_text.to_string(),
        server: server.to_string(),
        project: project.to_string(),
        title,
        url,
    })
}

/// Classifies bracket contents and returns `(url, title)`.
///
/// In order:
/// 1. first space-separated token contains `http`: it is the URL, the rest is the title
/// 2. last token contains `http`: it is the URL, the preceding tokens are the title
/// 3. starts with `/`: an absolute `/project/page` path on `server`
/// 4. otherwise a page title in `project`
pub fn resolve_link(trimmed_text: &str, server: &str, project: &str) -> (String, String) {
    let tokens: Vec<&str> = trimmed_text.split(' ').collect();

    if let Some((first, rest)) = tokens.split_first()
        && first.contains(URL_MARKER)
    {
        log::trace!("link {trimmed_text:?} has a leading URL");
        return (first.to_string(), rest.join(" "));
    }

    if let Some((last, init)) = tokens.split_last()
        && last.contains(URL_MARKER)
    {
        log::trace!("link {trimmed_text:?} has a trailing URL");
        return (last.to_string(), init.join(" "));
    }

    if let Some(path) = trimmed_text.strip_prefix(PATH_SEPARATOR) {
        let segments: Vec<&str> = path.split(PATH_SEPARATOR).collect();
        let url = match segments.split_first() {
            Some((project, rest)) if !rest.is_empty() => {
                format!("{server}/{project}/{}", escape_path(rest))
            }
            Some((project, _)) => format!("{server}/{project}"),
            None => server.to_string(),
        };
        return (url, trimmed_text.to_string());
    }

    let url = format!("{server}/{project}/{}", escape_path_segment(trimmed_text));
    (url, trimmed_text.to_string())
}

/// Percent-escapes `text` for use as a single URL path segment, `/` included.
pub fn escape_path_segment(text: &str) -> String {
    utf8_percent_encode(text, PATH_SEGMENT).to_string()
}

/// Escapes each segment and rejoins them with literal `/`.
fn escape_path(segments: &[&str]) -> String {
    segments
        .iter()
        .map(|s| escape_path_segment(s))
        .collect::<Vec<_>>()
        .join("/")
}
