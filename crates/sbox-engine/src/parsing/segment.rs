use super::{
    error::SegmentError,
    kinds::{Bracket, Decoration, Layout},
    link::{Link, new_link},
    trim::trim_decorated,
};

/// One classified unit of parsed markup.
///
/// `render()` reproduces the exact source text of the segment, so rendering
/// every segment of a parse in order reproduces the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSegment {
    /// Literal text reproduced as-is
    Plain { text: String },
    /// A single `\n`
    NewLine,
    /// Space-indented text; `level` is the number of leading spaces
    BulletPoint { text: String, level: usize },
    /// `[* text]`
    Bold { text: String },
    /// `[/ text]`
    Italic { text: String },
    /// `[- text]`
    StrikeThrough { text: String },
    /// Any other `[...]`
    Link(Link),
}

impl TextSegment {
    pub fn plain(text: impl Into<String>) -> Self {
        TextSegment::Plain { text: text.into() }
    }

    /// Builds a bullet point from an indented line such as `"  item"`.
    pub fn bullet_point(raw: &str) -> Result<Self, SegmentError> {
        let text = raw.trim_start_matches(Layout::INDENT);
        let level = raw.len() - text.len();
        if level == 0 || text.is_empty() {
            return Err(SegmentError::InvalidBulletPoint(raw.to_string()));
        }
        Ok(TextSegment::BulletPoint {
            text: text.to_string(),
            level,
        })
    }

    pub fn decorated(decoration: Decoration, text: impl Into<String>) -> Self {
        let text = text.into();
        match decoration {
            Decoration::Bold => TextSegment::Bold { text },
            Decoration::Italic => TextSegment::Italic { text },
            Decoration::StrikeThrough => TextSegment::StrikeThrough { text },
        }
    }

    /// Builds a decoration from its full bracket form, e.g. `[* text]`.
    pub fn decorated_from_brackets(decoration: Decoration, raw: &str) -> Result<Self, SegmentError> {
        let text = trim_decorated(raw, decoration.symbol())?;
        Ok(Self::decorated(decoration, text))
    }

    /// Builds a link from its full bracket form, e.g. `[Page]`.
    pub fn link(raw: &str, server: &str, project: &str) -> Result<Self, SegmentError> {
        new_link(raw, server, project).map(TextSegment::Link)
    }

    /// The full markup form of this segment.
    pub fn render(&self) -> String {
        match self {
            TextSegment::Plain { text } => text.clone(),
            TextSegment::NewLine => Layout::NEWLINE.to_string(),
            TextSegment::BulletPoint { text, level } => {
                let mut out = Layout::INDENT.to_string().repeat(*level);
                out.push_str(text);
                out
            }
            TextSegment::Bold { text } => render_decorated(Decoration::Bold, text),
            TextSegment::Italic { text } => render_decorated(Decoration::Italic, text),
            TextSegment::StrikeThrough { text } => {
                render_decorated(Decoration::StrikeThrough, text)
            }
            TextSegment::Link(link) => link.render(),
        }
    }

    /// The text with markup stripped.
    pub fn plain_text(&self) -> String {
        match self {
            TextSegment::Plain { text }
            | TextSegment::BulletPoint { text, .. }
            | TextSegment::Bold { text }
            | TextSegment::Italic { text }
            | TextSegment::StrikeThrough { text } => text.clone(),
            TextSegment::NewLine => Layout::NEWLINE.to_string(),
            TextSegment::Link(link) => link.plain_text(),
        }
    }
}

fn render_decorated(decoration: Decoration, text: &str) -> String {
    format!(
        "{}{}{}{text}{}",
        Bracket::OPEN,
        decoration.symbol(),
        Decoration::SEPARATOR,
        Bracket::CLOSE
    )
}
