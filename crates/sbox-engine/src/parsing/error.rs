use thiserror::Error;

/// Failures constructing a segment from raw bracket text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SegmentError {
    #[error("invalid text: {0:?} is not wrapped in brackets")]
    InvalidText(String),
    #[error("invalid decoration: {text:?} does not start with '{symbol} '")]
    InvalidDecoration { text: String, symbol: char },
    #[error("invalid bullet point: {0:?} needs leading spaces followed by text")]
    InvalidBulletPoint(String),
}

/// The grammar could not consume the whole input.
///
/// `position` is a code point offset; `line` is 1-based and `symbol` counts
/// code points from the start of that line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parse error near line {line} symbol {symbol} (position {position})")]
pub struct ParseError {
    pub position: usize,
    pub line: usize,
    pub symbol: usize,
}

impl ParseError {
    /// Builds an error for code point offset `position` within `input`.
    pub fn at(input: &str, position: usize) -> Self {
        let (mut line, mut symbol) = (1, 0);
        // Offset `len` addresses the end of text and counts as one more symbol.
        let chars = input.chars().map(Some).chain(std::iter::once(None));
        for (i, c) in chars.enumerate() {
            if c == Some('\n') {
                line += 1;
                symbol = 0;
            } else {
                symbol += 1;
            }
            if i == position {
                break;
            }
        }
        Self {
            position,
            line,
            symbol,
        }
    }
}
