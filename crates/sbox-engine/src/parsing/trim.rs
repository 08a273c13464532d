use super::{
    error::SegmentError,
    kinds::{Bracket, Decoration},
};

/// Returns true if `text` starts with `[` and ends with `]`.
///
/// Works on code points, so a lone `[` or `]` is never bracketed.
pub fn has_brackets(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(
        (chars.next(), chars.next_back()),
        (Some(Bracket::OPEN), Some(Bracket::CLOSE))
    )
}

/// Returns the text between the outer brackets.
pub fn trim_brackets(text: &str) -> Result<&str, SegmentError> {
    if !has_brackets(text) {
        return Err(SegmentError::InvalidText(text.to_string()));
    }
    let inner_start = Bracket::OPEN.len_utf8();
    let inner_end = text.len() - Bracket::CLOSE.len_utf8();
    Ok(&text[inner_start..inner_end])
}

/// Strips `[<symbol> ` and `]` from `text`, returning the decorated text.
///
/// The interior must begin with `symbol` immediately followed by a space.
pub fn trim_decorated(text: &str, symbol: char) -> Result<&str, SegmentError> {
    let inner = trim_brackets(text)?;
    let mut chars = inner.chars();
    match (chars.next(), chars.next()) {
        (Some(first), Some(Decoration::SEPARATOR)) if first == symbol => Ok(chars.as_str()),
        _ => Err(SegmentError::InvalidDecoration {
            text: text.to_string(),
            symbol,
        }),
    }
}
