/// A cursor for code-point-by-code-point scanning with position tracking.
///
/// Positions are byte offsets into `s` and always fall on `char` boundaries.
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of text.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current code point without advancing.
    pub fn peek(&self) -> Option<char> {
        self.s.get(self.i..)?.chars().next()
    }

    /// Advances past `c` if it is the current code point.
    pub fn eat(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.i += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Advances while `pred` holds, returning the number of code points consumed.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        let mut n = 0;
        while let Some(c) = self.peek() {
            if !pred(c) {
                break;
            }
            self.i += c.len_utf8();
            n += 1;
        }
        n
    }

    /// Returns the text between byte position `start` and the cursor.
    pub fn since(&self, start: usize) -> &'a str {
        &self.s[start..self.i]
    }

    /// Converts a byte position into a code point offset.
    pub fn char_offset(&self, byte_pos: usize) -> usize {
        self.s[..byte_pos.min(self.s.len())].chars().count()
    }
}
