use super::{
    context::ScanContext,
    cursor::Cursor,
    error::{ParseError, SegmentError},
    kinds::{Bracket, Decoration, Layout},
    segment::TextSegment,
};

/// Recursive-descent scanner over an ordered-choice grammar:
///
/// ```text
/// root               := expression EOT
/// expression         := literal+
/// literal            := bracketText
///                     | ' '+ plainTextLine          -> BulletPoint
///                     | (!('[' / '\n') .)+          -> Plain
///                     | (!(']' / '\n') .)+          -> Plain
///                     | '\n'                        -> NewLine
/// bracketText        := '[' innerDecoratedText ']'
///                     | '[' plainTextLine           -> Plain
/// innerDecoratedText := '*' ' ' plainTextLine       -> Bold
///                     | '/' ' ' plainTextLine       -> Italic
///                     | '-' ' ' plainTextLine       -> StrikeThrough
///                     | plainTextLine               -> Link
/// plainTextLine      := (!(']' / '[' / '\n') .)+
/// ```
///
/// Every alternative runs inside [`Scanner::attempt`], which restores both
/// the cursor and the emitted segments when the alternative fails.
pub struct Scanner<'a, 'c> {
    cur: Cursor<'a>,
    ctx: &'c mut ScanContext,
    /// Furthest byte position any attempt reached, for error reporting.
    furthest: usize,
}

/// What the inside of a closed bracket turned out to be.
#[derive(Debug, Clone, Copy)]
enum BracketContent {
    Decorated(Decoration),
    Link,
}

impl<'a, 'c> Scanner<'a, 'c> {
    pub fn new(input: &'a str, ctx: &'c mut ScanContext) -> Self {
        Self {
            cur: Cursor::new(input),
            ctx,
            furthest: 0,
        }
    }

    /// Scans the whole input, appending segments to the context.
    ///
    /// Empty input yields no segments.
    pub fn run(mut self) -> Result<(), ParseError> {
        if self.cur.eof() {
            return Ok(());
        }
        if self.expression() && self.cur.eof() {
            return Ok(());
        }

        let at = self.furthest.max(self.cur.pos());
        let err = ParseError::at(self.cur.s, self.cur.char_offset(at));
        log::debug!("scanner stopped before end of text: {err}");
        Err(err)
    }

    /// Runs `rule`; on failure rewinds the cursor and drops anything it emitted.
    fn attempt(&mut self, rule: impl FnOnce(&mut Self) -> bool) -> bool {
        let saved = self.cur;
        let mark = self.ctx.mark();
        let matched = rule(self);
        self.furthest = self.furthest.max(self.cur.pos());
        if !matched {
            self.cur = saved;
            self.ctx.rewind(mark);
        }
        matched
    }

    fn expression(&mut self) -> bool {
        if !self.literal() {
            return false;
        }
        while self.literal() {}
        true
    }

    fn literal(&mut self) -> bool {
        self.attempt(Self::bracket_text)
            || self.attempt(Self::bullet_point)
            || self.attempt(Self::plain_outside_brackets)
            || self.attempt(Self::plain_inside_brackets)
            || self.attempt(Self::new_line)
    }

    fn bracket_text(&mut self) -> bool {
        self.attempt(Self::closed_bracket) || self.attempt(Self::unclosed_bracket)
    }

    fn closed_bracket(&mut self) -> bool {
        let start = self.cur.pos();
        if !self.cur.eat(Bracket::OPEN) {
            return false;
        }
        let Some(content) = self.inner_decorated_text() else {
            return false;
        };
        if !self.cur.eat(Bracket::CLOSE) {
            return false;
        }

        let raw = self.cur.since(start);
        let segment = match content {
            BracketContent::Decorated(decoration) => {
                TextSegment::decorated_from_brackets(decoration, raw)
            }
            BracketContent::Link => TextSegment::link(raw, self.ctx.server(), self.ctx.project()),
        };
        self.emit(segment)
    }

    /// `[` followed by text that never closes on this line.
    fn unclosed_bracket(&mut self) -> bool {
        let start = self.cur.pos();
        if !(self.cur.eat(Bracket::OPEN) && self.plain_text_line()) {
            return false;
        }
        let text = self.cur.since(start);
        self.ctx.push(TextSegment::plain(text));
        true
    }

    fn inner_decorated_text(&mut self) -> Option<BracketContent> {
        for decoration in Decoration::ALL {
            let matched = self.attempt(|s| {
                s.cur.eat(decoration.symbol())
                    && s.cur.eat(Decoration::SEPARATOR)
                    && s.plain_text_line()
            });
            if matched {
                return Some(BracketContent::Decorated(decoration));
            }
        }
        self.plain_text_line().then_some(BracketContent::Link)
    }

    fn bullet_point(&mut self) -> bool {
        let start = self.cur.pos();
        if self.cur.eat_while(|c| c == Layout::INDENT) == 0 || !self.plain_text_line() {
            return false;
        }
        let raw = self.cur.since(start);
        self.emit(TextSegment::bullet_point(raw))
    }

    fn plain_outside_brackets(&mut self) -> bool {
        self.plain_until(Bracket::OPEN)
    }

    fn plain_inside_brackets(&mut self) -> bool {
        self.plain_until(Bracket::CLOSE)
    }

    fn plain_until(&mut self, stop: char) -> bool {
        let start = self.cur.pos();
        if self.cur.eat_while(|c| c != stop && c != Layout::NEWLINE) == 0 {
            return false;
        }
        let text = self.cur.since(start);
        self.ctx.push(TextSegment::plain(text));
        true
    }

    fn new_line(&mut self) -> bool {
        if !self.cur.eat(Layout::NEWLINE) {
            return false;
        }
        self.ctx.push(TextSegment::NewLine);
        true
    }

    fn plain_text_line(&mut self) -> bool {
        self.cur
            .eat_while(|c| c != Bracket::CLOSE && c != Bracket::OPEN && c != Layout::NEWLINE)
            > 0
    }

    /// Pushes a built segment; a construction error fails the current rule.
    fn emit(&mut self, segment: Result<TextSegment, SegmentError>) -> bool {
        match segment {
            Ok(segment) => {
                self.ctx.push(segment);
                true
            }
            Err(e) => {
                log::trace!("rejected segment at byte {}: {e}", self.cur.pos());
                false
            }
        }
    }
}
