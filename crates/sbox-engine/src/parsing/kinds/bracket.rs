pub struct Bracket;

impl Bracket {
    pub const OPEN: char = '[';
    pub const CLOSE: char = ']';
}
