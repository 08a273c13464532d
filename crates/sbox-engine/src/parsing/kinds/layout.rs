/// Line structure characters: the line break and the bullet indent.
pub struct Layout;

impl Layout {
    pub const NEWLINE: char = '\n';
    /// One indent step; a bullet's level is the count of these.
    pub const INDENT: char = ' ';
}
