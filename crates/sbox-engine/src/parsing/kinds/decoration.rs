/// A bracket decoration, written `[<symbol> <text>]`.
///
/// Order matters: the scanner tries decorations in `ALL` order before falling
/// back to link resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decoration {
    Bold,
    Italic,
    StrikeThrough,
}

impl Decoration {
    pub const ALL: [Decoration; 3] = [
        Decoration::Bold,
        Decoration::Italic,
        Decoration::StrikeThrough,
    ];

    /// The separator required between the symbol and the decorated text.
    pub const SEPARATOR: char = ' ';

    pub const fn symbol(self) -> char {
        match self {
            Decoration::Bold => '*',
            Decoration::Italic => '/',
            Decoration::StrikeThrough => '-',
        }
    }
}
