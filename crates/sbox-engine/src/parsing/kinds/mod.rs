//! # Markup Kinds
//!
//! Types that own their syntax delimiters. The scanner and trimmer read
//! these constants; they never hardcode `[`, `]` or a decoration symbol.
//!
//! ## Types
//!
//! - **`Bracket`**: `OPEN = '['`, `CLOSE = ']'`
//! - **`Decoration`**: `Bold` (`*`), `Italic` (`/`), `StrikeThrough` (`-`)
//! - **`Layout`**: `NEWLINE = '\n'`, `INDENT = ' '`

pub mod bracket;
pub mod decoration;
pub mod layout;

pub use bracket::Bracket;
pub use decoration::Decoration;
pub use layout::Layout;
