pub mod models;
pub mod parsing;
pub mod source;

// Re-export key types for easier usage
pub use models::page::*;
pub use parsing::{
    Link, ParseError, SegmentError, TextSegment, escape_path_segment, parse, render, resolve_link,
};
pub use source::*;
