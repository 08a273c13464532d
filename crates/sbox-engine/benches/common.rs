// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_page_content(size: usize) -> String {
    let base = "Title line\n [Page A] and [https://example.com docs]\n  [* important] note\n   [- done] task [/ aside]\n[unclosed bracket\nplain ] text\n";
    base.repeat(size)
}

/// Lines of unclosed brackets, which force the scanner through every
/// alternative before falling back to plain text.
#[allow(dead_code)]
pub fn generate_nested_brackets(depth: usize) -> String {
    let mut content = "[".repeat(depth);
    content.push_str("text");
    content.push_str(&"]".repeat(depth));
    content.push('\n');
    content.repeat(16)
}
