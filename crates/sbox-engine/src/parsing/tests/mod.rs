//! Cross-module tests for the parsing pipeline.
//!
//! Every case goes through [`invariants::check`], so the round trip is
//! asserted for each input in addition to the case's own expectations.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{TextSegment, parse, plain_text};

const SERVER: &str = "https://scrapbox.io";
const PROJECT: &str = "niboshi";

fn parse_checked(input: &str) -> Vec<TextSegment> {
    let segments = parse(input, SERVER, PROJECT).unwrap();
    invariants::check(input, &segments);
    segments
}

#[rstest]
#[case("")]
#[case("foobar")]
#[case("not link]")]
#[case("[not link")]
#[case("[]")]
#[case("[[nested]]")]
#[case("]]][[[")]
#[case("[* Bold]")]
#[case("[/ Italic]")]
#[case("[- Strike Through]")]
#[case("[*NotBold]")]
#[case("[* ]")]
#[case("[* a[b]")]
#[case("[https://sample.com sample link]")]
#[case("[sample link https://sample.com]")]
#[case("[/project/page]")]
#[case(" bullet\n  deeper\n   [* bold] item")]
#[case("   \n\n \n")]
#[case("日本語の[ページ]と[* 太字]")]
#[case("tab\tseparated [link]\r\nwindows line")]
#[case("[a][b] [c]")]
#[case("[\n]\n[")]
fn round_trips(#[case] input: &str) {
    parse_checked(input);
}

/// Characters that drive every grammar alternative, plus ordinary text.
const MARKUP_ALPHABET: [char; 9] = ['[', ']', '*', '/', '-', ' ', '\n', 'a', 'h'];

/// Every string over `alphabet` of length `0..=max_len`.
fn all_strings(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut all = vec![String::new()];
    let mut previous = vec![String::new()];
    for _ in 0..max_len {
        let next: Vec<String> = previous
            .iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |c| {
                    let mut s = prefix.clone();
                    s.push(*c);
                    s
                })
            })
            .collect();
        all.extend(next.iter().cloned());
        previous = next;
    }
    all
}

fn assert_stable(segment: &TextSegment) {
    let reparsed = parse_checked(&segment.render());
    assert_eq!(reparsed.len(), 1, "{segment:?} split into {reparsed:?}");
    assert_eq!(
        std::mem::discriminant(&reparsed[0]),
        std::mem::discriminant(segment)
    );
    assert_eq!(reparsed[0].plain_text(), segment.plain_text());
}

#[test]
fn every_short_markup_string_round_trips() {
    let inputs = all_strings(&MARKUP_ALPHABET, 5);
    assert_eq!(inputs.len(), 66_430);
    for input in &inputs {
        for segment in &parse_checked(input) {
            assert_stable(segment);
        }
    }
}

/// Each segment re-parsed alone comes back as the same kind of segment.
#[rstest]
#[case("[https://sample.com sample link]and[* Bold]Text\nand[/ Italic]text and [- Strike]text\n bullet point")]
#[case("[not link\n  indented [page] tail]")]
#[case("日本語[/ 斜体]")]
fn classification_is_stable(#[case] input: &str) {
    for segment in &parse_checked(input) {
        assert_stable(segment);
    }
}

#[test]
fn plain_text_strips_markup() {
    let segments = parse_checked("Text [* Bold], [https://sample.com sample link]\n  item");
    assert_eq!(plain_text(&segments), "Text Bold, sample link\nitem");
}

#[test]
fn links_resolve_against_parse_defaults() {
    let segments = parse_checked("[Example]");
    match &segments[..] {
        [TextSegment::Link(link)] => {
            assert_eq!(link.url, "https://scrapbox.io/niboshi/Example");
            assert_eq!(link.title, "Example");
            assert_eq!(link.project, PROJECT);
        }
        other => panic!("expected a single link, got {other:?}"),
    }
}
