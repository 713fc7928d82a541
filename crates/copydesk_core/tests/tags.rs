use copydesk_core::{parse_tags, ParsedTag};
use pretty_assertions::assert_eq;

fn tag(index: usize, text: &str) -> ParsedTag {
    ParsedTag {
        index,
        text: text.to_string(),
    }
}

#[test]
fn numbered_list_is_split_and_quotes_stripped() {
    let parsed = parse_tags("1. Alpha\n2. \"Beta\"\n3. Gamma");
    assert_eq!(parsed, vec![tag(1, "Alpha"), tag(2, "Beta"), tag(3, "Gamma")]);
}

#[test]
fn empty_input_yields_no_tags() {
    assert!(parse_tags("").is_empty());
    assert!(parse_tags("   \n\t ").is_empty());
}

#[test]
fn unnumbered_paragraph_becomes_single_tag() {
    let parsed = parse_tags("  Just one unnumbered paragraph \n");
    assert_eq!(parsed, vec![tag(1, "Just one unnumbered paragraph")]);
}

#[test]
fn preamble_before_first_marker_is_kept_as_a_tag() {
    let parsed = parse_tags("Here are some tags:\n1. eco bottle\n2. reusable");
    assert_eq!(
        parsed,
        vec![
            tag(1, "Here are some tags:"),
            tag(2, "eco bottle"),
            tag(3, "reusable"),
        ]
    );
}

#[test]
fn multi_digit_markers_and_inline_lists_split() {
    let parsed = parse_tags("9. nine 10. ten 11.\televen");
    assert_eq!(parsed, vec![tag(1, "nine"), tag(2, "ten"), tag(3, "eleven")]);
}

#[test]
fn marker_without_trailing_whitespace_does_not_split() {
    let parsed = parse_tags("1. version 2.0 release");
    assert_eq!(parsed, vec![tag(1, "version 2.0 release")]);
}

#[test]
fn quotes_are_only_stripped_in_pairs() {
    let parsed = parse_tags("1. \"open\n2. close\"\n3. \"both\"\n4. \"");
    assert_eq!(
        parsed,
        vec![
            tag(1, "\"open"),
            tag(2, "close\""),
            tag(3, "both"),
            tag(4, "\""),
        ]
    );
}

#[test]
fn only_one_pair_of_quotes_is_stripped() {
    let parsed = parse_tags("1. \"\"nested\"\"");
    assert_eq!(parsed, vec![tag(1, "\"nested\"")]);
}
