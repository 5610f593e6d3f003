use super::{name, preamble_name, prefix, stem};
use pretty_assertions::assert_eq;

#[test]
fn test_prefix_padding() {
    assert_eq!(prefix(0), "00");
    assert_eq!(prefix(1), "01");
    assert_eq!(prefix(42), "42");
    assert_eq!(prefix(99), "99");
    assert_eq!(prefix(100), "100");
    assert_eq!(prefix(1234), "1234");
}

#[test]
fn test_stem_strips_punctuation() {
    let first = stem("Section One: Overview!");
    assert_eq!(first, "section_one_overview");
    // Same input, same output
    assert_eq!(stem("Section One: Overview!"), first);
}

#[test]
fn test_stem_keeps_hyphens_and_digits() {
    assert_eq!(stem("Step 2 - Follow-up"), "step_2_-_follow-up");
    assert_eq!(stem("Q&A (2024)"), "qa_2024");
}

#[test]
fn test_stem_collapses_whitespace_runs() {
    assert_eq!(stem("  Lots   of\tspace  "), "lots_of_space");
}

#[test]
fn test_stem_drops_underscores_and_markup() {
    assert_eq!(stem("`snake_case` **bold**"), "snakecase_bold");
}

#[test]
fn test_stem_keeps_unicode_letters() {
    assert_eq!(stem("Über Café"), "über_café");
}

#[test]
fn test_name_joins_prefix_and_stem() {
    assert_eq!(name(1, "Getting Started"), "01_getting_started");
    assert_eq!(name(12, "API"), "12_api");
    assert_eq!(name(100, "Appendix"), "100_appendix");
}

#[test]
fn test_name_empty_stem_falls_back_to_untitled() {
    assert_eq!(stem("!!! ???"), "");
    assert_eq!(name(3, "!!! ???"), "03_untitled");
    assert_eq!(name(4, ""), "04_untitled");
}

#[test]
fn test_duplicate_titles_differ_by_ordinal() {
    assert_ne!(name(1, "Notes"), name(2, "Notes"));
}

#[test]
fn test_preamble_name() {
    assert_eq!(preamble_name(), "00_introduction");
}
