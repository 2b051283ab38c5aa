//! Determine which rule section the cursor is in

use crate::types::{offset_at, Section};

/// Sections in check order; the first header suffix match wins
const SECTION_ORDER: [Section; 3] = [Section::Meta, Section::Condition, Section::Strings];

/// Locate the section at a cursor position (line and column are 1-based).
///
/// Only the text on the cursor's line before the cursor is considered: if it
/// ends with a section header (ignoring trailing whitespace) that section is
/// returned, otherwise [`Section::Root`]. Out-of-range coordinates are clamped.
pub fn locate_section(source: &str, line: u32, column: u32) -> Section {
    let before = text_before_cursor(source, line, column);
    let section = section_for_prefix(before);
    tracing::trace!(line, column, section = section.as_str(), "located section");
    section
}

/// Section introduced by a trailing header in `prefix`
pub fn section_for_prefix(prefix: &str) -> Section {
    let trimmed = prefix.trim_end();
    SECTION_ORDER
        .into_iter()
        .find(|section| section.header().is_some_and(|h| trimmed.ends_with(h)))
        .unwrap_or(Section::Root)
}

/// Text on the cursor's line strictly before the cursor column
pub fn text_before_cursor(source: &str, line: u32, column: u32) -> &str {
    let cursor = offset_at(source, line, column);
    let line_start = offset_at(source, line, 1);
    &source[line_start..cursor]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Cursor just past the end of the first line containing `needle`
    fn end_of_line(source: &str, needle: &str) -> (u32, u32) {
        for (i, line) in source.lines().enumerate() {
            if line.contains(needle) {
                return (i as u32 + 1, line.chars().count() as u32 + 1);
            }
        }
        panic!("{needle} not found");
    }

    #[test]
    fn test_meta_header() {
        let source = "rule r {\n  meta:\n}";
        let (line, col) = end_of_line(source, "meta:");

        assert_eq!(locate_section(source, line, col), Section::Meta);
    }

    #[test]
    fn test_unknown_header_is_root() {
        let source = "rule r {\n  foo:\n}";
        let (line, col) = end_of_line(source, "foo:");

        assert_eq!(locate_section(source, line, col), Section::Root);
    }

    #[test]
    fn test_strings_and_condition_headers() {
        let source = "strings:\ncondition:";

        assert_eq!(locate_section(source, 1, 9), Section::Strings);
        assert_eq!(locate_section(source, 2, 11), Section::Condition);
    }

    #[test]
    fn test_trailing_whitespace_ignored() {
        assert_eq!(locate_section("  meta:   ", 1, 11), Section::Meta);
        assert_eq!(locate_section("meta:\t\t", 1, 8), Section::Meta);
    }

    #[test]
    fn test_only_text_before_cursor_counts() {
        let source = "  meta: author";

        assert_eq!(locate_section(source, 1, 8), Section::Meta);
        assert_eq!(locate_section(source, 1, 15), Section::Root);
        assert_eq!(locate_section(source, 1, 5), Section::Root);
    }

    #[test]
    fn test_previous_lines_are_ignored() {
        let source = "  strings:\n    ";

        assert_eq!(locate_section(source, 2, 5), Section::Root);
    }

    #[test]
    fn test_out_of_range_cursor_is_clamped() {
        let source = "meta:";

        assert_eq!(locate_section(source, 1, 100), Section::Meta);
        assert_eq!(locate_section(source, 7, 1), Section::Root);
        assert_eq!(locate_section("", 1, 1), Section::Root);
    }

    #[test]
    fn test_section_for_prefix() {
        assert_eq!(section_for_prefix("x condition: "), Section::Condition);
        assert_eq!(section_for_prefix("meta"), Section::Root);
    }

    #[test]
    fn test_text_before_cursor() {
        assert_eq!(text_before_cursor("ab\ncdef", 2, 3), "cd");
        assert_eq!(text_before_cursor("ab\ncdef", 1, 1), "");
    }
}
