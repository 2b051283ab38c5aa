//! Bracket and quote balance

use super::{Validator, UNBALANCED_BRACKETS, UNMATCHED_QUOTES};
use crate::types::{Diagnostic, LineIndex};

/// Errors when `{` and `}` occur a different number of times.
///
/// Only the counts are compared; `}{` is balanced. The diagnostic points at the
/// first stray `}` or, failing that, the earliest `{` never closed.
#[derive(Debug, Default, Clone, Copy)]
pub struct BracketValidator;

impl BracketValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for BracketValidator {
    fn code(&self) -> &'static str {
        UNBALANCED_BRACKETS
    }

    fn validate_indexed(&self, source: &str, lines: &LineIndex) -> Vec<Diagnostic> {
        let opens = source.matches('{').count();
        let closes = source.matches('}').count();
        if opens == closes {
            return Vec::new();
        }

        let offset = culprit_bracket(source, closes > opens).unwrap_or(0);
        let range = lines.range(offset, offset + 1);
        vec![Diagnostic::error(range, "Unbalanced curly brackets").with_code(UNBALANCED_BRACKETS)]
    }
}

fn culprit_bracket(source: &str, extra_closer: bool) -> Option<usize> {
    let mut open = Vec::new();
    for (i, b) in source.bytes().enumerate() {
        match b {
            b'{' => open.push(i),
            b'}' => {
                if open.pop().is_none() && extra_closer {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    open.first().copied()
}

/// Errors when the document has an odd number of `"`.
///
/// String contents are not distinguished from code. The diagnostic points at
/// the last quote, the one left without a partner.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuoteValidator {
    escape_aware: bool,
}

impl QuoteValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Skip quotes preceded by an unescaped backslash
    pub fn with_escape_aware(mut self, enabled: bool) -> Self {
        self.escape_aware = enabled;
        self
    }

    fn quote_offsets(&self, source: &str) -> Vec<usize> {
        let bytes = source.as_bytes();
        let mut offsets = Vec::new();
        let mut backslashes = 0usize;

        for (i, &b) in bytes.iter().enumerate() {
            match b {
                b'\\' => backslashes += 1,
                b'"' => {
                    if !self.escape_aware || backslashes % 2 == 0 {
                        offsets.push(i);
                    }
                    backslashes = 0;
                }
                _ => backslashes = 0,
            }
        }

        offsets
    }
}

impl Validator for QuoteValidator {
    fn code(&self) -> &'static str {
        UNMATCHED_QUOTES
    }

    fn validate_indexed(&self, source: &str, lines: &LineIndex) -> Vec<Diagnostic> {
        let quotes = self.quote_offsets(source);
        if quotes.len() % 2 == 0 {
            return Vec::new();
        }

        let offset = quotes.last().copied().unwrap_or(0);
        let range = lines.range(offset, offset + 1);
        vec![Diagnostic::error(range, "Unmatched quotes").with_code(UNMATCHED_QUOTES)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Position, Severity};

    #[test]
    fn test_balanced_brackets() {
        assert!(BracketValidator::new().validate("rule r { }").is_empty());
        assert!(BracketValidator::new().validate("").is_empty());
    }

    #[test]
    fn test_reversed_brackets_count_as_balanced() {
        assert!(BracketValidator::new().validate("} {").is_empty());
    }

    #[test]
    fn test_missing_closer_points_at_unclosed_opener() {
        let source = "rule a { }\nrule b {\n  condition: true\n";
        let diagnostics = BracketValidator::new().validate(source);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Error);
        assert_eq!(diagnostics[0].message, "Unbalanced curly brackets");
        assert_eq!(diagnostics[0].range.start, Position::new(2, 8));
    }

    #[test]
    fn test_extra_closer_points_at_stray_closer() {
        let source = "rule a { }\n}";
        let diagnostics = BracketValidator::new().validate(source);

        assert_eq!(diagnostics[0].range.start, Position::new(2, 1));
        assert_eq!(diagnostics[0].range.end, Position::new(2, 2));
    }

    #[test]
    fn test_even_quotes() {
        assert!(QuoteValidator::new().validate("$a = \"x\"").is_empty());
    }

    #[test]
    fn test_odd_quotes_points_at_last_quote() {
        let source = "$a = \"x\"\n$b = \"y";
        let diagnostics = QuoteValidator::new().validate(source);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "Unmatched quotes");
        assert_eq!(diagnostics[0].range.start, Position::new(2, 6));
    }

    #[test]
    fn test_escaped_quote_counts_by_default() {
        let source = r#"$a = "say \"hi\"" $b = "x\""#;
        assert_eq!(QuoteValidator::new().validate(source).len(), 1);
    }

    #[test]
    fn test_escape_aware_quotes() {
        let validator = QuoteValidator::new().with_escape_aware(true);

        assert!(validator.validate(r#"$a = "x\"""#).is_empty());
        assert_eq!(validator.validate(r#"$a = "x\\""#).len(), 1);
    }
}
