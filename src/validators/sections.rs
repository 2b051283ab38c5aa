//! Required section presence

use super::{Validator, MISSING_SECTION};
use crate::types::{Diagnostic, LineIndex, Range, Section};

/// Sections every rule document should contain, in report order
const REQUIRED_SECTIONS: [Section; 3] = [Section::Meta, Section::Strings, Section::Condition];

/// Warns when a section header is absent from the document.
///
/// Presence is a plain substring test, so a header inside a comment or string
/// still counts.
#[derive(Debug, Default, Clone, Copy)]
pub struct SectionValidator;

impl SectionValidator {
    pub fn new() -> Self {
        Self
    }
}

impl Validator for SectionValidator {
    fn code(&self) -> &'static str {
        MISSING_SECTION
    }

    fn validate_indexed(&self, source: &str, _lines: &LineIndex) -> Vec<Diagnostic> {
        REQUIRED_SECTIONS
            .iter()
            .filter_map(Section::header)
            .filter(|header| !source.contains(header))
            .map(|header| {
                Diagnostic::warning(
                    Range::document_start(),
                    format!("Missing \"{}\" section", header),
                )
                .with_code(MISSING_SECTION)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Severity;

    #[test]
    fn test_all_sections_present() {
        let source = "rule r { meta: strings: condition: true }";
        assert!(SectionValidator::new().validate(source).is_empty());
    }

    #[test]
    fn test_empty_document_misses_everything() {
        let diagnostics = SectionValidator::new().validate("");
        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();

        assert_eq!(
            messages,
            vec![
                "Missing \"meta:\" section",
                "Missing \"strings:\" section",
                "Missing \"condition:\" section",
            ]
        );
        assert!(diagnostics.iter().all(|d| d.severity == Severity::Warning));
        assert!(diagnostics.iter().all(|d| d.range == Range::document_start()));
    }

    #[test]
    fn test_header_needs_colon() {
        let diagnostics = SectionValidator::new().validate("meta strings: condition:");

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("meta:"));
    }

    #[test]
    fn test_header_inside_comment_counts() {
        let source = "// meta:\nstrings: condition:";
        assert!(SectionValidator::new().validate(source).is_empty());
    }
}
