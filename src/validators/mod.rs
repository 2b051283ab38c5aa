//! Validators for rule diagnostics
//!
//! Each validator owns one check code and runs over the full document text.

pub mod balance;
pub mod sections;
pub mod variables;

pub use balance::{BracketValidator, QuoteValidator};
pub use sections::SectionValidator;
pub use variables::VariableValidator;

use crate::types::{Diagnostic, LineIndex};

/// Code for missing `meta:` / `strings:` / `condition:` warnings
pub const MISSING_SECTION: &str = "missing-section";
/// Code for `{` / `}` count mismatches
pub const UNBALANCED_BRACKETS: &str = "unbalanced-brackets";
/// Code for an odd number of `"`
pub const UNMATCHED_QUOTES: &str = "unmatched-quotes";
/// Code for condition variables without a definition
pub const UNDEFINED_VARIABLE: &str = "undefined-variable";

/// Every check code, in the order checks run
pub const ALL_CODES: &[&str] = &[
    MISSING_SECTION,
    UNBALANCED_BRACKETS,
    UNMATCHED_QUOTES,
    UNDEFINED_VARIABLE,
];

/// A single diagnostic check
pub trait Validator: Send + Sync {
    /// Code attached to every diagnostic this check emits
    fn code(&self) -> &'static str;

    /// Run the check over the whole document, mapping offsets through `lines`
    fn validate_indexed(&self, source: &str, lines: &LineIndex) -> Vec<Diagnostic>;

    /// Run the check over the whole document
    fn validate(&self, source: &str) -> Vec<Diagnostic> {
        self.validate_indexed(source, &LineIndex::new(source))
    }
}
