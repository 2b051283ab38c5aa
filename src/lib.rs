//! yara-assist: authoring assistance for YARA-style detection rules
//!
//! This library provides the analysis core behind a rule editor:
//! - a single-pass tokenizer for syntax highlighting
//! - section-aware completion with variable discovery
//! - structural and semantic diagnostics
//!
//! Every operation is a pure function of the document text (and cursor
//! position), so results can be recomputed on each keystroke.
//!
//! # Example
//!
//! ```
//! use yara_assist::{complete, lint, tokenize, Severity};
//!
//! let source = "rule r {\n  strings:\n    $a = \"x\"\n  condition:\n    $b\n}";
//!
//! assert!(!tokenize(source).is_empty());
//!
//! let errors: Vec<_> = lint(source)
//!     .into_iter()
//!     .filter(|d| d.severity == Severity::Error)
//!     .collect();
//! assert_eq!(errors[0].message, "Undefined variable $b in condition");
//!
//! let items = complete(source, 2, 11);
//! assert_eq!(items[0].label, "$string_variable");
//! ```

pub mod completions;
pub mod config;
mod diagnostics;
mod language;
pub mod providers;
mod section;
mod store;
mod tokenizer;
mod types;
pub mod validators;
mod variables;

pub use completions::{placeholders, Placeholder};
pub use config::{ConfigError, EngineConfig, VariableDefinitions};
pub use diagnostics::{count, lint, Linter};
pub use language::{
    language_configuration, CharPair, CommentSyntax, LanguageConfiguration, FILE_EXTENSIONS,
    LANGUAGE_ID, TRIGGER_CHARACTERS,
};
pub use providers::{
    Analyzer, CompletionProvider, DiagnosticsProvider, FullProvider, LanguageInfo, TokenProvider,
};
pub use section::{locate_section, section_for_prefix};
pub use store::{RuleEntry, RuleStore, StoreError};
pub use tokenizer::{tokenize, Tokenizer, Tokens, CONSTANTS, DELIMITERS, KEYWORDS};
pub use types::{
    offset_at, offset_to_position, CompletionItem, CompletionKind, Diagnostic, LineIndex, Position,
    Range, Section, Severity, Token, TokenKind,
};
pub use variables::{find_variables, unique_variables, VariableRef};

/// Completions at a cursor position (line and column are 1-based) with the
/// default settings
pub fn complete(source: &str, line: u32, column: u32) -> Vec<CompletionItem> {
    let section = locate_section(source, line, column);
    completions::get_completions(section, source, &config::CompletionSettings::default())
}
