//! Capability traits for host-editor adapters
//!
//! An adapter implements whatever host API is in use on top of these traits;
//! nothing in this crate references the host itself.

use crate::completions::get_completions;
use crate::config::EngineConfig;
use crate::diagnostics::Linter;
use crate::language::{
    language_configuration, LanguageConfiguration, FILE_EXTENSIONS, LANGUAGE_ID,
    TRIGGER_CHARACTERS,
};
use crate::section::locate_section;
use crate::tokenizer::Tokenizer;
use crate::types::{CompletionItem, Diagnostic, Token};

/// Metadata about the language an adapter serves
pub trait LanguageInfo: Send + Sync {
    /// Language id
    fn name(&self) -> &str;

    /// File extensions this provider handles (e.g., [".yar"])
    fn file_extensions(&self) -> &[&str];

    /// Characters that trigger completion
    fn trigger_characters(&self) -> &[char];

    /// Brackets, comments and auto-closing pairs
    fn language_configuration(&self) -> LanguageConfiguration;
}

/// Provides tokens for syntax highlighting
pub trait TokenProvider: Send + Sync {
    fn tokens(&self, source: &str) -> Vec<Token>;
}

/// Provides code completion (line and column are 1-based)
pub trait CompletionProvider: Send + Sync {
    fn complete(&self, source: &str, line: u32, column: u32) -> Vec<CompletionItem>;
}

/// Provides diagnostics (linting)
pub trait DiagnosticsProvider: Send + Sync {
    fn diagnose(&self, source: &str) -> Vec<Diagnostic>;
}

/// Combined trait for a full-featured provider
pub trait FullProvider:
    LanguageInfo + TokenProvider + CompletionProvider + DiagnosticsProvider
{
}

// Auto-implement FullProvider for any type that implements all traits
impl<T> FullProvider for T where
    T: LanguageInfo + TokenProvider + CompletionProvider + DiagnosticsProvider
{
}

/// The analysis engine, configured once and shared across documents.
///
/// Holds no per-document state, so one instance can serve concurrent callers.
pub struct Analyzer {
    config: EngineConfig,
    tokenizer: Tokenizer,
    linter: Linter,
}

impl Analyzer {
    pub fn new(config: EngineConfig) -> Self {
        let tokenizer =
            Tokenizer::new().with_escape_aware_strings(config.lint.escape_aware_strings);
        let linter = Linter::new(&config.lint);
        Self {
            config,
            tokenizer,
            linter,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn tokenize(&self, source: &str) -> Vec<Token> {
        self.tokenizer.tokenize(source)
    }

    pub fn complete(&self, source: &str, line: u32, column: u32) -> Vec<CompletionItem> {
        let section = locate_section(source, line, column);
        let completions = get_completions(section, source, &self.config.completion);
        tracing::debug!(
            line,
            column,
            section = section.as_str(),
            items = completions.len(),
            "completed"
        );
        completions
    }

    pub fn lint(&self, source: &str) -> Vec<Diagnostic> {
        self.linter.lint(source)
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl LanguageInfo for Analyzer {
    fn name(&self) -> &str {
        LANGUAGE_ID
    }

    fn file_extensions(&self) -> &[&str] {
        FILE_EXTENSIONS
    }

    fn trigger_characters(&self) -> &[char] {
        TRIGGER_CHARACTERS
    }

    fn language_configuration(&self) -> LanguageConfiguration {
        language_configuration()
    }
}

impl TokenProvider for Analyzer {
    fn tokens(&self, source: &str) -> Vec<Token> {
        self.tokenize(source)
    }
}

impl CompletionProvider for Analyzer {
    fn complete(&self, source: &str, line: u32, column: u32) -> Vec<CompletionItem> {
        Analyzer::complete(self, source, line, column)
    }
}

impl DiagnosticsProvider for Analyzer {
    fn diagnose(&self, source: &str) -> Vec<Diagnostic> {
        self.lint(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompletionSettings;
    use crate::types::Section;
    use crate::{complete, lint, tokenize};

    const SOURCE: &str = "rule r {\n  strings:\n    $a = \"x\"\n  condition:\n    $a and $b\n";

    fn full(provider: &dyn FullProvider, source: &str) -> (usize, usize, usize) {
        (
            provider.tokens(source).len(),
            provider.complete(source, 2, 11).len(),
            provider.diagnose(source).len(),
        )
    }

    #[test]
    fn test_default_analyzer_matches_free_functions() {
        let analyzer = Analyzer::default();

        assert_eq!(analyzer.tokens(SOURCE), tokenize(SOURCE));
        assert_eq!(
            CompletionProvider::complete(&analyzer, SOURCE, 2, 11),
            complete(SOURCE, 2, 11)
        );
        assert_eq!(analyzer.diagnose(SOURCE), lint(SOURCE));
    }

    #[test]
    fn test_usable_as_trait_object() {
        let analyzer = Analyzer::default();
        let (tokens, completions, diagnostics) = full(&analyzer, SOURCE);

        assert!(tokens > 0);
        assert_eq!(completions, 4);
        assert_eq!(diagnostics, 3);
    }

    #[test]
    fn test_language_info() {
        let analyzer = Analyzer::default();

        assert_eq!(analyzer.name(), "yaraL2");
        assert!(analyzer.file_extensions().contains(&".yar"));
        assert_eq!(analyzer.trigger_characters().len(), 6);
        assert_eq!(analyzer.language_configuration().brackets.len(), 3);
    }

    #[test]
    fn test_config_flows_into_completion() {
        let config = EngineConfig {
            completion: CompletionSettings {
                include_variables: false,
                ..CompletionSettings::default()
            },
            ..EngineConfig::default()
        };
        let analyzer = Analyzer::new(config);
        let completions = analyzer.complete(SOURCE, 2, 11);

        assert_eq!(locate_section(SOURCE, 2, 11), Section::Strings);
        assert_eq!(completions.len(), 2);
    }

    #[test]
    fn test_analyzer_is_shareable_across_threads() {
        let analyzer = std::sync::Arc::new(Analyzer::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let analyzer = analyzer.clone();
                std::thread::spawn(move || analyzer.lint(SOURCE).len())
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 3);
        }
    }
}
