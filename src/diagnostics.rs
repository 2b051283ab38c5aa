//! Diagnostics engine: runs the full validator battery over a document

use crate::config::LintSettings;
use crate::types::{Diagnostic, LineIndex, Severity};
use crate::validators::{
    BracketValidator, QuoteValidator, SectionValidator, Validator, VariableValidator,
};

/// Lint `source` with the default settings
pub fn lint(source: &str) -> Vec<Diagnostic> {
    Linter::default().lint(source)
}

/// Configured validator battery
pub struct Linter {
    validators: Vec<Box<dyn Validator>>,
}

impl Linter {
    /// Build the battery, leaving out disabled checks
    pub fn new(settings: &LintSettings) -> Self {
        let all: Vec<Box<dyn Validator>> = vec![
            Box::new(SectionValidator::new()),
            Box::new(BracketValidator::new()),
            Box::new(QuoteValidator::new().with_escape_aware(settings.escape_aware_strings)),
            Box::new(VariableValidator::new(settings.variable_definitions)),
        ];

        let validators = all
            .into_iter()
            .filter(|v| settings.is_enabled(v.code()))
            .collect();

        Self { validators }
    }

    /// Codes of the checks that will run
    pub fn codes(&self) -> Vec<&'static str> {
        self.validators.iter().map(|v| v.code()).collect()
    }

    /// Run every enabled check; never fails
    pub fn lint(&self, source: &str) -> Vec<Diagnostic> {
        let lines = LineIndex::new(source);
        let diagnostics: Vec<Diagnostic> = self
            .validators
            .iter()
            .flat_map(|v| v.validate_indexed(source, &lines))
            .collect();

        tracing::debug!(
            errors = count(&diagnostics, Severity::Error),
            warnings = count(&diagnostics, Severity::Warning),
            "linted document"
        );

        diagnostics
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new(&LintSettings::default())
    }
}

/// Number of diagnostics with the given severity
pub fn count(diagnostics: &[Diagnostic], severity: Severity) -> usize {
    diagnostics.iter().filter(|d| d.severity == severity).count()
}
