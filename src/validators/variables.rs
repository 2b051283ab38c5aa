//! Undefined variables in conditions

use super::{Validator, UNDEFINED_VARIABLE};
use crate::config::VariableDefinitions;
use crate::types::{Diagnostic, LineIndex, Section};
use crate::variables::{declared_variables, find_variables};
use std::collections::BTreeSet;

/// Errors for every `$name` in the condition body that has no definition.
///
/// The condition body runs from the first `condition:` to the end of the
/// document. A `$prefix*` wildcard is satisfied by any definition starting with
/// `prefix`. With [`VariableDefinitions::Declared`] a document that declares no
/// strings at all is not checked.
#[derive(Debug, Default, Clone, Copy)]
pub struct VariableValidator {
    definitions: VariableDefinitions,
}

impl VariableValidator {
    pub fn new(definitions: VariableDefinitions) -> Self {
        Self { definitions }
    }

    /// Defined names, ordered so prefix lookups are a range query
    fn defined<'a>(&self, source: &'a str) -> BTreeSet<&'a str> {
        match self.definitions {
            VariableDefinitions::Declared => declared_variables(source).into_iter().collect(),
            VariableDefinitions::AnyOccurrence => find_variables(source).map(|v| v.name).collect(),
        }
    }
}

/// Whether any name in `defined` starts with `prefix`
fn has_prefix<'a>(defined: &BTreeSet<&'a str>, prefix: &'a str) -> bool {
    defined
        .range(prefix..)
        .next()
        .is_some_and(|name| name.starts_with(prefix))
}

impl Validator for VariableValidator {
    fn code(&self) -> &'static str {
        UNDEFINED_VARIABLE
    }

    fn validate_indexed(&self, source: &str, lines: &LineIndex) -> Vec<Diagnostic> {
        let Some(header) = Section::Condition.header() else {
            return Vec::new();
        };
        let Some(header_start) = source.find(header) else {
            return Vec::new();
        };
        let body_start = header_start + header.len();
        let body = &source[body_start..];
        let defined = self.defined(source);
        if defined.is_empty() && self.definitions == VariableDefinitions::Declared {
            return Vec::new();
        }

        let mut diagnostics = Vec::new();
        for used in find_variables(body) {
            let wildcard = body[used.end..].starts_with('*');
            let known = if wildcard {
                has_prefix(&defined, used.name)
            } else {
                defined.contains(used.name)
            };
            if known {
                continue;
            }

            let end = used.end + usize::from(wildcard);
            let start = body_start + used.start;
            diagnostics.push(
                Diagnostic::error(
                    lines.range(start, body_start + end),
                    format!("Undefined variable {} in condition", &body[used.start..end]),
                )
                .with_code(UNDEFINED_VARIABLE),
            );
        }

        diagnostics
    }
}
