//! Completions for variables already referenced in the document

use crate::types::{CompletionItem, CompletionKind};
use crate::variables::unique_variables;

/// One item per distinct `$identifier` in `source`, in first-occurrence order
pub fn complete_variables(source: &str) -> Vec<CompletionItem> {
    unique_variables(source)
        .into_iter()
        .map(|name| {
            let reference = format!("${}", name);
            CompletionItem::new(&reference, CompletionKind::Variable)
                .with_documentation(format!("Reference to variable {}", reference))
        })
        .collect()
}
