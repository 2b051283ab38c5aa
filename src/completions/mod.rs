//! Completion providers

mod sections;
pub mod snippets;
mod variables;

pub use sections::complete_section;
pub use snippets::{placeholders, Placeholder};
pub use variables::complete_variables;

use crate::config::CompletionSettings;
use crate::types::{CompletionItem, Section};

/// Get completions for a section: section templates first, then every
/// variable referenced anywhere in `source`
pub fn get_completions(
    section: Section,
    source: &str,
    settings: &CompletionSettings,
) -> Vec<CompletionItem> {
    let mut completions = complete_section(section);

    if settings.include_variables {
        completions.extend(complete_variables(source));
    }

    // 0 = unlimited
    if settings.max_completions > 0 {
        completions.truncate(settings.max_completions);
    }

    completions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CompletionKind;

    #[test]
    fn test_section_items_come_first() {
        let completions = get_completions(
            Section::Strings,
            "$b = \"1\" $a = \"2\" $b",
            &CompletionSettings::default(),
        );
        let labels: Vec<_> = completions.iter().map(|c| c.label.as_str()).collect();

        assert_eq!(labels, vec!["$string_variable", "$regex_string", "$b", "$a"]);
    }

    #[test]
    fn test_variables_can_be_disabled() {
        let settings = CompletionSettings {
            include_variables: false,
            ..CompletionSettings::default()
        };
        let completions = get_completions(Section::Root, "$a", &settings);

        assert_eq!(completions.len(), 1);
        assert_eq!(completions[0].kind, CompletionKind::Snippet);
    }

    #[test]
    fn test_completions_limit() {
        let settings = CompletionSettings {
            max_completions: 2,
            ..CompletionSettings::default()
        };
        let completions = get_completions(Section::Meta, "$a $b $c", &settings);

        assert_eq!(completions.len(), 2);
        assert_eq!(completions[1].label, "author");
    }
}
