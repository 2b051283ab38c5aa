//! Fixed per-section templates

use crate::types::{CompletionItem, CompletionKind, Section};

/// Templates offered for `section`, in display order
pub fn complete_section(section: Section) -> Vec<CompletionItem> {
    match section {
        Section::Meta => meta_items(),
        Section::Condition => condition_items(),
        Section::Strings => strings_items(),
        Section::Root => root_items(),
    }
}

fn root_items() -> Vec<CompletionItem> {
    vec![CompletionItem::new("rule_template", CompletionKind::Snippet)
        .with_insert_text(concat!(
            "rule ${1:rule_name} {\n",
            "  meta:\n",
            "    description = \"${2:description}\"\n",
            "    author = \"${3:author}\"\n",
            "  strings:\n",
            "    ${4:string_definitions}\n",
            "  condition:\n",
            "    ${5:condition}\n",
            "}",
        ))
        .as_snippet()
        .with_documentation("Insert a full rule template with placeholders")]
}

fn meta_items() -> Vec<CompletionItem> {
    vec![
        CompletionItem::new("description", CompletionKind::Property)
            .with_insert_text("description = \"${1:description}\"")
            .as_snippet()
            .with_documentation("Description of the rule"),
        CompletionItem::new("author", CompletionKind::Property)
            .with_insert_text("author = \"${1:author}\"")
            .as_snippet()
            .with_documentation("Author of the rule"),
    ]
}

fn condition_items() -> Vec<CompletionItem> {
    vec![CompletionItem::new("nested_condition", CompletionKind::Snippet)
        .with_insert_text("condition:\n  any of (${1:variables}) or \n  all of (${2:variables})")
        .as_snippet()
        .with_documentation("Nested condition with \"any\" and \"all\" operators")]
}

fn strings_items() -> Vec<CompletionItem> {
    // `\$` keeps the leading dollar literal under snippet expansion
    vec![
        CompletionItem::new("$string_variable", CompletionKind::Variable)
            .with_insert_text("\\$${1:string_name} = \"${2:value}\"")
            .as_snippet()
            .with_documentation("Define a string variable"),
        CompletionItem::new("$regex_string", CompletionKind::Variable)
            .with_insert_text("\\$${1:string_name} = /${2:regex}/")
            .as_snippet()
            .with_documentation("Define a regex string"),
    ]
}
