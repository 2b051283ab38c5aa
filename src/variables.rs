//! `$identifier` discovery shared by completion and diagnostics

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static VARIABLE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$([A-Za-z_][A-Za-z0-9_]*)").expect("valid variable regex"));

/// One `$identifier` occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableRef<'a> {
    /// Identifier without the leading `$`
    pub name: &'a str,
    /// Byte offset of the `$`
    pub start: usize,
    /// Byte offset just past the identifier
    pub end: usize,
}

/// All `$identifier` occurrences in `text`, in source order
pub fn find_variables(text: &str) -> impl Iterator<Item = VariableRef<'_>> {
    VARIABLE_PATTERN.captures_iter(text).filter_map(|caps| {
        let whole = caps.get(0)?;
        let name = caps.get(1)?;
        Some(VariableRef {
            name: name.as_str(),
            start: whole.start(),
            end: whole.end(),
        })
    })
}

/// Unique identifiers in first-occurrence order
pub fn unique_variables(text: &str) -> Vec<&str> {
    let mut seen = HashSet::new();
    find_variables(text)
        .map(|v| v.name)
        .filter(|name| seen.insert(*name))
        .collect()
}

/// Identifiers introduced by a string definition: `$name` followed by
/// optional whitespace and a single `=`
pub fn declared_variables(text: &str) -> HashSet<&str> {
    find_variables(text)
        .filter(|v| is_definition(&text[v.end..]))
        .map(|v| v.name)
        .collect()
}

fn is_definition(after: &str) -> bool {
    let mut rest = after.trim_start().chars();
    rest.next() == Some('=') && rest.next() != Some('=')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_variables_offsets() {
        let found: Vec<_> = find_variables("$a = \"x\" and $bc").collect();

        assert_eq!(found.len(), 2);
        assert_eq!(found[0], VariableRef { name: "a", start: 0, end: 2 });
        assert_eq!(found[1], VariableRef { name: "bc", start: 13, end: 16 });
    }

    #[test]
    fn test_find_variables_skips_non_identifiers() {
        assert_eq!(find_variables("$ $1 $*").count(), 0);
    }

    #[test]
    fn test_unique_variables_keeps_first_order() {
        assert_eq!(unique_variables("$b $a $b $a $c"), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_declared_variables() {
        let declared = declared_variables("$a = \"x\"\n$b=/re/\n$c == 1\n$d");

        assert!(declared.contains("a"));
        assert!(declared.contains("b"));
        assert!(!declared.contains("c"));
        assert!(!declared.contains("d"));
    }

    #[test]
    fn test_declared_variable_across_newline() {
        assert!(declared_variables("$a\n  = \"x\"").contains("a"));
    }
}
