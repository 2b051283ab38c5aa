//! Placeholder markers inside snippet templates
//!
//! Templates use `${index:default}` (or bare `$index`) markers; `\` escapes the
//! next character. Expansion is left to the host editor.

use serde::Serialize;

/// A tab stop inside an insert template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Placeholder {
    pub index: u32,
    pub default: String,
}

/// Placeholders in `template`, in source order
pub fn placeholders(template: &str) -> Vec<Placeholder> {
    let mut found = Vec::new();
    let mut chars = template.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                chars.next();
            }
            '$' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    let index = take_digits(&mut chars);
                    let Some(index) = index else { continue };
                    let mut default = String::new();
                    if chars.peek() == Some(&':') {
                        chars.next();
                        while let Some(c) = chars.next() {
                            match c {
                                '}' => break,
                                '\\' => default.extend(chars.next()),
                                _ => default.push(c),
                            }
                        }
                    } else if chars.peek() == Some(&'}') {
                        chars.next();
                    } else {
                        continue;
                    }
                    found.push(Placeholder { index, default });
                } else if let Some(index) = take_digits(&mut chars) {
                    found.push(Placeholder {
                        index,
                        default: String::new(),
                    });
                }
            }
            _ => {}
        }
    }

    found
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> Option<u32> {
    let mut digits = String::new();
    while let Some(c) = chars.peek().copied().filter(char::is_ascii_digit) {
        digits.push(c);
        chars.next();
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholder(index: u32, default: &str) -> Placeholder {
        Placeholder {
            index,
            default: default.to_string(),
        }
    }

    #[test]
    fn test_placeholders_with_defaults() {
        assert_eq!(
            placeholders("author = \"${1:author}\" ${2:x}"),
            vec![placeholder(1, "author"), placeholder(2, "x")]
        );
    }

    #[test]
    fn test_bare_tab_stops() {
        assert_eq!(
            placeholders("$1 and ${2}"),
            vec![placeholder(1, ""), placeholder(2, "")]
        );
    }

    #[test]
    fn test_escaped_dollar_is_literal() {
        assert_eq!(
            placeholders("\\$${1:name} = \\$2"),
            vec![placeholder(1, "name")]
        );
    }

    #[test]
    fn test_variable_names_are_not_placeholders() {
        assert!(placeholders("$a and $string_name").is_empty());
    }

    #[test]
    fn test_escaped_brace_in_default() {
        assert_eq!(placeholders("${1:a\\}b}"), vec![placeholder(1, "a}b")]);
    }
}
