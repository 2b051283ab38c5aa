//! Static description of the rule language for host editors

use serde::Serialize;

/// Language id registered with host editors
pub const LANGUAGE_ID: &str = "yaraL2";

/// Characters that should trigger a completion request
pub const TRIGGER_CHARACTERS: &[char] = &[':', '{', '$', '>', '<', '='];

/// File extensions handled by this engine
pub const FILE_EXTENSIONS: &[&str] = &[".yar", ".yara"];

/// An opening/closing character pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CharPair {
    pub open: char,
    pub close: char,
}

const fn pair(open: char, close: char) -> CharPair {
    CharPair { open, close }
}

/// Comment syntax
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentSyntax {
    pub line_comment: &'static str,
    pub block_comment: (&'static str, &'static str),
}

/// Editor-facing language configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageConfiguration {
    pub id: &'static str,
    pub comments: CommentSyntax,
    pub brackets: Vec<CharPair>,
    pub auto_closing_pairs: Vec<CharPair>,
    pub surrounding_pairs: Vec<CharPair>,
    pub trigger_characters: Vec<char>,
}

/// Configuration for the rule language
pub fn language_configuration() -> LanguageConfiguration {
    let brackets = vec![pair('{', '}'), pair('[', ']'), pair('(', ')')];
    let mut quoted = brackets.clone();
    quoted.push(pair('"', '"'));

    LanguageConfiguration {
        id: LANGUAGE_ID,
        comments: CommentSyntax {
            line_comment: "//",
            block_comment: ("/*", "*/"),
        },
        brackets,
        auto_closing_pairs: quoted.clone(),
        surrounding_pairs: quoted,
        trigger_characters: TRIGGER_CHARACTERS.to_vec(),
    }
}
