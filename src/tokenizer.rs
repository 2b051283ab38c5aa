//! Single-pass tokenizer for rule source text
//!
//! At every scan position the rules are tried in a fixed order and the first
//! one that matches wins:
//!
//! 1. line comment `// ...`
//! 2. block comment `/* ... */`
//! 3. keyword (`rule`, `meta`, `strings`, `condition`, `import`, `include`)
//! 4. boolean constant (`true`, `false`)
//! 5. quoted string, up to the next `"` on the same line
//! 6. variable reference `$identifier`
//! 7. single-character delimiter
//! 8. integer literal
//!
//! Anything else (whitespace, bare identifiers, stray characters) is skipped
//! one character at a time and never emitted.

use crate::types::{Token, TokenKind};

/// Rule language keywords
pub const KEYWORDS: &[&str] = &["rule", "meta", "strings", "condition", "import", "include"];

/// Boolean constants
pub const CONSTANTS: &[&str] = &["true", "false"];

/// Characters emitted as single-character delimiters
pub const DELIMITERS: &[char] = &[
    '{', '}', '[', ']', '(', ')', '<', '>', '!', '=', '+', '-', '*', '/', '%', ',', '.', ':', ';',
];

/// Tokenize `text` with the default rules
pub fn tokenize(text: &str) -> Vec<Token> {
    Tokenizer::new().tokenize(text)
}

/// Tokenizer settings
#[derive(Debug, Clone, Copy, Default)]
pub struct Tokenizer {
    escape_aware_strings: bool,
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Let a backslash inside a quoted string escape the next character
    pub fn with_escape_aware_strings(mut self, enabled: bool) -> Self {
        self.escape_aware_strings = enabled;
        self
    }

    /// Lazily scan `text`
    pub fn tokens<'a>(&self, text: &'a str) -> Tokens<'a> {
        Tokens {
            text,
            pos: 0,
            escape_aware_strings: self.escape_aware_strings,
        }
    }

    /// Scan `text` into a token vector
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let tokens: Vec<Token> = self.tokens(text).collect();
        tracing::trace!(len = text.len(), tokens = tokens.len(), "tokenized");
        tokens
    }
}

/// Iterator over the tokens of a text
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    pos: usize,
    escape_aware_strings: bool,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        while self.pos < self.text.len() {
            let start = self.pos;
            if let Some((kind, end)) = self.match_at(start) {
                self.pos = end;
                return Some(Token::new(kind, &self.text[start..end], start, end));
            }
            // Unrecognised character: skip it
            let ch = self.text[start..].chars().next()?;
            self.pos += ch.len_utf8();
        }
        None
    }
}

impl Tokens<'_> {
    /// Try every rule at `pos` in priority order
    fn match_at(&self, pos: usize) -> Option<(TokenKind, usize)> {
        let rest = &self.text[pos..];

        if rest.starts_with("//") {
            let end = rest.find(['\n', '\r']).unwrap_or(rest.len());
            return Some((TokenKind::Comment, pos + end));
        }

        if rest.starts_with("/*") {
            if let Some(close) = rest[2..].find("*/") {
                return Some((TokenKind::Comment, pos + 2 + close + 2));
            }
        }

        if let Some(word) = self.word_at(pos) {
            if KEYWORDS.contains(&word) {
                return Some((TokenKind::Keyword, pos + word.len()));
            }
            if CONSTANTS.contains(&word) {
                return Some((TokenKind::Constant, pos + word.len()));
            }
        }

        if rest.starts_with('"') {
            if let Some(len) = self.string_len(rest) {
                return Some((TokenKind::String, pos + len));
            }
        }

        if let Some(len) = variable_len(rest) {
            return Some((TokenKind::Variable, pos + len));
        }

        let first = rest.chars().next()?;
        if DELIMITERS.contains(&first) {
            return Some((TokenKind::Delimiter, pos + first.len_utf8()));
        }

        if let Some(word) = self.word_at(pos) {
            if word.bytes().all(|b| b.is_ascii_digit()) {
                return Some((TokenKind::Number, pos + word.len()));
            }
        }

        None
    }

    /// Whole word starting at `pos`, only if `pos` sits on a word boundary
    fn word_at(&self, pos: usize) -> Option<&str> {
        let bytes = self.text.as_bytes();
        if pos > 0 && is_word_byte(bytes[pos - 1]) {
            return None;
        }
        let len = bytes[pos..].iter().take_while(|b| is_word_byte(**b)).count();
        (len > 0).then(|| &self.text[pos..pos + len])
    }

    /// Length of the quoted string at the start of `rest`, including quotes
    fn string_len(&self, rest: &str) -> Option<usize> {
        let mut chars = rest.char_indices().skip(1);
        while let Some((i, ch)) = chars.next() {
            match ch {
                '"' => return Some(i + 1),
                '\n' | '\r' => return None,
                '\\' if self.escape_aware_strings => match chars.next() {
                    Some((_, '\n' | '\r')) | None => return None,
                    Some(_) => {}
                },
                _ => {}
            }
        }
        None
    }
}

/// Length of a `$identifier` reference at the start of `rest`
fn variable_len(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    if bytes.first() != Some(&b'$') {
        return None;
    }
    match bytes.get(1) {
        Some(b) if b.is_ascii_alphabetic() || *b == b'_' => {}
        _ => return None,
    }
    let tail = bytes[2..].iter().take_while(|b| is_word_byte(**b)).count();
    Some(2 + tail)
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
