//! Core types shared by the tokenizer, completion and diagnostics engines

use serde::Serialize;

/// Classification of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Comment,
    Keyword,
    Constant,
    String,
    Variable,
    Delimiter,
    Number,
}

impl TokenKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Comment => "comment",
            TokenKind::Keyword => "keyword",
            TokenKind::Constant => "constant",
            TokenKind::String => "string",
            TokenKind::Variable => "variable",
            TokenKind::Delimiter => "delimiter",
            TokenKind::Number => "number",
        }
    }
}

/// A classified span of source text.
///
/// `start..end` is a half-open byte range into the tokenized text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            start,
            end,
        }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Copy of this token moved `delta` bytes to the right
    pub fn shifted(&self, delta: usize) -> Self {
        Self {
            kind: self.kind,
            text: self.text.clone(),
            start: self.start + delta,
            end: self.end + delta,
        }
    }
}

/// Logical section of a rule the cursor sits in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Meta,
    Strings,
    Condition,
    /// Outside any recognised section header
    Root,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Meta => "meta",
            Section::Strings => "strings",
            Section::Condition => "condition",
            Section::Root => "root",
        }
    }

    /// Header text that opens this section, `None` for root
    pub fn header(&self) -> Option<&'static str> {
        match self {
            Section::Meta => Some("meta:"),
            Section::Strings => Some("strings:"),
            Section::Condition => Some("condition:"),
            Section::Root => None,
        }
    }
}

/// The kind of completion item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionKind {
    Snippet,
    Property,
    Variable,
}

impl CompletionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionKind::Snippet => "snippet",
            CompletionKind::Property => "property",
            CompletionKind::Variable => "variable",
        }
    }
}

/// A completion suggestion
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionItem {
    /// Display text
    pub label: String,
    /// Type of completion
    pub kind: CompletionKind,
    /// Text to insert, possibly with `${n:default}` placeholders
    pub insert_text: String,
    /// Whether `insert_text` should be expanded as a snippet by the host
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_snippet: bool,
    /// Full documentation
    pub documentation: String,
}

impl CompletionItem {
    /// Create a new completion item inserting its own label
    pub fn new(label: impl Into<String>, kind: CompletionKind) -> Self {
        let label = label.into();
        Self {
            insert_text: label.clone(),
            label,
            kind,
            is_snippet: false,
            documentation: String::new(),
        }
    }

    /// Set custom insert text
    pub fn with_insert_text(mut self, text: impl Into<String>) -> Self {
        self.insert_text = text.into();
        self
    }

    /// Mark the insert text as a snippet template
    pub fn as_snippet(mut self) -> Self {
        self.is_snippet = true;
        self
    }

    /// Set the documentation
    pub fn with_documentation(mut self, doc: impl Into<String>) -> Self {
        self.documentation = doc.into();
        self
    }
}

/// Diagnostic severity (matches LSP DiagnosticSeverity numbering)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Error: a definite problem
    Error = 1,
    /// Warning: a potential issue
    Warning = 2,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl std::str::FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "error" => Ok(Severity::Error),
            "warning" | "warn" => Ok(Severity::Warning),
            _ => Err(format!("Unknown severity: {}. Use 'error' or 'warning'", s)),
        }
    }
}

/// Position in source (1-based, character counted)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }

    /// First character of the document
    pub fn start() -> Self {
        Self::new(1, 1)
    }
}

/// Range in source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start: Position::new(start_line, start_col),
            end: Position::new(end_line, end_col),
        }
    }

    /// Empty range at the start of the document
    pub fn document_start() -> Self {
        Self {
            start: Position::start(),
            end: Position::start(),
        }
    }

    /// Create from byte offsets.
    ///
    /// Builds a [`LineIndex`] per call; use one index directly when converting
    /// many offsets of the same text.
    pub fn from_offsets(source: &str, start_offset: usize, end_offset: usize) -> Self {
        LineIndex::new(source).range(start_offset, end_offset)
    }
}

/// Convert byte offset to position
pub fn offset_to_position(source: &str, offset: usize) -> Position {
    LineIndex::new(source).position(offset)
}

/// Line start table for converting byte offsets to positions.
///
/// Built once per text in one pass; each lookup is a binary search over line
/// starts plus a character count within the found line, skipped for lines that
/// are pure ASCII.
#[derive(Debug, Clone)]
pub struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<usize>,
    ascii_lines: Vec<bool>,
}

impl<'a> LineIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0];
        let mut ascii_lines = Vec::new();
        let mut ascii = true;

        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                ascii_lines.push(ascii);
                line_starts.push(i + 1);
                ascii = true;
            } else if !b.is_ascii() {
                ascii = false;
            }
        }
        ascii_lines.push(ascii);

        Self {
            source,
            line_starts,
            ascii_lines,
        }
    }

    /// Number of lines (a trailing newline opens an empty last line)
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Position of a byte offset; offsets past the end clamp to the end
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.source.len());
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let start = self.line_starts[line];

        let column = if self.ascii_lines[line] {
            offset - start
        } else {
            self.source[start..]
                .char_indices()
                .take_while(|(i, _)| start + i < offset)
                .count()
        };

        Position::new(line as u32 + 1, column as u32 + 1)
    }

    /// Range between two byte offsets
    pub fn range(&self, start: usize, end: usize) -> Range {
        Range {
            start: self.position(start),
            end: self.position(end),
        }
    }
}

/// Convert a 1-based line/column (column counted in characters) to a byte offset.
///
/// Columns past the end of the line clamp to the line end; lines past the end
/// of the text clamp to the text end.
pub fn offset_at(source: &str, line: u32, column: u32) -> usize {
    let line = line.max(1);
    let column = column.max(1);

    let mut line_start = 0;
    let mut current_line = 1u32;
    while current_line < line {
        match source[line_start..].find('\n') {
            Some(nl) => {
                line_start += nl + 1;
                current_line += 1;
            }
            None => return source.len(),
        }
    }

    let line_text = line_text_at(source, line_start);
    let col_offset = line_text
        .char_indices()
        .nth(column as usize - 1)
        .map(|(i, _)| i)
        .unwrap_or(line_text.len());

    line_start + col_offset
}

/// Text of the line beginning at `line_start`, without its terminator
fn line_text_at(source: &str, line_start: usize) -> &str {
    let rest = &source[line_start..];
    let end = rest.find('\n').unwrap_or(rest.len());
    rest[..end].strip_suffix('\r').unwrap_or(&rest[..end])
}

/// A diagnostic message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Severity level
    pub severity: Severity,
    /// Range in the document
    pub range: Range,
    /// Short message
    pub message: String,
    /// Check code that produced this diagnostic
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Producer name
    pub source: String,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(severity: Severity, range: Range, message: String) -> Self {
        Self {
            severity,
            range,
            message,
            code: None,
            source: "yara-assist".to_string(),
        }
    }

    /// Create an error diagnostic
    pub fn error(range: Range, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, range, message.into())
    }

    /// Create a warning diagnostic
    pub fn warning(range: Range, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, range, message.into())
    }

    /// Add a code to the diagnostic
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }
}
