//! Core bf2java lexer — keeps the eight operators, drops everything else.
//!
//! Brainfuck has no comment syntax: every character outside
//! `> < + - . , [ ]` is a comment, including whitespace and non-ASCII text.
//! The lexer never fails.

use bf2java_types::{Operator, SourceFile, Span};

use crate::token::Token;

/// Return the subsequence of `source` made of operator characters only.
///
/// Order is preserved, an empty input yields an empty output, and the
/// function is idempotent.
pub fn normalize(source: &str) -> String {
    source
        .chars()
        .filter(|&c| Operator::from_char(c).is_some())
        .collect()
}

/// The bf2java lexer.
///
/// Walks the source once, tracking 1-based line and column numbers so that
/// later stages can point diagnostics at the original text.
pub struct Lexer<'src> {
    source: &'src str,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based, in characters).
    col: u32,
}

/// Result of lexing.
#[derive(Debug, Clone, Default)]
pub struct LexResult {
    /// The operator stream, in source order.
    pub tokens: Vec<Token>,
    /// Number of comment characters discarded.
    pub discarded: usize,
}

impl LexResult {
    /// Render the token stream back to its normalized text.
    pub fn normalized(&self) -> String {
        self.tokens.iter().map(|t| t.operator.as_char()).collect()
    }
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source file.
    pub fn new(source_file: &'src SourceFile) -> Self {
        Self::for_str(&source_file.source)
    }

    /// Create a lexer directly over a string.
    pub fn for_str(source: &'src str) -> Self {
        Self {
            source,
            line: 1,
            col: 1,
        }
    }

    /// Lex the entire source into operator tokens.
    pub fn lex(mut self) -> LexResult {
        let mut result = LexResult {
            tokens: Vec::with_capacity(self.source.len()),
            discarded: 0,
        };

        let source = self.source;
        for ch in source.chars() {
            match Operator::from_char(ch) {
                Some(op) => result
                    .tokens
                    .push(Token::new(op, Span::point(self.line, self.col))),
                None => result.discarded += 1,
            }
            self.advance(ch);
        }

        result
    }

    fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
    }
}
