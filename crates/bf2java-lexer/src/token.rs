//! Token type for the bf2java lexer.
//!
//! A [`Token`] pairs an [`Operator`] with the [`Span`] it was read from.

use bf2java_types::{Operator, Span};
use std::fmt;

/// The eight characters that survive normalization.
pub const OPERATOR_CHARS: &[char] = &['>', '<', '+', '-', '.', ',', '[', ']'];

/// A single operator read from the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub operator: Operator,
    /// Source location (always one character wide).
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(operator: Operator, span: Span) -> Self {
        Self { operator, span }
    }

    /// Build tokens for an already-normalized string.
    ///
    /// Positions are reported as columns on line 1.
    pub fn from_normalized(normalized: &str) -> Vec<Token> {
        normalized
            .chars()
            .filter_map(Operator::from_char)
            .enumerate()
            .map(|(i, op)| Token::new(op, Span::point(1, i as u32 + 1)))
            .collect()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' at {}", self.operator, self.span)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_chars_match_operator_set() {
        let from_ops: Vec<char> = Operator::ALL.iter().map(|op| op.as_char()).collect();
        assert_eq!(from_ops, OPERATOR_CHARS);
    }

    #[test]
    fn test_from_normalized_columns() {
        let tokens = Token::from_normalized("+[-]");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[1].operator, Operator::LoopOpen);
        assert_eq!(tokens[3].span, Span::point(1, 4));
    }

    #[test]
    fn test_display() {
        let tok = Token::new(Operator::LoopClose, Span::point(2, 9));
        assert_eq!(tok.to_string(), "']' at 2:9");
    }
}
