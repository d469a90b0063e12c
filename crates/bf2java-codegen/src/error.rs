//! Codegen error types.

use std::fmt;

use bf2java_types::Span;
use thiserror::Error;

/// Errors that can occur during translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodegenError {
    /// The program's `[` and `]` do not pair up.
    #[error("unmatched square braces: {0}")]
    UnmatchedBrackets(Unbalanced),
}

/// How bracket validation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unbalanced {
    /// A `]` appeared while no loop was open.
    StrayClose { span: Span },
    /// The program ended with `depth` loops still open; `span` is the
    /// outermost `[` that was never closed.
    Unclosed { depth: usize, span: Span },
}

impl Unbalanced {
    /// Location of the offending bracket.
    pub fn span(&self) -> Span {
        match self {
            Self::StrayClose { span } | Self::Unclosed { span, .. } => *span,
        }
    }
}

impl fmt::Display for Unbalanced {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StrayClose { span } => {
                write!(f, "']' at {span} has no matching '['")
            }
            Self::Unclosed { depth: 1, span } => {
                write!(f, "'[' at {span} is never closed")
            }
            Self::Unclosed { depth, span } => {
                write!(f, "'[' at {span} is never closed ({depth} loops left open)")
            }
        }
    }
}

/// Codegen result type alias.
pub type CodegenResult<T> = Result<T, CodegenError>;
