//! bf2java lexer: strips comments from Brainfuck source and produces the
//! operator stream.

pub mod lexer;
pub mod token;

pub use lexer::{normalize, LexResult, Lexer};
pub use token::{Token, OPERATOR_CHARS};
