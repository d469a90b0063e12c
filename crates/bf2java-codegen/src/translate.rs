//! Operator translation and bracket validation.
//!
//! Both happen in the same pass. Balance is a counter property, so no
//! bracket stack is kept: the depth may never drop below zero and must end
//! at zero.

use bf2java_lexer::Token;
use bf2java_types::{Operator, Span};

use crate::error::{CodegenError, CodegenResult, Unbalanced};

/// The Java line emitted for an operator (without the trailing newline).
pub fn translation(op: Operator) -> &'static str {
    match op {
        Operator::PtrInc => "ptr++;",
        Operator::PtrDec => "ptr--;",
        Operator::CellInc => "mem[ptr]++;",
        Operator::CellDec => "mem[ptr]--;",
        Operator::Output => "System.out.print(mem[ptr]);",
        Operator::Input => "mem[ptr] = iostream.nextByte();",
        Operator::LoopOpen => "while(mem[ptr] != 0) {",
        Operator::LoopClose => "}",
    }
}

/// Translated program body: one newline-terminated line per operator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Body {
    pub text: String,
    pub line_count: usize,
}

/// Validate brackets and translate `tokens` into a body.
///
/// Fails with [`CodegenError::UnmatchedBrackets`] as soon as a `]` closes
/// nothing, or after the pass if any `[` is left open.
pub fn translate(tokens: &[Token]) -> CodegenResult<Body> {
    let mut depth: usize = 0;
    // Position of the most recent `[` opened at depth 0. When the pass ends
    // with loops open, this is the outermost unclosed one.
    let mut outermost_open: Option<Span> = None;
    let mut text = String::with_capacity(tokens.len() * 16);

    for token in tokens {
        text.push_str(translation(token.operator));
        text.push('\n');

        match token.operator {
            Operator::LoopOpen => {
                if depth == 0 {
                    outermost_open = Some(token.span);
                }
                depth += 1;
            }
            Operator::LoopClose => {
                depth = depth.checked_sub(1).ok_or(CodegenError::UnmatchedBrackets(
                    Unbalanced::StrayClose { span: token.span },
                ))?;
            }
            _ => {}
        }
    }

    match outermost_open {
        Some(span) if depth != 0 => Err(CodegenError::UnmatchedBrackets(
            Unbalanced::Unclosed { depth, span },
        )),
        _ => Ok(Body {
            text,
            line_count: tokens.len(),
        }),
    }
}

/// [`translate`] over an already-normalized operator string.
pub fn translate_normalized(normalized: &str) -> CodegenResult<Body> {
    translate(&Token::from_normalized(normalized))
}
