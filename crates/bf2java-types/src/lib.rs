//! Shared types for the bf2java translator.
//!
//! This crate defines the Brainfuck operator set, source spans, and the
//! structured diagnostics shared by every pipeline stage.

mod error;
mod operator;
mod span;

pub use error::{CompileErrors, Diagnostic, ErrorCategory, ErrorCode, Severity, MAX_ERRORS};
pub use operator::Operator;
pub use span::{SourceFile, Span};
