//! bf2java compiler: orchestrates the full translation pipeline.
//!
//! ```text
//! .bf source → Loader → Lexer → Translator → Wrapper → Writer → javac
//! ```
//!
//! The in-memory entry points ([`translate`], [`translate_to_result`],
//! [`check`]) never touch the filesystem. [`build`] runs the whole
//! pipeline for the command-line tool.

pub mod driver;
pub mod loader;
pub mod options;
pub mod pipeline;
pub mod writer;

use bf2java_codegen::{generate, ClassName, CodegenError, JavaSource, Unbalanced};
use bf2java_lexer::Lexer;
use bf2java_types::{CompileErrors, Diagnostic, ErrorCode, SourceFile, Span};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub use driver::{CompileStatus, Javac, Toolchain, ToolchainError};
pub use loader::load_source;
pub use options::{BuildOptions, DEFAULT_JAVAC, DEFAULT_OUTPUT};
pub use pipeline::{build, BuildOutcome, PipelineError};
pub use writer::{stage_source, write_source, StagedFile};

/// A successful translation plus any non-fatal diagnostics.
#[derive(Debug, Clone)]
pub struct Translation {
    pub java: JavaSource,
    /// Warnings only; `has_errors()` is always false here.
    pub warnings: CompileErrors,
}

/// Serializable outcome of [`translate_to_result`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResult {
    pub success: bool,
    pub class_name: String,
    /// Full Java source on success.
    pub java: Option<String>,
    /// SHA-256 (hex) of the file exactly as the writer stores it.
    pub output_hash: Option<String>,
    pub errors: CompileErrors,
}

/// Translate Brainfuck source text into a Java class.
pub fn translate(
    source: &str,
    file_name: &str,
    class_name: &ClassName,
) -> Result<Translation, CompileErrors> {
    let sf = SourceFile::new(file_name, source);
    translate_file(&sf, class_name)
}

/// [`translate`] over an already loaded [`SourceFile`].
pub fn translate_file(
    sf: &SourceFile,
    class_name: &ClassName,
) -> Result<Translation, CompileErrors> {
    let tokens = Lexer::new(sf).lex().tokens;
    let mut diagnostics = CompileErrors::empty();

    let java = match generate(&tokens, class_name, &sf.name) {
        Ok(java) => java,
        Err(CodegenError::UnmatchedBrackets(unbalanced)) => {
            diagnostics.push_error(unmatched_diagnostic(sf, &unbalanced));
            return Err(diagnostics);
        }
    };

    if !class_name.is_java_identifier() {
        diagnostics.push_warning(class_name_diagnostic(sf, class_name));
    }

    Ok(Translation {
        java,
        warnings: diagnostics,
    })
}

/// Translate and package the outcome as a serializable result.
pub fn translate_to_result(
    source: &str,
    file_name: &str,
    class_name: &ClassName,
) -> TranslateResult {
    match translate(source, file_name, class_name) {
        Ok(translation) => TranslateResult {
            success: true,
            class_name: class_name.to_string(),
            output_hash: Some(output_hash(&translation.java.text)),
            java: Some(translation.java.text),
            errors: translation.warnings,
        },
        Err(errors) => TranslateResult {
            success: false,
            class_name: class_name.to_string(),
            java: None,
            output_hash: None,
            errors,
        },
    }
}

/// Validate bracket structure only; nothing is emitted.
pub fn check(source: &str, file_name: &str) -> CompileErrors {
    let sf = SourceFile::new(file_name, source);
    let tokens = Lexer::new(&sf).lex().tokens;
    let mut diagnostics = CompileErrors::empty();
    if let Err(CodegenError::UnmatchedBrackets(unbalanced)) = bf2java_codegen::translate(&tokens) {
        diagnostics.push_error(unmatched_diagnostic(&sf, &unbalanced));
    }
    diagnostics
}

/// SHA-256 (hex) of `java_text` plus the writer's trailing newline.
pub fn output_hash(java_text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(java_text.as_bytes());
    hasher.update(b"\n");
    format!("{:x}", hasher.finalize())
}

fn unmatched_diagnostic(sf: &SourceFile, unbalanced: &Unbalanced) -> Diagnostic {
    let span = unbalanced.span();
    let source_line = sf.line(span.start_line).unwrap_or("");
    let suggestion = match unbalanced {
        Unbalanced::StrayClose { .. } => "Remove this ']' or add a matching '[' before it",
        Unbalanced::Unclosed { .. } => "Add a matching ']' after this '['",
    };
    Diagnostic::new(
        &sf.name,
        ErrorCode::UNMATCHED_BRACKETS,
        unbalanced.to_string(),
        span,
        source_line,
    )
    .with_suggestion(suggestion)
}

fn class_name_diagnostic(sf: &SourceFile, class_name: &ClassName) -> Diagnostic {
    Diagnostic::new(
        &sf.name,
        ErrorCode::INVALID_CLASS_NAME,
        format!("class name '{class_name}' is not a valid Java identifier; javac will reject it"),
        Span::point(1, 1),
        "",
    )
    .with_suggestion(
        "Pick an output file name or --class-name that starts with a letter \
         and contains only letters, digits, '_' or '$'",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_hash_covers_trailing_newline() {
        // sha256("\n")
        assert_eq!(
            output_hash(""),
            "01ba4719c80b6fe911b091a7c05124b64eeece964e09c058ef8f9805daca546b"
        );
    }

    #[test]
    fn test_unmatched_diagnostic_carries_source_line() {
        let errors = check("+\n+]", "t.bf");
        assert_eq!(errors.total_errors, 1);
        let err = &errors.errors[0];
        assert_eq!(err.span, Span::point(2, 2));
        assert_eq!(err.source_line, "+]");
        assert!(err.suggestion.is_some());
    }
}
