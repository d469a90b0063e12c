//! Java source assembler.
//!
//! Runs the translation pass, wraps the body in the class scaffold and
//! records which source operator produced each emitted line.

use bf2java_lexer::Token;

use crate::error::CodegenResult;
use crate::source_map::SourceMap;
use crate::translate::translate;
use crate::wrapper::{ClassName, Wrapper, PROLOGUE_LINES};

/// A complete Java compilation unit.
#[derive(Debug, Clone)]
pub struct JavaSource {
    pub class_name: ClassName,
    /// `prologue ∥ body ∥ epilogue`, without the writer's trailing newline.
    pub text: String,
    /// Number of operators translated (= body lines).
    pub operator_count: usize,
    pub source_map: SourceMap,
}

/// Translate `tokens` into a complete Java class named `class_name`.
///
/// `source_name` is recorded in the source map only.
pub fn generate(
    tokens: &[Token],
    class_name: &ClassName,
    source_name: &str,
) -> CodegenResult<JavaSource> {
    let body = translate(tokens)?;
    let text = Wrapper::new(class_name).wrap(&body.text);

    let mut source_map = SourceMap::new(source_name, class_name.as_str());
    for (i, token) in tokens.iter().enumerate() {
        let java_line = (PROLOGUE_LINES + i + 1) as u32;
        source_map.push(java_line, token.operator, token.span);
    }

    Ok(JavaSource {
        class_name: class_name.clone(),
        text,
        operator_count: body.line_count,
        source_map,
    })
}
