//! bf2java code generator: lowers a Brainfuck operator stream to Java.
//!
//! # Architecture
//!
//! Translation is a single left-to-right pass over the tokens produced by
//! `bf2java-lexer`. Every operator maps to one fixed line of Java (see
//! [`translate::translation`]), and bracket balance is checked with a
//! depth counter during the same pass. The body is then wrapped in a
//! fixed scaffold ([`wrapper`]) that declares the class, the entry point,
//! the tape and the input scanner.
//!
//! ## Runtime model of the emitted program
//! - `byte[] mem = new byte[30000]` — signed cells, two's-complement wrap
//! - `int ptr = 0` — unchecked cell index
//! - `Scanner iostream` — `,` reads one integer token, `.` prints the
//!   cell's signed value with no separator

pub mod compiler;
pub mod error;
pub mod source_map;
pub mod translate;
pub mod wrapper;

pub use compiler::{generate, JavaSource};
pub use error::{CodegenError, CodegenResult, Unbalanced};
pub use source_map::{SourceMap, SourceMapEntry};
pub use translate::{translate, translate_normalized, translation, Body};
pub use wrapper::{ClassName, Wrapper, PROLOGUE_LINES, TAPE_CELLS};
