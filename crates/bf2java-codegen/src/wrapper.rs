//! The fixed Java scaffold around a translated body.
//!
//! ```text
//! import java.util.Scanner;
//! public class <Name> {
//! public static void main(String[] args) {
//! byte[] mem = new byte[30000];
//! Scanner iostream = new Scanner(System.in);
//! int ptr = 0;
//! <body>
//! iostream.close();
//! }
//! }
//! ```

use std::fmt;
use std::path::Path;

/// Number of cells on the tape.
pub const TAPE_CELLS: usize = 30_000;

/// Number of lines in the prologue; body line `n` (0-based) lands on Java
/// line `PROLOGUE_LINES + n + 1`.
pub const PROLOGUE_LINES: usize = 6;

const EPILOGUE: &str = "iostream.close();\n}\n}\n";

/// Reserved words that can never name a Java class.
const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class",
    "const", "continue", "default", "do", "double", "else", "enum", "extends", "final",
    "finally", "float", "for", "goto", "if", "implements", "import", "instanceof", "int",
    "interface", "long", "native", "new", "package", "private", "protected", "public",
    "return", "short", "static", "strictfp", "super", "switch", "synchronized", "this",
    "throw", "throws", "transient", "try", "void", "volatile", "while", "true", "false",
    "null", "_",
];

/// Name of the emitted class.
///
/// Taken verbatim: no sanitization is applied, so a name that is not a Java
/// identifier only fails when `javac` runs.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassName(String);

impl ClassName {
    /// Use an explicit class name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Derive the class name from an output path: the file name up to, but
    /// not including, its first `.`.
    ///
    /// `out/Hello.java` gives `Hello`; `a.b.java` gives `a`; a file name
    /// without any `.` is used whole.
    pub fn from_output_path(path: impl AsRef<Path>) -> Self {
        let file_name = path
            .as_ref()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = match file_name.find('.') {
            Some(dot) => &file_name[..dot],
            None => &file_name,
        };
        Self(stem.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether `javac` would accept this as a class name.
    pub fn is_java_identifier(&self) -> bool {
        let mut chars = self.0.chars();
        let Some(first) = chars.next() else {
            return false;
        };
        if !(first.is_alphabetic() || first == '_' || first == '$') {
            return false;
        }
        if !chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$') {
            return false;
        }
        !JAVA_KEYWORDS.contains(&self.0.as_str())
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Prologue/epilogue pair for one class name.
pub struct Wrapper<'a> {
    class_name: &'a ClassName,
}

impl<'a> Wrapper<'a> {
    pub fn new(class_name: &'a ClassName) -> Self {
        Self { class_name }
    }

    /// Imports, class and `main` openers, tape, scanner and pointer.
    pub fn prologue(&self) -> String {
        format!(
            "import java.util.Scanner;\n\
             public class {} {{\n\
             public static void main(String[] args) {{\n\
             byte[] mem = new byte[{}];\n\
             Scanner iostream = new Scanner(System.in);\n\
             int ptr = 0;\n",
            self.class_name, TAPE_CELLS
        )
    }

    /// Closes the scanner, `main` and the class.
    pub fn epilogue(&self) -> &'static str {
        EPILOGUE
    }

    /// `prologue ∥ body ∥ epilogue`.
    pub fn wrap(&self, body: &str) -> String {
        let prologue = self.prologue();
        let mut out = String::with_capacity(prologue.len() + body.len() + EPILOGUE.len());
        out.push_str(&prologue);
        out.push_str(body);
        out.push_str(EPILOGUE);
        out
    }
}
