//! Build configuration.

use std::path::PathBuf;

use bf2java_codegen::ClassName;

/// Output path used when none is given.
pub const DEFAULT_OUTPUT: &str = "bf.java";

/// Java compiler command used when none is given; resolved on `PATH`.
pub const DEFAULT_JAVAC: &str = "javac";

/// Everything [`crate::build`] needs to know about one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Brainfuck source file.
    pub source: PathBuf,
    /// Java file to create or replace.
    pub output: PathBuf,
    /// Explicit class name; `None` derives it from `output`.
    pub class_name: Option<String>,
    /// Run the toolchain on the written file.
    pub compile: bool,
    /// Where to write the JSON source map, if anywhere.
    pub source_map: Option<PathBuf>,
}

impl BuildOptions {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            class_name: None,
            compile: true,
            source_map: None,
        }
    }

    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn with_class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = Some(name.into());
        self
    }

    pub fn with_compile(mut self, compile: bool) -> Self {
        self.compile = compile;
        self
    }

    pub fn with_source_map(mut self, path: impl Into<PathBuf>) -> Self {
        self.source_map = Some(path.into());
        self
    }

    /// The class name the emitted file will declare.
    pub fn resolved_class_name(&self) -> ClassName {
        match &self.class_name {
            Some(name) => ClassName::new(name.clone()),
            None => ClassName::from_output_path(&self.output),
        }
    }
}
