//! Source loader.

use std::fs;
use std::io;
use std::path::Path;

use bf2java_types::SourceFile;

use crate::pipeline::PipelineError;

/// Read a Brainfuck source file.
///
/// The bytes are decoded lossily: only the eight ASCII operators matter, so
/// any encoding that agrees with ASCII on them is accepted.
pub fn load_source(path: &Path) -> Result<SourceFile, PipelineError> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => PipelineError::MissingSource(path.to_path_buf()),
        _ => PipelineError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;
    Ok(SourceFile::from_bytes(path.display().to_string(), &bytes))
}
