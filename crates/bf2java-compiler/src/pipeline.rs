//! End-to-end build: load → translate → write → compile.
//!
//! Each stage either completes or short-circuits the rest. Nothing is
//! written unless translation succeeds, and the Java file is only
//! committed once the source map (if requested) has been staged too.

use std::io;
use std::path::{Path, PathBuf};

use bf2java_codegen::ClassName;
use bf2java_types::CompileErrors;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::driver::{CompileStatus, Toolchain, ToolchainError};
use crate::loader::load_source;
use crate::options::BuildOptions;
use crate::writer::stage_source;
use crate::{output_hash, translate_file};

/// Errors that stop a build.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The source path does not exist.
    #[error("source file '{}' does not exist", .0.display())]
    MissingSource(PathBuf),

    /// Reading the source or writing an output failed.
    #[error("I/O error on '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Bracket validation failed; no output was written.
    #[error("{0}")]
    Translate(CompileErrors),

    #[error(transparent)]
    Toolchain(#[from] ToolchainError),

    #[error("failed to serialize source map")]
    SourceMap(#[from] serde_json::Error),
}

/// What a successful build produced.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    pub output: PathBuf,
    pub class_name: ClassName,
    pub operator_count: usize,
    /// SHA-256 (hex) of the written file.
    pub output_hash: String,
    pub warnings: CompileErrors,
    /// `None` when compilation was disabled.
    pub compile_status: Option<CompileStatus>,
}

fn io_error(path: &Path, source: io::Error) -> PipelineError {
    PipelineError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Run the full pipeline described by `options`.
pub fn build(
    options: &BuildOptions,
    toolchain: &dyn Toolchain,
) -> Result<BuildOutcome, PipelineError> {
    debug!(source = %options.source.display(), "loading source");
    let sf = load_source(&options.source)?;

    let class_name = options.resolved_class_name();
    debug!(class = %class_name, "translating");
    let translation = translate_file(&sf, &class_name).map_err(PipelineError::Translate)?;
    for warning in &translation.warnings.warnings {
        warn!("{warning}");
    }
    let java = translation.java;

    // Stage every output before committing any of them.
    let source_map = match &options.source_map {
        Some(path) => Some((path, java.source_map.to_json()?)),
        None => None,
    };
    let staged_java =
        stage_source(&options.output, &java.text).map_err(|e| io_error(&options.output, e))?;
    let staged_map = match &source_map {
        Some((path, json)) => Some(stage_source(path, json).map_err(|e| io_error(path, e))?),
        None => None,
    };

    staged_java
        .commit()
        .map_err(|e| io_error(&options.output, e))?;
    let hash = output_hash(&java.text);
    info!(
        output = %options.output.display(),
        operators = java.operator_count,
        sha256 = %hash,
        "wrote Java source"
    );

    if let Some(staged) = staged_map {
        let path = staged.target().to_path_buf();
        staged.commit().map_err(|e| io_error(&path, e))?;
        info!(path = %path.display(), "wrote source map");
    }

    let compile_status = if options.compile {
        debug!(toolchain = toolchain.name(), "compiling");
        let status = toolchain.compile(&options.output)?;
        if status.success {
            info!(toolchain = toolchain.name(), "compiled {}", options.output.display());
        } else {
            warn!(
                toolchain = toolchain.name(),
                "{} failed on {} ({status})",
                toolchain.name(),
                options.output.display()
            );
        }
        Some(status)
    } else {
        None
    };

    Ok(BuildOutcome {
        output: options.output.clone(),
        class_name,
        operator_count: java.operator_count,
        output_hash: hash,
        warnings: translation.warnings,
        compile_status,
    })
}
