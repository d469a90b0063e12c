//! Output writer.
//!
//! Writes are all-or-nothing: the text goes to a temporary file next to the
//! target, which is then renamed over it. A reader never observes a
//! half-written file, and a failed run leaves any previous output intact.
//!
//! [`stage_source`] stops before the rename so that a run producing several
//! files can prepare all of them before committing any.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// A fully written temporary file waiting to replace its target.
///
/// Dropping it without calling [`StagedFile::commit`] removes the
/// temporary file and leaves the target untouched.
#[derive(Debug)]
pub struct StagedFile {
    tmp: NamedTempFile,
    target: PathBuf,
}

impl StagedFile {
    /// The path this file will be renamed to.
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Rename the temporary file over the target.
    pub fn commit(self) -> io::Result<()> {
        self.tmp.persist(&self.target).map_err(|e| e.error)?;
        Ok(())
    }
}

/// Write `text` followed by a single newline to a temporary file beside
/// `path`, without touching `path` itself.
pub fn stage_source(path: &Path, text: &str) -> io::Result<StagedFile> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(text.as_bytes())?;
    tmp.write_all(b"\n")?;
    tmp.flush()?;
    copy_permissions(&tmp, path)?;

    Ok(StagedFile {
        tmp,
        target: path.to_path_buf(),
    })
}

/// Create or replace `path` with `text` followed by a single newline.
pub fn write_source(path: &Path, text: &str) -> io::Result<()> {
    stage_source(path, text)?.commit()
}

fn copy_permissions(tmp: &NamedTempFile, target: &Path) -> io::Result<()> {
    match fs::metadata(target) {
        Ok(meta) => tmp.as_file().set_permissions(meta.permissions()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => default_permissions(tmp),
        Err(e) => Err(e),
    }
}

// NamedTempFile is created 0600.
#[cfg(unix)]
fn default_permissions(tmp: &NamedTempFile) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    tmp.as_file()
        .set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions(_tmp: &NamedTempFile) -> io::Result<()> {
    Ok(())
}
