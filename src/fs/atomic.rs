//! Atomic whole-file replacement.
//!
//! The new content is written to `.{filename}.tmp` next to the target,
//! synced, then renamed over the target. A crash mid-write leaves either the
//! old module or the new one on disk, never a truncated file.
//!
//! Symlinks are followed, so the file a link points at is the one rewritten,
//! and the target's permissions carry over to the replacement.

use crate::error::{AuditError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically replace the contents of `path` with `content`.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = resolve_target(path.as_ref());
    let temp_path = temp_path_for(&path)?;
    let permissions = fs::metadata(&path).ok().map(|m| m.permissions());

    if let Err(e) = write_and_sync(&temp_path, content) {
        let _ = fs::remove_file(&temp_path);
        return Err(AuditError::io(&temp_path, e));
    }

    if let Some(permissions) = permissions
        && let Err(e) = fs::set_permissions(&temp_path, permissions)
    {
        let _ = fs::remove_file(&temp_path);
        return Err(AuditError::io(&temp_path, e));
    }

    // std::fs::rename replaces an existing destination on both POSIX and Windows.
    if let Err(e) = fs::rename(&temp_path, &path) {
        let _ = fs::remove_file(&temp_path);
        return Err(AuditError::io(&path, e));
    }

    Ok(())
}

/// Atomically replace the contents of `path` with a string.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}

/// Follow symlinks to the real file; a missing target is used as given.
fn resolve_target(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            AuditError::UserError(format!("invalid file path: {}", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    file.sync_all()
}
