//! Output file writing.

use std::fs::Permissions;
use std::io::Write;
use std::path::Path;

use tempfile::Builder;
use tracing::debug;

use crate::error::CoreResult;

/// Write `contents` to `path` through a temporary file in the same directory.
///
/// The destination is either fully replaced or left untouched; the temporary
/// file never outlives the call. Missing parent directories are created.
/// A replaced file keeps its permissions; a new one is world-readable.
pub fn write_atomic(path: &Path, contents: &str) -> CoreResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let permissions = output_permissions(path);

    let mut builder = Builder::new();
    if let Some(permissions) = &permissions {
        builder.permissions(permissions.clone());
    }
    let mut file = builder.tempfile_in(dir)?;
    // The mode passed at creation is masked by the umask.
    if let Some(permissions) = permissions {
        file.as_file().set_permissions(permissions)?;
    }

    file.write_all(contents.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;

    debug!(path = %path.display(), bytes = contents.len(), "Wrote output file");
    Ok(())
}

fn output_permissions(path: &Path) -> Option<Permissions> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Some(meta.permissions()),
        _ => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}
