use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::GeneratedFile;
use crate::error::WriteError;

/// Write generated files under `base`, one at a time, returning the written paths.
///
/// Stops at the first failure. Files written before the failure are left in place.
/// Paths must stay inside `base`: absolute paths and `..` components are rejected.
pub fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<Vec<PathBuf>, WriteError> {
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let relative = Path::new(&file.path);
        if !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
        {
            return Err(WriteError {
                path: relative.to_path_buf(),
                source: io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "path escapes the output directory",
                ),
            });
        }

        let path = base.join(relative);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| WriteError {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, &file.content).map_err(|source| WriteError {
            path: path.clone(),
            source,
        })?;
        if file.executable {
            mark_executable(&path)?;
        }
        log::debug!("wrote {}", path.display());
        written.push(path);
    }

    Ok(written)
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> Result<(), WriteError> {
    use std::os::unix::fs::PermissionsExt;

    let to_error = |source| WriteError {
        path: path.to_path_buf(),
        source,
    };
    let mut permissions = fs::metadata(path).map_err(to_error)?.permissions();
    permissions.set_mode(permissions.mode() | 0o755);
    fs::set_permissions(path, permissions).map_err(to_error)
}

#[cfg(not(unix))]
fn mark_executable(_path: &Path) -> Result<(), WriteError> {
    Ok(())
}
