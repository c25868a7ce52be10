//! Permission bit changes on paths and open files.

use std::fs::{self, File, Permissions};
use std::io;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use log::debug;

/// Set the permission bits of `path` to `mode` (e.g. `0o644`).
///
/// # Errors
///
/// Returns the underlying I/O error if the path does not exist or the caller
/// lacks permission to change it.
pub fn chmod(path: &Path, mode: u32) -> io::Result<()> {
    debug!("chmod {:o} {}", mode, path.display());
    fs::set_permissions(path, Permissions::from_mode(mode))
}

/// Set the permission bits of an already open file.
///
/// # Errors
///
/// Returns the underlying I/O error if the mode cannot be changed.
pub fn fchmod(file: &File, mode: u32) -> io::Result<()> {
    debug!("fchmod {mode:o}");
    file.set_permissions(Permissions::from_mode(mode))
}

/// Current permission bits of `path`, without the file type bits.
///
/// # Errors
///
/// Returns the underlying I/O error if the path cannot be stat'ed.
pub fn mode(path: &Path) -> io::Result<u32> {
    Ok(fs::metadata(path)?.permissions().mode() & 0o7777)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_chmod_path() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("script.sh");
        fs::write(&file, "#!/bin/sh\n").unwrap();

        chmod(&file, 0o755).unwrap();
        assert_eq!(mode(&file).unwrap(), 0o755);

        chmod(&file, 0o600).unwrap();
        assert_eq!(mode(&file).unwrap(), 0o600);
    }

    #[test]
    fn test_fchmod_open_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.txt");
        let file = File::create(&path).unwrap();

        fchmod(&file, 0o640).unwrap();
        assert_eq!(mode(&path).unwrap(), 0o640);
    }

    #[test]
    fn test_chmod_missing_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let err = chmod(&temp_dir.path().join("missing"), 0o644).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
