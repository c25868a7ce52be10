//! Ownership changes on paths and open files.
//!
//! `None` for either id leaves that id unchanged.

use std::fs::File;
use std::io;
use std::os::unix::fs as unix_fs;
use std::path::Path;

use log::debug;

/// Change the owner and/or group of `path`.
///
/// # Errors
///
/// Returns the underlying I/O error, typically `PermissionDenied` when an
/// unprivileged caller tries to give a file away.
pub fn chown(path: &Path, uid: Option<u32>, gid: Option<u32>) -> io::Result<()> {
    debug!("chown {uid:?}:{gid:?} {}", path.display());
    unix_fs::chown(path, uid, gid)
}

/// Change the owner and/or group of an open file.
///
/// # Errors
///
/// Returns the underlying I/O error if ownership cannot be changed.
pub fn fchown(file: &File, uid: Option<u32>, gid: Option<u32>) -> io::Result<()> {
    debug!("fchown {uid:?}:{gid:?}");
    unix_fs::fchown(file, uid, gid)
}
