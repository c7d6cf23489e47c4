//! File status helpers: type checks and metadata propagation.
//!
//! Outputs inherit their source's modification time and permission bits
//! (and, on POSIX, ownership when the process is allowed to set it). Times go
//! through the `filetime` crate, ownership through `nix`.

use std::fs;
use std::io;
use std::path::Path;

use filetime::FileTime;

/// Returns `true` if `path` exists and is a regular file (symlinks followed).
pub fn is_reg_file(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_file()).unwrap_or(false)
}

/// Returns `true` if `path` exists and is a directory (symlinks followed).
pub fn is_directory(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}

/// Sets modification time, ownership (POSIX) and permission bits on a
/// regular file.
///
/// Ownership changes are best effort: an unprivileged process can usually
/// only hand a file to itself, so a refused `chown` is not an error.
pub fn set_file_stat(path: &Path, mtime: FileTime, uid: u32, gid: u32, mode: u32) -> io::Result<()> {
    if !is_reg_file(path) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{}: not a regular file", path.display()),
        ));
    }

    filetime::set_file_times(path, FileTime::now(), mtime)?;

    #[cfg(unix)]
    {
        use nix::unistd::{chown, Gid, Uid};
        let _ = chown(path, Some(Uid::from_raw(uid)), Some(Gid::from_raw(gid)));

        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(mode & 0o7777))?;
    }
    #[cfg(not(unix))]
    {
        let _ = (uid, gid);
        let mut perms = fs::metadata(path)?.permissions();
        perms.set_readonly(mode & 0o200 == 0);
        fs::set_permissions(path, perms)?;
    }

    Ok(())
}

/// Copies the modification time, ownership and permissions of `src` onto `dst`.
pub fn copy_file_stat(src: &Path, dst: &Path) -> io::Result<()> {
    let m = fs::metadata(src)?;
    let mtime = FileTime::from_last_modification_time(&m);

    #[cfg(unix)]
    let (uid, gid, mode) = {
        use std::os::unix::fs::MetadataExt;
        (m.uid(), m.gid(), m.mode())
    };
    #[cfg(not(unix))]
    let (uid, gid, mode) = (0u32, 0u32, if m.permissions().readonly() { 0o444 } else { 0o644 });

    set_file_stat(dst, mtime, uid, gid, mode)
}
