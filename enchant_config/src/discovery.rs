//! Locating directories relative to the running executable.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};

/// Returns the directory containing the running executable.
///
/// Provider modules built alongside a test binary land in its directory,
/// so tests point module-directory overrides here.
///
/// # Errors
///
/// Returns an error if the executable path cannot be resolved, is not
/// valid UTF-8, or has no parent directory.
pub fn executable_dir() -> io::Result<Utf8PathBuf> {
    let exe = std::env::current_exe()?;
    let exe = Utf8PathBuf::from_path_buf(exe).map_err(|path| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("executable path is not valid UTF-8: {}", path.display()),
        )
    })?;
    exe.parent().map(Utf8Path::to_path_buf).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "executable path has no parent directory",
        )
    })
}
